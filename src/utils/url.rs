//! Outbound link classification.
//!
//! Every link the page can follow is checked here before it reaches the
//! browser: web links must be http(s) with a host, mail links must carry an
//! address, and `#` marks a link the author has not filled in yet.

use crate::core::LinkError;

/// Where a link leads once it has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// http(s) URL opened in a new tab.
    External(String),
    /// `mailto:` link opened in the current tab.
    Mail(String),
    /// Author placeholder (`#` or empty); following it does nothing.
    Placeholder,
}

impl LinkTarget {
    /// The href to put on an anchor element.
    pub fn href(&self) -> &str {
        match self {
            Self::External(url) | Self::Mail(url) => url,
            Self::Placeholder => "#",
        }
    }

    /// Whether an anchor for this target should open a new tab.
    pub fn opens_new_tab(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

/// Classify and validate an outbound link.
///
/// Checks:
/// 1. `#` or blank is a placeholder
/// 2. `mailto:` has an address with a local part and a domain
/// 3. Otherwise the link starts with http:// or https:// and has a host
pub fn classify_link(href: &str) -> Result<LinkTarget, LinkError> {
    let href = href.trim();

    if href.is_empty() || href == "#" {
        return Ok(LinkTarget::Placeholder);
    }

    let lower = href.to_lowercase();

    if let Some(rest) = lower.strip_prefix("mailto:") {
        let address = rest.split('?').next().unwrap_or_default();
        return match address.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
                Ok(LinkTarget::Mail(href.to_string()))
            }
            _ => Err(LinkError::InvalidAddress(address.to_string())),
        };
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(LinkError::UnsupportedScheme(href.to_string()));
    }

    if extract_host(href).is_none() {
        return Err(LinkError::NoHost);
    }

    Ok(LinkTarget::External(href.to_string()))
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    // Host ends at the first path, query, or fragment delimiter
    let host_part = without_protocol.split(['/', '?', '#']).next()?;
    let host = host_part.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_links() {
        assert_eq!(
            classify_link("https://imfz.cn"),
            Ok(LinkTarget::External("https://imfz.cn".to_string()))
        );
        assert!(matches!(
            classify_link("  http://github.com/user  "),
            Ok(LinkTarget::External(url)) if url == "http://github.com/user"
        ));
    }

    #[test]
    fn test_mail_links() {
        assert_eq!(
            classify_link("mailto:kite@imfz.cn"),
            Ok(LinkTarget::Mail("mailto:kite@imfz.cn".to_string()))
        );
        assert!(matches!(
            classify_link("MAILTO:kite@imfz.cn?subject=hi"),
            Ok(LinkTarget::Mail(_))
        ));
        assert_eq!(
            classify_link("mailto:kite"),
            Err(LinkError::InvalidAddress("kite".to_string()))
        );
        assert!(matches!(
            classify_link("mailto:@imfz.cn"),
            Err(LinkError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(classify_link("#"), Ok(LinkTarget::Placeholder));
        assert_eq!(classify_link(""), Ok(LinkTarget::Placeholder));
        assert_eq!(classify_link("   "), Ok(LinkTarget::Placeholder));
    }

    #[test]
    fn test_rejected_links() {
        assert!(matches!(
            classify_link("javascript:alert(1)"),
            Err(LinkError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            classify_link("ftp://example.com"),
            Err(LinkError::UnsupportedScheme(_))
        ));
        assert_eq!(classify_link("https://"), Err(LinkError::NoHost));
        assert_eq!(classify_link("https:///path"), Err(LinkError::NoHost));
    }

    #[test]
    fn test_configured_links_are_valid() {
        use crate::config::links;
        assert!(matches!(
            classify_link(links::BLOG_URL),
            Ok(LinkTarget::External(_))
        ));
        assert!(matches!(
            classify_link(links::CONTACT_MAILTO),
            Ok(LinkTarget::Mail(_))
        ));
    }

    #[test]
    fn test_target_href() {
        assert_eq!(LinkTarget::Placeholder.href(), "#");
        assert_eq!(
            LinkTarget::Mail("mailto:kite@imfz.cn".to_string()).href(),
            "mailto:kite@imfz.cn"
        );
        assert!(LinkTarget::External("https://imfz.cn".to_string()).opens_new_tab());
        assert!(!LinkTarget::Mail("mailto:kite@imfz.cn".to_string()).opens_new_tab());
    }

    #[test]
    fn test_extract_host() {
        assert_eq!(
            extract_host("https://GitHub.com/user"),
            Some("github.com".to_string())
        );
        assert_eq!(
            extract_host("https://imfz.cn:8443/blog"),
            Some("imfz.cn".to_string())
        );
        assert_eq!(extract_host("https://imfz.cn#top"), Some("imfz.cn".to_string()));
        assert_eq!(extract_host("https://"), None);
    }
}
