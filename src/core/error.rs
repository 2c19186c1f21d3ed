//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ContentError`] - Embedded site content that fails to parse or validate
//! - [`LinkError`] - Outbound links that cannot be followed safely

use thiserror::Error;

/// Errors raised while loading the embedded site content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The TOML document is malformed or does not match the schema.
    #[error("site content is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    /// A section that the page cannot render without is empty.
    #[error("site content section `{0}` is empty")]
    EmptySection(&'static str),
    /// Two projects share the same id.
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
    /// A link in the content cannot be followed.
    #[error("link `{label}` is invalid: {source}")]
    InvalidLink {
        label: String,
        #[source]
        source: LinkError,
    },
}

/// Errors that can occur while classifying an outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Link is empty.
    #[error("link is empty")]
    Empty,
    /// Link uses something other than http, https, or mailto.
    #[error("unsupported link scheme in `{0}`")]
    UnsupportedScheme(String),
    /// Web link has no host.
    #[error("link has no host")]
    NoHost,
    /// `mailto:` link without a usable address.
    #[error("invalid mail address `{0}`")]
    InvalidAddress(String),
}
