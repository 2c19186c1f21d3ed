//! Top-level views reachable from the tab bar.

/// One of the three views of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing view (default)
    #[default]
    Home,
    /// Project showcase
    Works,
    /// Story and contact details
    About,
}

impl Page {
    /// All pages in tab-bar order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Works, Page::About];

    /// Stable identifier of the page.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Works => "works",
            Self::About => "about",
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "主页",
            Self::Works => "作品",
            Self::About => "关于",
        }
    }

    /// Position in the tab bar, starting at 0.
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Works => 1,
            Self::About => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_ids_are_distinct() {
        assert_eq!(Page::Home.id(), "home");
        assert_eq!(Page::Works.id(), "works");
        assert_eq!(Page::About.id(), "about");
    }

    #[test]
    fn test_index_matches_tab_order() {
        for (i, page) in Page::ALL.into_iter().enumerate() {
            assert_eq!(page.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Page::Home.label(), "主页");
        assert_eq!(Page::Works.label(), "作品");
        assert_eq!(Page::About.label(), "关于");
    }
}
