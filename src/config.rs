//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Site content document (profile, status options, projects, shelves).
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the top bar.
pub const APP_NAME: &str = "Kite Digital";

/// Public domain of the site.
pub const SITE_DOMAIN: &str = "imfz.cn";

/// Year the site was established.
pub const ESTABLISHED: u16 = 2025;

// =============================================================================
// Outbound Links
// =============================================================================

/// Outbound navigation targets used by the home page shortcuts.
pub mod links {
    /// Blog opened by the home page "博客" card.
    pub const BLOG_URL: &str = "https://imfz.cn";
    /// Contact address opened by the home page "联络" card.
    pub const CONTACT_MAILTO: &str = "mailto:kite@imfz.cn";
}

// =============================================================================
// Clock Configuration
// =============================================================================

/// Live clock settings.
pub mod clock {
    /// Interval between clock ticks in milliseconds.
    pub const TICK_MS: u32 = 1000;
}

// =============================================================================
// Animation Configuration
// =============================================================================

/// Animation timing shared by the stylesheets.
pub mod motion {
    use crate::core::Spring;

    /// Spring used for the tab pill and card press feedback.
    pub const SPRING: Spring = Spring::new(200.0, 25.0, 0.8);

    /// Distance from rest (normalized) at which the spring counts as settled.
    pub const SETTLE_TOLERANCE: f64 = 0.001;

    /// Number of samples in the generated CSS `linear()` easing.
    pub const EASING_SAMPLES: usize = 32;

    /// Loop durations of the three background blobs, in seconds.
    pub const BLOB_DURATIONS_SECS: [u32; 3] = [20, 25, 15];

    /// How long the home view blurs out before the next view mounts, in
    /// milliseconds. The other views leave without an exit animation.
    pub const HOME_EXIT_MS: u32 = 300;

    /// Media query for users who asked the OS to reduce motion.
    pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
}

// =============================================================================
// Layout Configuration
// =============================================================================

/// Responsive breakpoints.
pub mod layout {
    /// Viewports at least this wide show the live clock.
    pub const WIDE_QUERY: &str = "(min-width: 768px)";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
