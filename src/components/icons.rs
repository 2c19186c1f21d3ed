//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{Glyph, Page};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUpRight as ArrowUpRight, LuBookOpen as Book, LuCoffee as Coffee,
        LuCompass as Compass, LuCpu as Cpu, LuGithub as Github, LuGlobe as Globe,
        LuHeart as Heart, LuLayers as Layers, LuLayoutGrid as Layout, LuMail as Mail,
        LuMusic as Music, LuSparkles as Sparkles, LuTwitter as Twitter, LuUser as User,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUpRight as ArrowUpRight, BsBook as Book, BsCupHot as Coffee,
        BsCompass as Compass, BsCpu as Cpu, BsEnvelope as Mail, BsGithub as Github,
        BsGlobe as Globe, BsGrid as Layout, BsHeart as Heart, BsLayers as Layers,
        BsMusicNote as Music, BsPerson as User, BsStars as Sparkles, BsTwitter as Twitter,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_UP_RIGHT, ArrowUpRight);
themed_icon!(BOOK, Book);
themed_icon!(COFFEE, Coffee);
themed_icon!(COMPASS, Compass);
themed_icon!(CPU, Cpu);
themed_icon!(GITHUB, Github);
themed_icon!(GLOBE, Globe);
themed_icon!(HEART, Heart);
themed_icon!(LAYERS, Layers);
themed_icon!(LAYOUT, Layout);
themed_icon!(MAIL, Mail);
themed_icon!(MUSIC, Music);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(TWITTER, Twitter);
themed_icon!(USER, User);

/// Icon for a content glyph.
pub fn glyph(glyph: Glyph) -> Icon {
    match glyph {
        Glyph::Layout => LAYOUT,
        Glyph::Globe => GLOBE,
        Glyph::Cpu => CPU,
        Glyph::Sparkles => SPARKLES,
        Glyph::Coffee => COFFEE,
        Glyph::Music => MUSIC,
        Glyph::Book => BOOK,
        Glyph::Github => GITHUB,
        Glyph::Twitter => TWITTER,
        Glyph::Mail => MAIL,
    }
}

/// Tab bar icon for a page.
pub fn page(page: Page) -> Icon {
    match page {
        Page::Home => COMPASS,
        Page::Works => LAYOUT,
        Page::About => USER,
    }
}
