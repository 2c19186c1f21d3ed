//! Shared colour accents.

use crate::models::Accent;

stylance::import_crate_style!(css, "src/components/theme.module.css");

/// Text colour class for an accent.
pub fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Neutral => css::neutral,
        Accent::Blue => css::blue,
        Accent::Purple => css::purple,
        Accent::Indigo => css::indigo,
        Accent::Emerald => css::emerald,
        Accent::Orange => css::orange,
        Accent::Red => css::red,
    }
}

/// Soft gradient wash for an accent, used behind shelf cards.
pub fn accent_wash(accent: Accent) -> &'static str {
    match accent {
        Accent::Indigo => css::washIndigo,
        Accent::Purple => css::washPurple,
        Accent::Blue => css::washBlue,
        Accent::Emerald => css::washEmerald,
        Accent::Orange => css::washOrange,
        Accent::Red | Accent::Neutral => css::washNeutral,
    }
}
