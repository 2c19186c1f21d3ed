//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`] - The views reachable from the tab bar
//! - [`SiteContent`], [`Project`], [`StatusOption`], [`Shelf`], [`Profile`] - Static site content
//! - [`Glyph`], [`Accent`] - Icon and colour slots referenced from content

mod content;
mod page;

pub use content::{
    Accent, ContactLink, Emphasized, Glyph, Profile, Project, Shelf, SiteContent, StatusOption,
};
pub use page::Page;
