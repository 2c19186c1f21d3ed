//! UI components built with Leptos.
//!
//! - [`Shell`] - Page layout and view switching (main entry point)
//! - [`MaterialCard`] - Glass card primitive
//! - [`nav`] - Pill tab bar
//! - [`views`] - Home, works, and about views
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`hooks`] - Timers, view handover, and media query hooks

pub mod background;
mod card;
pub mod footer;
pub mod hooks;
pub mod icons;
pub mod nav;
pub mod shell;
pub mod theme;
pub mod topbar;
pub mod views;

pub use card::MaterialCard;
pub use shell::Shell;
