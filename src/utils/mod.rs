//! Utility modules for DOM access and link handling.
//!
//! Provides:
//! - [`classify_link`], [`LinkTarget`] - Outbound link validation
//! - [`dom`] - Window helpers for opening links and styling the root element

pub mod dom;
mod url;

pub use url::{LinkTarget, classify_link};
