//! Core logic independent of rendering.
//!
//! - [`ClockTime`] - Wall-clock snapshot and zh-CN labels
//! - [`Spring`] - Spring timing solved into CSS easing
//! - [`ContentError`], [`LinkError`] - Error types

mod clock;
mod error;
mod spring;

pub use clock::ClockTime;
pub use error::{ContentError, LinkError};
pub use spring::Spring;
