//! Kite Digital: personal portfolio site for imfz.cn.
//!
//! A client-side rendered Leptos app with three static views (home, works,
//! about), a pill tab bar, and a live clock.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
