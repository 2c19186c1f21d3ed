//! The three top-level views.

mod about;
mod home;
mod works;

pub use about::AboutView;
pub use home::HomeView;
pub use works::{WorksView, selected_count_label};
