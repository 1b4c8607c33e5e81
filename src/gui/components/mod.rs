//! GUI components

pub mod history_item;
pub mod status_badge;
pub mod type_indicator;
pub mod url_input;

// Re-export for convenience
pub use history_item::history_item;
pub use status_badge::{count_badge, status_badge};
pub use type_indicator::type_indicator;
pub use url_input::url_input;
