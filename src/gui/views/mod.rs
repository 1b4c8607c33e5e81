//! GUI views

pub mod download_view;
pub mod history_view;

// Re-export for convenience
pub use download_view::download_view;
pub use history_view::history_view;
