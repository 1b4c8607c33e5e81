//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod icon;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::Message;
pub use app::TubeloaderApp;
pub use app::View;
