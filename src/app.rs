//! Application initialization and window setup

use crate::gui::{icon, TubeloaderApp};
use crate::utils::AppSettings;
use anyhow::Result;
use iced::{Application, Settings, Size};

/// Run the Tubeloader window with the given settings
pub fn run(app_settings: AppSettings) -> Result<()> {
    TubeloaderApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(960.0, 680.0),
            min_size: Some(Size::new(760.0, 520.0)),
            icon: icon::load_icon(),
            ..Default::default()
        },
        antialiasing: true,
        flags: app_settings,
        ..Default::default()
    })?;

    Ok(())
}
