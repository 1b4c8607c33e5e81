//! Application icon for the Tubeloader window
//!
//! The icon is drawn at startup: a red rounded tile with a white play
//! triangle, so no image asset has to ship with the binary.

use iced::window;
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 64;
const CORNER_RADIUS: f32 = 14.0;
const BRAND_RED: Rgba<u8> = Rgba([220, 38, 38, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Render the icon pixels
pub fn render_icon() -> RgbaImage {
    let size = ICON_SIZE as f32;
    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        if !inside_rounded_square(px, py, size, CORNER_RADIUS) {
            CLEAR
        } else if inside_play_triangle(px, py, size) {
            WHITE
        } else {
            BRAND_RED
        }
    })
}

fn inside_rounded_square(x: f32, y: f32, size: f32, radius: f32) -> bool {
    let cx = x.clamp(radius, size - radius);
    let cy = y.clamp(radius, size - radius);
    let (dx, dy) = (x - cx, y - cy);
    dx * dx + dy * dy <= radius * radius
}

// Triangle pointing right, centered in the tile
fn inside_play_triangle(x: f32, y: f32, size: f32) -> bool {
    let left = size * 0.38;
    let right = size * 0.70;
    let mid = size / 2.0;
    let half_height = size * 0.18;

    if x < left || x > right {
        return false;
    }
    let progress = (x - left) / (right - left);
    (y - mid).abs() <= half_height * (1.0 - progress)
}

/// Load the application icon for the window
///
/// Returns `None` if iced rejects the pixel buffer; the window then uses the
/// platform default.
pub fn load_icon() -> Option<window::Icon> {
    let img = render_icon();
    let (width, height) = img.dimensions();

    match window::icon::from_rgba(img.into_raw(), width, height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("Failed to build application icon: {}", e);
            None
        }
    }
}
