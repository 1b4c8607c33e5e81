#![allow(clippy::approx_constant)]

//! Custom theme definitions for the application - Light Theme

use crate::controller::NoticeKind;
use crate::history::DownloadStatus;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Light Color Palette ---

// Background gradient - warm white to rose
pub const BACKGROUND_START: Color = Color::from_rgb(1.0, 0.980, 0.976); // Rose 25
pub const BACKGROUND_MID: Color = Color::from_rgb(0.996, 0.949, 0.949); // Red 50
pub const BACKGROUND_END: Color = Color::from_rgb(0.992, 0.949, 0.973); // Pink 50

// Brand colors - YouTube red into pink
pub const RED_600: Color = Color::from_rgb(0.863, 0.149, 0.149); // Brand
pub const RED_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // Hover / danger
pub const RED_100: Color = Color::from_rgb(0.996, 0.886, 0.886); // Danger background
pub const RED_50: Color = Color::from_rgb(0.996, 0.949, 0.949); // Subtle backgrounds
pub const PINK_500: Color = Color::from_rgb(0.925, 0.282, 0.600); // Gradient end

// Success color - Emerald
pub const EMERALD_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
pub const EMERALD_100: Color = Color::from_rgb(0.820, 0.980, 0.898);

// Gray scale for text and borders
pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Primary text
pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // Secondary text
pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // Tertiary text
pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // Muted text
pub const GRAY_400: Color = Color::from_rgb(0.616, 0.639, 0.667); // Placeholder
pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // Light borders
pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // Very light bg
pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984); // Lightest bg

// White with alpha for glass effects
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const WHITE_70: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.7);
pub const WHITE_85: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.85);

pub const TEXT_PRIMARY: Color = GRAY_800;
pub const TEXT_SECONDARY: Color = GRAY_600;
pub const TEXT_MUTED: Color = GRAY_500;
pub const BRAND: Color = RED_600;
pub const SUCCESS: Color = EMERALD_500;
pub const DANGER: Color = RED_500;

fn brand_gradient(angle: f32) -> Gradient {
    Gradient::Linear(
        iced::gradient::Linear::new(iced::Radians(angle))
            .add_stop(0.0, RED_600)
            .add_stop(1.0, PINK_500),
    )
}

// --- Container Styles ---

pub struct MainGradientContainer;

impl container::StyleSheet for MainGradientContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356)) // 135 degrees
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(0.5, BACKGROUND_MID)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

pub struct GlassContainer;

impl container::StyleSheet for GlassContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(WHITE_85)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 20.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.10),
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
        }
    }
}

pub struct SidebarContainer;

impl container::StyleSheet for SidebarContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_700),
            background: Some(Background::Color(WHITE_70)),
            border: Border {
                color: GRAY_200,
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(2.0, 0.0),
                blur_radius: 8.0,
            },
        }
    }
}

/// Red tile behind the header logo
pub struct LogoTile;

impl container::StyleSheet for LogoTile {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Gradient(brand_gradient(0.785))),
            border: Border {
                radius: 10.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Stand-in for the remote thumbnail image
pub struct ThumbnailStyle;

impl container::StyleSheet for ThumbnailStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356))
                    .add_stop(0.0, GRAY_700)
                    .add_stop(1.0, GRAY_500),
            ))),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Pill used for status, quality and count badges
pub enum BadgeStyle {
    Status(DownloadStatus),
    Outline,
    Count,
}

impl container::StyleSheet for BadgeStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (text_color, background, border_color) = match self {
            BadgeStyle::Status(DownloadStatus::Completed) => (WHITE, EMERALD_500, EMERALD_500),
            BadgeStyle::Status(DownloadStatus::Failed) => (WHITE, RED_500, RED_500),
            BadgeStyle::Status(DownloadStatus::Processing) => (GRAY_700, GRAY_100, GRAY_200),
            BadgeStyle::Outline => (GRAY_700, WHITE, GRAY_200),
            BadgeStyle::Count => (RED_600, RED_100, RED_100),
        };

        container::Appearance {
            text_color: Some(text_color),
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Floating toast for success and rejection messages
pub struct NoticeStyle(pub NoticeKind);

impl container::StyleSheet for NoticeStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (background, accent) = match self.0 {
            NoticeKind::Success => (EMERALD_100, EMERALD_500),
            NoticeKind::Error => (RED_100, RED_500),
        };

        container::Appearance {
            text_color: Some(GRAY_800),
            background: Some(Background::Color(background)),
            border: Border {
                color: accent,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
        }
    }
}

/// Read-only destination field
pub struct ReadonlyField;

impl container::StyleSheet for ReadonlyField {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(GRAY_700),
            background: Some(Background::Color(GRAY_50)),
            border: Border {
                color: GRAY_200,
                width: 2.0,
                radius: 14.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Gradient(brand_gradient(0.0))),
            text_color: WHITE,
            border: Border {
                radius: 14.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                color: Color::from_rgba(0.863, 0.149, 0.149, 0.4),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 20.0,
            },
            ..active
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
                ..active.shadow
            },
            ..active
        }
    }
}

pub struct SecondaryButton;

impl button::StyleSheet for SecondaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(WHITE)),
            text_color: GRAY_700,
            border: Border {
                radius: 12.0.into(),
                color: GRAY_200,
                width: 1.0,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 4.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(GRAY_50)),
            ..active
        }
    }
}

pub enum SidebarButtonStyle {
    Active,
    Inactive,
}

impl button::StyleSheet for SidebarButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => button::Appearance {
                background: Some(Background::Color(RED_50)),
                text_color: RED_600,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Inactive => button::Appearance {
                background: None,
                text_color: GRAY_600,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        match self {
            Self::Active => self.active(style),
            Self::Inactive => button::Appearance {
                text_color: GRAY_700,
                background: Some(Background::Color(GRAY_100)),
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY_600,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: GRAY_800,
            background: Some(Background::Color(GRAY_200)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 14.0.into(),
                width: 2.0,
                color: GRAY_200,
            },
            icon_color: GRAY_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: RED_500,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        GRAY_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.863, 0.149, 0.149, 0.25)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(GRAY_100),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY_400
    }
}

// --- Scrollable Styles ---

pub struct ScrollableStyle;

impl scrollable::StyleSheet for ScrollableStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> scrollable::Appearance {
        scrollable::Appearance {
            container: container::Appearance::default(),
            scrollbar: scrollable::Scrollbar {
                background: Some(Background::Color(Color::TRANSPARENT)),
                border: Border::default(),
                scroller: scrollable::Scroller {
                    color: Color::from_rgba(0.863, 0.149, 0.149, 0.3),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                },
            },
            gap: None,
        }
    }

    fn hovered(
        &self,
        style: &Self::Style,
        is_mouse_over_scrollbar: bool,
    ) -> scrollable::Appearance {
        let active = self.active(style);
        if is_mouse_over_scrollbar {
            scrollable::Appearance {
                scrollbar: scrollable::Scrollbar {
                    scroller: scrollable::Scroller {
                        color: Color::from_rgba(0.863, 0.149, 0.149, 0.5),
                        ..active.scrollbar.scroller
                    },
                    ..active.scrollbar
                },
                ..active
            }
        } else {
            active
        }
    }
}
