//! History card component

use crate::gui::app::Message;
use crate::gui::components::status_badge::{badge, status_badge};
use crate::gui::components::type_indicator::glyph;
use crate::gui::theme::{self, BadgeStyle};
use crate::history::DownloadRecord;
use crate::utils::{format_timestamp, truncate};
use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length};

const URL_CHARS: usize = 64;
const THUMB_CHARS: usize = 28;

/// Card for one finished download
pub fn history_item(record: &DownloadRecord) -> Element<'static, Message> {
    // The thumbnail itself is never fetched; caption it with its placeholder URL
    let thumbnail = container(
        column![
            text(glyph(record.category)).size(32),
            text(truncate(
                record.thumbnail_url.trim_start_matches("https://"),
                THUMB_CHARS
            ))
            .size(9),
        ]
        .spacing(6)
        .align_items(Alignment::Center),
    )
    .width(Length::Fixed(160.0))
    .height(Length::Fixed(90.0))
    .center_x()
    .center_y()
    .style(iced::theme::Container::Custom(Box::new(
        theme::ThumbnailStyle,
    )));

    let details = column![
        row![
            text(&record.title)
                .size(16)
                .width(Length::Fill)
                .style(theme::TEXT_PRIMARY),
            status_badge(record.status),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
        text(truncate(&record.url, URL_CHARS))
            .size(12)
            .style(theme::TEXT_MUTED),
        row![
            text(format_timestamp(&record.created_at))
                .size(12)
                .style(theme::TEXT_SECONDARY),
            text("|").size(12).style(theme::GRAY_400),
            badge(record.quality.as_str().to_string(), BadgeStyle::Outline),
            Space::with_width(Length::Fill),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
        text(format!("Saved to {}", record.destination))
            .size(12)
            .style(theme::TEXT_SECONDARY),
    ]
    .spacing(8)
    .width(Length::Fill);

    container(
        row![thumbnail, details]
            .spacing(16)
            .align_items(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )))
    .into()
}
