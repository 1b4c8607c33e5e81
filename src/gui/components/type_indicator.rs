//! Glyph showing what kind of URL was detected

use crate::classifier::UrlCategory;
use crate::gui::app::Message;
use crate::gui::theme;
use iced::widget::text;
use iced::Element;

pub fn glyph(category: UrlCategory) -> &'static str {
    match category {
        UrlCategory::Video | UrlCategory::Unrecognized => "▶",
        UrlCategory::Short => "▮",
        UrlCategory::Playlist => "☰",
    }
}

pub fn type_indicator(category: UrlCategory) -> Element<'static, Message> {
    let color = match category {
        UrlCategory::Unrecognized => theme::TEXT_MUTED,
        _ => theme::BRAND,
    };

    text(glyph(category)).size(20).style(color).into()
}
