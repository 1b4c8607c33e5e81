//! URL input component

use crate::classifier::Classification;
use crate::gui::app::Message;
use crate::gui::components::type_indicator;
use crate::gui::theme;
use iced::widget::{button, column, container, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

const VIDEO_PLACEHOLDER: &str = "https://www.youtube.com/watch?v=... or shorts/...";
const PLAYLIST_PLACEHOLDER: &str = "https://www.youtube.com/playlist?list=...";

/// URL field with type glyph, paste/clear buttons and the detected-type caption
pub fn url_input(value: &str, classification: Classification) -> Element<'static, Message> {
    let placeholder = if classification.category.is_playlist() {
        PLAYLIST_PLACEHOLDER
    } else {
        VIDEO_PLACEHOLDER
    };

    let input_row = row![
        container(type_indicator(classification.category))
            .padding([12, 14])
            .style(iced::theme::Container::Custom(Box::new(theme::ReadonlyField))),
        text_input(placeholder, value)
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::DownloadPressed)
            .padding(14)
            .width(Length::Fill)
            .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle))),
        tooltip(
            button(text("Paste").size(14))
                .on_press(Message::PasteFromClipboard)
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press(Message::ClearUrlInput)
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    let label = text("YouTube URL").size(13).style(theme::TEXT_SECONDARY);

    if classification.is_valid {
        column![
            label,
            input_row,
            text(format!("Detected type: {}", classification.category.label()))
                .size(12)
                .style(theme::TEXT_MUTED),
        ]
        .spacing(8)
        .into()
    } else {
        column![label, input_row].spacing(8).into()
    }
}
