//! Download form view

use crate::controller::FormState;
use crate::gui::app::Message;
use crate::gui::components::url_input;
use crate::gui::theme;
use crate::utils::VideoQuality;
use iced::widget::{button, column, container, pick_list, row, text, Space};
use iced::{Alignment, Element, Length};

fn submit_label(form: &FormState) -> &'static str {
    match (form.is_loading(), form.category().is_playlist()) {
        (true, true) => "Downloading Playlist...",
        (true, false) => "Downloading...",
        (false, true) => "Download Playlist",
        (false, false) => "Download Video",
    }
}

/// Create the download view
pub fn download_view(form: &FormState) -> Element<'static, Message> {
    let destination = column![
        text("Download Location")
            .size(13)
            .style(theme::TEXT_SECONDARY),
        row![
            container(text(form.destination.clone()).size(14))
                .padding([12, 14])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(theme::ReadonlyField))),
            button(text("Browse").size(14))
                .on_press(Message::BrowseDestination)
                .padding([10, 16])
                .style(iced::theme::Button::Custom(Box::new(
                    theme::SecondaryButton
                ))),
        ]
        .spacing(10)
        .align_items(Alignment::Center),
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    let quality = column![
        text("Video Quality")
            .size(13)
            .style(theme::TEXT_SECONDARY),
        pick_list(
            &VideoQuality::ALL[..],
            Some(form.quality),
            Message::QualitySelected
        )
        .text_size(14)
        .padding([10, 12])
        .width(Length::Fill),
    ]
    .spacing(8)
    .width(Length::FillPortion(1));

    let submit = button(
        container(text(submit_label(form)).size(16))
            .width(Length::Fill)
            .center_x(),
    )
    .on_press_maybe(form.can_submit().then_some(Message::DownloadPressed))
    .padding([14, 32])
    .width(Length::Fill)
    .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton)));

    container(
        column![
            url_input(&form.url, form.classification),
            row![destination, quality].spacing(16),
            Space::with_height(4.0),
            submit,
        ]
        .spacing(20)
        .max_width(720.0),
    )
    .padding(28)
    .width(Length::Fill)
    .center_x()
    .style(iced::theme::Container::Custom(Box::new(
        theme::GlassContainer,
    )))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Phase;

    #[test]
    fn test_submit_label_follows_category_and_phase() {
        let mut form = FormState::new(VideoQuality::Highest, "~/Videos".to_string());
        assert_eq!(submit_label(&form), "Download Video");

        form.set_url("https://youtube.com/playlist?list=XYZ".to_string());
        assert_eq!(submit_label(&form), "Download Playlist");

        form.phase = Phase::Loading;
        assert_eq!(submit_label(&form), "Downloading Playlist...");

        form.set_url("https://youtu.be/abc".to_string());
        assert_eq!(submit_label(&form), "Downloading...");
    }
}
