use crate::gui::app::Message;
use crate::gui::theme::{self, BadgeStyle};
use crate::history::DownloadStatus;
use iced::widget::{container, text};
use iced::Element;

pub fn status_badge(status: DownloadStatus) -> Element<'static, Message> {
    let icon = match status {
        DownloadStatus::Completed => "✓",
        DownloadStatus::Failed => "!",
        DownloadStatus::Processing => "…",
    };

    badge(format!("{} {}", icon, status.label()), BadgeStyle::Status(status))
}

pub fn badge(label: String, style: BadgeStyle) -> Element<'static, Message> {
    container(text(label).size(11))
        .padding([3, 10])
        .style(iced::theme::Container::Custom(Box::new(style)))
        .into()
}

/// Tab counter, hidden when there is nothing to count
pub fn count_badge(count: usize) -> Option<Element<'static, Message>> {
    (count > 0).then(|| {
        container(text(count.to_string()).size(11).style(theme::BRAND))
            .padding([2, 8])
            .style(iced::theme::Container::Custom(Box::new(BadgeStyle::Count)))
            .into()
    })
}
