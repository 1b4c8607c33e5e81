//! History view implementation

use crate::gui::app::Message;
use crate::gui::components::history_item;
use crate::gui::theme;
use crate::history::History;
use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length};

/// Create the history view
pub fn history_view(history: &History) -> Element<'static, Message> {
    if history.is_empty() {
        return container(
            column![
                text("No download history yet")
                    .size(16)
                    .style(theme::TEXT_MUTED),
                text("Finished downloads will appear here")
                    .size(14)
                    .style(theme::GRAY_400),
            ]
            .spacing(10)
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into();
    }

    let cards = history
        .items()
        .fold(column![].spacing(16), |col, record| {
            col.push(history_item(record))
        });

    scrollable(cards.padding([0, 12, 0, 0]))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Scrollable::Custom(Box::new(
            theme::ScrollableStyle,
        )))
        .into()
}
