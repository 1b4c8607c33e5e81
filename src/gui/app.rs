//! Main GUI application

use crate::controller::{DownloadController, FormState, Notice, PendingDownload};
use crate::gui::clipboard;
use crate::gui::components::count_badge;
use crate::gui::theme;
use crate::gui::views::{download_view, history_view};
use crate::history::History;
use crate::utils::config::{AppSettings, VideoQuality};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Application, Command, Element, Length, Theme};
use std::time::Duration;
use tracing::{info, warn};

/// Footer lines
const DISCLAIMER: [&str; 2] = [
    "For demonstration purposes only. No actual videos are downloaded.",
    "In a real application, server-side code would handle the YouTube video downloading.",
];

/// Main application state
pub struct TubeloaderApp {
    controller: DownloadController,
    history: History,

    // UI State
    current_view: View,
    notice: Option<(u64, Notice)>,
    notice_seq: u64,
    notice_duration: Duration,
}

/// Application view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Download,
    History,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Form events
    UrlInputChanged(String),
    PasteFromClipboard,
    ClearUrlInput,
    QualitySelected(VideoQuality),
    BrowseDestination,

    // Download events
    DownloadPressed,
    DownloadFinished(PendingDownload),

    // View navigation
    SwitchToDownload,
    SwitchToHistory,

    // Notices
    DismissNotice(u64),
}

impl TubeloaderApp {
    pub fn form(&self) -> &FormState {
        self.controller.form()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(_, notice)| notice)
    }

    /// Show `notice` and schedule its dismissal
    fn show_notice(&mut self, notice: Notice) -> Command<Message> {
        self.notice_seq += 1;
        let seq = self.notice_seq;
        self.notice = Some((seq, notice));

        let duration = self.notice_duration;
        Command::perform(
            async move { tokio::time::sleep(duration).await },
            move |_| Message::DismissNotice(seq),
        )
    }

    fn header(&self) -> Element<'static, Message> {
        row![
            container(text("⬇").size(22))
                .padding([6, 10])
                .style(iced::theme::Container::Custom(Box::new(theme::LogoTile))),
            column![
                text("YouTube Downloader")
                    .size(28)
                    .style(theme::TEXT_PRIMARY),
                text("Download YouTube videos and playlists for offline viewing")
                    .size(14)
                    .style(theme::TEXT_MUTED),
            ]
            .spacing(4),
        ]
        .spacing(14)
        .align_items(Alignment::Center)
        .into()
    }

    fn sidebar(&self) -> Element<'static, Message> {
        let tab = |label: &str, view: View, message: Message| -> Element<'static, Message> {
            let style = if self.current_view == view {
                theme::SidebarButtonStyle::Active
            } else {
                theme::SidebarButtonStyle::Inactive
            };

            let mut content = row![text(label).size(16)]
                .spacing(8)
                .align_items(Alignment::Center);
            if view == View::History {
                if let Some(badge) = count_badge(self.history.len()) {
                    content = content.push(badge);
                }
            }

            button(content)
                .style(iced::theme::Button::Custom(Box::new(style)))
                .width(Length::Fill)
                .padding(12)
                .on_press(message)
                .into()
        };

        container(
            column![
                container(text("Tubeloader").size(22).style(theme::BRAND)).padding(20),
                Space::with_height(20.0),
                tab("Download", View::Download, Message::SwitchToDownload),
                tab("History", View::History, Message::SwitchToHistory),
            ]
            .spacing(10)
            .padding(10),
        )
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::SidebarContainer,
        )))
        .into()
    }

    fn notice_banner(&self) -> Option<Element<'static, Message>> {
        let (seq, notice) = self.notice.as_ref()?;

        Some(
            container(
                row![
                    text(&notice.message).size(14).width(Length::Fill),
                    button(text("✕").size(12))
                        .on_press(Message::DismissNotice(*seq))
                        .padding([4, 8])
                        .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
                ]
                .spacing(10)
                .align_items(Alignment::Center),
            )
            .padding([10, 16])
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(theme::NoticeStyle(
                notice.kind,
            ))))
            .into(),
        )
    }
}

impl Application for TubeloaderApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppSettings;

    fn new(settings: Self::Flags) -> (Self, Command<Message>) {
        info!(
            "Starting with {} canned destinations, quality {}",
            settings.destinations.len(),
            settings.quality.as_str()
        );

        let app = Self {
            controller: DownloadController::new(&settings),
            history: History::new(),
            current_view: View::Download,
            notice: None,
            notice_seq: 0,
            notice_duration: settings.notice_duration(),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Tubeloader - YouTube Downloader Demo")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Form events
            Message::UrlInputChanged(url) => {
                self.controller.update_url(url);
                Command::none()
            }

            Message::PasteFromClipboard => match clipboard::paste_url() {
                Ok(content) => {
                    self.controller.update_url(content);
                    Command::none()
                }
                Err(e) => {
                    warn!("{}", e);
                    self.show_notice(Notice::error(e))
                }
            },

            Message::ClearUrlInput => {
                self.controller.clear_url();
                Command::none()
            }

            Message::QualitySelected(quality) => {
                self.controller.set_quality(quality);
                Command::none()
            }

            Message::BrowseDestination => {
                self.controller.select_destination();
                Command::none()
            }

            // Download events
            Message::DownloadPressed => match self.controller.begin_submit() {
                Ok(pending) => Command::perform(pending.wait(), Message::DownloadFinished),
                Err(e) => self.show_notice(Notice::from(&e)),
            },

            Message::DownloadFinished(pending) => {
                match self.controller.finish(pending, &mut self.history) {
                    Ok(record) => self.show_notice(Notice::downloaded(record.category)),
                    Err(e) => {
                        warn!("{}", e);
                        self.show_notice(Notice::from(&e))
                    }
                }
            }

            // View navigation
            Message::SwitchToDownload => {
                self.current_view = View::Download;
                Command::none()
            }

            Message::SwitchToHistory => {
                self.current_view = View::History;
                Command::none()
            }

            Message::DismissNotice(seq) => {
                // A newer notice may have replaced the one this timer was for
                if matches!(self.notice, Some((current, _)) if current == seq) {
                    self.notice = None;
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let page = match self.current_view {
            View::Download => download_view(self.controller.form()),
            View::History => history_view(&self.history),
        };

        let mut content = column![self.header()].spacing(24);
        if let Some(banner) = self.notice_banner() {
            content = content.push(banner);
        }
        content = content.push(container(page).width(Length::Fill).height(Length::Fill));
        content = content.push(
            column![
                text(DISCLAIMER[0]).size(12).style(theme::TEXT_MUTED),
                text(DISCLAIMER[1]).size(12).style(theme::GRAY_400),
            ]
            .spacing(4)
            .width(Length::Fill)
            .align_items(Alignment::Center),
        );

        // Combine Sidebar and Content
        let main_layout = row![
            self.sidebar(),
            container(content.padding(32))
                .width(Length::Fill)
                .height(Length::Fill)
        ];

        // Wrap in Gradient Container
        container(main_layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer,
            )))
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}
