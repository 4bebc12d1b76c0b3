//! Transient status messages (recording errors, saved-file notices).
//! A toast lives for a few seconds and dismisses itself; nothing here
//! blocks the presentation.

use std::time::{Duration, Instant};

use iced::widget::{container, text};
use iced::{Element, Length};

use crate::Message;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_LIFETIME
    }

    pub fn view(&self) -> Element<'static, Message> {
        let bubble = container(text(self.message.clone()).size(14))
            .padding([8, 16])
            .style(container::rounded_box);

        container(bubble)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .align_bottom(Length::Fill)
            .padding(30)
            .into()
    }
}
