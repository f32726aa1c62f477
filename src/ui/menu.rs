// SPDX-License-Identifier: MPL-2.0
//! Menu screen. The printed menu lives in an external flipbook viewer; this
//! screen explains that and hands off to the system browser.

use crate::catalog;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    OpenFlipbook,
}

/// Opens the flipbook in the system browser. Failure is logged and otherwise
/// ignored; there is nothing sensible to recover.
pub fn update(message: Message) {
    match message {
        Message::OpenFlipbook => {
            if let Err(err) = open::that(catalog::MENU_FLIPBOOK_URL) {
                log::warn!("failed to open menu flipbook: {err}");
            }
        }
    }
}

pub fn view<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Our Menu").size(typography::TITLE_LG))
        .push(
            Text::new(
                "Browse the full Baba Chatore menu in our interactive flipbook, from Tunday \
                 Kebab to our fusion specials.",
            )
            .size(typography::BODY),
        )
        .push(
            button(Text::new("Open the Menu"))
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary)
                .on_press(Message::OpenFlipbook),
        )
        .push(
            Text::new("Opens in your browser")
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
