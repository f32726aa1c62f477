// SPDX-License-Identifier: MPL-2.0
//! Startup welcome modal.
//!
//! Shown once when the application opens, dismissed by its button, by
//! clicking the backdrop, or automatically after [`AUTO_DISMISS_SECS`]. The
//! auto-dismiss timer is a subscription that only exists while the modal is
//! visible.

use crate::catalog;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Seconds the modal stays up without interaction.
pub const AUTO_DISMISS_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

pub fn view<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(format!("Welcome to {}", catalog::RESTAURANT_NAME))
                .size(typography::TITLE_MD)
                .color(palette::SAFFRON_500),
        )
        .push(
            Text::new("Embark on a futuristic culinary journey like no other!")
                .size(typography::BODY),
        )
        .push(
            button(Text::new("Let's Explore"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Dismiss),
        );

    let dialog = Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::XL)
        .style(styles::container::modal);

    let backdrop = Container::new(center(opaque(dialog)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Dismiss))
}
