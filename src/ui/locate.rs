// SPDX-License-Identifier: MPL-2.0
//! Locate screen: address, highlights, and hand-off to external map
//! services for directions.
//!
//! The original site embedded a map tile provider; in a desktop window we
//! link out to OpenStreetMap and Google Maps instead and keep the contact
//! details inline. The "reveal" toggle mirrors the site's click-the-globe
//! interaction.

use crate::catalog;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ToggleInfo,
    GetDirections,
    OpenMap,
}

#[derive(Debug, Default)]
pub struct State {
    show_info: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ToggleInfo => self.show_info = !self.show_info,
            Message::GetDirections => open_external(&catalog::directions_url()),
            Message::OpenMap => open_external(&catalog::map_url()),
        }
    }
}

fn open_external(url: &str) {
    if let Err(err) = open::that(url) {
        log::warn!("failed to open {url}: {err}");
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let heading = Container::new(
        Text::new("Find Baba Chatore in Lucknow").size(typography::TITLE_LG),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let intro = Text::new(
        "Experience the heart of Lucknowi cuisine at Baba Chatore. Our restaurant is \
         nestled in the bustling streets of Aminabad, where tradition meets culinary \
         excellence.",
    )
    .size(typography::BODY);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(heading)
        .push(intro)
        .push(highlights())
        .push(info_panel(state))
        .into()
}

fn highlights<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XL);
    for highlight in [
        "Authentic Flavors",
        "Historic Location",
        "Unforgettable Experience",
    ] {
        row = row.push(
            Container::new(Text::new(highlight).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::caption),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn info_panel(state: &State) -> Element<'_, Message> {
    let content = if state.show_info {
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new("Our Location")
                    .size(typography::TITLE_MD)
                    .color(palette::SAFFRON_500),
            )
            .push(Text::new(catalog::ADDRESS).size(typography::BODY))
            .push(
                Text::new(format!("Open 24/7 | Phone: {}", catalog::PHONE))
                    .size(typography::BODY),
            )
            .push(Text::new(format!("Email: {}", catalog::EMAIL)).size(typography::BODY))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        button(Text::new("Get Directions"))
                            .padding([spacing::XS, spacing::LG])
                            .style(styles::button::primary)
                            .on_press(Message::GetDirections),
                    )
                    .push(
                        button(Text::new("View on OpenStreetMap"))
                            .padding([spacing::XS, spacing::LG])
                            .style(styles::button::unselected)
                            .on_press(Message::OpenMap),
                    ),
            )
    } else {
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new("Discover Our Location")
                    .size(typography::TITLE_MD)
                    .color(palette::SAFFRON_500),
            )
            .push(
                Text::new(
                    "Reveal our exact location and get directions to culinary bliss! \
                     Central location in Aminabad, easy access from major landmarks, \
                     ample parking available nearby.",
                )
                .size(typography::BODY),
            )
            .push(
                button(Text::new("Reveal Location"))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::ToggleInfo),
            )
    };

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reveals_and_hides_the_info_panel() {
        let mut state = State::new();
        assert!(!state.show_info);

        state.update(Message::ToggleInfo);
        assert!(state.show_info);

        state.update(Message::ToggleInfo);
        assert!(!state.show_info);
    }

    #[test]
    fn locate_view_renders_both_panel_states() {
        let mut state = State::new();
        let _hidden = view(&state);
        drop(_hidden);

        state.update(Message::ToggleInfo);
        let _revealed = view(&state);
    }
}
