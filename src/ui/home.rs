// SPDX-License-Identifier: MPL-2.0
//! Home screen: hero banner with auto-rotating background, about blurb, and
//! today's specials.
//!
//! The hero rotation is driven by a periodic message from the app's
//! subscription, which only exists while this screen is active. Leaving the
//! screen therefore stops the timer; re-entering restarts it.

use crate::assets::ImageStore;
use crate::catalog::{self, HERO_BACKGROUNDS, SPECIALS};
use crate::ui::components::media_tile;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick from the hero rotation timer.
    AdvanceBackground,
    SpecialHovered(usize),
    SpecialUnhovered,
    ExploreMenu,
    ReadMore,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenMenu,
    OpenAbout,
}

#[derive(Debug, Default)]
pub struct State {
    background_index: usize,
    /// Which specials card is flipped to its ingredient list, if any.
    hovered_special: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_index(&self) -> usize {
        self.background_index
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::AdvanceBackground => {
                self.background_index = (self.background_index + 1) % HERO_BACKGROUNDS.len();
                Event::None
            }
            Message::SpecialHovered(index) => {
                self.hovered_special = Some(index);
                Event::None
            }
            Message::SpecialUnhovered => {
                self.hovered_special = None;
                Event::None
            }
            Message::ExploreMenu => Event::OpenMenu,
            Message::ReadMore => Event::OpenAbout,
        }
    }
}

pub fn view<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(hero(state, store))
        .push(about_blurb())
        .push(specials(state, store))
        .into()
}

fn hero<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    let background_name = HERO_BACKGROUNDS[state.background_index % HERO_BACKGROUNDS.len()];

    let headline = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(catalog::RESTAURANT_NAME)
                .size(typography::TITLE_XL)
                .color(palette::WHITE),
        )
        .push(
            Text::new(catalog::TAGLINE)
                .size(typography::TITLE_MD)
                .color(palette::SAFFRON_400),
        )
        .push(
            Text::new(format!(
                "Open 24 Hours \u{2022} We Deliver Anywhere in Lucknow \u{2022} Order Now: {}",
                catalog::PHONE
            ))
            .size(typography::BODY)
            .color(palette::WHITE),
        )
        .push(
            button(Text::new("Explore Menu"))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ExploreMenu),
        )
        .push(perks());

    let overlay = Container::new(headline)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    match store.ready(background_name) {
        Some(_) => {
            let background = media_tile::view(
                store.get(background_name),
                catalog::TAGLINE,
                // The tile fills the window width; Cover crops as needed.
                2048.0,
                sizing::HERO_HEIGHT,
            );
            stack![background, overlay].into()
        }
        // Missing or failed background: flat brand surface, same content.
        None => Container::new(overlay)
            .style(styles::container::hero)
            .into(),
    }
}

fn perks<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XL);
    for perk in ["Open 24/7", "Free Delivery", "Online Booking"] {
        row = row.push(
            Text::new(perk)
                .size(typography::CAPTION)
                .color(palette::SAFFRON_200),
        );
    }
    row.into()
}

fn about_blurb<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("About Baba Chatore").size(typography::TITLE_MD))
        .push(
            Text::new(
                "For over 40 years, Baba Chatore has been the heart of Lucknow's culinary \
                 scene, serving authentic Awadhi cuisine with a modern twist.",
            )
            .size(typography::BODY),
        )
        .push(
            Text::new(
                "Our journey began in the narrow lanes of old Lucknow, and today we continue \
                 to delight food lovers with our signature dishes and warm hospitality.",
            )
            .size(typography::BODY),
        )
        .push(
            button(Text::new("Read More"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ReadMore),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn specials<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    let mut cards = Row::new().spacing(spacing::LG);
    for (index, special) in SPECIALS.iter().enumerate() {
        let flipped = state.hovered_special == Some(index);
        cards = cards.push(special_card(store, index, special, flipped));
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new("Today's Specials").size(typography::TITLE_MD))
        .push(cards)
        .into()
}

/// One specials card. Hovering flips it from the dish photo to its
/// ingredient list, like the original site's recipe cards.
fn special_card<'a>(
    store: &'a ImageStore,
    index: usize,
    special: &'a catalog::Special,
    flipped: bool,
) -> Element<'a, Message> {
    let face: Element<'a, Message> = if flipped {
        let mut ingredients = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("Ingredients").size(typography::TITLE_SM));
        for ingredient in special.ingredients {
            ingredients = ingredients.push(Text::new(*ingredient).size(typography::BODY));
        }
        ingredients.into()
    } else {
        Column::new()
            .spacing(spacing::XS)
            .push(media_tile::view(
                store.get(special.image),
                special.name,
                sizing::CARD_WIDTH - 2.0 * spacing::SM,
                sizing::CARD_IMAGE_HEIGHT,
            ))
            .push(Text::new(special.name).size(typography::TITLE_SM))
            .push(Text::new(special.description).size(typography::CAPTION))
            .into()
    };

    let card = Container::new(face)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT + 110.0))
        .padding(spacing::SM)
        .style(styles::container::card);

    mouse_area(card)
        .on_enter(Message::SpecialHovered(index))
        .on_exit(Message::SpecialUnhovered)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_rotation_wraps_around() {
        let mut state = State::new();
        for _ in 0..HERO_BACKGROUNDS.len() {
            let _ = state.update(Message::AdvanceBackground);
        }
        assert_eq!(state.background_index(), 0);
    }

    #[test]
    fn hovering_flips_a_card_and_leaving_unflips_it() {
        let mut state = State::new();
        let _ = state.update(Message::SpecialHovered(1));
        assert_eq!(state.hovered_special, Some(1));

        let _ = state.update(Message::SpecialUnhovered);
        assert_eq!(state.hovered_special, None);
    }

    #[test]
    fn explore_and_read_more_emit_navigation_events() {
        let mut state = State::new();
        assert!(matches!(state.update(Message::ExploreMenu), Event::OpenMenu));
        assert!(matches!(state.update(Message::ReadMore), Event::OpenAbout));
    }

    #[test]
    fn home_view_renders_without_loaded_images() {
        let state = State::new();
        let store = ImageStore::new();
        let _element = view(&state, &store);
    }
}
