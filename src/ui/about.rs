// SPDX-License-Identifier: MPL-2.0
//! About screen: the restaurant's story, an interactive timeline, the
//! specialties, and the dining spaces with a detail modal.

use crate::assets::ImageStore;
use crate::catalog::{self, SPACES, SPECIALTIES, TIMELINE};
use crate::ui::components::media_tile;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, mouse_area, opaque, stack, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    TimelineSelected(u16),
    SpaceOpened(usize),
    SpaceClosed,
}

#[derive(Debug, Default)]
pub struct State {
    /// Year of the highlighted timeline entry, if any.
    active_year: Option<u16>,
    /// Index into [`SPACES`] of the open detail modal, if any.
    open_space: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_year(&self) -> Option<u16> {
        self.active_year
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::TimelineSelected(year) => self.active_year = Some(year),
            Message::SpaceOpened(index) => {
                if index < SPACES.len() {
                    self.open_space = Some(index);
                }
            }
            Message::SpaceClosed => self.open_space = None,
        }
    }
}

pub fn view<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    let heading = Container::new(Text::new("Baba Chatore Ki Kahani").size(typography::TITLE_LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let base = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(heading)
        .push(story())
        .push(timeline(state))
        .push(specialties())
        .push(spaces(store));

    match state.open_space {
        Some(index) => stack![base, space_modal(store, index)].into(),
        None => base.into(),
    }
}

fn story<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(
                "1980 se lekar aaj tak, Baba Chatore Lucknow ke dil mein Awadhi cuisine ka ek \
                 behtareen namuna raha hai. Humari journey purane Lucknow ki galiyon se shuru \
                 hui, jahan Tunday Kebab aur Lucknowi Biryani ki khushbu hawa mein tairti thi.",
            )
            .size(typography::BODY),
        )
        .push(
            Text::new(
                "Aaj, 40+ saal baad, hum wohi purani recipes aur techniques ke saath naye \
                 experiments bhi karte hain, taaki har customer ko ek unique dining experience \
                 mile.",
            )
            .size(typography::BODY),
        )
        .into()
}

fn timeline<'a>(state: &'a State) -> Element<'a, Message> {
    let mut entries = Column::new().spacing(spacing::SM);
    for event in TIMELINE {
        let active = state.active_year == Some(event.year);

        let year_badge = Container::new(
            Text::new(event.year.to_string())
                .size(typography::BODY)
                .color(palette::GRAY_900),
        )
        .padding(spacing::XS)
        .style(if active {
            styles::container::caption
        } else {
            styles::container::placeholder
        });

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(year_badge)
            .push(Text::new(event.event).size(typography::BODY));

        entries = entries.push(
            button(row)
                .style(styles::button::tile)
                .padding(spacing::XXS)
                .on_press(Message::TimelineSelected(event.year)),
        );
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Humari Journey").size(typography::TITLE_MD))
        .push(entries);

    // Detail panel mirrors the selected milestone, like the original site.
    if let Some(year) = state.active_year {
        if let Some(event) = TIMELINE.iter().find(|e| e.year == year) {
            let detail = Column::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(year.to_string())
                        .size(typography::TITLE_SM)
                        .color(palette::SAFFRON_500),
                )
                .push(Text::new(event.event).size(typography::BODY));
            column = column.push(
                Container::new(detail)
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::container::card),
            );
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn specialties<'a>() -> Element<'a, Message> {
    let mut chips = Row::new().spacing(spacing::SM);
    for dish in SPECIALTIES {
        chips = chips.push(
            Container::new(Text::new(*dish).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::caption),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new("Humari Specialties").size(typography::TITLE_MD))
        .push(chips)
        .into()
}

fn spaces<'a>(store: &'a ImageStore) -> Element<'a, Message> {
    let mut cards = Row::new().spacing(spacing::MD);
    for (index, space) in SPACES.iter().enumerate() {
        let tile = Column::new()
            .spacing(spacing::XS)
            .push(media_tile::view(
                store.get(space.image),
                space.name,
                sizing::CARD_WIDTH - 2.0 * spacing::SM,
                sizing::CARD_IMAGE_HEIGHT,
            ))
            .push(Text::new(space.name).size(typography::BODY));

        cards = cards.push(
            button(
                Container::new(tile)
                    .padding(spacing::SM)
                    .style(styles::container::card),
            )
            .style(styles::button::tile)
            .padding(0)
            .on_press(Message::SpaceOpened(index)),
        );
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new("Experience Baba Chatore's Ambiance").size(typography::TITLE_MD))
        .push(cards)
        .into()
}

fn space_modal<'a>(store: &'a ImageStore, index: usize) -> Element<'a, Message> {
    let space = &SPACES[index.min(SPACES.len() - 1)];

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(media_tile::view(
            store.get(space.image),
            space.name,
            sizing::MODAL_WIDTH - 2.0 * spacing::LG,
            sizing::CARD_IMAGE_HEIGHT * 1.4,
        ))
        .push(Text::new(space.name).size(typography::TITLE_MD))
        .push(Text::new(space.description).size(typography::BODY))
        .push(
            button(Text::new("Close"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::SpaceClosed),
        );

    let dialog = Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::modal);

    let backdrop = Container::new(center(opaque(dialog)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::SpaceClosed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_timeline_entry_highlights_it() {
        let mut state = State::new();
        state.update(Message::TimelineSelected(2000));
        assert_eq!(state.active_year(), Some(2000));

        state.update(Message::TimelineSelected(1980));
        assert_eq!(state.active_year(), Some(1980));
    }

    #[test]
    fn space_modal_opens_and_closes() {
        let mut state = State::new();
        state.update(Message::SpaceOpened(2));
        assert_eq!(state.open_space, Some(2));

        state.update(Message::SpaceClosed);
        assert_eq!(state.open_space, None);

        // Closing again stays closed.
        state.update(Message::SpaceClosed);
        assert_eq!(state.open_space, None);
    }

    #[test]
    fn out_of_range_space_is_ignored() {
        let mut state = State::new();
        state.update(Message::SpaceOpened(SPACES.len()));
        assert_eq!(state.open_space, None);
    }

    #[test]
    fn about_view_renders_with_and_without_selection() {
        let store = ImageStore::new();
        let mut state = State::new();
        let _plain = view(&state, &store);
        drop(_plain);

        state.update(Message::TimelineSelected(2010));
        state.update(Message::SpaceOpened(0));
        let _busy = view(&state, &store);
    }
}
