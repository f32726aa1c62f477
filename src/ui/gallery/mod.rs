// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: filter pills, a horizontally scrolling thumbnail strip,
//! and a full-screen lightbox overlay.

pub mod component;

use self::component::{Message, State, STRIP_SCROLL_STEP};
use crate::assets::ImageStore;
use crate::catalog::Category;
use crate::ui::components::media_tile;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, mouse_area, opaque, scrollable, stack, Column, Container, Row, Text,
};
use iced::{alignment, Element, Length};

pub fn view<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    let heading = Container::new(Text::new("Culinary Gallery").size(typography::TITLE_LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let base = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(heading)
        .push(filter_bar(state.browser().filter()))
        .push(strip(state, store));

    if state.browser().is_open() {
        stack![base, lightbox(state, store)].into()
    } else {
        base.into()
    }
}

fn filter_bar<'a>(active: Category) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    for category in Category::ALL {
        let style = if category == active {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row = row.push(
            button(Text::new(category.to_string()))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::FilterSelected(category)),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn strip<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    let mut thumbnails = Row::new().spacing(spacing::MD).padding(spacing::XS);
    for (index, item) in state.browser().filtered().enumerate() {
        thumbnails = thumbnails.push(thumbnail(store, item.source, item.alt_text, index));
    }

    let scroller = scrollable(thumbnails)
        .id(component::strip_id())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill);

    let left = button(Text::new("\u{2039}").size(typography::TITLE_MD))
        .style(styles::button::overlay)
        .on_press(Message::ScrollStrip(-STRIP_SCROLL_STEP));
    let right = button(Text::new("\u{203A}").size(typography::TITLE_MD))
        .style(styles::button::overlay)
        .on_press(Message::ScrollStrip(STRIP_SCROLL_STEP));

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(left)
        .push(scroller)
        .push(right)
        .into()
}

fn thumbnail<'a>(
    store: &'a ImageStore,
    source: &'a str,
    alt_text: &'a str,
    index: usize,
) -> Element<'a, Message> {
    let image = media_tile::view(
        store.get(source),
        alt_text,
        sizing::THUMB_WIDTH,
        sizing::THUMB_HEIGHT - 32.0,
    );

    let caption = Container::new(Text::new(alt_text).size(typography::BODY))
        .width(Length::Fixed(sizing::THUMB_WIDTH))
        .padding(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::caption);

    let tile = Column::new().push(image).push(caption);

    button(tile)
        .style(styles::button::tile)
        .padding(0)
        .on_press(Message::ThumbnailClicked(index))
        .into()
}

/// Full-screen lightbox over the dimmed gallery. Clicking the backdrop
/// closes it; the image and controls sit opaquely on top.
fn lightbox<'a>(state: &'a State, store: &'a ImageStore) -> Element<'a, Message> {
    let browser = state.browser();
    let (item, index) = match (browser.open_item(), browser.open_index()) {
        (Some(item), Some(index)) => (item, index),
        _ => return Column::new().into(),
    };
    let count = browser.filtered_len();

    let image = media_tile::view(
        store.get(item.source),
        item.alt_text,
        sizing::LIGHTBOX_MAX,
        sizing::LIGHTBOX_MAX * 0.66,
    );

    let previous = button(Text::new("\u{2039}").size(typography::TITLE_MD))
        .style(styles::button::overlay)
        .on_press(Message::PreviousImage);
    let counter = Text::new(format!("{} / {}", index + 1, count)).size(typography::BODY);
    let next = button(Text::new("\u{203A}").size(typography::TITLE_MD))
        .style(styles::button::overlay)
        .on_press(Message::NextImage);
    let close = button(Text::new("\u{00D7}").size(typography::TITLE_MD))
        .style(styles::button::overlay)
        .on_press(Message::CloseLightbox);

    let controls = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(counter)
        .push(next)
        .push(close);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(Text::new(item.alt_text).size(typography::TITLE_SM))
        .push(controls);

    let backdrop = Container::new(center(opaque(content)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::CloseLightbox))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_view_renders_closed_and_open() {
        let store = ImageStore::new();
        let mut state = State::new();
        let _closed = view(&state, &store);
        drop(_closed);

        let _ = state.update(Message::ThumbnailClicked(0));
        let _open = view(&state, &store);
    }

    #[test]
    fn gallery_view_renders_for_the_single_item_filter() {
        let store = ImageStore::new();
        let mut state = State::new();
        let _ = state.update(Message::FilterSelected(Category::Outdoor));
        let _ = state.update(Message::ThumbnailClicked(0));
        let _element = view(&state, &store);
    }
}
