// SPDX-License-Identifier: MPL-2.0
//! Image tile with graceful degradation.
//!
//! Renders a decoded image at a fixed tile size, or a placeholder while the
//! image is loading, or a fallback with an accessible label when decoding
//! failed. A load failure is purely presentational: the tile still renders
//! and the surrounding screen state is untouched.

use crate::assets::LoadState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Label shown on tiles whose image could not be loaded.
pub const FALLBACK_LABEL: &str = "Image not available";

/// Renders the image for `state` at the given size, covering the tile.
pub fn view<'a, Message: 'a>(
    state: Option<&'a LoadState>,
    alt_text: &'a str,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match state {
        Some(LoadState::Ready(image)) => Image::new(image.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(LoadState::Loading) | None => placeholder("...", alt_text, width, height),
        Some(LoadState::Failed(_)) => placeholder(FALLBACK_LABEL, alt_text, width, height),
    }
}

fn placeholder<'a, Message: 'a>(
    label: &'a str,
    alt_text: &'a str,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let icon = Text::new("\u{26A0}").size(sizing::CARD_IMAGE_HEIGHT / 4.0);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(Text::new(label).size(typography::BODY))
        .push(Text::new(alt_text).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    #[derive(Debug, Clone)]
    enum TestMessage {}

    #[test]
    fn ready_state_renders_an_image() {
        let image = assets::load_image("pizza.png").expect("embedded image");
        let state = LoadState::Ready(image);
        let _element: Element<'_, TestMessage> = view(Some(&state), "Fusion Pizza", 220.0, 280.0);
    }

    #[test]
    fn failed_state_still_renders_with_fallback_label() {
        let state = LoadState::Failed("decode error".to_string());
        let _element: Element<'_, TestMessage> = view(Some(&state), "Fusion Pizza", 220.0, 280.0);
    }

    #[test]
    fn missing_state_renders_loading_placeholder() {
        let _element: Element<'_, TestMessage> = view(None, "Fusion Pizza", 220.0, 280.0);
    }
}
