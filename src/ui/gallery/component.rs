// SPDX-License-Identifier: MPL-2.0
//! Gallery screen state and update logic.
//!
//! The screen is a thin shell around [`GalleryBrowser`]: messages translate
//! user intent (filter pill, thumbnail click, arrow keys) into state-machine
//! calls, plus one purely view-layer concern, the horizontal thumbnail-strip
//! scroll, which never touches the browser.

use crate::catalog::{Category, GALLERY};
use crate::gallery_navigation::GalleryBrowser;
use iced::keyboard::{key::Named, Key};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::Task;

/// Pixels scrolled per strip arrow press.
pub const STRIP_SCROLL_STEP: f32 = 300.0;

/// Identifier of the thumbnail-strip scrollable.
pub fn strip_id() -> scrollable::Id {
    scrollable::Id::new("gallery-thumbnail-strip")
}

#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(Category),
    /// A thumbnail was clicked; the payload is its index in the filtered
    /// subsequence, guaranteed valid by the view that produced it.
    ThumbnailClicked(usize),
    CloseLightbox,
    NextImage,
    PreviousImage,
    /// Scroll the thumbnail strip by a pixel delta. View-layer only.
    ScrollStrip(f32),
    /// Raw key press forwarded by the app while this screen is active.
    KeyPressed(Key),
}

#[derive(Debug)]
pub struct State {
    browser: GalleryBrowser,
    strip_offset: f32,
}

impl State {
    pub fn new() -> Self {
        Self {
            browser: GalleryBrowser::new(GALLERY),
            strip_offset: 0.0,
        }
    }

    pub fn browser(&self) -> &GalleryBrowser {
        &self.browser
    }

    /// Current horizontal scroll position of the thumbnail strip.
    pub fn strip_offset(&self) -> f32 {
        self.strip_offset
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FilterSelected(category) => {
                self.browser.set_filter(category);
                // A different subsequence is shown, so the strip rewinds.
                self.strip_offset = 0.0;
                self.snap_strip()
            }
            Message::ThumbnailClicked(index) => {
                self.browser.open(index);
                Task::none()
            }
            Message::CloseLightbox => {
                self.browser.close();
                Task::none()
            }
            Message::NextImage => {
                self.browser.next();
                Task::none()
            }
            Message::PreviousImage => {
                self.browser.previous();
                Task::none()
            }
            Message::ScrollStrip(delta) => {
                self.strip_offset = (self.strip_offset + delta).max(0.0);
                self.snap_strip()
            }
            Message::KeyPressed(key) => self.handle_key(key),
        }
    }

    /// Keyboard contract: ArrowRight/ArrowLeft/Escape drive the lightbox and
    /// are no-ops while it is closed.
    fn handle_key(&mut self, key: Key) -> Task<Message> {
        if !self.browser.is_open() {
            return Task::none();
        }
        match key {
            Key::Named(Named::ArrowRight) => self.browser.next(),
            Key::Named(Named::ArrowLeft) => self.browser.previous(),
            Key::Named(Named::Escape) => self.browser.close(),
            _ => {}
        }
        Task::none()
    }

    fn snap_strip(&self) -> Task<Message> {
        scrollable::scroll_to(
            strip_id(),
            AbsoluteOffset {
                x: self.strip_offset,
                y: 0.0,
            },
        )
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state(index: usize) -> State {
        let mut state = State::new();
        let _ = state.update(Message::ThumbnailClicked(index));
        state
    }

    #[test]
    fn thumbnail_click_opens_the_lightbox() {
        let state = open_state(2);
        assert_eq!(state.browser().open_index(), Some(2));
    }

    #[test]
    fn arrow_keys_navigate_while_open() {
        let mut state = open_state(6);
        let _ = state.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        assert_eq!(state.browser().open_index(), Some(0)); // wraps

        let _ = state.update(Message::KeyPressed(Key::Named(Named::ArrowLeft)));
        assert_eq!(state.browser().open_index(), Some(6));
    }

    #[test]
    fn escape_closes_the_lightbox() {
        let mut state = open_state(1);
        let _ = state.update(Message::KeyPressed(Key::Named(Named::Escape)));
        assert_eq!(state.browser().open_index(), None);
    }

    #[test]
    fn keys_are_no_ops_while_closed() {
        let mut state = State::new();
        let _ = state.update(Message::KeyPressed(Key::Named(Named::ArrowRight)));
        let _ = state.update(Message::KeyPressed(Key::Named(Named::ArrowLeft)));
        let _ = state.update(Message::KeyPressed(Key::Named(Named::Escape)));
        assert_eq!(state.browser().open_index(), None);
    }

    #[test]
    fn unmapped_keys_leave_the_lightbox_alone() {
        let mut state = open_state(3);
        let _ = state.update(Message::KeyPressed(Key::Named(Named::Enter)));
        assert_eq!(state.browser().open_index(), Some(3));
    }

    #[test]
    fn filter_change_rewinds_the_strip_and_closes_the_lightbox() {
        let mut state = open_state(4);
        let _ = state.update(Message::ScrollStrip(STRIP_SCROLL_STEP));
        assert_eq!(state.strip_offset(), STRIP_SCROLL_STEP);

        let _ = state.update(Message::FilterSelected(Category::Outdoor));
        assert_eq!(state.strip_offset(), 0.0);
        assert_eq!(state.browser().open_index(), None);
        assert_eq!(state.browser().filter(), Category::Outdoor);
    }

    #[test]
    fn strip_scroll_never_goes_negative_and_never_touches_the_browser() {
        let mut state = open_state(1);
        let _ = state.update(Message::ScrollStrip(-STRIP_SCROLL_STEP));
        assert_eq!(state.strip_offset(), 0.0);
        assert_eq!(state.browser().open_index(), Some(1));
        assert_eq!(state.browser().filter(), Category::Indoor);
    }

    #[test]
    fn strip_scroll_accumulates() {
        let mut state = State::new();
        let _ = state.update(Message::ScrollStrip(STRIP_SCROLL_STEP));
        let _ = state.update(Message::ScrollStrip(STRIP_SCROLL_STEP));
        let _ = state.update(Message::ScrollStrip(-STRIP_SCROLL_STEP));
        assert_eq!(state.strip_offset(), STRIP_SCROLL_STEP);
    }
}
