// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation module for filtering the media catalog and driving the
//! full-screen lightbox.
//!
//! This module provides a pure `GalleryBrowser` state machine, kept free of
//! any Iced types so the gallery screen stays a thin shell around it. The
//! browser owns the active category filter and the lightbox position; the
//! position always indexes into the *filtered* subsequence of the catalog.

use crate::catalog::{Category, MediaItem};

/// Tracks the category filter and lightbox state over an immutable catalog.
///
/// Invariant: when the lightbox is open, its index is a valid position in the
/// current filtered subsequence. `set_filter` preserves this by closing the
/// lightbox whenever the category actually changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryBrowser {
    items: &'static [MediaItem],
    filter: Category,
    /// Lightbox position within the filtered subsequence, `None` when closed.
    open_index: Option<usize>,
}

impl GalleryBrowser {
    /// Creates a browser over `items` with the default filter and the
    /// lightbox closed.
    pub fn new(items: &'static [MediaItem]) -> Self {
        Self {
            items,
            filter: Category::default(),
            open_index: None,
        }
    }

    /// Returns the active category filter.
    pub fn filter(&self) -> Category {
        self.filter
    }

    /// Replaces the active filter.
    ///
    /// Selecting the category that is already active is a no-op. Changing the
    /// category closes the lightbox: its index would otherwise point into the
    /// previous filtered subsequence.
    pub fn set_filter(&mut self, category: Category) {
        if self.filter != category {
            self.filter = category;
            self.open_index = None;
        }
    }

    /// Iterates over the items matching the active filter, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &'static MediaItem> + '_ {
        self.items.iter().filter(move |i| i.category == self.filter)
    }

    /// Number of items matching the active filter.
    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    /// Opens the lightbox at `index` within the filtered subsequence.
    ///
    /// Out-of-range indices are ignored so the lightbox invariant holds even
    /// if a caller races a stale thumbnail click against a filter change.
    pub fn open(&mut self, index: usize) {
        if index < self.filtered_len() {
            self.open_index = Some(index);
        }
    }

    /// Closes the lightbox. Idempotent.
    pub fn close(&mut self) {
        self.open_index = None;
    }

    /// Returns the lightbox position, or `None` when it is closed.
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    /// Returns the item shown in the lightbox, or `None` when it is closed.
    pub fn open_item(&self) -> Option<&'static MediaItem> {
        let index = self.open_index?;
        self.filtered().nth(index)
    }

    /// Whether the lightbox is open.
    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    /// Advances the lightbox to the next filtered item, wrapping from the
    /// last to the first. No-op while the lightbox is closed.
    pub fn next(&mut self) {
        let len = self.filtered_len();
        if let Some(index) = self.open_index {
            if len > 0 {
                self.open_index = Some((index + 1) % len);
            }
        }
    }

    /// Moves the lightbox to the previous filtered item, wrapping from the
    /// first to the last. No-op while the lightbox is closed.
    pub fn previous(&mut self) {
        let len = self.filtered_len();
        if let Some(index) = self.open_index {
            if len > 0 {
                self.open_index = Some((index + len - 1) % len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GALLERY;

    fn browser() -> GalleryBrowser {
        GalleryBrowser::new(GALLERY)
    }

    #[test]
    fn new_browser_defaults_to_indoor_and_closed() {
        let browser = browser();
        assert_eq!(browser.filter(), Category::Indoor);
        assert_eq!(browser.open_index(), None);
        assert!(!browser.is_open());
    }

    #[test]
    fn default_filter_shows_seven_items_outdoor_shows_one() {
        let mut browser = browser();
        assert_eq!(browser.filtered_len(), 7);

        browser.set_filter(Category::Outdoor);
        assert_eq!(browser.filtered_len(), 1);
    }

    #[test]
    fn filtered_preserves_catalog_order() {
        let browser = browser();
        let alts: Vec<&str> = browser.filtered().map(|i| i.alt_text).collect();
        assert_eq!(alts.first(), Some(&"Baba Chatore Ambiance"));
        assert_eq!(alts.last(), Some(&"Famous Tunday Kebab"));
    }

    #[test]
    fn open_then_close_round_trips() {
        let mut browser = browser();
        browser.open(3);
        assert_eq!(browser.open_index(), Some(3));
        assert!(browser.is_open());

        browser.close();
        assert_eq!(browser.open_index(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut browser = browser();
        browser.open(0);
        browser.close();
        let snapshot = browser.clone();
        browser.close();
        assert_eq!(browser, snapshot);
    }

    #[test]
    fn set_filter_is_idempotent() {
        let mut browser = browser();
        browser.open(2);
        browser.set_filter(Category::Indoor);
        // Re-selecting the active category keeps the lightbox open.
        assert_eq!(browser.open_index(), Some(2));

        let snapshot = browser.clone();
        browser.set_filter(Category::Indoor);
        assert_eq!(browser, snapshot);
    }

    #[test]
    fn changing_filter_closes_the_lightbox() {
        let mut browser = browser();
        browser.open(5);
        browser.set_filter(Category::Outdoor);
        assert_eq!(browser.open_index(), None);
        assert_eq!(browser.filter(), Category::Outdoor);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut browser = browser();
        browser.open(6);
        browser.next();
        assert_eq!(browser.open_index(), Some(0));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut browser = browser();
        browser.open(0);
        browser.previous();
        assert_eq!(browser.open_index(), Some(6));
        browser.next();
        assert_eq!(browser.open_index(), Some(0));
    }

    #[test]
    fn next_applied_length_times_returns_to_start() {
        let mut browser = browser();
        browser.open(2);
        let len = browser.filtered_len();
        for _ in 0..len {
            browser.next();
        }
        assert_eq!(browser.open_index(), Some(2));
    }

    #[test]
    fn previous_is_the_inverse_of_next_at_every_index() {
        let mut browser = browser();
        for start in 0..browser.filtered_len() {
            browser.open(start);
            browser.next();
            browser.previous();
            assert_eq!(browser.open_index(), Some(start));
        }
    }

    #[test]
    fn navigation_is_a_no_op_while_closed() {
        let mut browser = browser();
        browser.next();
        assert_eq!(browser.open_index(), None);
        browser.previous();
        assert_eq!(browser.open_index(), None);
    }

    #[test]
    fn single_item_subsequence_wraps_onto_itself() {
        let mut browser = browser();
        browser.set_filter(Category::Outdoor);
        browser.open(0);
        browser.next();
        assert_eq!(browser.open_index(), Some(0));
        browser.previous();
        assert_eq!(browser.open_index(), Some(0));
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut browser = browser();
        browser.set_filter(Category::Outdoor);
        browser.open(1); // only one outdoor item
        assert_eq!(browser.open_index(), None);
    }

    #[test]
    fn open_item_resolves_within_the_filtered_subsequence() {
        let mut browser = browser();
        browser.set_filter(Category::Outdoor);
        browser.open(0);
        assert_eq!(browser.open_item().map(|i| i.alt_text), Some("Lucknow City"));

        browser.close();
        assert_eq!(browser.open_item(), None);
    }
}
