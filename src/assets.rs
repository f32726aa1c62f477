// SPDX-License-Identifier: MPL-2.0
//! Embedded asset resolution and image decoding.
//!
//! All showcase imagery is embedded in the binary with `rust-embed` and
//! resolved by relative file name, behaving as a pure function of the name.
//! Decoding happens off the update loop via `Task::perform`; each item's
//! outcome lands in its own [`LoadState`] slot so one broken image never
//! affects another.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct Assets;

/// A decoded image ready for the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Returns `true` if `name` resolves to an embedded asset.
pub fn exists(name: &str) -> bool {
    Assets::get(name).is_some()
}

/// Resolves an embedded asset by relative name.
pub fn resolve(name: &str) -> Result<Cow<'static, [u8]>> {
    Assets::get(name)
        .map(|file| file.data)
        .ok_or_else(|| Error::Asset(format!("no embedded asset named '{name}'")))
}

/// Resolves and decodes an embedded image into RGBA pixels.
pub fn load_image(name: &str) -> Result<ImageData> {
    let bytes = resolve(name)?;
    let decoded = image_rs::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(ImageData {
        handle: Handle::from_rgba(width, height, decoded.into_raw()),
        width,
        height,
    })
}

/// Names of every embedded image, used to fan out the startup decode tasks.
pub fn all_names() -> Vec<String> {
    Assets::iter().map(|name| name.into_owned()).collect()
}

/// Per-item load outcome. A failure here is presentational only: the owning
/// tile renders a fallback, nothing else changes.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(ImageData),
    Failed(String),
}

/// Process-wide map from asset name to load outcome.
#[derive(Debug, Default)]
pub struct ImageStore {
    slots: HashMap<String, LoadState>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `name` as loading until its decode task reports back.
    pub fn mark_loading(&mut self, name: &str) {
        self.slots.insert(name.to_string(), LoadState::Loading);
    }

    /// Records the decode outcome for `name`.
    pub fn complete(&mut self, name: String, result: Result<ImageData>) {
        let state = match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err.to_string()),
        };
        self.slots.insert(name, state);
    }

    pub fn get(&self, name: &str) -> Option<&LoadState> {
        self.slots.get(name)
    }

    /// Returns the decoded image for `name`, if it loaded successfully.
    pub fn ready(&self, name: &str) -> Option<&ImageData> {
        match self.slots.get(name) {
            Some(LoadState::Ready(data)) => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_resolve_by_name() {
        assert!(exists("lucknow.png"));
        assert!(resolve("lucknow.png").is_ok());
    }

    #[test]
    fn unknown_asset_is_an_asset_error() {
        let err = resolve("no-such-file.png").unwrap_err();
        assert!(matches!(err, Error::Asset(_)));
    }

    #[test]
    fn embedded_images_decode() {
        let image = load_image("tunday-kebab.png").expect("embedded image should decode");
        assert!(image.width > 0);
        assert!(image.height > 0);
    }

    #[test]
    fn store_tracks_loading_then_ready() {
        let mut store = ImageStore::new();
        store.mark_loading("dosa.png");
        assert!(matches!(store.get("dosa.png"), Some(LoadState::Loading)));
        assert!(store.ready("dosa.png").is_none());

        store.complete("dosa.png".to_string(), load_image("dosa.png"));
        assert!(store.ready("dosa.png").is_some());
    }

    #[test]
    fn store_records_failures_without_touching_other_slots() {
        let mut store = ImageStore::new();
        store.complete("good.png".to_string(), load_image("chaat.png"));
        store.complete(
            "bad.png".to_string(),
            Err(Error::Image("truncated data".into())),
        );

        assert!(store.ready("good.png").is_some());
        assert!(matches!(store.get("bad.png"), Some(LoadState::Failed(_))));
    }
}
