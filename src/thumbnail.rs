// SPDX-License-Identifier: MPL-2.0
//! Thumbnail and avatar images keyed by their URL.
//!
//! `http://` and `https://` sources are downloaded; anything else is read
//! from disk. A failed load leaves the card on its placeholder surface.

use crate::error::{Error, Result};
use iced::widget::image;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Every image requested so far, in whatever state it is in.
#[derive(Debug, Default)]
pub struct Thumbnails {
    entries: HashMap<String, Thumbnail>,
}

impl Thumbnails {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The decoded image for `url`, if it has finished loading.
    #[must_use]
    pub fn ready(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(Thumbnail::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Thumbnail> {
        self.entries.get(url)
    }

    /// Marks the given URLs as loading and returns those not seen before.
    pub fn request<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        urls.into_iter()
            .filter_map(|url| {
                if self.entries.contains_key(url) {
                    return None;
                }
                self.entries.insert(url.to_string(), Thumbnail::Loading);
                Some(url.to_string())
            })
            .collect()
    }

    /// Stores the outcome of a load started by [`Thumbnails::request`].
    pub fn finish(&mut self, url: String, result: Result<Vec<u8>>) {
        let thumbnail = match result {
            Ok(bytes) => Thumbnail::Ready(image::Handle::from_bytes(bytes)),
            Err(err) => {
                log::warn!("Failed to load thumbnail {url}: {err}");
                Thumbnail::Failed
            }
        };
        self.entries.insert(url, thumbnail);
    }
}

fn is_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Fetches the raw bytes of an image.
///
/// # Errors
///
/// Returns [`Error::Network`] for failed or unsuccessful downloads and
/// [`Error::Io`] for unreadable local files.
pub async fn load(url: String) -> Result<Vec<u8>> {
    if is_http(&url) {
        let response = reqwest::get(&url).await?;
        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "{url} answered {}",
                response.status()
            )));
        }
        let bytes = response.bytes().await?;
        return Ok(bytes.to_vec());
    }

    tokio::task::spawn_blocking(move || std::fs::read(&url))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
        .map_err(Error::from)
}
