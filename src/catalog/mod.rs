// SPDX-License-Identifier: MPL-2.0
//! Static catalogue of categories, channels and videos.
//!
//! The catalogue is a TOML document. A default one is embedded in the binary;
//! a user file can replace it with `--catalog <path>` or `[catalog] path` in
//! `settings.toml`. Videos reference channels by id and are resolved into
//! full [`Video`] records at load time, so the UI never deals with dangling
//! references.
//!
//! # Examples
//!
//! ```
//! use tubegrid::catalog::Catalog;
//!
//! let catalog = Catalog::embedded().expect("embedded catalogue is valid");
//! let all = catalog.default_category().cloned().expect("has categories");
//! assert_eq!(catalog.videos_in(&all).count(), catalog.videos().len());
//! ```

pub mod types;

pub use types::{Category, Channel, ChannelId, Video, VideoId};

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog/default.toml");

/// On-disk representation of a video; `channel` is a channel id.
#[derive(Debug, Deserialize)]
struct RawVideo {
    id: VideoId,
    title: String,
    channel: ChannelId,
    views: u64,
    posted_at: DateTime<Utc>,
    duration: u64,
    thumbnail_url: String,
    video_url: String,
    #[serde(default)]
    tags: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    videos: Vec<RawVideo>,
}

/// Read-only catalogue held for the lifetime of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    videos: Vec<Video>,
}

impl Catalog {
    /// Builds a catalogue from already-resolved parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] on duplicate categories or video ids.
    pub fn new(categories: Vec<Category>, videos: Vec<Video>) -> Result<Self> {
        ensure_unique(categories.iter(), "category")?;
        ensure_unique(videos.iter().map(|v| &v.id), "video id")?;
        Ok(Self { categories, videos })
    }

    /// Parses and validates a catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the TOML is malformed and
    /// [`Error::Catalog`] if it references unknown channels or repeats ids.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)?;

        ensure_unique(raw.channels.iter().map(|c| &c.id), "channel id")?;
        let channels: HashMap<ChannelId, Channel> = raw
            .channels
            .into_iter()
            .map(|channel| (channel.id.clone(), channel))
            .collect();

        let videos = raw
            .videos
            .into_iter()
            .map(|raw_video| {
                let channel = channels.get(&raw_video.channel).cloned().ok_or_else(|| {
                    Error::Catalog(format!(
                        "video '{}' references unknown channel '{}'",
                        raw_video.id, raw_video.channel
                    ))
                })?;
                Ok(Video {
                    id: raw_video.id,
                    title: raw_video.title,
                    channel,
                    views: raw_video.views,
                    posted_at: raw_video.posted_at,
                    duration: raw_video.duration,
                    thumbnail_url: raw_video.thumbnail_url,
                    video_url: raw_video.video_url,
                    tags: raw_video.tags,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(raw.categories, videos)
    }

    /// Returns the catalogue embedded in the binary.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded document itself is invalid.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// Loads a catalogue from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise the same
    /// errors as [`Catalog::from_toml_str`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Ordered category labels offered in the tab strip.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Every video, in catalogue order.
    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// The catch-all category selected at startup (the first one).
    #[must_use]
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Looks a video up by id.
    #[must_use]
    pub fn video(&self, id: &VideoId) -> Option<&Video> {
        self.videos.iter().find(|video| &video.id == id)
    }

    /// Looks a channel up by id through the videos that reference it.
    #[must_use]
    pub fn channel(&self, id: &ChannelId) -> Option<&Channel> {
        self.videos
            .iter()
            .map(|video| &video.channel)
            .find(|channel| &channel.id == id)
    }

    /// Videos shown when `category` is selected.
    ///
    /// The catch-all category shows everything; any other category shows
    /// the videos tagged with it.
    pub fn videos_in<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Video> {
        let show_all = self.default_category() == Some(category);
        self.videos
            .iter()
            .filter(move |video| show_all || video.has_tag(category))
    }
}

/// Loads the catalogue from `path` if given, falling back to the embedded one.
///
/// Returns a tuple of (catalog, optional_warning) in the same manner as the
/// configuration loader: a broken user file never prevents startup.
pub fn load(path: Option<&Path>) -> (Catalog, Option<String>) {
    if let Some(path) = path {
        match Catalog::load_from_path(path) {
            Ok(catalog) => return (catalog, None),
            Err(err) => {
                log::warn!("Falling back to embedded catalogue: {err}");
                return (
                    embedded_or_empty(),
                    Some("notification-catalog-load-error".to_string()),
                );
            }
        }
    }
    (embedded_or_empty(), None)
}

fn embedded_or_empty() -> Catalog {
    Catalog::embedded().unwrap_or_else(|err| {
        log::error!("Embedded catalogue is invalid: {err}");
        Catalog {
            categories: Vec::new(),
            videos: Vec::new(),
        }
    })
}

fn ensure_unique<'a, T>(items: impl Iterator<Item = &'a T>, what: &str) -> Result<()>
where
    T: std::hash::Hash + Eq + std::fmt::Display + 'a,
{
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return Err(Error::Catalog(format!("duplicate {what} '{item}'")));
        }
    }
    Ok(())
}
