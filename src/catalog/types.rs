// SPDX-License-Identifier: MPL-2.0
//! Catalogue domain types.
//!
//! Identifiers are newtypes so a channel id can never be passed where a
//! video id is expected. All records are immutable once loaded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_newtype!(
    /// Unique video identifier, used in `/watch?v={id}` links.
    VideoId
);
string_newtype!(
    /// Unique channel identifier, used in `/@{id}` links.
    ChannelId
);
string_newtype!(
    /// Display label of a category pill. Equality decides the selection.
    Category
);

/// A channel that publishes videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    pub profile_url: String,
}

/// A video shown as a card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub channel: Channel,
    pub views: u64,
    pub posted_at: DateTime<Utc>,
    /// Length of the full video in seconds.
    pub duration: u64,
    pub thumbnail_url: String,
    /// Clip played muted while the card is hovered.
    pub video_url: String,
    pub tags: Vec<Category>,
}

impl Video {
    /// Returns true if the video is tagged with `category`.
    #[must_use]
    pub fn has_tag(&self, category: &Category) -> bool {
        self.tags.iter().any(|tag| tag == category)
    }
}
