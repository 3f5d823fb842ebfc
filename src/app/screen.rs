// SPDX-License-Identifier: MPL-2.0
//! Screens and the links that lead to them.

use crate::catalog::{ChannelId, VideoId};
use std::fmt;

/// A navigation target, as produced by card links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Watch(VideoId),
    Channel(ChannelId),
}

impl Route {
    /// Link text for this route. Ids are inserted as-is, without escaping.
    #[must_use]
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Watch(id) => format!("/watch?v={id}"),
            Route::Channel(id) => format!("/@{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Browse,
    Watch(VideoId),
    Channel(ChannelId),
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Screen::Browse,
            Route::Watch(id) => Screen::Watch(id),
            Route::Channel(id) => Screen::Channel(id),
        }
    }
}
