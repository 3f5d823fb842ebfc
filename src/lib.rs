// SPDX-License-Identifier: MPL-2.0
//! `tubegrid` is a video browsing page built with the Iced GUI framework.
//!
//! It shows a pageable strip of categories above a responsive grid of video
//! cards; hovering a card plays a muted preview of the clip inline. Strings
//! are localized with Fluent and preferences live in a small TOML file.

#![doc(html_root_url = "https://docs.rs/tubegrid/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod i18n;
pub mod icon;
pub mod preview;
pub mod thumbnail;
pub mod ui;
