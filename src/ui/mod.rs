// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an event or effect for its
//! parent, and a `view` taking a `ViewContext`.
//!
//! # Page
//!
//! - [`page_header`] - Sidebar toggle, title and search field
//! - [`sidebar`] - Navigation list and the shared open/closed state
//! - [`category_tabs`] - Pageable strip of category pills
//! - [`video_grid`] - Responsive grid of [`video_grid_item`] cards
//!
//! # Shared Infrastructure
//!
//! - [`button`] - Variant × size button with style overrides
//! - [`widgets`] - Custom Iced widgets (overflow strip)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod button;
pub mod category_tabs;
pub mod design_tokens;
pub mod page_header;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod video_grid;
pub mod video_grid_item;
pub mod widgets;
