// SPDX-License-Identifier: MPL-2.0
//! Pure formatting helpers used by the video cards.
//!
//! - [`duration`] renders a clip length as a clock string (`1:02:05`).
//! - [`time_ago`] renders how long ago a video was posted (`3 days ago`).
//! - [`views`] renders view counts in compact notation (`12K`).
//!
//! None of these functions read ambient state: the current instant and the
//! number locale are always passed in by the caller.

pub mod duration;
pub mod time_ago;
pub mod views;

pub use duration::format_duration;
pub use time_ago::{format_time_ago, TimeAgo, TimeUnit};
pub use views::{format_views, NumberLocale};
