// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::{Message, Screen};
use crate::ui::video_grid;
use iced::{time, Subscription};
use std::time::Duration;

/// Relative times have minute resolution at best.
const CLOCK_INTERVAL: Duration = Duration::from_secs(30);

/// Preview decoders for the warm cards of the browse screen.
///
/// Other screens return no preview subscription; the grid is suspended on
/// the way out, which stops its decoders.
pub fn create_preview_subscription(screen: &Screen, grid: &video_grid::State) -> Subscription<Message> {
    if *screen == Screen::Browse {
        video_grid::subscription(grid).map(Message::Grid)
    } else {
        Subscription::none()
    }
}

/// Keeps "N minutes ago" labels current while the grid is visible.
pub fn create_clock_subscription(screen: &Screen) -> Subscription<Message> {
    if *screen == Screen::Browse {
        time::every(CLOCK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
