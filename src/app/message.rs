// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::Route;
use crate::error::Error;
use crate::ui::{category_tabs, page_header, sidebar, video_grid};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(page_header::Message),
    Sidebar(sidebar::Message),
    CategoryTabs(category_tabs::Message),
    Grid(video_grid::Message),
    Navigate(Route),
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, Error>,
    },
    DismissWarning,
    /// Periodic tick refreshing relative post times.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TUBEGRID_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalogue file replacing the embedded one.
    pub catalog: Option<String>,
}
