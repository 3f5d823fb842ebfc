// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the browse page and the
//! screens its links lead to.
//!
//! The `App` struct owns the catalogue, the localization bundle and the
//! interaction state of the page (selected category, sidebar, tab strip
//! offset, hovered cards), and translates component events into side effects
//! like thumbnail downloads or screen switches.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Route, Screen};

use crate::catalog::{self, Catalog, Category};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::thumbnail::{self, Thumbnails};
use crate::ui::category_tabs;
use crate::ui::sidebar::{Section, SidebarState};
use crate::ui::theming::ThemeMode;
use crate::ui::video_grid;
use chrono::{DateTime, Utc};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    screen: Screen,
    sidebar: SidebarState,
    active_section: Section,
    query: String,
    tabs: category_tabs::State,
    selected: Option<Category>,
    grid: video_grid::State,
    thumbnails: Thumbnails,
    theme_mode: ThemeMode,
    now: DateTime<Utc>,
    /// Localization keys of problems met while starting up.
    warnings: Vec<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("selected", &self.selected)
            .field("sidebar", &self.sidebar)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from an already loaded configuration and
    /// catalogue. Used by [`App::new`] and by tests.
    fn from_parts(i18n: I18n, config: &Config, catalog: Catalog) -> Self {
        let selected = catalog.default_category().cloned();
        let mut grid = video_grid::State::new(&config.grid);
        if let Some(category) = &selected {
            grid.set_videos(catalog.videos_in(category));
        }

        Self {
            i18n,
            catalog,
            screen: Screen::Browse,
            sidebar: SidebarState::default(),
            active_section: Section::Home,
            query: String::new(),
            tabs: category_tabs::State::from_config(&config.tabs),
            selected,
            grid,
            thumbnails: Thumbnails::new(),
            theme_mode: config.general.theme_mode,
            now: Utc::now(),
            warnings: Vec::new(),
        }
    }

    /// Initializes application state and kicks off thumbnail loading for the
    /// first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, config_warning) = config::load();
        match config::save_if_missing(&config) {
            Ok(true) => log::info!("Wrote default settings"),
            Ok(false) => {}
            Err(err) => log::warn!("Could not write default settings: {err}"),
        }
        let i18n = I18n::new(flags.lang, &config);

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.catalog.path.clone());
        let (catalog, catalog_warning) = catalog::load(catalog_path.as_deref());

        let mut app = Self::from_parts(i18n, &config, catalog);
        app.warnings
            .extend(config_warning.into_iter().chain(catalog_warning));

        let task = app.load_visible_thumbnails();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.screen {
            Screen::Browse => app_name,
            Screen::Watch(id) => match self.catalog.video(id) {
                Some(video) => format!("{} - {app_name}", video.title),
                None => app_name,
            },
            Screen::Channel(id) => match self.catalog.channel(id) {
                Some(channel) => format!("{} - {app_name}", channel.name),
                None => app_name,
            },
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let preview_sub = subscription::create_preview_subscription(&self.screen, &self.grid);
        let clock_sub = subscription::create_clock_subscription(&self.screen);

        Subscription::batch([preview_sub, clock_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Requests the thumbnails and avatars of the shown videos that have not
    /// been requested yet.
    fn load_visible_thumbnails(&mut self) -> Task<Message> {
        let Some(category) = &self.selected else {
            return Task::none();
        };

        let urls = self.thumbnails.request(
            self.catalog
                .videos_in(category)
                .flat_map(|video| [video.thumbnail_url.as_str(), video.channel.profile_url.as_str()]),
        );

        Task::batch(urls.into_iter().map(|url| {
            Task::perform(thumbnail::load(url.clone()), move |result| {
                Message::ThumbnailLoaded {
                    url: url.clone(),
                    result,
                }
            })
        }))
    }
}
