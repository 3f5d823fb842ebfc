// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Route, Screen};
use crate::ui::category_tabs::{self, Event as CategoryTabsEvent};
use crate::ui::page_header;
use crate::ui::sidebar::{self, Section};
use crate::ui::video_grid::{self, Event as VideoGridEvent};
use chrono::Utc;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Header(message) => handle_header_message(app, message),
        Message::Sidebar(sidebar::Message::Select(section)) => {
            app.active_section = section;
            if section == Section::Home {
                return navigate(app, Route::Home);
            }
            Task::none()
        }
        Message::CategoryTabs(message) => handle_category_tabs_message(app, message),
        Message::Grid(message) => match video_grid::update(&mut app.grid, message) {
            VideoGridEvent::None => Task::none(),
            VideoGridEvent::Navigate(route) => navigate(app, route),
        },
        Message::Navigate(route) => navigate(app, route),
        Message::ThumbnailLoaded { url, result } => {
            app.thumbnails.finish(url, result);
            Task::none()
        }
        Message::DismissWarning => {
            app.warnings.clear();
            Task::none()
        }
        Message::Tick(_) => {
            app.now = Utc::now();
            Task::none()
        }
    }
}

fn handle_header_message(app: &mut App, message: page_header::Message) -> Task<Message> {
    match message {
        page_header::Message::ToggleSidebar => {
            app.sidebar.toggle();
            Task::none()
        }
        page_header::Message::QueryChanged(query) => {
            app.query = query;
            Task::none()
        }
        page_header::Message::GoHome => navigate(app, Route::Home),
    }
}

fn handle_category_tabs_message(app: &mut App, message: category_tabs::Message) -> Task<Message> {
    match category_tabs::update(&mut app.tabs, message) {
        CategoryTabsEvent::None => Task::none(),
        CategoryTabsEvent::Selected(category) => {
            if app.selected.as_ref() == Some(&category) {
                return Task::none();
            }
            log::debug!("Selected category {category}");
            app.grid.set_videos(app.catalog.videos_in(&category));
            app.selected = Some(category);
            app.load_visible_thumbnails()
        }
    }
}

fn navigate(app: &mut App, route: Route) -> Task<Message> {
    log::debug!("Navigating to {route}");
    let screen = Screen::from(route);
    if screen != Screen::Browse {
        app.grid.suspend();
    }
    app.screen = screen;
    Task::none()
}
