// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header and sidebar frame every screen; the browse screen adds the
//! category strip above the video grid.

use super::{App, Message, Route, Screen};
use crate::catalog::{ChannelId, VideoId};
use crate::i18n::fluent::I18n;
use crate::ui::button::{self, Variant};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::{category_tabs, page_header, sidebar, video_grid};
use iced::alignment::Vertical;
use iced::widget::{column, container, image, row, scrollable, text, Column, Space};
use iced::{ContentFit, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let header = page_header::view(page_header::ViewContext {
        i18n: &app.i18n,
        query: &app.query,
    })
    .map(Message::Header);

    let sidebar = sidebar::view(sidebar::ViewContext {
        i18n: &app.i18n,
        state: app.sidebar,
        active: app.active_section,
    })
    .map(Message::Sidebar);

    let content: Element<'_, Message> = match &app.screen {
        Screen::Browse => view_browse(app),
        Screen::Watch(id) => view_watch(app, id),
        Screen::Channel(id) => view_channel(app, id),
    };

    let mut page = Column::new().width(Length::Fill).height(Length::Fill).push(header);
    if let Some(banner) = view_warnings(&app.i18n, &app.warnings) {
        page = page.push(banner);
    }
    page = page.push(
        row![sidebar, content]
            .width(Length::Fill)
            .height(Length::Fill),
    );

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn view_browse(app: &App) -> Element<'_, Message> {
    let tabs = category_tabs::view(
        &app.tabs,
        category_tabs::ViewContext {
            i18n: &app.i18n,
            categories: app.catalog.categories(),
            selected: app.selected.as_ref(),
        },
    )
    .map(Message::CategoryTabs);

    let videos = app
        .selected
        .as_ref()
        .map(|category| app.catalog.videos_in(category).collect())
        .unwrap_or_default();

    let grid = video_grid::view(
        &app.grid,
        video_grid::ViewContext {
            i18n: &app.i18n,
            videos,
            thumbnails: &app.thumbnails,
            now: app.now,
        },
    )
    .map(Message::Grid);

    column![
        container(tabs).padding([spacing::XS, spacing::MD]),
        grid
    ]
    .spacing(spacing::XS)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn back_button(i18n: &I18n) -> Element<'_, Message> {
    button::button(text(format!("‹ {}", i18n.tr("screen-back"))).size(typography::BODY))
        .variant(Variant::Ghost)
        .on_press(Message::Navigate(Route::Home))
        .into()
}

fn view_watch<'a>(app: &'a App, id: &VideoId) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(back_button(&app.i18n));

    if let Some(video) = app.catalog.video(id) {
        if let Some(handle) = app.thumbnails.ready(&video.thumbnail_url) {
            body = body.push(
                image(handle.clone())
                    .width(Length::Fill)
                    .content_fit(ContentFit::Contain),
            );
        }
        body = body
            .push(text(video.title.as_str()).size(typography::TITLE_MD))
            .push(
                iced::widget::button(text(video.channel.name.as_str()))
                    .padding(0)
                    .style(styles::button::link_muted)
                    .on_press(Message::Navigate(Route::Channel(video.channel.id.clone()))),
            );
    }

    body = body.push(text(app.i18n.tr("watch-screen-unavailable")).size(typography::BODY));
    scrollable(body).width(Length::Fill).into()
}

fn view_channel<'a>(app: &'a App, id: &ChannelId) -> Element<'a, Message> {
    let name = app
        .catalog
        .channel(id)
        .map_or_else(|| id.to_string(), |channel| channel.name.clone());

    let videos = app
        .catalog
        .videos()
        .iter()
        .filter(|video| &video.channel.id == id)
        .fold(Column::new().spacing(spacing::SM), |list, video| {
            list.push(
                iced::widget::button(text(video.title.as_str()).size(typography::BODY_LG))
                    .padding(0)
                    .style(styles::button::link)
                    .on_press(Message::Navigate(Route::Watch(video.id.clone()))),
            )
        });

    let body = column![
        back_button(&app.i18n),
        text(app.i18n.tr_with_args("channel-screen-videos", &[("name", &name)]))
            .size(typography::TITLE_MD),
        videos,
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    scrollable(body).width(Length::Fill).into()
}

fn view_warnings<'a>(i18n: &I18n, warnings: &[String]) -> Option<Element<'a, Message>> {
    if warnings.is_empty() {
        return None;
    }

    let lines = warnings
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |list, key| {
            list.push(text(i18n.tr(key)).size(typography::BODY))
        });

    let banner = row![
        lines,
        Space::new().width(Length::Fill),
        button::button(text("×").size(typography::BODY_LG))
            .variant(Variant::Ghost)
            .size(button::Size::Icon)
            .on_press(Message::DismissWarning),
    ]
    .align_y(Vertical::Center)
    .padding([spacing::XS, spacing::LG]);

    Some(banner.into())
}
