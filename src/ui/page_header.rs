// SPDX-License-Identifier: MPL-2.0
//! Page header: sidebar toggle, app title and search field.

use crate::i18n::fluent::I18n;
use crate::ui::button::{self, Size, Variant};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{container, row, text, text_input, tooltip, Space};
use iced::{Element, Font, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    QueryChanged(String),
    GoHome,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let menu = tooltip(
        button::button(text("☰").size(typography::TITLE_MD))
            .variant(Variant::Ghost)
            .size(Size::Icon)
            .on_press(Message::ToggleSidebar),
        text(ctx.i18n.tr("header-menu-toggle")),
        tooltip::Position::Bottom,
    );

    let title = iced::widget::button(
        row![
            text("▶").size(typography::TITLE_MD).color(palette::BRAND_RED),
            text(ctx.i18n.tr("app-title"))
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        ]
        .spacing(spacing::XS)
        .align_y(Vertical::Center),
    )
    .padding(0)
    .style(crate::ui::styles::button::link)
    .on_press(Message::GoHome);

    let search = text_input(&ctx.i18n.tr("header-search-placeholder"), ctx.query)
        .on_input(Message::QueryChanged)
        .padding([spacing::SM, spacing::MD])
        .size(typography::BODY_LG)
        .width(sizing::SEARCH_WIDTH);

    let bar = row![
        menu,
        title,
        Space::new().width(Length::Fill),
        search,
        Space::new().width(Length::Fill),
    ]
    .spacing(spacing::MD)
    .align_y(Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .height(sizing::HEADER_HEIGHT)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .into()
}
