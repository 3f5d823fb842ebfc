// SPDX-License-Identifier: MPL-2.0
//! Navigation sidebar, shown large when open and compact when collapsed.

use crate::i18n::fluent::I18n;
use crate::ui::button::{self, StyleOverrides, Variant};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{column, container, row, text, Column};
use iced::{Element, Length};

/// Whether the sidebar is expanded. Owned by the app and passed down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub is_open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { is_open: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Shorts,
    Subscriptions,
    Library,
    History,
}

impl Section {
    /// Sections shown in both forms.
    pub const PRIMARY: [Section; 4] = [
        Section::Home,
        Section::Shorts,
        Section::Subscriptions,
        Section::Library,
    ];

    fn glyph(self) -> &'static str {
        match self {
            Section::Home => "⌂",
            Section::Shorts => "▶",
            Section::Subscriptions => "▤",
            Section::Library => "▣",
            Section::History => "↺",
        }
    }

    fn i18n_key(self) -> &'static str {
        match self {
            Section::Home => "sidebar-home",
            Section::Shorts => "sidebar-shorts",
            Section::Subscriptions => "sidebar-subscriptions",
            Section::Library => "sidebar-library",
            Section::History => "sidebar-history",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Select(Section),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: SidebarState,
    pub active: Section,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.state.is_open {
        large(&ctx)
    } else {
        compact(&ctx)
    }
}

fn variant_for(section: Section, active: Section) -> Variant {
    if section == active {
        Variant::Default
    } else {
        Variant::Ghost
    }
}

fn large<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries = Section::PRIMARY
        .into_iter()
        .chain(std::iter::once(Section::History))
        .fold(Column::new().spacing(spacing::XXS), |list, section| {
            let label = row![
                text(section.glyph()).size(typography::TITLE_MD),
                text(ctx.i18n.tr(section.i18n_key())).size(typography::BODY),
            ]
            .spacing(spacing::LG)
            .align_y(Vertical::Center);

            list.push(
                button::button(label)
                    .variant(variant_for(section, ctx.active))
                    .style(
                        StyleOverrides::default()
                            .width(Length::Fill)
                            .padding([spacing::SM, spacing::MD]),
                    )
                    .on_press(Message::Select(section)),
            )
        });

    container(entries)
        .width(sizing::SIDEBAR_WIDTH)
        .height(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .into()
}

fn compact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries = Section::PRIMARY
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |list, section| {
            let label = column![
                text(section.glyph()).size(typography::TITLE_MD),
                text(ctx.i18n.tr(section.i18n_key())).size(typography::CAPTION),
            ]
            .spacing(spacing::XS)
            .align_x(Horizontal::Center);

            list.push(
                button::button(label)
                    .variant(variant_for(section, ctx.active))
                    .style(
                        StyleOverrides::default()
                            .width(Length::Fill)
                            .padding([spacing::MD, spacing::XS]),
                    )
                    .on_press(Message::Select(section)),
            )
        });

    container(entries)
        .width(sizing::SIDEBAR_COMPACT_WIDTH)
        .height(Length::Fill)
        .padding(spacing::XS)
        .into()
}
