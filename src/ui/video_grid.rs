// SPDX-License-Identifier: MPL-2.0
//! Responsive grid of video cards and the preview sessions behind them.
//!
//! Columns follow `repeat(auto-fill, minmax(MIN, 1fr))`: as many columns of
//! at least `MIN` pixels as fit, stretched to share the row.

use crate::app::Route;
use crate::catalog::{Video, VideoId};
use crate::config::{GridConfig, GRID_GAP};
use crate::i18n::fluent::I18n;
use crate::preview::{self, PreviewMessage, WarmSet};
use crate::thumbnail::Thumbnails;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::video_grid_item::{self as item, Effect};
use chrono::{DateTime, Utc};
use iced::widget::{column, container, responsive, scrollable, text, Row};
use iced::{Element, Length, Subscription};

/// Number of columns that fit `width` with cards at least `min_width` wide.
#[must_use]
pub fn column_count(width: f32, min_width: f32, gap: f32) -> usize {
    if !width.is_finite() || min_width <= 0.0 {
        return 1;
    }
    (((width + gap) / (min_width + gap)).floor() as usize).max(1)
}

/// Width of one card when `columns` share `width`.
#[must_use]
pub fn card_width(width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((width - gap * (columns - 1.0)) / columns).max(0.0)
}

#[derive(Debug)]
pub struct State {
    cards: Vec<item::State>,
    warm: WarmSet,
    min_card_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Item(VideoId, item::Message),
    Preview(VideoId, PreviewMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
}

impl State {
    #[must_use]
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cards: Vec::new(),
            warm: WarmSet::new(config.max_warm_previews()),
            min_card_width: config.min_card_width(),
        }
    }

    /// Replaces the shown videos, keeping the state of cards still shown.
    ///
    /// Cards that disappear while previewing are paused.
    pub fn set_videos<'a>(&mut self, videos: impl IntoIterator<Item = &'a Video>) {
        let mut previous = std::mem::take(&mut self.cards);
        for video in videos {
            let card = previous
                .iter()
                .position(|card| card.video_id() == &video.id)
                .map(|index| previous.swap_remove(index))
                .unwrap_or_else(|| item::State::new(video.id.clone(), video.video_url.clone()));
            self.cards.push(card);
        }

        for card in previous.iter().filter(|card| card.is_preview_active()) {
            if let Some(media) = self.warm.get_mut(card.video_id()) {
                item::apply(&Effect::PausePreview, media);
            }
        }
    }

    /// Ends every running preview, as if the pointer left each card.
    fn leave_all(&mut self) {
        for card in &mut self.cards {
            let effect = item::update(card, item::Message::PointerLeft);
            if let Some(media) = self.warm.get_mut(card.video_id()) {
                item::apply(&effect, media);
            }
        }
    }

    /// Ends every preview and stops the decoders behind the warm sessions.
    ///
    /// Used when the grid leaves the screen and its subscriptions with it.
    pub fn suspend(&mut self) {
        self.leave_all();
        self.warm.detach_all();
    }

    #[must_use]
    pub fn cards(&self) -> &[item::State] {
        &self.cards
    }

    #[must_use]
    pub fn warm(&self) -> &WarmSet {
        &self.warm
    }

    fn card_mut(&mut self, id: &VideoId) -> Option<&mut item::State> {
        self.cards.iter_mut().find(|card| card.video_id() == id)
    }
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Item(id, message) => {
            let Some(card) = state.card_mut(&id) else {
                return Event::None;
            };
            let effect = item::update(card, message);

            match effect {
                Effect::None => Event::None,
                Effect::Navigate(route) => Event::Navigate(route),
                Effect::StartPreview | Effect::PausePreview => {
                    if effect == Effect::StartPreview {
                        let url = card.preview_url().to_string();
                        state.warm.touch(&id, &url);
                    }
                    if let Some(media) = state.warm.get_mut(&id) {
                        item::apply(&effect, media);
                    }
                    Event::None
                }
            }
        }
        Message::Preview(id, message) => {
            match &message {
                PreviewMessage::Started(handle) => state.warm.attach(&id, handle.clone()),
                PreviewMessage::Error(_) => state.warm.remove(&id),
                PreviewMessage::FrameReady(_)
                | PreviewMessage::Rewound
                | PreviewMessage::EndOfStream => {}
            }
            if let Some(card) = state.card_mut(&id) {
                card.handle_preview(&message);
            }
            Event::None
        }
    }
}

/// One decoder subscription per warm card.
pub fn subscription(state: &State) -> Subscription<Message> {
    Subscription::batch(
        state
            .warm
            .iter()
            .map(|(id, warm)| preview::preview_playback(id.clone(), warm.url.clone())),
    )
    .map(|(id, message)| Message::Preview(id, message))
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub videos: Vec<&'a Video>,
    pub thumbnails: &'a Thumbnails,
    pub now: DateTime<Utc>,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.videos.is_empty() {
        return container(text(ctx.i18n.tr("video-grid-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XL)
            .center_x(Length::Fill)
            .into();
    }

    let min_card_width = state.min_card_width;

    responsive(move |size| {
        let columns = column_count(size.width, min_card_width, GRID_GAP);
        let width = card_width(size.width, columns, GRID_GAP);

        let rows = ctx.videos.chunks(columns).map(|chunk| {
            let cards = chunk
                .iter()
                .copied()
                .filter_map(|video| {
                    let card = state.cards.iter().find(|card| card.video_id() == &video.id)?;
                    let id = video.id.clone();
                    Some(
                        item::view(
                            card,
                            item::ViewContext {
                                i18n: ctx.i18n,
                                video,
                                thumbnail: ctx.thumbnails.ready(&video.thumbnail_url),
                                avatar: ctx.thumbnails.ready(&video.channel.profile_url),
                                card_width: width,
                                now: ctx.now,
                            },
                        )
                        .map(move |message| Message::Item(id.clone(), message)),
                    )
                })
                .fold(Row::new().spacing(GRID_GAP), |row, card| row.push(card));
            Element::from(cards)
        });

        scrollable(
            column(rows)
                .spacing(spacing::LG)
                .padding(spacing::MD)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    })
    .into()
}
