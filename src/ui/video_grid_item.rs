// SPDX-License-Identifier: MPL-2.0
//! A single video card: thumbnail with hover preview, duration badge and
//! metadata lines.
//!
//! Hover state lives here; the decoder does not. Entering or leaving the card
//! returns an [`Effect`] which the owner applies to the card's preview media
//! with [`apply`]. Only real transitions produce an effect, so a repeated
//! enter while already active does not restart the clip.

use crate::app::Route;
use crate::catalog::{Video, VideoId};
use crate::format::{format_duration, format_views, TimeAgo};
use crate::i18n::fluent::I18n;
use crate::preview::{self, PreviewMedia, PreviewMessage};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, image, mouse_area, row, stack, text, Space};
use iced::{mouse, ContentFit, Element, Font, Length};

#[derive(Debug, Clone)]
pub struct State {
    video_id: VideoId,
    preview_url: String,
    is_preview_active: bool,
    frame: Option<image::Handle>,
    /// Opacity of the preview layer, raised a step per decoded frame.
    preview_opacity: f32,
    /// Set on enter until the decoder confirms the rewind, so frames still
    /// queued from the previous hover are not shown.
    awaiting_rewind: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PointerEntered,
    PointerLeft,
    Open(Route),
}

/// What the owner must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Rewind the preview and play it.
    StartPreview,
    /// Pause the preview where it is.
    PausePreview,
    Navigate(Route),
}

impl State {
    #[must_use]
    pub fn new(video_id: VideoId, preview_url: String) -> Self {
        Self {
            video_id,
            preview_url,
            is_preview_active: false,
            frame: None,
            preview_opacity: opacity::TRANSPARENT,
            awaiting_rewind: false,
        }
    }

    #[must_use]
    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// Clip played while hovered.
    #[must_use]
    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    #[must_use]
    pub fn is_preview_active(&self) -> bool {
        self.is_preview_active
    }

    #[must_use]
    pub fn preview_opacity(&self) -> f32 {
        self.preview_opacity
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Routes a preview subscription message to this card.
    pub fn handle_preview(&mut self, message: &PreviewMessage) {
        match message {
            PreviewMessage::FrameReady(handle) => {
                // Frames still in flight after leaving, or from before the
                // rewind, are dropped.
                if self.is_preview_active && !self.awaiting_rewind {
                    self.frame = Some(handle.clone());
                    self.preview_opacity =
                        (self.preview_opacity + opacity::FADE_STEP).min(opacity::OPAQUE);
                }
            }
            PreviewMessage::Error(err) => {
                log::debug!("Preview for {} unavailable: {err}", self.video_id);
                self.frame = None;
                self.preview_opacity = opacity::TRANSPARENT;
            }
            PreviewMessage::Rewound => self.awaiting_rewind = false,
            PreviewMessage::Started(_) | PreviewMessage::EndOfStream => {}
        }
    }
}

pub fn update(state: &mut State, message: Message) -> Effect {
    match message {
        Message::PointerEntered => {
            if state.is_preview_active {
                return Effect::None;
            }
            state.is_preview_active = true;
            state.awaiting_rewind = true;
            state.frame = None;
            state.preview_opacity = opacity::TRANSPARENT;
            Effect::StartPreview
        }
        Message::PointerLeft => {
            if !state.is_preview_active {
                return Effect::None;
            }
            state.is_preview_active = false;
            state.preview_opacity = opacity::TRANSPARENT;
            Effect::PausePreview
        }
        Message::Open(route) => Effect::Navigate(route),
    }
}

/// Applies a preview effect to the card's media. Navigation is ignored.
pub fn apply(effect: &Effect, media: &mut impl PreviewMedia) {
    match effect {
        Effect::StartPreview => preview::start(media),
        Effect::PausePreview => preview::pause(media),
        Effect::None | Effect::Navigate(_) => {}
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub video: &'a Video,
    pub thumbnail: Option<&'a image::Handle>,
    pub avatar: Option<&'a image::Handle>,
    pub card_width: f32,
    pub now: DateTime<Utc>,
}

/// Thumbnail corners are rounded at rest and square while previewing.
fn thumbnail_radius(is_preview_active: bool) -> f32 {
    if is_preview_active {
        radius::NONE
    } else {
        radius::LG
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let video = ctx.video;
    let watch = Route::Watch(video.id.clone());
    let channel = Route::Channel(video.channel.id.clone());

    let corner = thumbnail_radius(state.is_preview_active);
    let thumbnail_height = ctx.card_width / sizing::THUMBNAIL_ASPECT;

    let still: Element<'a, Message> = match ctx.thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(thumbnail_height)
            .content_fit(ContentFit::Cover)
            .border_radius(corner)
            .into(),
        None => container(Space::new())
            .width(Length::Fill)
            .height(thumbnail_height)
            .style(styles::container::thumbnail_placeholder(corner))
            .into(),
    };

    let mut media = stack![still].width(Length::Fill);
    if let Some(frame) = state.frame.as_ref().filter(|_| state.is_preview_active) {
        media = media.push(
            image(frame.clone())
                .width(Length::Fill)
                .height(thumbnail_height)
                .content_fit(ContentFit::Cover)
                .opacity(state.preview_opacity),
        );
    }

    let badge = container(text(format_duration(video.duration)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::duration_badge);
    media = media.push(
        container(badge)
            .width(Length::Fill)
            .height(thumbnail_height)
            .padding(spacing::XS)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom),
    );

    let thumbnail = mouse_area(media)
        .on_press(Message::Open(watch.clone()))
        .interaction(mouse::Interaction::Pointer);

    let avatar: Element<'a, Message> = match ctx.avatar {
        Some(handle) => image(handle.clone())
            .width(sizing::AVATAR)
            .height(sizing::AVATAR)
            .content_fit(ContentFit::Cover)
            .border_radius(radius::FULL)
            .into(),
        None => container(Space::new())
            .width(sizing::AVATAR)
            .height(sizing::AVATAR)
            .style(styles::container::thumbnail_placeholder(radius::FULL))
            .into(),
    };
    let avatar = mouse_area(avatar)
        .on_press(Message::Open(channel.clone()))
        .interaction(mouse::Interaction::Pointer);

    let title = button(
        text(video.title.as_str())
            .size(typography::BODY_LG)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press(Message::Open(watch));

    let channel_name = button(text(video.channel.name.as_str()).size(typography::BODY))
        .padding(0)
        .style(styles::button::link_muted)
        .on_press(Message::Open(channel));

    let views = format_views(video.views, &ctx.i18n.number_locale());
    let posted = ctx
        .i18n
        .time_ago(&TimeAgo::between(video.posted_at, ctx.now));
    let stats = text(format!(
        "{} • {}",
        ctx.i18n.tr_with_args("video-views", &[("count", &views)]),
        posted
    ))
    .size(typography::BODY)
    .style(|theme: &iced::Theme| text::Style {
        color: Some(crate::ui::theming::ColorScheme::for_theme(theme).text_secondary),
    });

    let details = row![
        avatar,
        column![title, channel_name, stats].spacing(spacing::XXS)
    ]
    .spacing(spacing::SM);

    let card = column![thumbnail, details]
        .spacing(spacing::SM)
        .width(ctx.card_width);

    mouse_area(card)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ChannelId;
    use crate::preview::testing::RecordingMedia;

    fn card() -> State {
        State::new(VideoId::from("v1"), "v1.mp4".to_string())
    }

    fn frame() -> PreviewMessage {
        PreviewMessage::FrameReady(image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]))
    }

    #[test]
    fn starts_inactive() {
        let state = card();
        assert!(!state.is_preview_active());
        assert!(!state.has_frame());
    }

    #[test]
    fn enter_starts_preview_once() {
        let mut state = card();
        assert_eq!(update(&mut state, Message::PointerEntered), Effect::StartPreview);
        assert!(state.is_preview_active());
        assert_eq!(update(&mut state, Message::PointerEntered), Effect::None);
    }

    #[test]
    fn leave_pauses_only_when_active() {
        let mut state = card();
        assert_eq!(update(&mut state, Message::PointerLeft), Effect::None);

        update(&mut state, Message::PointerEntered);
        assert_eq!(update(&mut state, Message::PointerLeft), Effect::PausePreview);
        assert!(!state.is_preview_active());
        assert_eq!(update(&mut state, Message::PointerLeft), Effect::None);
    }

    #[test]
    fn start_effect_rewinds_then_plays() {
        let mut media = RecordingMedia::default();
        apply(&Effect::StartPreview, &mut media);
        assert_eq!(media.calls, vec!["rewind", "play"]);
    }

    #[test]
    fn pause_effect_only_pauses() {
        let mut media = RecordingMedia::default();
        apply(&Effect::PausePreview, &mut media);
        assert_eq!(media.calls, vec!["pause"]);
    }

    #[test]
    fn failed_play_is_not_an_error() {
        let mut media = RecordingMedia {
            fail_play: true,
            ..RecordingMedia::default()
        };
        apply(&Effect::StartPreview, &mut media);
        assert_eq!(media.calls, vec!["rewind", "play"]);
    }

    #[test]
    fn navigation_does_not_touch_media() {
        let mut media = RecordingMedia::default();
        let effect = update(
            &mut card(),
            Message::Open(Route::Channel(ChannelId::from("c1"))),
        );
        apply(&effect, &mut media);
        assert!(media.calls.is_empty());
        assert_eq!(effect, Effect::Navigate(Route::Channel(ChannelId::from("c1"))));
    }

    #[test]
    fn frames_fade_in_while_active() {
        let mut state = card();
        update(&mut state, Message::PointerEntered);
        state.handle_preview(&PreviewMessage::Rewound);
        for _ in 0..10 {
            state.handle_preview(&frame());
        }
        assert!(state.has_frame());
        assert_eq!(state.preview_opacity(), opacity::OPAQUE);

        update(&mut state, Message::PointerLeft);
        assert_eq!(state.preview_opacity(), opacity::TRANSPARENT);
    }

    #[test]
    fn frames_after_leave_are_ignored() {
        let mut state = card();
        state.handle_preview(&frame());
        assert!(!state.has_frame());
        assert_eq!(state.preview_opacity(), opacity::TRANSPARENT);
    }

    #[test]
    fn preview_error_clears_frame() {
        let mut state = card();
        update(&mut state, Message::PointerEntered);
        state.handle_preview(&PreviewMessage::Rewound);
        state.handle_preview(&frame());
        assert!(state.has_frame());
        state.handle_preview(&PreviewMessage::Error(
            crate::error::PreviewError::NoVideoStream,
        ));
        assert!(!state.has_frame());
    }

    #[test]
    fn rapid_enter_leave_enter_follows_the_last_event() {
        let mut state = card();
        let mut media = RecordingMedia::default();

        let effects: Vec<_> = [
            Message::PointerEntered,
            Message::PointerLeft,
            Message::PointerEntered,
        ]
        .into_iter()
        .map(|message| {
            let effect = update(&mut state, message);
            apply(&effect, &mut media);
            effect
        })
        .collect();

        assert_eq!(
            effects,
            vec![Effect::StartPreview, Effect::PausePreview, Effect::StartPreview]
        );
        assert_eq!(media.calls, vec!["rewind", "play", "pause", "rewind", "play"]);
        assert!(state.is_preview_active());
    }

    #[test]
    fn frames_queued_before_the_rewind_are_not_shown() {
        let mut state = card();
        update(&mut state, Message::PointerEntered);
        state.handle_preview(&PreviewMessage::Rewound);
        state.handle_preview(&frame());
        update(&mut state, Message::PointerLeft);

        update(&mut state, Message::PointerEntered);
        assert!(!state.has_frame());
        state.handle_preview(&frame());
        assert!(!state.has_frame());
        assert_eq!(state.preview_opacity(), opacity::TRANSPARENT);

        state.handle_preview(&PreviewMessage::Rewound);
        state.handle_preview(&frame());
        assert!(state.has_frame());
    }

    #[test]
    fn corners_square_off_while_previewing() {
        assert_eq!(thumbnail_radius(false), radius::LG);
        assert_eq!(thumbnail_radius(true), radius::NONE);
    }
}
