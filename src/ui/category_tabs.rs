// SPDX-License-Identifier: MPL-2.0
//! Horizontally pageable strip of category pills.
//!
//! The pills sit on one row that is shifted left by `translate` pixels and
//! clipped to the strip. A paging affordance appears on a side only when
//! there is content hidden on that side.
//!
//! Visibility is derived from the translate and from the last measured
//! [`StripMetrics`]:
//!
//! - `left  = translate > 0`
//! - `right = translate + client_width < scroll_width` (false until measured)
//!
//! The strip widget reports new metrics whenever its own width or the row
//! width changes. A measurement also pulls a stale translate back into
//! `[0, scroll_width - client_width]`, so after the category list shrinks the
//! offset may be ahead of the content for at most one render pass.

use crate::catalog::Category;
use crate::config::TabsConfig;
use crate::i18n::fluent::I18n;
use crate::ui::button::{self, Size, StyleOverrides, Variant};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::overflow_strip;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, row, stack, text, tooltip, Row};
use iced::{Element, Length};

/// Rendered widths of the strip, as reported by the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    /// Visible width of the strip.
    pub client_width: f32,
    /// Natural width of the pill row.
    pub scroll_width: f32,
}

impl StripMetrics {
    /// Largest translate that keeps the row's trailing edge in view.
    #[must_use]
    pub fn max_translate(&self) -> f32 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Scroll state of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    translate: f32,
    step: f32,
    is_left_visible: bool,
    is_right_visible: bool,
    metrics: Option<StripMetrics>,
}

impl State {
    /// Creates an unmeasured strip starting at `initial_translate`.
    #[must_use]
    pub fn new(initial_translate: f32, step: f32) -> Self {
        let mut state = Self {
            translate: initial_translate.max(0.0),
            step: step.max(0.0),
            is_left_visible: false,
            is_right_visible: false,
            metrics: None,
        };
        state.recompute();
        state
    }

    #[must_use]
    pub fn from_config(config: &TabsConfig) -> Self {
        Self::new(config.initial_translate(), config.page_step())
    }

    #[must_use]
    pub fn translate(&self) -> f32 {
        self.translate
    }

    #[must_use]
    pub fn is_left_visible(&self) -> bool {
        self.is_left_visible
    }

    #[must_use]
    pub fn is_right_visible(&self) -> bool {
        self.is_right_visible
    }

    #[must_use]
    pub fn metrics(&self) -> Option<StripMetrics> {
        self.metrics
    }

    /// Moves one step towards the start, stopping at 0.
    pub fn page_left(&mut self) {
        self.translate = (self.translate - self.step).max(0.0);
        self.recompute();
    }

    /// Moves one step towards the end, stopping where the row's trailing
    /// edge meets the strip's. Does nothing before the first measurement.
    pub fn page_right(&mut self) {
        let Some(metrics) = self.metrics else {
            return;
        };
        self.translate = (self.translate + self.step).min(metrics.max_translate());
        self.recompute();
    }

    /// Records a layout observation, clamps the translate into the new
    /// scrollable range and recomputes the affordances.
    pub fn on_layout_change(&mut self, metrics: StripMetrics) {
        self.metrics = Some(metrics);
        self.translate = self.translate.clamp(0.0, metrics.max_translate());
        self.recompute();
    }

    fn recompute(&mut self) {
        self.is_left_visible = self.translate > 0.0;
        self.is_right_visible = self
            .metrics
            .is_some_and(|m| self.translate + m.client_width < m.scroll_width);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&TabsConfig::default())
    }
}

/// Messages emitted by the strip.
#[derive(Debug, Clone)]
pub enum Message {
    PageLeft,
    PageRight,
    Measured(StripMetrics),
    Select(Category),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Selected(Category),
}

/// Process a strip message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::PageLeft => {
            state.page_left();
            Event::None
        }
        Message::PageRight => {
            state.page_right();
            Event::None
        }
        Message::Measured(metrics) => {
            state.on_layout_change(metrics);
            Event::None
        }
        Message::Select(category) => Event::Selected(category),
    }
}

/// Contextual data needed to render the strip.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub categories: &'a [Category],
    pub selected: Option<&'a Category>,
}

/// Render the category strip.
pub fn view<'a>(state: &State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let pills = ctx
        .categories
        .iter()
        .fold(Row::new().spacing(spacing::SM + spacing::XS), |row, category| {
            let variant = if ctx.selected == Some(category) {
                Variant::Dark
            } else {
                Variant::Default
            };
            row.push(
                button::button(text(category.as_str()).size(typography::BODY))
                    .variant(variant)
                    .style(
                        StyleOverrides::default()
                            .padding([spacing::XS, spacing::SM + spacing::XS])
                            .radius(radius::MD),
                    )
                    .on_press(Message::Select(category.clone())),
            )
        })
        .height(sizing::TAB_STRIP_HEIGHT)
        .align_y(Vertical::Center);

    let strip = overflow_strip(pills)
        .offset(state.translate)
        .on_measure(|client_width, scroll_width| {
            Message::Measured(StripMetrics {
                client_width,
                scroll_width,
            })
        });

    let mut layers = stack![strip].width(Length::Fill);

    if state.is_left_visible {
        layers = layers.push(paging_affordance(
            ctx.i18n.tr("category-tabs-previous"),
            "‹",
            Message::PageLeft,
            true,
        ));
    }
    if state.is_right_visible {
        layers = layers.push(paging_affordance(
            ctx.i18n.tr("category-tabs-next"),
            "›",
            Message::PageRight,
            false,
        ));
    }

    layers.into()
}

fn paging_affordance<'a>(
    label: String,
    glyph: &'a str,
    message: Message,
    leading: bool,
) -> Element<'a, Message> {
    let chevron = button::button(text(glyph).size(typography::TITLE_MD))
        .variant(Variant::Ghost)
        .size(Size::Icon)
        .style(
            StyleOverrides::default()
                .width(sizing::TAB_STRIP_HEIGHT)
                .height(sizing::TAB_STRIP_HEIGHT)
                .padding(spacing::XS + spacing::XXS),
        )
        .on_press(message);

    let chevron = tooltip(chevron, text(label), tooltip::Position::Bottom);

    let fade = container(
        row![chevron]
            .width(Length::Fill)
            .align_y(Vertical::Center),
    )
    .width(sizing::TAB_FADE_WIDTH)
    .height(Length::Fill)
    .align_x(if leading {
        Horizontal::Left
    } else {
        Horizontal::Right
    })
    .style(styles::container::edge_fade(leading));

    container(fade)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(if leading {
            Horizontal::Left
        } else {
            Horizontal::Right
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(client_width: f32, scroll_width: f32) -> StripMetrics {
        StripMetrics {
            client_width,
            scroll_width,
        }
    }

    #[test]
    fn unmeasured_strip_shows_only_left_affordance() {
        let state = State::new(300.0, 200.0);
        assert_eq!(state.translate(), 300.0);
        assert!(state.is_left_visible());
        assert!(!state.is_right_visible());
        assert!(state.metrics().is_none());
    }

    #[test]
    fn zero_initial_translate_hides_left_affordance() {
        let state = State::new(0.0, 200.0);
        assert!(!state.is_left_visible());
    }

    #[test]
    fn page_right_is_noop_before_measurement() {
        let mut state = State::new(300.0, 200.0);
        state.page_right();
        assert_eq!(state.translate(), 300.0);
    }

    #[test]
    fn page_left_never_goes_negative() {
        let mut state = State::new(300.0, 200.0);
        state.on_layout_change(metrics(400.0, 2000.0));
        for _ in 0..10 {
            state.page_left();
            assert!(state.translate() >= 0.0);
        }
        assert_eq!(state.translate(), 0.0);
        assert!(!state.is_left_visible());
        assert!(state.is_right_visible());
    }

    #[test]
    fn page_left_steps_by_configured_amount() {
        let mut state = State::new(300.0, 200.0);
        state.on_layout_change(metrics(400.0, 2000.0));
        state.page_left();
        assert_eq!(state.translate(), 100.0);
        state.page_left();
        assert_eq!(state.translate(), 0.0);
    }

    #[test]
    fn page_right_never_passes_trailing_edge() {
        let mut state = State::new(300.0, 200.0);
        let m = metrics(400.0, 1150.0);
        state.on_layout_change(m);
        for _ in 0..10 {
            state.page_right();
            assert!(state.translate() + m.client_width <= m.scroll_width);
        }
        assert_eq!(state.translate(), 750.0);
        assert!(state.is_left_visible());
        assert!(!state.is_right_visible());
    }

    #[test]
    fn page_right_clamps_to_exact_end() {
        let mut state = State::new(0.0, 200.0);
        state.on_layout_change(metrics(400.0, 550.0));
        state.page_right();
        assert_eq!(state.translate(), 150.0);
    }

    #[test]
    fn narrow_content_hides_both_affordances_whatever_the_history() {
        let mut state = State::new(300.0, 200.0);
        state.on_layout_change(metrics(400.0, 2000.0));
        state.page_right();
        state.page_right();

        state.on_layout_change(metrics(800.0, 600.0));
        assert!(!state.is_left_visible());
        assert!(!state.is_right_visible());
        assert_eq!(state.translate(), 0.0);

        state.page_left();
        state.page_right();
        assert!(!state.is_left_visible());
        assert!(!state.is_right_visible());
    }

    #[test]
    fn equal_widths_hide_both_affordances() {
        let mut state = State::new(300.0, 200.0);
        state.on_layout_change(metrics(500.0, 500.0));
        assert!(!state.is_left_visible());
        assert!(!state.is_right_visible());
    }

    #[test]
    fn layout_change_clamps_stale_translate() {
        let mut state = State::new(300.0, 200.0);
        state.on_layout_change(metrics(400.0, 2000.0));
        state.page_right();
        assert_eq!(state.translate(), 500.0);

        // Window grew: less content is hidden.
        state.on_layout_change(metrics(1800.0, 2000.0));
        assert_eq!(state.translate(), 200.0);
        assert!(state.is_left_visible());
        assert!(!state.is_right_visible());
    }

    #[test]
    fn selecting_emits_event_without_moving() {
        let mut state = State::new(300.0, 200.0);
        let before = state.clone();
        let event = update(&mut state, Message::Select(Category::from("React")));
        assert_eq!(event, Event::Selected(Category::from("React")));
        assert_eq!(state, before);
    }

    #[test]
    fn measured_message_updates_metrics() {
        let mut state = State::default();
        let event = update(&mut state, Message::Measured(metrics(300.0, 900.0)));
        assert_eq!(event, Event::None);
        assert_eq!(state.metrics(), Some(metrics(300.0, 900.0)));
        assert!(state.is_right_visible());
    }

    #[test]
    fn default_state_uses_config_defaults() {
        let state = State::default();
        assert_eq!(state.translate(), crate::config::DEFAULT_INITIAL_TRANSLATE);
    }
}
