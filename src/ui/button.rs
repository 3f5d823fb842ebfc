// SPDX-License-Identifier: MPL-2.0
//! Stylable button with two independent style axes.
//!
//! A [`Variant`] picks the colors and a [`Size`] picks the geometry. The two
//! axes never touch the same directive. Callers can then override any single
//! directive through [`StyleOverrides`]; overrides are merged one directive at
//! a time, so overriding the padding keeps the variant's colors and the
//! size's corner radius.
//!
//! Everything that is not styling (the press message, the disabled state when
//! no message is set, the content) is handed to the underlying Iced button
//! unchanged.

use crate::ui::design_tokens::{radius, sizing, spacing};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button as iced_button, container};
use iced::{Color, Element, Length, Padding};

/// Color axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Filled secondary surface that darkens on hover.
    #[default]
    Default,
    /// Transparent until hovered.
    Ghost,
    /// Dark surface with light text.
    Dark,
}

/// Geometry axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Slightly rounded, content-sized with even padding.
    #[default]
    Default,
    /// Fixed square extent, fully rounded.
    Icon,
}

/// Directives owned by the [`Variant`] axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub background: Option<Color>,
    pub hover_background: Option<Color>,
    pub text_color: Color,
}

/// Directives owned by the [`Size`] axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub radius: f32,
    pub padding: Padding,
    pub width: Length,
    pub height: Length,
}

/// Per-directive caller overrides. Unset fields keep the axis value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverrides {
    pub background: Option<Color>,
    pub hover_background: Option<Color>,
    pub text_color: Option<Color>,
    pub radius: Option<f32>,
    pub padding: Option<Padding>,
    pub width: Option<Length>,
    pub height: Option<Length>,
}

impl StyleOverrides {
    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    fn merge_colors(&self, base: Colors) -> Colors {
        Colors {
            background: self.background.or(base.background),
            hover_background: self.hover_background.or(base.hover_background),
            text_color: self.text_color.unwrap_or(base.text_color),
        }
    }

    fn merge_metrics(&self, base: Metrics) -> Metrics {
        Metrics {
            radius: self.radius.unwrap_or(base.radius),
            padding: self.padding.unwrap_or(base.padding),
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
        }
    }
}

/// Final directives after both axes and the overrides are combined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub colors: Colors,
    pub metrics: Metrics,
}

impl Variant {
    #[must_use]
    pub fn colors(self, scheme: &ColorScheme) -> Colors {
        match self {
            Variant::Default => Colors {
                background: Some(scheme.control),
                hover_background: Some(scheme.control_hover),
                text_color: scheme.text_primary,
            },
            Variant::Ghost => Colors {
                background: None,
                hover_background: Some(scheme.ghost_hover),
                text_color: scheme.text_primary,
            },
            Variant::Dark => Colors {
                background: Some(scheme.control_strong),
                hover_background: Some(scheme.control_strong_hover),
                text_color: scheme.control_strong_text,
            },
        }
    }
}

impl Size {
    #[must_use]
    pub fn metrics(self) -> Metrics {
        match self {
            Size::Default => Metrics {
                radius: radius::SM,
                padding: Padding::new(spacing::SM),
                width: Length::Shrink,
                height: Length::Shrink,
            },
            Size::Icon => Metrics {
                radius: radius::FULL,
                padding: Padding::new(10.0),
                width: Length::Fixed(sizing::ICON_BUTTON),
                height: Length::Fixed(sizing::ICON_BUTTON),
            },
        }
    }
}

/// Combines a variant, a size and caller overrides; overrides win.
#[must_use]
pub fn resolve(
    variant: Variant,
    size: Size,
    overrides: &StyleOverrides,
    scheme: &ColorScheme,
) -> ResolvedStyle {
    ResolvedStyle {
        colors: overrides.merge_colors(variant.colors(scheme)),
        metrics: overrides.merge_metrics(size.metrics()),
    }
}

/// Builder for a styled button.
pub struct Button<'a, Message> {
    content: Element<'a, Message>,
    variant: Variant,
    size: Size,
    overrides: StyleOverrides,
    on_press: Option<Message>,
}

/// Creates a [`Button`] with the default variant and size.
pub fn button<'a, Message>(content: impl Into<Element<'a, Message>>) -> Button<'a, Message> {
    Button {
        content: content.into(),
        variant: Variant::default(),
        size: Size::default(),
        overrides: StyleOverrides::default(),
        on_press: None,
    }
}

impl<'a, Message> Button<'a, Message> {
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn style(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }
}

impl<'a, Message: Clone + 'a> From<Button<'a, Message>> for Element<'a, Message> {
    fn from(b: Button<'a, Message>) -> Self {
        // Geometry does not depend on the theme; colors are resolved at draw time.
        let metrics = b.overrides.merge_metrics(b.size.metrics());
        let variant = b.variant;
        let overrides = b.overrides;

        let content = if b.size == Size::Icon {
            container(b.content).center(Length::Fill).into()
        } else {
            b.content
        };

        iced_button(content)
            .padding(metrics.padding)
            .width(metrics.width)
            .height(metrics.height)
            .on_press_maybe(b.on_press)
            .style(move |theme, status| {
                let scheme = ColorScheme::for_theme(theme);
                let colors = overrides.merge_colors(variant.colors(&scheme));
                styles::button::resolved(colors, metrics.radius, status)
            })
            .into()
    }
}
