// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::FRAC_PI_2;

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Duration badge in the thumbnail corner.
pub fn duration_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE,
            ..palette::SECONDARY_DARK
        })),
        text_color: Some(palette::SECONDARY),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder surface shown while a thumbnail is loading or missing.
pub fn thumbnail_placeholder(corner_radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(scheme.control)),
            border: Border {
                radius: corner_radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Fade behind a paging affordance: opaque at the strip edge, transparent
/// towards the middle. `leading` puts the opaque side on the left.
pub fn edge_fade(leading: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let surface = ColorScheme::for_theme(theme).surface_primary;
        let clear = Color {
            a: opacity::TRANSPARENT,
            ..surface
        };
        // Angle 90° runs left to right.
        let (start, end) = if leading {
            (surface, clear)
        } else {
            (clear, surface)
        };
        let gradient = Linear::new(Radians(FRAC_PI_2))
            .add_stop(0.0, start)
            .add_stop(0.5, surface)
            .add_stop(1.0, end);

        container::Style {
            background: Some(Background::Gradient(gradient.into())),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_scheme_surface() {
        let style = page(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(ColorScheme::light().surface_primary))
        );
    }

    #[test]
    fn badge_is_dark_with_light_text() {
        let style = duration_badge(&Theme::Light);
        assert_eq!(style.text_color, Some(palette::SECONDARY));
    }

    #[test]
    fn edge_fade_is_a_gradient() {
        let style = edge_fade(true)(&Theme::Light);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }
}
