// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::button::Colors;
use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for a [`crate::ui::button::Button`] once its directives are resolved.
pub fn resolved(colors: Colors, corner_radius: f32, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            colors.hover_background.or(colors.background)
        }
        button::Status::Active | button::Status::Disabled => colors.background,
    };

    let text_color = if status == button::Status::Disabled {
        Color {
            a: colors.text_color.a * 0.5,
            ..colors.text_color
        }
    } else {
        colors.text_color
    };

    button::Style {
        background: background.map(Background::Color),
        text_color,
        border: Border {
            radius: corner_radius.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link (card title, channel avatar).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    link_with(scheme.text_primary, status)
}

/// Muted text link (channel name under a card title).
pub fn link_muted(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let color = if status == button::Status::Hovered {
        scheme.text_primary
    } else {
        scheme.text_secondary
    };
    link_with(color, status)
}

fn link_with(color: Color, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Pressed => opacity::BADGE,
        _ => opacity::OPAQUE,
    };
    button::Style {
        background: None,
        text_color: Color { a: alpha, ..color },
        border: Border {
            radius: radius::NONE.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button::Variant;

    #[test]
    fn hover_switches_to_hover_background() {
        let colors = Variant::Default.colors(&ColorScheme::light());
        let idle = resolved(colors, radius::SM, button::Status::Active);
        let hovered = resolved(colors, radius::SM, button::Status::Hovered);

        assert_eq!(idle.background, colors.background.map(Background::Color));
        assert_eq!(
            hovered.background,
            colors.hover_background.map(Background::Color)
        );
    }

    #[test]
    fn ghost_is_transparent_until_hovered() {
        let colors = Variant::Ghost.colors(&ColorScheme::light());
        assert!(resolved(colors, radius::FULL, button::Status::Active)
            .background
            .is_none());
        assert!(resolved(colors, radius::FULL, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn disabled_dims_text() {
        let colors = Variant::Dark.colors(&ColorScheme::light());
        let style = resolved(colors, radius::SM, button::Status::Disabled);
        assert!(style.text_color.a < colors.text_color.a);
    }

    #[test]
    fn muted_link_brightens_on_hover() {
        let idle = link_muted(&Theme::Light, button::Status::Active);
        let hovered = link_muted(&Theme::Light, button::Status::Hovered);
        assert_ne!(idle.text_color, hovered.text_color);
    }
}
