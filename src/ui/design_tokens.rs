// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, opacity, spacing and size used by the page lives here.

## Organization

- **Palette**: Neutral scale and the secondary surface family used by buttons and pills
- **Opacity**: Preview cross-fade and overlay levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Header, sidebar, avatar and paging affordance sizes
- **Typography**: Font size scale
- **Radius**: Corner radii
- **Shadow**: Shadow definitions

## Examples

```
use tubegrid::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let badge_bg = Color {
    a: opacity::BADGE,
    ..palette::SECONDARY_DARK
};

let gap = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutral scale
    pub const NEUTRAL_50: Color = Color::from_rgb(0.980, 0.980, 0.980);
    pub const NEUTRAL_100: Color = Color::from_rgb(0.961, 0.961, 0.961);
    pub const NEUTRAL_200: Color = Color::from_rgb(0.898, 0.898, 0.898);
    pub const NEUTRAL_300: Color = Color::from_rgb(0.831, 0.831, 0.831);
    pub const NEUTRAL_400: Color = Color::from_rgb(0.639, 0.639, 0.639);
    pub const NEUTRAL_500: Color = Color::from_rgb(0.451, 0.451, 0.451);
    pub const NEUTRAL_700: Color = Color::from_rgb(0.251, 0.251, 0.251);
    pub const NEUTRAL_800: Color = Color::from_rgb(0.149, 0.149, 0.149);
    pub const NEUTRAL_900: Color = Color::from_rgb(0.090, 0.090, 0.090);
    pub const NEUTRAL_950: Color = Color::from_rgb(0.059, 0.059, 0.059);

    // Secondary surfaces (buttons, pills, badges)
    pub const SECONDARY: Color = NEUTRAL_200;
    pub const SECONDARY_HOVER: Color = NEUTRAL_300;
    pub const SECONDARY_DARK: Color = NEUTRAL_800;
    pub const SECONDARY_DARK_HOVER: Color = NEUTRAL_900;
    pub const SECONDARY_TEXT: Color = NEUTRAL_500;

    /// Ghost buttons only get a background while hovered.
    pub const GHOST_HOVER: Color = NEUTRAL_100;

    // Accent
    pub const BRAND_RED: Color = Color::from_rgb(0.937, 0.267, 0.267);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const BADGE: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Per-frame opacity change of the thumbnail/preview cross-fade.
    pub const FADE_STEP: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the page header bar.
    pub const HEADER_HEIGHT: f32 = 56.0;

    /// Icon button extent (`w-10 h-10`).
    pub const ICON_BUTTON: f32 = 40.0;

    /// Width of the expanded sidebar.
    pub const SIDEBAR_WIDTH: f32 = 240.0;

    /// Width of the compact sidebar.
    pub const SIDEBAR_COMPACT_WIDTH: f32 = 80.0;

    /// Width of the gradient hosting a paging affordance.
    pub const TAB_FADE_WIDTH: f32 = 96.0;

    /// Height of the category strip.
    pub const TAB_STRIP_HEIGHT: f32 = 36.0;

    /// Channel avatar diameter.
    pub const AVATAR: f32 = 48.0;

    /// Width of the search field.
    pub const SEARCH_WIDTH: f32 = 480.0;

    /// Thumbnail aspect ratio (16:9).
    pub const THUMBNAIL_ASPECT: f32 = 16.0 / 9.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the header
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles
    pub const BODY_LG: f32 = 16.0;

    /// Pills, channel names, metadata
    pub const BODY: f32 = 14.0;

    /// Sidebar labels in compact mode, duration badge
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// `rounded`
    pub const SM: f32 = 4.0;
    /// `rounded-lg`, category pills
    pub const MD: f32 = 8.0;
    /// `rounded-xl`, idle thumbnails
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::FADE_STEP > 0.0 && opacity::FADE_STEP <= 1.0);

    assert!(sizing::SIDEBAR_WIDTH > sizing::SIDEBAR_COMPACT_WIDTH);
    assert!(sizing::TAB_FADE_WIDTH > sizing::ICON_BUTTON);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::LG > radius::MD);
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::SM * 2.0);
    }

    #[test]
    fn secondary_dark_is_darker_than_secondary() {
        assert!(palette::SECONDARY_DARK.r < palette::SECONDARY.r);
        assert!(palette::SECONDARY_DARK_HOVER.r < palette::SECONDARY_DARK.r);
    }
}
