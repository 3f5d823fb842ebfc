// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Tabs**: Category strip starting offset and paging step
//! - **Grid**: Card sizing and warm preview budget

// ==========================================================================
// Tab Strip Defaults
// ==========================================================================

/// Horizontal offset (px) the category strip starts at.
///
/// The strip deliberately opens partially scrolled so the left paging
/// affordance is visible from the first frame.
pub const DEFAULT_INITIAL_TRANSLATE: f32 = 300.0;

/// Distance (px) one click on a paging affordance moves the strip.
pub const DEFAULT_PAGE_STEP: f32 = 200.0;

/// Minimum paging step (px).
pub const MIN_PAGE_STEP: f32 = 40.0;

/// Maximum paging step (px).
pub const MAX_PAGE_STEP: f32 = 2000.0;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Minimum card width (px) before the grid drops a column.
pub const DEFAULT_MIN_CARD_WIDTH: f32 = 300.0;

/// Smallest accepted minimum card width (px).
pub const MIN_CARD_WIDTH: f32 = 160.0;

/// Largest accepted minimum card width (px).
pub const MAX_CARD_WIDTH: f32 = 800.0;

/// Gap (px) between grid cells, both axes.
pub const GRID_GAP: f32 = 16.0;

/// Number of recently hovered cards whose preview decoder stays alive.
pub const DEFAULT_MAX_WARM_PREVIEWS: usize = 4;

/// Minimum warm preview count.
pub const MIN_WARM_PREVIEWS: usize = 1;

/// Maximum warm preview count.
pub const MAX_WARM_PREVIEWS: usize = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_INITIAL_TRANSLATE >= 0.0);
    assert!(MIN_PAGE_STEP > 0.0);
    assert!(MAX_PAGE_STEP >= MIN_PAGE_STEP);
    assert!(DEFAULT_PAGE_STEP >= MIN_PAGE_STEP);
    assert!(DEFAULT_PAGE_STEP <= MAX_PAGE_STEP);

    assert!(MIN_CARD_WIDTH > 0.0);
    assert!(MAX_CARD_WIDTH >= MIN_CARD_WIDTH);
    assert!(DEFAULT_MIN_CARD_WIDTH >= MIN_CARD_WIDTH);
    assert!(DEFAULT_MIN_CARD_WIDTH <= MAX_CARD_WIDTH);

    assert!(MIN_WARM_PREVIEWS > 0);
    assert!(MAX_WARM_PREVIEWS >= MIN_WARM_PREVIEWS);
    assert!(DEFAULT_MAX_WARM_PREVIEWS >= MIN_WARM_PREVIEWS);
    assert!(DEFAULT_MAX_WARM_PREVIEWS <= MAX_WARM_PREVIEWS);
};
