// SPDX-License-Identifier: MPL-2.0
pub mod overflow_strip;

pub use overflow_strip::{overflow_strip, OverflowStrip};
