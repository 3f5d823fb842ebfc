// SPDX-License-Identifier: MPL-2.0
//! Compact view-count formatting (`12345` → `12K`).
//!
//! Mirrors the compact notation browsers use for view counters: values are
//! scaled to thousands/millions/billions/trillions, kept to two significant
//! digits below one hundred of a unit, and promoted to the next unit when
//! rounding reaches a thousand. All arithmetic is integral so boundary values
//! like `9_950` round the same way every time.

/// Locale data needed to render compact numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLocale {
    /// Separator between the integer digit and the single fractional digit.
    pub decimal_separator: String,
    /// Suffixes for thousands, millions, billions and trillions.
    pub suffixes: [String; 4],
    /// Whether a space separates the number from its suffix (`12 k`).
    pub spaced: bool,
}

impl NumberLocale {
    /// English compact notation (`1.2K`, `3M`).
    #[must_use]
    pub fn english() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            suffixes: ["K".into(), "M".into(), "B".into(), "T".into()],
            spaced: false,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::english()
    }
}

/// Formats a view count in compact notation for the given locale.
///
/// # Examples
///
/// ```
/// use tubegrid::format::{format_views, NumberLocale};
///
/// let en = NumberLocale::english();
/// assert_eq!(format_views(999, &en), "999");
/// assert_eq!(format_views(1_000, &en), "1K");
/// assert_eq!(format_views(1_250_000, &en), "1.3M");
/// ```
#[must_use]
pub fn format_views(views: u64, locale: &NumberLocale) -> String {
    let Some(compact) = Compact::from_count(views) else {
        return views.to_string();
    };

    let mantissa = if compact.tenths % 10 == 0 {
        (compact.tenths / 10).to_string()
    } else {
        format!(
            "{}{}{}",
            compact.tenths / 10,
            locale.decimal_separator,
            compact.tenths % 10
        )
    };

    let suffix = &locale.suffixes[compact.exponent - 1];
    if locale.spaced {
        format!("{mantissa} {suffix}")
    } else {
        format!("{mantissa}{suffix}")
    }
}

/// A scaled count expressed in tenths of a unit of `1000^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Compact {
    tenths: u128,
    exponent: usize,
}

const MAX_EXPONENT: usize = 4;

impl Compact {
    /// Returns `None` for counts below a thousand, which render verbatim.
    fn from_count(count: u64) -> Option<Self> {
        if count < 1_000 {
            return None;
        }

        let count = u128::from(count);
        let mut exponent = 1;
        while exponent < MAX_EXPONENT && count >= 1_000u128.pow(exponent as u32 + 1) {
            exponent += 1;
        }

        let unit = 1_000u128.pow(exponent as u32);
        let tenths = if count < 10 * unit {
            // Two significant digits: keep one decimal place.
            (count * 10 + unit / 2) / unit
        } else {
            ((count + unit / 2) / unit) * 10
        };

        if tenths >= 10_000 && exponent < MAX_EXPONENT {
            return Some(Self {
                tenths: 10,
                exponent: exponent + 1,
            });
        }

        Some(Self { tenths, exponent })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(views: u64) -> String {
        format_views(views, &NumberLocale::english())
    }

    #[test]
    fn below_a_thousand_is_verbatim() {
        assert_eq!(en(0), "0");
        assert_eq!(en(999), "999");
    }

    #[test]
    fn thousand_boundary() {
        assert_eq!(en(1_000), "1K");
        assert_eq!(en(1_234), "1.2K");
        assert_eq!(en(12_345), "12K");
        assert_eq!(en(123_456), "123K");
    }

    #[test]
    fn million_boundary() {
        assert_eq!(en(999_999), "1M");
        assert_eq!(en(1_000_000), "1M");
        assert_eq!(en(1_500_000), "1.5M");
    }

    #[test]
    fn billion_and_trillion_boundaries() {
        assert_eq!(en(999_999_999), "1B");
        assert_eq!(en(1_000_000_000), "1B");
        assert_eq!(en(1_000_000_000_000), "1T");
        assert_eq!(en(2_500_000_000_000_000), "2500T");
    }

    #[test]
    fn rounding_up_to_ten_drops_the_decimal() {
        assert_eq!(en(9_950), "10K");
        assert_eq!(en(9_949), "9.9K");
    }

    #[test]
    fn rounding_up_to_hundred_keeps_unit() {
        assert_eq!(en(99_950), "100K");
    }

    #[test]
    fn locale_separator_and_spacing_are_applied() {
        let fr = NumberLocale {
            decimal_separator: ",".to_string(),
            suffixes: ["k".into(), "M".into(), "Md".into(), "Bn".into()],
            spaced: true,
        };
        assert_eq!(format_views(1_234, &fr), "1,2 k");
        assert_eq!(format_views(12_000, &fr), "12 k");
        assert_eq!(format_views(3_400_000_000, &fr), "3,4 Md");
    }

    #[test]
    fn max_value_does_not_overflow() {
        assert_eq!(en(u64::MAX), "18446744T");
    }
}
