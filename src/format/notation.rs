//! Rules deciding between fixed-point and scientific notation.

use serde::{Deserialize, Serialize};

/// Values strictly below this magnitude switch to scientific notation.
pub const MIN_FIXED_MAGNITUDE: f64 = 1e-6;

/// Values strictly above this magnitude switch to scientific notation.
pub const MAX_FIXED_MAGNITUDE: f64 = 1e6;

/// Longest stripped fixed-point rendering kept by the length rule.
pub const MAX_FIXED_LEN: usize = 13;

/// Which test selects scientific notation for a non-zero finite value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotationRule {
    /// Scientific when `abs(num) < 1e-6` or `abs(num) > 1e6`.
    #[default]
    Magnitude,

    /// Scientific when the stripped fixed-point string exceeds 13 characters.
    ///
    /// The sign counts towards the length, so negative values switch one
    /// digit earlier than positive ones.
    Length,
}

impl NotationRule {
    /// Returns `true` when `num` should be rendered in scientific notation.
    ///
    /// `fixed` is the already stripped fixed-point rendering of `num`.
    /// The magnitude rule ignores it and looks at the original value only.
    pub fn wants_scientific(self, num: f64, fixed: &str) -> bool {
        match self {
            NotationRule::Magnitude => {
                let magnitude = num.abs();
                magnitude < MIN_FIXED_MAGNITUDE || magnitude > MAX_FIXED_MAGNITUDE
            }
            NotationRule::Length => fixed.len() > MAX_FIXED_LEN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotationRule::Magnitude => "magnitude",
            NotationRule::Length => "length",
        }
    }
}

impl std::fmt::Display for NotationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
