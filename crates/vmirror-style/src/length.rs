//! Length and percentage values
//!
//! Plain numbers are device-independent units. Percentages are stored as
//! written (`Percent(50.0)` is `50%`).

use std::fmt;

use crate::format_number;

/// Length or percentage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Auto,
    /// Device-independent units
    Dip(f64),
    /// Physical pixels
    Px(f64),
    /// Percentage of the parent size
    Percent(f64),
}

impl Length {
    pub fn dip(value: f64) -> Self {
        Self::Dip(value)
    }

    pub fn px(value: f64) -> Self {
        Self::Px(value)
    }

    /// `percent(50.0)` is half of the parent size
    pub fn percent(value: f64) -> Self {
        Self::Percent(value)
    }

    pub fn zero() -> Self {
        Self::Dip(0.0)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Auto
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Dip(value) => f.write_str(&format_number(*value)),
            Self::Px(value) => write!(f, "{}px", format_number(*value)),
            Self::Percent(value) => write!(f, "{}%", format_number(*value)),
        }
    }
}
