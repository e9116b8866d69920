//! Derived portfolio metrics: percentage change and trend.
//!
//! DESIGN
//! ======
//! Every card divides by a reference value that can legitimately be zero (no
//! money invested yet, no value yesterday). All of them go through
//! `percent_change` so one `ZeroDivisionPolicy` decides the outcome.

use std::fmt;

/// Outcome of a percentage whose reference value is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroDivisionPolicy {
    /// Report `0.00 %`.
    #[default]
    Zero,
    /// Report `N/A`.
    NotAvailable,
}

/// A computed percentage, or the marker for an undefined one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Percent {
    Value(f64),
    NotAvailable,
}

impl Percent {
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v:.2} %"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// `(current - reference) / reference * 100`, with the zero case per `policy`.
#[must_use]
pub fn percent_change(current: f64, reference: f64, policy: ZeroDivisionPolicy) -> Percent {
    share_of(current - reference, reference, policy)
}

/// `part / whole * 100`, with the zero case per `policy`.
#[must_use]
pub fn share_of(part: f64, whole: f64, policy: ZeroDivisionPolicy) -> Percent {
    if whole == 0.0 {
        return match policy {
            ZeroDivisionPolicy::Zero => Percent::Value(0.0),
            ZeroDivisionPolicy::NotAvailable => Percent::NotAvailable,
        };
    }
    Percent::Value(part / whole * 100.0)
}

/// Direction of a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Self::Up
        } else if delta < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "=",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
