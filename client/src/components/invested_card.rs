//! Value, invested amount, gains and day change. Polled.

use chrono::NaiveDate;

use super::yesterday;
use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::util::format::{format_eur, format_signed_eur};
use crate::util::metrics::{Percent, Trend, ZeroDivisionPolicy, percent_change};

#[derive(Clone, Debug, PartialEq)]
pub struct InvestedCard {
    pub total: f64,
    pub invested: f64,
    pub yesterday_total: f64,
    /// Change of value over the amount invested.
    pub variation: Percent,
    /// `total - invested`.
    pub gains: f64,
    /// `total - yesterday_total`.
    pub day_change: f64,
    pub trend: Trend,
}

impl InvestedCard {
    #[must_use]
    pub fn compute(total: f64, invested: f64, yesterday_total: f64, policy: ZeroDivisionPolicy) -> Self {
        Self {
            total,
            invested,
            yesterday_total,
            variation: percent_change(total, invested, policy),
            gains: total - invested,
            day_change: total - yesterday_total,
            trend: Trend::from_delta(total - invested),
        }
    }

    /// `"<total> (<signed day change>)"`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} ({})", format_eur(self.total), format_signed_eur(self.day_change))
    }

    #[must_use]
    pub fn invested_text(&self) -> String {
        format!("{} invested", format_eur(self.invested))
    }

    #[must_use]
    pub fn gains_text(&self) -> String {
        format!("{} gained since the start", format_eur(self.gains))
    }
}

/// Fetch today's total, the invested amount and yesterday's total in parallel.
///
/// # Errors
///
/// Any gateway error from the three calls.
pub async fn load(api: &PeaApi, today: NaiveDate, policy: ZeroDivisionPolicy) -> Result<InvestedCard, ApiError> {
    let (total, invested, previous) =
        tokio::try_join!(api.total(None), api.total_invested(), api.total(Some(yesterday(today))))?;
    Ok(InvestedCard::compute(total, invested, previous, policy))
}

#[cfg(test)]
#[path = "invested_card_test.rs"]
mod tests;
