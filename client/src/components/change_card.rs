//! Today's value against yesterday's. Polled.

use chrono::NaiveDate;

use super::yesterday;
use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::util::format::format_signed_eur;
use crate::util::metrics::{Percent, Trend, ZeroDivisionPolicy, percent_change};

#[derive(Clone, Debug, PartialEq)]
pub struct ChangeCard {
    pub today_total: f64,
    pub yesterday_total: f64,
    pub difference: f64,
    pub percent: Percent,
    pub trend: Trend,
}

impl ChangeCard {
    #[must_use]
    pub fn compute(today_total: f64, yesterday_total: f64, policy: ZeroDivisionPolicy) -> Self {
        let difference = today_total - yesterday_total;
        Self {
            today_total,
            yesterday_total,
            difference,
            percent: percent_change(today_total, yesterday_total, policy),
            trend: Trend::from_delta(difference),
        }
    }

    /// Signed difference, e.g. `+100,00 €`.
    #[must_use]
    pub fn difference_text(&self) -> String {
        format_signed_eur(self.difference)
    }
}

/// Fetch today's and yesterday's totals in parallel.
///
/// # Errors
///
/// Any gateway error from either call.
pub async fn load(api: &PeaApi, today: NaiveDate, policy: ZeroDivisionPolicy) -> Result<ChangeCard, ApiError> {
    let (current, previous) = tokio::try_join!(api.total(None), api.total(Some(yesterday(today))))?;
    Ok(ChangeCard::compute(current, previous, policy))
}

#[cfg(test)]
#[path = "change_card_test.rs"]
mod tests;
