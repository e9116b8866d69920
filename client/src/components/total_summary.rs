//! One-line portfolio value with the change since yesterday. Fetched once.

use chrono::NaiveDate;

use super::yesterday;
use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::util::format::{format_eur, format_signed_eur};
use crate::util::metrics::Trend;

#[derive(Clone, Debug, PartialEq)]
pub struct TotalSummary {
    pub total: f64,
    pub difference: f64,
    pub trend: Trend,
}

impl TotalSummary {
    #[must_use]
    pub fn compute(total: f64, yesterday_total: f64) -> Self {
        let difference = total - yesterday_total;
        Self { total, difference, trend: Trend::from_delta(difference) }
    }

    #[must_use]
    pub fn line(&self) -> String {
        format!("{} ({})", format_eur(self.total), format_signed_eur(self.difference))
    }
}

/// # Errors
///
/// Any gateway error from either call.
pub async fn load(api: &PeaApi, today: NaiveDate) -> Result<TotalSummary, ApiError> {
    let (current, previous) = tokio::try_join!(api.total(None), api.total(Some(yesterday(today))))?;
    Ok(TotalSummary::compute(current, previous))
}

#[cfg(test)]
#[path = "total_summary_test.rs"]
mod tests;
