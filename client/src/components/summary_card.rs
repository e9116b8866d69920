//! Portfolio value against the amount invested. Fetched once.

use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::util::format::format_eur;
use crate::util::metrics::{Percent, Trend, ZeroDivisionPolicy, percent_change};

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub total: f64,
    pub invested: f64,
    pub variation: Percent,
    pub trend: Trend,
}

impl SummaryCard {
    #[must_use]
    pub fn compute(total: f64, invested: f64, policy: ZeroDivisionPolicy) -> Self {
        Self {
            total,
            invested,
            variation: percent_change(total, invested, policy),
            trend: Trend::from_delta(total - invested),
        }
    }

    #[must_use]
    pub fn total_text(&self) -> String {
        format_eur(self.total)
    }
}

/// Fetch the current total and the invested amount in parallel.
///
/// # Errors
///
/// Any gateway error from either call.
pub async fn load(api: &PeaApi, policy: ZeroDivisionPolicy) -> Result<SummaryCard, ApiError> {
    let (total, invested) = tokio::try_join!(api.total(None), api.total_invested())?;
    Ok(SummaryCard::compute(total, invested, policy))
}

#[cfg(test)]
#[path = "summary_card_test.rs"]
mod tests;
