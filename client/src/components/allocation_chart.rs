//! Invested capital per ticker (the allocation pie).
//!
//! Slices follow the order of the traded-tickers list. A ticker the price
//! map does not mention still gets a slice, with amount 0.

use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::net::types::InvestedByTicker;
use crate::util::metrics::{Percent, ZeroDivisionPolicy, share_of};

/// Color slots, assigned round-robin by slice index.
pub const PALETTE: [&str; 8] = ["chart-1", "chart-2", "chart-3", "chart-4", "chart-5", "chart-6", "chart-7", "chart-8"];

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub ticker: String,
    pub amount: f64,
    pub color: &'static str,
    pub share: Percent,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AllocationChart {
    pub slices: Vec<Slice>,
    pub total: f64,
}

impl AllocationChart {
    #[must_use]
    pub fn build(tickers: Vec<String>, invested: &InvestedByTicker, policy: ZeroDivisionPolicy) -> Self {
        let amounts: Vec<(String, f64)> = tickers
            .into_iter()
            .map(|ticker| {
                let amount = invested.get(&ticker).copied().unwrap_or(0.0);
                (ticker, amount)
            })
            .collect();
        let total: f64 = amounts.iter().map(|(_, amount)| amount).sum();
        let slices = amounts
            .into_iter()
            .enumerate()
            .map(|(index, (ticker, amount))| Slice {
                ticker,
                amount,
                color: PALETTE[index % PALETTE.len()],
                share: share_of(amount, total, policy),
            })
            .collect();
        Self { slices, total }
    }

    #[must_use]
    pub fn slice(&self, ticker: &str) -> Option<&Slice> {
        self.slices.iter().find(|slice| slice.ticker == ticker)
    }
}

/// Fetch the traded tickers, then the invested amount per ticker.
///
/// # Errors
///
/// Any gateway error from either call.
pub async fn load(api: &PeaApi, policy: ZeroDivisionPolicy) -> Result<AllocationChart, ApiError> {
    let tickers = api.tickers().await?;
    let invested = api.invested_by_ticker().await?;
    Ok(AllocationChart::build(tickers, &invested, policy))
}

#[cfg(test)]
#[path = "allocation_chart_test.rs"]
mod tests;
