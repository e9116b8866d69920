//! Portfolio value over a selectable period.

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::net::types::{HistoryPoint, Period};
use crate::util::metrics::{Percent, Trend, ZeroDivisionPolicy, percent_change};

/// Headline numbers of a history series.
#[derive(Clone, Debug, PartialEq)]
pub struct HistorySummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub first: f64,
    pub last: f64,
    pub min: f64,
    pub max: f64,
    pub change: f64,
    pub change_percent: Percent,
    pub trend: Trend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryChart {
    pub period: Period,
    pub points: Vec<HistoryPoint>,
    pub summary: Option<HistorySummary>,
}

impl HistoryChart {
    #[must_use]
    pub fn build(period: Period, points: Vec<HistoryPoint>, policy: ZeroDivisionPolicy) -> Self {
        let summary = summarize(&points, policy);
        Self { period, points, summary }
    }

    /// A different period needs a new fetch; the same one does not.
    #[must_use]
    pub fn needs_refetch(&self, period: Period) -> bool {
        self.period != period
    }
}

/// Summarize a series in server order. `None` for an empty series.
#[must_use]
pub fn summarize(points: &[HistoryPoint], policy: ZeroDivisionPolicy) -> Option<HistorySummary> {
    let first = points.first()?;
    let last = points.last()?;
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.value), hi.max(p.value)));
    let change = last.value - first.value;
    Some(HistorySummary {
        start: first.date,
        end: last.date,
        first: first.value,
        last: last.value,
        min,
        max,
        change,
        change_percent: percent_change(last.value, first.value, policy),
        trend: Trend::from_delta(change),
    })
}

/// # Errors
///
/// Any gateway error.
pub async fn load(api: &PeaApi, period: Period, policy: ZeroDivisionPolicy) -> Result<HistoryChart, ApiError> {
    let points = api.total_history(period).await?;
    Ok(HistoryChart::build(period, points, policy))
}

#[cfg(test)]
#[path = "history_chart_test.rs"]
mod tests;
