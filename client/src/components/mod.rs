//! View models behind every dashboard component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns one `load` function that issues its gateway calls,
//! joins them, and derives at most a simple metric. Nothing here holds state
//! across calls; the pollers in `crate::poll` decide when to reload and the
//! front end decides how to render.

pub mod allocation_chart;
pub mod change_card;
pub mod form_error;
pub mod history_chart;
pub mod invested_card;
pub mod login_form;
pub mod profile_card;
pub mod register_form;
pub mod summary_card;
pub mod total_summary;
pub mod transaction_form;
pub mod transaction_table;

use chrono::NaiveDate;

/// Current calendar date in UTC, the reference the API uses for totals.
#[must_use]
pub fn today_utc() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// The day before `today`.
#[must_use]
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}
