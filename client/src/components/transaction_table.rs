//! Paged transaction list with client-side sort and ticker filter.
//!
//! DESIGN
//! ======
//! Pagination is server-driven: one request per page, `page` carrying the
//! row offset. Sorting and filtering only reorder or hide the rows of the
//! loaded page. The server exposes no page count here, so "next page" is
//! offered whenever the current page came back full.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::net::api::{PeaApi, TransactionQuery};
use crate::net::types::Transaction;

pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    DateOf,
    Ticker,
    Kind,
    Quantity,
    Price,
    Amount,
}

impl SortColumn {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateOf => "date_of",
            Self::Ticker => "ticker",
            Self::Kind => "type",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::Amount => "amount",
        }
    }

    fn compare(self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::DateOf => a.date_of.cmp(&b.date_of),
            Self::Ticker => a.ticker.cmp(&b.ticker),
            Self::Kind => a.kind.cmp(&b.kind),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::Price => a.price.total_cmp(&b.price),
            Self::Amount => a.amount().total_cmp(&b.amount()),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date_of" | "date" => Ok(Self::DateOf),
            "ticker" => Ok(Self::Ticker),
            "type" | "kind" => Ok(Self::Kind),
            "quantity" | "qty" => Ok(Self::Quantity),
            "price" => Ok(Self::Price),
            "amount" | "total" => Ok(Self::Amount),
            other => Err(format!("unknown sort column '{other}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub descending: bool,
}

impl Default for Sort {
    fn default() -> Self {
        Self { column: SortColumn::DateOf, descending: true }
    }
}

/// Pagination, sort and filter selection of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub user_id: Option<i64>,
    pub page_index: u32,
    page_size: u32,
    pub sort: Sort,
    /// Case-insensitive substring matched against the ticker.
    pub filter: String,
}

impl Default for TableState {
    fn default() -> Self {
        Self { user_id: None, page_index: 0, page_size: DEFAULT_PAGE_SIZE, sort: Sort::default(), filter: String::new() }
    }
}

impl TableState {
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Switch page size and go back to the first page.
    ///
    /// Returns `false`, leaving the state alone, for sizes outside [`PAGE_SIZES`].
    pub fn set_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZES.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page_index = 0;
        true
    }

    #[must_use]
    pub fn query(&self) -> TransactionQuery {
        TransactionQuery { user_id: self.user_id, page_index: self.page_index, page_size: self.page_size }
    }
}

/// One loaded page of rows, kept in server order.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionPage {
    pub state: TableState,
    pub rows: Vec<Transaction>,
}

impl TransactionPage {
    /// Rows after the ticker filter and the sort.
    #[must_use]
    pub fn visible(&self) -> Vec<&Transaction> {
        let needle = self.state.filter.trim().to_lowercase();
        let mut rows: Vec<&Transaction> = self
            .rows
            .iter()
            .filter(|tx| needle.is_empty() || tx.ticker.to_lowercase().contains(&needle))
            .collect();
        let Sort { column, descending } = self.state.sort;
        rows.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            if descending { ordering.reverse() } else { ordering }
        });
        rows
    }

    #[must_use]
    pub fn can_previous(&self) -> bool {
        self.state.page_index > 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        usize::try_from(self.state.page_size).is_ok_and(|size| self.rows.len() >= size)
    }

    /// State for the following page, if one may exist.
    #[must_use]
    pub fn next_state(&self) -> Option<TableState> {
        self.can_next().then(|| TableState { page_index: self.state.page_index + 1, ..self.state.clone() })
    }

    #[must_use]
    pub fn previous_state(&self) -> Option<TableState> {
        self.can_previous().then(|| TableState { page_index: self.state.page_index - 1, ..self.state.clone() })
    }
}

/// Fetch the page `state` points at.
///
/// # Errors
///
/// Any gateway error.
pub async fn load(api: &PeaApi, state: TableState) -> Result<TransactionPage, ApiError> {
    let rows = api.transactions(state.query()).await?;
    tracing::debug!(page_index = state.page_index, rows = rows.len(), "transaction page loaded");
    Ok(TransactionPage { state, rows })
}

#[cfg(test)]
#[path = "transaction_table_test.rs"]
mod tests;
