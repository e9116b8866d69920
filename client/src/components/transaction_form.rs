//! New-transaction entry with ticker autocomplete.

use chrono::NaiveDate;

use super::form_error::{FormError, require};
use crate::error::ApiError;
use crate::net::api::PeaApi;
use crate::net::types::{NewTransaction, TickerDirectory, Transaction, TransactionKind};

/// Maximum number of autocomplete suggestions.
pub const MAX_SUGGESTIONS: usize = 8;

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub kind: String,
    pub ticker: String,
    pub quantity: String,
    pub price: String,
    /// `YYYY-MM-DD`.
    pub date_of: String,
}

impl TransactionForm {
    /// Parse and check every field.
    ///
    /// `directory` maps display names to symbols; a ticker typed as a display
    /// name is replaced by its symbol.
    ///
    /// # Errors
    ///
    /// `Required`, `Invalid` or `NotPositive` naming the first bad field.
    pub fn validate(&self, directory: &TickerDirectory) -> Result<NewTransaction, FormError> {
        let kind: TransactionKind = require("type", &self.kind)?
            .parse()
            .map_err(|reason| FormError::Invalid { field: "type", reason })?;
        let ticker = resolve_ticker(directory, require("ticker", &self.ticker)?);

        let quantity: i64 = require("quantity", &self.quantity)?
            .parse()
            .map_err(|e: std::num::ParseIntError| FormError::Invalid { field: "quantity", reason: e.to_string() })?;
        if quantity <= 0 {
            return Err(FormError::NotPositive { field: "quantity" });
        }

        let price: f64 = require("price", &self.price)?
            .replace(',', ".")
            .parse()
            .map_err(|e: std::num::ParseFloatError| FormError::Invalid { field: "price", reason: e.to_string() })?;
        if !price.is_finite() || price <= 0.0 {
            return Err(FormError::NotPositive { field: "price" });
        }

        let date_of = NaiveDate::parse_from_str(require("date", &self.date_of)?, "%Y-%m-%d")
            .map_err(|e| FormError::Invalid { field: "date", reason: e.to_string() })?;

        Ok(NewTransaction { kind, ticker, quantity, price, date_of })
    }

    /// Validate and create the transaction.
    ///
    /// # Errors
    ///
    /// Validation errors before sending; `Rejected` with the server detail
    /// (e.g. unknown ticker) when the API refuses it.
    pub async fn submit(&self, api: &PeaApi, directory: &TickerDirectory) -> Result<Transaction, FormError> {
        let payload = self.validate(directory)?;
        match api.create_transaction(&payload).await {
            Ok(created) => Ok(created),
            Err(e @ ApiError::Api { .. }) => Err(FormError::Rejected(e.user_message())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Map a display name to its symbol; anything else is taken as a symbol.
#[must_use]
pub fn resolve_ticker(directory: &TickerDirectory, input: &str) -> String {
    let input = input.trim();
    directory
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map_or_else(|| input.to_uppercase(), |(_, symbol)| symbol.clone())
}

/// Directory entries whose name or symbol contains `query`, case-insensitive.
///
/// Returns `(display name, symbol)` pairs in name order, at most
/// [`MAX_SUGGESTIONS`] of them. A blank query suggests nothing.
#[must_use]
pub fn suggest<'a>(directory: &'a TickerDirectory, query: &str) -> Vec<(&'a str, &'a str)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    directory
        .iter()
        .filter(|(name, symbol)| name.to_lowercase().contains(&needle) || symbol.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|(name, symbol)| (name.as_str(), symbol.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "transaction_form_test.rs"]
mod tests;
