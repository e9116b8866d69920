//! Typed calls for every endpoint the client uses.
//!
//! Reads go through `Gateway::get_json` and share the response cache;
//! writes go through `Gateway::send_json` and drop it. Login and register
//! are the only public calls.

use chrono::NaiveDate;

use super::gateway::{Gateway, RequestOptions};
use super::types::{
    DailyQuantity, HistoryPoint, InvestedByTicker, NewTransaction, Period, RegisterRequest, RegisterResponse,
    TickerDirectory, TokenResponse, Transaction, UserProfile,
};
use crate::error::ApiError;
use crate::state::navigation::Route;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const ME_PATH: &str = "/api/user/me";
pub const SUBSCRIPTION_PATH: &str = "/api/user/subscription";
pub const TRANSACTIONS_PATH: &str = "/api/transaction/";
pub const TRANSACTION_COUNT_PATH: &str = "/api/transaction/total";
pub const TOTAL_PATH: &str = "/api/transaction/price/total";
pub const TOTAL_INVESTED_PATH: &str = "/api/transaction/price/total_invest";
pub const TOTAL_HISTORY_PATH: &str = "/api/transaction/price/total_history";
pub const TICKERS_PATH: &str = "/api/transaction/tickers/";
pub const INVESTED_BY_TICKER_PATH: &str = "/api/transaction/ticker/price/";
pub const TICKER_DIRECTORY_PATH: &str = "/api/ticker/";

fn transaction_endpoint(id: i64) -> String {
    format!("/api/transaction/{id}")
}

fn daily_quantity_endpoint(ticker: &str) -> String {
    format!("/api/transaction/ticker/daily-quantity/{ticker}")
}

/// Format a date the way `date_param` expects it.
#[must_use]
pub fn date_param(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One page request of the transaction list.
///
/// The API names the offset parameter `page`; it carries
/// `page_index * page_size`, not the page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionQuery {
    pub user_id: Option<i64>,
    pub page_index: u32,
    pub page_size: u32,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self { user_id: None, page_index: 0, page_size: 10 }
    }
}

impl TransactionQuery {
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index) * u64::from(self.page_size)
    }

    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::with_capacity(3);
        if let Some(user_id) = self.user_id {
            query.push(("user_id".to_owned(), user_id.to_string()));
        }
        query.push(("page_size".to_owned(), self.page_size.to_string()));
        query.push(("page".to_owned(), self.offset().to_string()));
        query
    }
}

/// Typed facade over the gateway.
#[derive(Clone, Debug)]
pub struct PeaApi {
    gateway: Gateway,
}

impl PeaApi {
    #[must_use]
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Exchange credentials for a token and store it in the session.
    ///
    /// # Errors
    ///
    /// `Api` when the server rejects the credentials, `Storage` when the
    /// token cannot be persisted.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let options = RequestOptions::post_form(vec![
            ("username".to_owned(), username.to_owned()),
            ("password".to_owned(), password.to_owned()),
        ]);
        let text = self.gateway.send_public(LOGIN_PATH, options).await?.text().await?;
        let token: TokenResponse = serde_json::from_str(&text)?;
        self.gateway.session().set(&token.access_token)?;
        self.gateway.cache().invalidate_all();
        tracing::info!(username, "logged in");
        Ok(token)
    }

    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// `Api` with the server `detail` (e.g. duplicate username).
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let options = RequestOptions::post_json(serde_json::to_value(request)?);
        let text = self.gateway.send_public(REGISTER_PATH, options).await?.text().await?;
        if text.trim().is_empty() {
            return Ok(RegisterResponse::default());
        }
        let response: RegisterResponse = serde_json::from_str(&text)?;
        tracing::info!(username = %request.username, id = ?response.id, "account registered");
        Ok(response)
    }

    /// Forget the credential and return to the login view.
    ///
    /// # Errors
    ///
    /// `Storage` when the session file cannot be rewritten.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.gateway.session().clear()?;
        self.gateway.cache().invalidate_all();
        self.gateway.navigator().navigate(Route::Login);
        tracing::info!("logged out");
        Ok(())
    }

    // =========================================================================
    // USER
    // =========================================================================

    /// # Errors
    ///
    /// Any gateway error.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.gateway.get_json(ME_PATH, Vec::new()).await
    }

    /// Plan identifier of the current user.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn subscription(&self) -> Result<String, ApiError> {
        let value: serde_json::Value = self.gateway.get_json(SUBSCRIPTION_PATH, Vec::new()).await?;
        Ok(match value {
            serde_json::Value::String(plan) => plan,
            other => other.to_string(),
        })
    }

    // =========================================================================
    // TRANSACTIONS
    // =========================================================================

    /// One page of transactions, in server order.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn transactions(&self, query: TransactionQuery) -> Result<Vec<Transaction>, ApiError> {
        self.gateway.get_json(TRANSACTIONS_PATH, query.to_query()).await
    }

    /// # Errors
    ///
    /// Any gateway error.
    pub async fn transaction_count(&self) -> Result<u64, ApiError> {
        self.gateway.get_json(TRANSACTION_COUNT_PATH, Vec::new()).await
    }

    /// # Errors
    ///
    /// `Api` with status 404 for an unknown id.
    pub async fn transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        self.gateway.get_json(&transaction_endpoint(id), Vec::new()).await
    }

    /// # Errors
    ///
    /// `Api` with status 400 when the ticker is unknown to the server.
    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
        let options = RequestOptions::post_json(serde_json::to_value(transaction)?);
        let created: Transaction = self.gateway.send_json(TRANSACTIONS_PATH, options).await?;
        tracing::info!(id = created.id, ticker = %created.ticker, kind = %created.kind, "transaction created");
        Ok(created)
    }

    // =========================================================================
    // PORTFOLIO
    // =========================================================================

    /// Portfolio value today, or on `date` when given.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn total(&self, date: Option<NaiveDate>) -> Result<f64, ApiError> {
        let query = match date {
            Some(date) => vec![("date_param".to_owned(), date_param(date))],
            None => Vec::new(),
        };
        self.gateway.get_json(TOTAL_PATH, query).await
    }

    /// # Errors
    ///
    /// Any gateway error.
    pub async fn total_invested(&self) -> Result<f64, ApiError> {
        self.gateway.get_json(TOTAL_INVESTED_PATH, Vec::new()).await
    }

    /// # Errors
    ///
    /// Any gateway error.
    pub async fn total_history(&self, period: Period) -> Result<Vec<HistoryPoint>, ApiError> {
        let query = vec![("period".to_owned(), period.as_query().to_owned())];
        self.gateway.get_json(TOTAL_HISTORY_PATH, query).await
    }

    /// Symbols the user has traded.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn tickers(&self) -> Result<Vec<String>, ApiError> {
        self.gateway.get_json(TICKERS_PATH, Vec::new()).await
    }

    /// # Errors
    ///
    /// Any gateway error.
    pub async fn invested_by_ticker(&self) -> Result<InvestedByTicker, ApiError> {
        self.gateway.get_json(INVESTED_BY_TICKER_PATH, Vec::new()).await
    }

    /// Every known ticker keyed by display name.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn ticker_directory(&self) -> Result<TickerDirectory, ApiError> {
        self.gateway.get_json(TICKER_DIRECTORY_PATH, Vec::new()).await
    }

    /// # Errors
    ///
    /// Any gateway error.
    pub async fn daily_quantity(&self, ticker: &str) -> Result<Vec<DailyQuantity>, ApiError> {
        self.gateway.get_json(&daily_quantity_endpoint(ticker), Vec::new()).await
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
