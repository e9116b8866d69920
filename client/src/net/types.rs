//! Wire-protocol DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON exactly (`date_of`, `type`, `access_token`)
//! so serde needs no per-field mapping beyond the `type` keyword.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Buy or sell side of a transaction, serialized as the API's French names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "achat")]
    Buy,
    #[serde(rename = "vente")]
    Sell,
}

impl TransactionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "achat",
            Self::Sell => "vente",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "achat" | "buy" => Ok(Self::Buy),
            "vente" | "sell" => Ok(Self::Sell),
            other => Err(format!("unknown transaction type '{other}' (expected 'achat' or 'vente')")),
        }
    }
}

/// A recorded transaction as returned by `/api/transaction/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub ticker: String,
    pub quantity: i64,
    /// Unit price in EUR.
    pub price: f64,
    pub date_of: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub user_id: i64,
}

impl Transaction {
    /// Quantity times unit price.
    #[must_use]
    pub fn amount(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let quantity = self.quantity as f64;
        quantity * self.price
    }
}

/// Payload of `POST /api/transaction/`. The server assigns `id` and `user_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub ticker: String,
    pub quantity: i64,
    pub price: f64,
    pub date_of: NaiveDate,
}

/// Response of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Payload of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// The authenticated user as returned by `/api/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

/// One point of the portfolio value history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Cumulative holding of one ticker on one day.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuantity {
    pub date: NaiveDate,
    pub quantity: i64,
}

/// Ticker symbol → invested amount, from `/api/transaction/ticker/price/`.
pub type InvestedByTicker = BTreeMap<String, f64>;

/// Display name → ticker symbol, from `/api/ticker/`.
pub type TickerDirectory = BTreeMap<String, String>;

/// Body of API error responses.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

/// Selectable range of the history chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
    SevenDays,
    #[default]
    OneMonth,
    ThreeMonths,
    OneYear,
    FiveYears,
}

impl Period {
    pub const ALL: [Self; 5] = [Self::FiveYears, Self::OneYear, Self::ThreeMonths, Self::OneMonth, Self::SevenDays];

    /// Value of the `period` query parameter.
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::OneMonth => "1m",
            Self::ThreeMonths => "3m",
            Self::OneYear => "1a",
            Self::FiveYears => "5a",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SevenDays => "last 7 days",
            Self::OneMonth => "last month",
            Self::ThreeMonths => "last 3 months",
            Self::OneYear => "last year",
            Self::FiveYears => "last 5 years",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7d" | "7j" => Ok(Self::SevenDays),
            "1m" => Ok(Self::OneMonth),
            "3m" => Ok(Self::ThreeMonths),
            "1a" | "1y" => Ok(Self::OneYear),
            "5a" | "5y" => Ok(Self::FiveYears),
            other => Err(format!("unknown period '{other}' (expected 7d, 1m, 3m, 1a or 5a)")),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
