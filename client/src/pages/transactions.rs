//! Transactions page: the paged table and the entry form.

use crate::components::form_error::FormError;
use crate::components::transaction_form::TransactionForm;
use crate::components::transaction_table::{self, TableState, TransactionPage};
use crate::net::api::PeaApi;
use crate::net::types::{TickerDirectory, Transaction};
use crate::state::loadable::Loadable;

/// Load the page `state` points at; failures are logged and leave it loading.
pub async fn load_table(api: &PeaApi, state: TableState) -> Loadable<TransactionPage> {
    Loadable::Loading.apply("transaction_table", transaction_table::load(api, state).await)
}

/// Ticker directory for autocomplete. Empty when it cannot be fetched, which
/// only disables suggestions.
pub async fn load_directory(api: &PeaApi) -> TickerDirectory {
    Loadable::Loading
        .apply("ticker_directory", api.ticker_directory().await)
        .into_ready()
        .unwrap_or_default()
}

/// Submit `form`, then reload the first page so the new row shows up.
///
/// # Errors
///
/// Form validation and submission errors; a failed reload after a
/// successful create is reported as `Api`.
pub async fn add_transaction(
    api: &PeaApi,
    form: &TransactionForm,
    directory: &TickerDirectory,
    state: &TableState,
) -> Result<(Transaction, TransactionPage), FormError> {
    let created = form.submit(api, directory).await?;
    tracing::info!(id = created.id, "transaction added; reloading first page");
    let mut first_page = state.clone();
    first_page.page_index = 0;
    let page = transaction_table::load(api, first_page).await?;
    Ok((created, page))
}

#[cfg(test)]
#[path = "transactions_test.rs"]
mod tests;
