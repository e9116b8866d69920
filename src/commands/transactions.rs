//! `pea transactions`: the paged table, single rows and the entry form.

use clap::{Args, Subcommand};
use pea_client::components::today_utc;
use pea_client::components::transaction_form::TransactionForm;
use pea_client::components::transaction_table::{
    self, DEFAULT_PAGE_SIZE, PAGE_SIZES, Sort, SortColumn, TableState,
};
use pea_client::pages::transactions;

use super::Context;
use crate::CliError;
use crate::render;

#[derive(Subcommand, Debug)]
pub enum TransactionsCommand {
    /// Show one page of transactions.
    List(ListArgs),
    /// Record a buy or a sell.
    Add(AddArgs),
    /// Show a single transaction.
    Show { id: i64 },
    /// Number of recorded transactions.
    Count,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// One of 10, 20, 50, 100.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
    /// date_of, ticker, type, quantity, price or amount.
    #[arg(long, default_value_t = SortColumn::DateOf)]
    pub sort: SortColumn,
    /// Sort ascending instead of descending.
    #[arg(long)]
    pub asc: bool,
    /// Keep rows whose ticker contains this text.
    #[arg(long, default_value = "")]
    pub filter: String,
    #[arg(long)]
    pub user_id: Option<i64>,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// `achat`/`buy` or `vente`/`sell`.
    #[arg(long = "type")]
    pub kind: String,
    /// Symbol or display name.
    #[arg(long)]
    pub ticker: String,
    #[arg(long)]
    pub quantity: String,
    /// Unit price in EUR; a decimal comma is accepted.
    #[arg(long)]
    pub price: String,
    /// `YYYY-MM-DD`; defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

pub async fn run(ctx: &Context, command: TransactionsCommand) -> Result<(), CliError> {
    match command {
        TransactionsCommand::List(args) => list(ctx, args).await,
        TransactionsCommand::Add(args) => add(ctx, args).await,
        TransactionsCommand::Show { id } => {
            let tx = ctx.api.transaction(id).await?;
            ctx.emit(&tx, render::transaction)
        }
        TransactionsCommand::Count => {
            println!("{}", ctx.api.transaction_count().await?);
            Ok(())
        }
    }
}

/// Table state selected by the list arguments.
///
/// # Errors
///
/// `InvalidArgument` for page 0 or an unsupported page size.
pub fn table_state(args: &ListArgs) -> Result<TableState, CliError> {
    let mut state = TableState::default();
    if !state.set_page_size(args.page_size) {
        return Err(CliError::InvalidArgument(format!(
            "page size {} is not one of {PAGE_SIZES:?}",
            args.page_size
        )));
    }
    let Some(page_index) = args.page.checked_sub(1) else {
        return Err(CliError::InvalidArgument("pages are numbered from 1".to_owned()));
    };
    state.page_index = page_index;
    state.user_id = args.user_id;
    state.sort = Sort { column: args.sort, descending: !args.asc };
    state.filter.clone_from(&args.filter);
    Ok(state)
}

async fn list(ctx: &Context, args: ListArgs) -> Result<(), CliError> {
    let state = table_state(&args)?;
    let page = transaction_table::load(&ctx.api, state).await?;
    ctx.emit(&page.visible(), |_| render::transaction_page(&page))
}

async fn add(ctx: &Context, args: AddArgs) -> Result<(), CliError> {
    let form = TransactionForm {
        kind: args.kind,
        ticker: args.ticker,
        quantity: args.quantity,
        price: args.price,
        date_of: args.date.unwrap_or_else(|| today_utc().to_string()),
    };
    let directory = transactions::load_directory(&ctx.api).await;
    let (created, page) = transactions::add_transaction(&ctx.api, &form, &directory, &TableState::default()).await?;
    println!("added transaction {}", created.id);
    println!("{}", render::transaction_page(&page));
    Ok(())
}
