//! `pea history`, `allocation`, `tickers` and `holdings`.

use clap::Subcommand;
use pea_client::components::allocation_chart;
use pea_client::components::history_chart;
use pea_client::components::transaction_form::suggest;
use pea_client::net::types::Period;
use pea_client::pages::transactions::load_directory;

use super::Context;
use crate::CliError;
use crate::render;

#[derive(Subcommand, Debug)]
pub enum PortfolioCommand {
    /// Portfolio value over a period.
    History {
        #[arg(long, short, default_value_t = Period::default())]
        period: Period,
    },
    /// Invested amount per traded ticker.
    Allocation,
    /// Traded tickers, or directory matches for a query.
    Tickers { query: Option<String> },
    /// Daily cumulative quantity held of one ticker.
    Holdings { ticker: String },
}

pub async fn run(ctx: &Context, command: PortfolioCommand) -> Result<(), CliError> {
    let policy = ctx.config.zero_division;
    match command {
        PortfolioCommand::History { period } => {
            let chart = history_chart::load(&ctx.api, period, policy).await?;
            ctx.emit(chart.points.as_slice(), |_| render::history(&chart))?;
        }
        PortfolioCommand::Allocation => {
            let chart = allocation_chart::load(&ctx.api, policy).await?;
            println!("{}", render::allocation(&chart));
        }
        PortfolioCommand::Tickers { query: Some(query) } => {
            let directory = load_directory(&ctx.api).await;
            println!("{}", render::ticker_suggestions(&suggest(&directory, &query)));
        }
        PortfolioCommand::Tickers { query: None } => {
            for ticker in ctx.api.tickers().await? {
                println!("{ticker}");
            }
        }
        PortfolioCommand::Holdings { ticker } => {
            let days = ctx.api.daily_quantity(&ticker).await?;
            ctx.emit(days.as_slice(), |days| render::holdings(&ticker, days))?;
        }
    }
    Ok(())
}
