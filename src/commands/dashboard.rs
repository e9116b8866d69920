//! `pea dashboard`: one-shot rendering, or a live view with `--watch`.

use clap::Args;
use pea_client::net::types::Period;
use pea_client::pages::dashboard::{self, DashboardOptions};

use super::Context;
use crate::CliError;
use crate::render;

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// History range: 7d, 1m, 3m, 1a or 5a.
    #[arg(long, short, default_value_t = Period::default())]
    pub period: Period,
    /// Keep refreshing until interrupted.
    #[arg(long, short)]
    pub watch: bool,
}

pub async fn run(ctx: &Context, args: DashboardArgs) -> Result<(), CliError> {
    let options = DashboardOptions { period: args.period, ..DashboardOptions::from_config(&ctx.config) };
    if !args.watch {
        let snapshot = dashboard::load_once(&ctx.api, &options).await;
        println!("{}", render::dashboard(&snapshot));
        return Ok(());
    }
    watch(ctx, options).await
}

async fn watch(ctx: &Context, options: DashboardOptions) -> Result<(), CliError> {
    let mut live = dashboard::mount(&ctx.api, options);
    tracing::info!(period = %live.period(), interval_secs = options.poll_interval.as_secs(), "dashboard mounted");
    println!("{}", render::dashboard(&live.snapshot()));

    loop {
        tokio::select! {
            changed = live.changed() => {
                if !changed {
                    tracing::debug!("all dashboard pollers finished");
                    return Ok(());
                }
                println!("\n{}", render::dashboard(&live.snapshot()));
                if !ctx.api.gateway().session().is_authenticated() {
                    return Ok(());
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                tracing::debug!("interrupted; unmounting dashboard");
                return Ok(());
            }
        }
    }
}
