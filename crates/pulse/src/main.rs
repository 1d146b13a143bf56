use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands::*};
use config::Config;
use dotenv::dotenv;
use pulse_client::prelude::build_client;

mod cli;
mod commands;
mod config;
mod ui;

fn preprocess(level: log::LevelFilter) {
    dotenv().ok();
    init_logger(level);
}

/// `--trace` sets the baseline; `RUST_LOG` refines it.
fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    preprocess(cli.trace.into());
    log::trace!("Command line input recorded: {cli:#?}");

    let config = Config::from_env(cli.api_url.as_deref());
    let client = build_client(&config.api_url, &config.user_agent)?;
    log::debug!("using API at {}", client.base_url());

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    // cli framework:
    // "> pulse <COMMAND>"
    match &cli.command {
        // "> pulse home"
        Home => commands::home(&client).await?,

        // "> pulse tape [--width N] [--ticks N]"
        Tape { width, ticks } => commands::tape(&client, *width, *ticks).await?,

        // "> pulse predict <QUERY> [--period 30d|6mo|1y|5y|max] [--interactive]"
        Predict {
            query,
            period,
            interactive,
        } => commands::predict(&client, query, *period, *interactive).await?,

        // "> pulse compare AAPL,MSFT,TSLA"
        Compare { tickers } => commands::compare(&client, tickers).await?,

        // "> pulse risk <QUERY> [--interactive]"
        Risk { query, interactive } => commands::risk(&client, query, *interactive).await?,

        // "> pulse news <TICKER>"
        News { ticker } => commands::news(&client, ticker).await?,

        // "> pulse strategy <TICKER> [--strategy rsi|macd]"
        Strategy { ticker, strategy } => commands::strategy(&client, ticker, *strategy).await?,
    }

    Ok(())
}
