use clap::{Parser, Subcommand, ValueEnum};
use pulse_client::{Period, Strategy};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing
    #[arg(long, value_enum, ignore_case = true, default_value_t = TraceLevel::INFO, global = true)]
    pub trace: TraceLevel,

    /// Base URL of the MarketPulse API; overrides PULSE_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Today's top market movers.
    Home,

    /// Scroll the top stocks across the terminal.
    Tape {
        /// Visible width in characters.
        #[arg(long, default_value_t = 80)]
        width: usize,

        /// Number of scroll steps before exiting.
        #[arg(long, default_value_t = 200)]
        ticks: usize,
    },

    /// Next-day prediction, sentiment and price history for a company.
    Predict {
        /// Company name or ticker.
        #[arg(default_value = "RELIANCE.NS")]
        query: String,

        /// Historical range of the price chart.
        #[arg(long, value_enum, default_value_t)]
        period: Period,

        /// Pick among search matches and change the range interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Normalized performance of 2 to 4 tickers.
    Compare {
        /// Comma-separated tickers.
        #[arg(default_value = "AAPL,MSFT,TSLA")]
        tickers: String,
    },

    /// Volatility, beta, Sharpe/Sortino and a Monte Carlo projection.
    Risk {
        /// Company name or ticker.
        #[arg(default_value = "RELIANCE.NS")]
        query: String,

        /// Pick among search matches interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Recent headlines and their overall sentiment.
    News { ticker: String },

    /// Backtest a trading strategy on one ticker.
    Strategy {
        ticker: String,

        #[arg(long, value_enum, default_value_t)]
        strategy: Strategy,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<TraceLevel> for log::LevelFilter {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::DEBUG => log::LevelFilter::Debug,
            TraceLevel::INFO => log::LevelFilter::Info,
            TraceLevel::WARN => log::LevelFilter::Warn,
            TraceLevel::ERROR => log::LevelFilter::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn predict_defaults() {
        let cli = Cli::parse_from(["pulse", "predict", "apple"]);
        assert_eq!(cli.trace, TraceLevel::INFO);
        match cli.command {
            Commands::Predict {
                query,
                period,
                interactive,
            } => {
                assert_eq!(query, "apple");
                assert_eq!(period, Period::Year1);
                assert!(!interactive);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "pulse",
            "strategy",
            "AAPL",
            "--strategy",
            "macd",
            "--trace",
            "DEBUG",
            "--api-url",
            "http://localhost:9000",
        ]);
        assert_eq!(cli.trace, TraceLevel::DEBUG);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        assert!(matches!(
            cli.command,
            Commands::Strategy {
                strategy: Strategy::Macd,
                ..
            }
        ));
    }

    #[test]
    fn period_names() {
        let cli = Cli::parse_from(["pulse", "predict", "AAPL", "--period", "30d"]);
        assert!(matches!(
            cli.command,
            Commands::Predict {
                period: Period::Days30,
                ..
            }
        ));
    }
}
