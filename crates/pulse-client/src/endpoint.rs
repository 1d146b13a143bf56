use crate::error::{ApiError, Result};
use clap::ValueEnum;
use std::fmt;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Selectable parameters
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Historical window for `/analyze`.
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Period {
    #[value(name = "30d")]
    Days30,
    #[value(name = "6mo")]
    Months6,
    #[default]
    #[value(name = "1y")]
    Year1,
    #[value(name = "5y")]
    Years5,
    #[value(name = "max")]
    Max,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Days30,
        Period::Months6,
        Period::Year1,
        Period::Years5,
        Period::Max,
    ];

    /// Query-string value understood by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Days30 => "30d",
            Period::Months6 => "6mo",
            Period::Year1 => "1y",
            Period::Years5 => "5y",
            Period::Max => "max",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backtest strategy run by `/strategy/backtest`.
#[derive(ValueEnum, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// RSI 30/70 mean reversion
    #[default]
    Rsi,
    /// MACD / signal line crossover
    Macd,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Rsi => "rsi",
            Strategy::Macd => "macd",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Rsi => "RSI Strategy (30/70)",
            Strategy::Macd => "MACD Crossover Strategy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Endpoints
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Repeated query key carrying each ticker of a comparison. The route only
/// reads the bracketed form.
pub const COMPARE_KEY: &str = "tickers[]";

/// Every route the dashboard reads from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint<'a> {
    /// `/market/top-stocks`
    TopStocks,
    /// `/search/{query}`
    Search(&'a str),
    /// `/analyze/{ticker}?period=`
    Analyze { ticker: &'a str, period: Period },
    /// `/live/{ticker}`
    Live(&'a str),
    /// `/compare/?tickers[]=..&tickers[]=..`
    Compare(&'a [String]),
    /// `/risk/{ticker}`
    Risk(&'a str),
    /// `/news/{ticker}`
    News(&'a str),
    /// `/strategy/backtest/{ticker}?strategy=`
    Backtest { ticker: &'a str, strategy: Strategy },
}

impl Endpoint<'_> {
    /// Join the endpoint onto `base`, percent-encoding path segments.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.set_query(None);

        // path
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::NotABase(base.to_string()))?;
            segments.pop_if_empty();
            match *self {
                Endpoint::TopStocks => {
                    segments.extend(["market", "top-stocks"]);
                }
                Endpoint::Search(query) => {
                    segments.extend(["search", query]);
                }
                Endpoint::Analyze { ticker, .. } => {
                    segments.extend(["analyze", ticker]);
                }
                Endpoint::Live(ticker) => {
                    segments.extend(["live", ticker]);
                }
                // the route is mounted with a trailing slash
                Endpoint::Compare(_) => {
                    segments.extend(["compare", ""]);
                }
                Endpoint::Risk(ticker) => {
                    segments.extend(["risk", ticker]);
                }
                Endpoint::News(ticker) => {
                    segments.extend(["news", ticker]);
                }
                Endpoint::Backtest { ticker, .. } => {
                    segments.extend(["strategy", "backtest", ticker]);
                }
            }
        }

        // query
        match *self {
            Endpoint::Analyze { period, .. } => {
                url.query_pairs_mut().append_pair("period", period.as_str());
            }
            Endpoint::Compare(tickers) => {
                let mut pairs = url.query_pairs_mut();
                for ticker in tickers {
                    pairs.append_pair(COMPARE_KEY, ticker);
                }
            }
            Endpoint::Backtest { strategy, .. } => {
                url.query_pairs_mut().append_pair("strategy", strategy.as_str());
            }
            _ => {}
        }

        Ok(url)
    }
}
