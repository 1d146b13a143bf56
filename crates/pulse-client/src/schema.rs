use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn usd() -> String {
    "USD".to_string()
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Charts
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Labelled-series payload shared by every chart the API returns.
///
/// ```json
/// {
///     "labels": ["2024-01-02", "2024-01-03"],
///     "datasets": [
///         {
///             "label": "Closing Price",
///             "data": [185.64, 184.25],
///             "borderColor": "#58a6ff",
///             "fill": true
///         }
///     ]
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Chart {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<Option<f64>>,

    /// `true`/`false` for line fills, `"-1"`/`"start"` for confidence bands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Value>,

    /// Styling keys (colours, tension, point radius); carried, never rendered.
    #[serde(flatten)]
    pub style: Map<String, Value>,
}

impl Dataset {
    /// Last non-null point of the series.
    pub fn last(&self) -> Option<f64> {
        self.data.iter().rev().find_map(|v| *v)
    }
}

impl Chart {
    /// Band charts (Monte Carlo confidence intervals) are the ones whose
    /// datasets carry a `fill` key at all, whatever its value.
    pub fn is_band_chart(&self) -> bool {
        self.datasets.iter().any(|d| d.fill.is_some())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Quotes
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// One row of `/market/top-stocks`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TopStock {
    pub ticker: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default = "usd")]
    pub currency: String,
}

/// `/live/{ticker}`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LiveQuote {
    pub ticker: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    #[serde(default = "usd")]
    pub currency: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub key_stats: Option<KeyStats>,
    #[serde(default)]
    pub intraday_chart: Chart,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
    pub open: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub market_cap: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub volume: Option<f64>,
    pub average_volume: Option<f64>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Search
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// `/search/{query}`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Analysis & news
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// `/analyze/{ticker}?period=`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Analysis {
    pub ticker: String,
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub chart_data: ChartData,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    #[serde(default)]
    pub price_chart: Chart,
}

/// Every field is optional: the sentiment service degrades to an empty
/// headline list and a zero score when the news provider is down.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Sentiment {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub average_sentiment: Option<f64>,
    #[serde(default)]
    pub headlines: Vec<Headline>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// `/news/{ticker}`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewsReport {
    #[serde(default)]
    pub ticker: Option<String>,
    pub sentiment: Sentiment,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Risk
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// `/risk/{ticker}`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RiskReport {
    pub ticker: String,
    pub risk_metrics: RiskMetrics,
    #[serde(default)]
    pub monte_carlo_chart: Chart,
}

/// Volatilities are percentages; ratios are unitless.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RiskMetrics {
    #[serde(default)]
    pub daily_volatility: Option<f64>,
    #[serde(default)]
    pub annualized_volatility: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub sharpe_ratio: Option<f64>,
    #[serde(default)]
    pub sortino_ratio: Option<f64>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Strategy backtest
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// `/strategy/backtest/{ticker}?strategy=`
///
/// ```json
/// {
///     "backtest_results": {
///         "signals": [{ "date": "2024-03-04", "type": "BUY", "price": 172.1 }],
///         "metrics": {
///             "strategy_name": "RSI (30/70)",
///             "initial_capital": 100000.0,
///             "final_value": 104210.55,
///             "total_return_pct": 4.21
///         }
///     },
///     "price_data": [{ "Date": "2024-03-04", "Close": 172.1 }]
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BacktestResponse {
    pub backtest_results: BacktestResults,
    #[serde(default)]
    pub price_data: Vec<PricePoint>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BacktestResults {
    pub metrics: BacktestMetrics,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BacktestMetrics {
    pub strategy_name: String,
    pub initial_capital: f64,
    pub final_value: f64,
    pub total_return_pct: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Signal {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub price: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Close")]
    pub close: f64,
}
