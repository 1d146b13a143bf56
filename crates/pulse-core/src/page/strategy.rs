//! Strategy backtesting and the price/signal join behind its chart.
use super::normalize_ticker;
use crate::state::{PageState, ViewState};
use pulse_client::prelude::*;
use std::collections::HashMap;

const BACKTEST_FAILED: &str = "Failed to run backtest.";

/// One price row with the signal (if any) fired on that date.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedPoint {
    pub date: String,
    pub close: f64,
    pub kind: Option<SignalKind>,
    pub signal_price: Option<f64>,
}

/// Left join of `prices` onto `signals` by date string.
///
/// Every price row yields exactly one point, in price order. When several
/// signals share a date the later one in `signals` wins.
pub fn join_signals(prices: &[PricePoint], signals: &[Signal]) -> Vec<CombinedPoint> {
    let by_date: HashMap<&str, &Signal> = signals.iter().map(|s| (s.date.as_str(), s)).collect();

    prices
        .iter()
        .map(|p| {
            let signal = by_date.get(p.date.as_str());
            CombinedPoint {
                date: p.date.clone(),
                close: p.close,
                kind: signal.map(|s| s.kind),
                signal_price: signal.map(|s| s.price),
            }
        })
        .collect()
}

/// A finished backtest ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestView {
    pub ticker: String,
    pub strategy: Strategy,
    pub metrics: BacktestMetrics,
    pub points: Vec<CombinedPoint>,
}

impl BacktestView {
    pub fn from_response(ticker: String, strategy: Strategy, response: BacktestResponse) -> Self {
        let points = join_signals(&response.price_data, &response.backtest_results.signals);
        Self {
            ticker,
            strategy,
            metrics: response.backtest_results.metrics,
            points,
        }
    }

    pub fn signal_count(&self) -> usize {
        self.points.iter().filter(|p| p.kind.is_some()).count()
    }
}

#[derive(Debug, Default)]
pub struct StrategyPage {
    state: PageState<BacktestView>,
    strategy: Strategy,
}

impl StrategyPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState<BacktestView> {
        self.state.view()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Backtest the selected strategy. Server-side rejections carry their own
    /// explanation, which is shown as-is.
    pub async fn run<A: MarketApi>(&mut self, api: &A, ticker: &str) {
        let ticker = match normalize_ticker(ticker) {
            Ok(ticker) => ticker,
            Err(e) => return self.state.reject(e.to_string()),
        };
        let strategy = self.strategy;

        let ticket = self.state.begin();
        log::debug!("backtesting {strategy} on {ticker}");
        let result = match api.backtest(&ticker, strategy).await {
            Ok(response) => Ok(BacktestView::from_response(ticker, strategy, response)),
            Err(e) => {
                log::error!("backtest of {strategy} on {ticker} failed: {e}");
                Err(e.detail().unwrap_or(BACKTEST_FAILED).to_string())
            }
        };
        self.state.settle(ticket, result);
    }
}
