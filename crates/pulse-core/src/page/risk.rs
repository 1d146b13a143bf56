//! Risk assessment: volatility, beta, risk-adjusted returns and a Monte Carlo
//! projection for one ticker.
use super::resolve::{fallback_message, resolve, validate_query, Resolved};
use crate::state::{PageState, ViewState};
use pulse_client::prelude::*;

#[derive(Debug, Default)]
pub struct RiskPage {
    state: PageState<RiskReport>,
    candidates: Vec<SearchHit>,
}

impl RiskPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState<RiskReport> {
        self.state.view()
    }

    pub fn candidates(&self) -> &[SearchHit] {
        &self.candidates
    }

    pub fn is_choosing(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Resolve `query`; without matches the input is assessed directly.
    pub async fn search<A: MarketApi>(&mut self, api: &A, query: &str) {
        self.candidates.clear();
        let query = match validate_query(query) {
            Ok(query) => query,
            Err(e) => return self.state.reject(e.to_string()),
        };

        let ticket = self.state.begin();
        let resolved = resolve(api, query).await;
        if !self.state.is_current(ticket) {
            return;
        }
        match resolved {
            Ok(Resolved::Candidates(hits)) => {
                self.state.reset();
                self.candidates = hits;
            }
            Ok(Resolved::Fallback(raw)) => self.assess(api, &raw, Some(&raw)).await,
            Err(message) => {
                self.state.settle(ticket, Err(message));
            }
        }
    }

    pub async fn select<A: MarketApi>(&mut self, api: &A, ticker: &str) {
        self.assess(api, ticker, None).await
    }

    async fn assess<A: MarketApi>(&mut self, api: &A, ticker: &str, fallback: Option<&str>) {
        let ticker = ticker.trim().to_uppercase();
        self.candidates.clear();
        let ticket = self.state.begin();
        log::debug!("assessing risk of {ticker}");

        let result = api.risk(&ticker).await.map_err(|e| {
            log::error!("risk assessment of {ticker} failed: {e}");
            let message = format!("Failed to fetch risk assessment for {ticker}.");
            match fallback {
                Some(query) => fallback_message(query, &message),
                None => message,
            }
        });
        self.state.settle(ticket, result);
    }
}

/// Title of the simulation chart.
pub fn monte_carlo_title(ticker: &str) -> String {
    format!("90-Day Monte Carlo Simulation for {ticker}")
}
