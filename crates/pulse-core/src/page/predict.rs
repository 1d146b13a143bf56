//! Prediction and analysis dashboard.
//!
//! The page resolves free text to a ticker, then loads the analysis and the
//! live quote together. Requests go through three steps so that the page is
//! never borrowed across an await:
//!
//! 1. `search`/`select`/`change_period` update the state and hand back a
//!    request value carrying a [`Ticket`],
//! 2. `run` performs the I/O against any [`MarketApi`],
//! 3. `commit`/`commit_period` store the outcome if the ticket is still the
//!    newest one.
use super::resolve::{fallback_message, resolve, validate_query, Resolved};
use crate::state::{PageState, Ticket, ViewState};
use futures::future::try_join;
use pulse_client::prelude::*;

/// Everything the dashboard shows for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub analysis: Analysis,
    pub live: LiveQuote,
}

impl Detail {
    /// Currency of the analysis, falling back to the live quote's.
    pub fn currency(&self) -> &str {
        self.analysis
            .currency
            .as_deref()
            .unwrap_or(&self.live.currency)
    }
}

#[derive(Debug, Default)]
pub struct PredictPage {
    state: PageState<Detail>,
    candidates: Vec<SearchHit>,
    period: Period,
    resolved: Option<String>,
    refreshing: bool,
}

impl PredictPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState<Detail> {
        self.state.view()
    }

    pub fn candidates(&self) -> &[SearchHit] {
        &self.candidates
    }

    /// A search returned matches and the page waits for `select`.
    pub fn is_choosing(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Ticker of the last detail request.
    pub fn ticker(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    /// A period change is in flight while the old chart stays up.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Search for `query`. Returns the detail request to run when nothing
    /// matched and the input is looked up directly.
    pub async fn search<A: MarketApi>(&mut self, api: &A, query: &str) -> Option<DetailRequest> {
        self.candidates.clear();
        self.refreshing = false;
        let query = match validate_query(query) {
            Ok(query) => query,
            Err(e) => {
                self.state.reject(e.to_string());
                return None;
            }
        };

        let ticket = self.state.begin();
        let resolved = resolve(api, query).await;
        if !self.state.is_current(ticket) {
            log::debug!("dropping stale search for {query:?}");
            return None;
        }

        match resolved {
            Ok(Resolved::Candidates(hits)) => {
                self.state.reset();
                self.candidates = hits;
                None
            }
            Ok(Resolved::Fallback(raw)) => Some(self.begin_detail(&raw, Some(raw.clone()))),
            Err(message) => {
                self.state.settle(ticket, Err(message));
                None
            }
        }
    }

    /// Pick one of the search candidates (or any ticker).
    pub fn select(&mut self, ticker: &str) -> DetailRequest {
        self.begin_detail(ticker, None)
    }

    fn begin_detail(&mut self, ticker: &str, fallback_query: Option<String>) -> DetailRequest {
        let ticker = ticker.trim().to_uppercase();
        log::debug!("loading {ticker} over {}", self.period);

        self.candidates.clear();
        self.refreshing = false;
        self.resolved = Some(ticker.clone());
        DetailRequest {
            ticket: self.state.begin(),
            ticker,
            period: self.period,
            fallback_query,
        }
    }

    /// Store a finished detail request. Returns `false` if it was stale.
    pub fn commit(&mut self, outcome: DetailOutcome) -> bool {
        self.state.settle(outcome.ticket, outcome.result)
    }

    /// Switch the historical range. After a successful load only the analysis
    /// is fetched again; before that the period is just remembered.
    pub fn change_period(&mut self, period: Period) -> Option<PeriodRequest> {
        self.period = period;
        let ticker = self.resolved.clone()?;
        self.state.data()?;

        self.refreshing = true;
        Some(PeriodRequest {
            ticket: self.state.begin_in_place(),
            ticker,
            period,
        })
    }

    /// Swap the refreshed analysis into the current detail.
    pub fn commit_period(&mut self, outcome: PeriodOutcome) -> bool {
        if !self.state.is_current(outcome.ticket) {
            log::debug!("dropping stale period refresh ({:?})", outcome.ticket);
            return false;
        }
        self.refreshing = false;
        match outcome.result {
            Ok(analysis) => match self.state.data_mut() {
                Some(detail) => {
                    detail.analysis = analysis;
                    true
                }
                None => false,
            },
            Err(message) => self.state.settle(outcome.ticket, Err(message)),
        }
    }
}

// -------------------------------------------------------------------------------------------------

fn fetch_failed(ticker: &str) -> String {
    format!("Failed to fetch all data for {ticker}.")
}

/// A pending analysis + live quote load.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRequest {
    pub ticket: Ticket,
    pub ticker: String,
    pub period: Period,
    /// Set when the ticker is the raw input of a search without matches.
    pub fallback_query: Option<String>,
}

#[derive(Debug)]
pub struct DetailOutcome {
    pub ticket: Ticket,
    pub result: Result<Detail, String>,
}

impl DetailRequest {
    /// Fetch both halves concurrently. Either one failing fails the whole
    /// request; no partial detail is ever produced.
    pub async fn run<A: MarketApi>(self, api: &A) -> DetailOutcome {
        let fetched = try_join(
            api.analyze(&self.ticker, self.period),
            api.live(&self.ticker),
        )
        .await;

        let result = match fetched {
            Ok((analysis, live)) => Ok(Detail { analysis, live }),
            Err(e) => {
                log::error!("loading {} failed: {e}", self.ticker);
                let message = fetch_failed(&self.ticker);
                Err(match &self.fallback_query {
                    Some(query) => fallback_message(query, &message),
                    None => message,
                })
            }
        };
        DetailOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// A pending analysis-only refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRequest {
    pub ticket: Ticket,
    pub ticker: String,
    pub period: Period,
}

#[derive(Debug)]
pub struct PeriodOutcome {
    pub ticket: Ticket,
    pub result: Result<Analysis, String>,
}

impl PeriodRequest {
    pub async fn run<A: MarketApi>(self, api: &A) -> PeriodOutcome {
        let result = api.analyze(&self.ticker, self.period).await.map_err(|e| {
            log::error!("refreshing {} over {} failed: {e}", self.ticker, self.period);
            fetch_failed(&self.ticker)
        });
        PeriodOutcome {
            ticket: self.ticket,
            result,
        }
    }
}
