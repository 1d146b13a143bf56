use super::InputError;
use crate::state::{PageState, ViewState};
use pulse_client::prelude::*;

pub const MIN_TICKERS: usize = 2;
pub const MAX_TICKERS: usize = 4;

const COMPARE_FAILED: &str = "Failed to fetch comparison data. Please check the tickers.";

/// Comma-separated input to 2..=4 upper-cased tickers. Blank entries are
/// dropped before counting.
pub fn parse_tickers(input: &str) -> Result<Vec<String>, InputError> {
    let tickers: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect();

    if (MIN_TICKERS..=MAX_TICKERS).contains(&tickers.len()) {
        Ok(tickers)
    } else {
        Err(InputError::TickerCount(tickers.len()))
    }
}

/// Normalized performance of several tickers on one chart.
#[derive(Debug, Default)]
pub struct ComparePage {
    state: PageState<Chart>,
    tickers: Vec<String>,
}

impl ComparePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState<Chart> {
        self.state.view()
    }

    /// Tickers of the last request that passed validation.
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    pub async fn compare<A: MarketApi>(&mut self, api: &A, input: &str) {
        let tickers = match parse_tickers(input) {
            Ok(tickers) => tickers,
            Err(e) => {
                log::debug!("rejected comparison input {input:?}: {e:?}");
                return self.state.reject(e.to_string());
            }
        };

        let ticket = self.state.begin();
        log::debug!("comparing {}", tickers.join(", "));
        let result = api.compare(&tickers).await.map_err(|e| {
            log::error!("comparison of {} failed: {e}", tickers.join(", "));
            COMPARE_FAILED.to_string()
        });
        self.tickers = tickers;
        self.state.settle(ticket, result);
    }
}
