use crate::state::{PageState, ViewState};
use pulse_client::prelude::*;

/// Market movers grid on the landing page.
#[derive(Debug, Default)]
pub struct HomePage {
    state: PageState<Vec<TopStock>>,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState<Vec<TopStock>> {
        self.state.view()
    }

    /// A failed fetch is only logged; the grid is left empty.
    pub async fn load<A: MarketApi>(&mut self, api: &A) {
        let ticket = self.state.begin();
        let stocks = api.top_stocks().await.unwrap_or_else(|e| {
            log::error!("fetching top stocks failed: {e}");
            Vec::new()
        });
        self.state.settle(ticket, Ok(stocks));
    }
}
