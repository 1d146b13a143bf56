//! In-memory [`MarketApi`] for controller tests.
use pulse_client::prelude::*;
use std::sync::Mutex;

/// Answers every call from a canned payload and records it as
/// `endpoint:args`. A missing payload answers with a 500.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub calls: Mutex<Vec<String>>,
    pub top_stocks: Option<Vec<TopStock>>,
    pub search: Option<Vec<SearchHit>>,
    pub analysis: Option<Analysis>,
    pub live: Option<LiveQuote>,
    pub compare: Option<Chart>,
    pub risk: Option<RiskReport>,
    pub news: Option<NewsReport>,
    pub backtest: Option<BacktestResponse>,
    /// `detail` sent with every failure.
    pub error_detail: Option<String>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn forget_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn answer<T: Clone>(&self, payload: &Option<T>) -> Result<T> {
        payload.clone().ok_or_else(|| ApiError::Status {
            status: 500,
            detail: self.error_detail.clone(),
        })
    }
}

impl MarketApi for FakeApi {
    async fn top_stocks(&self) -> Result<Vec<TopStock>> {
        self.record("top_stocks".to_string());
        self.answer(&self.top_stocks)
    }

    async fn search(&self, query: &str) -> Result<SearchResults> {
        self.record(format!("search:{query}"));
        let results = self.answer(&self.search)?;
        Ok(SearchResults { results })
    }

    async fn analyze(&self, ticker: &str, period: Period) -> Result<Analysis> {
        self.record(format!("analyze:{ticker}:{period}"));
        let mut analysis = self.answer(&self.analysis)?;
        analysis.ticker = ticker.to_string();
        Ok(analysis)
    }

    async fn live(&self, ticker: &str) -> Result<LiveQuote> {
        self.record(format!("live:{ticker}"));
        let mut quote = self.answer(&self.live)?;
        quote.ticker = ticker.to_string();
        Ok(quote)
    }

    async fn compare(&self, tickers: &[String]) -> Result<Chart> {
        self.record(format!("compare:{}", tickers.join(",")));
        self.answer(&self.compare)
    }

    async fn risk(&self, ticker: &str) -> Result<RiskReport> {
        self.record(format!("risk:{ticker}"));
        let mut report = self.answer(&self.risk)?;
        report.ticker = ticker.to_string();
        Ok(report)
    }

    async fn news(&self, ticker: &str) -> Result<NewsReport> {
        self.record(format!("news:{ticker}"));
        self.answer(&self.news)
    }

    async fn backtest(&self, ticker: &str, strategy: Strategy) -> Result<BacktestResponse> {
        self.record(format!("backtest:{ticker}:{strategy}"));
        self.answer(&self.backtest)
    }
}

// -------------------------------------------------------------------------------------------------

pub fn top_stock(ticker: &str, price: f64, change: f64) -> TopStock {
    TopStock {
        ticker: ticker.to_string(),
        price,
        change,
        change_percent: change / price * 100.0,
        currency: "USD".to_string(),
    }
}

pub fn hit(ticker: &str, name: &str) -> SearchHit {
    SearchHit {
        ticker: ticker.to_string(),
        name: name.to_string(),
    }
}

pub fn analysis(prediction: f64) -> Analysis {
    Analysis {
        ticker: String::new(),
        prediction: Some(prediction),
        sentiment: Some(Sentiment {
            label: Some("positive".to_string()),
            score: Some(0.42),
            average_sentiment: Some(0.42),
            headlines: Vec::new(),
        }),
        chart_data: ChartData {
            price_chart: Chart {
                labels: vec!["2024-01-02".to_string()],
                datasets: vec![Dataset {
                    label: "Closing Price".to_string(),
                    data: vec![Some(prediction)],
                    ..Default::default()
                }],
            },
        },
        currency: Some("USD".to_string()),
    }
}

pub fn live_quote(price: f64) -> LiveQuote {
    LiveQuote {
        ticker: String::new(),
        price,
        change: 1.5,
        change_percent: 0.8,
        currency: "USD".to_string(),
        color: None,
        key_stats: None,
        intraday_chart: Chart::default(),
    }
}
