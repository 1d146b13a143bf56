use crate::endpoint::{Endpoint, Period, Strategy};
use crate::error::{error_detail, Result};
use crate::schema::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use url::Url;

/// Read access to the MarketPulse API.
///
/// The page controllers only ever talk to this trait, so a test double can
/// stand in for [`PulseClient`].
pub trait MarketApi {
    fn top_stocks(&self) -> impl Future<Output = Result<Vec<TopStock>>> + Send;

    fn search(&self, query: &str) -> impl Future<Output = Result<SearchResults>> + Send;

    fn analyze(&self, ticker: &str, period: Period)
        -> impl Future<Output = Result<Analysis>> + Send;

    fn live(&self, ticker: &str) -> impl Future<Output = Result<LiveQuote>> + Send;

    fn compare(&self, tickers: &[String]) -> impl Future<Output = Result<Chart>> + Send;

    fn risk(&self, ticker: &str) -> impl Future<Output = Result<RiskReport>> + Send;

    fn news(&self, ticker: &str) -> impl Future<Output = Result<NewsReport>> + Send;

    fn backtest(
        &self,
        ticker: &str,
        strategy: Strategy,
    ) -> impl Future<Output = Result<BacktestResponse>> + Send;
}

/// [`reqwest::Client`] bound to the base URL of one API deployment.
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base: Url,
}

impl PulseClient {
    pub fn new(api_url: &str, user_agent: &str) -> Result<Self> {
        let http = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .build()?;
        Self::with_client(http, api_url)
    }

    /// Wrap an already-configured client.
    pub fn with_client(http: Client, api_url: &str) -> Result<Self> {
        let base = Url::parse(api_url)?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// GET an endpoint and decode its JSON body.
    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T> {
        let url = endpoint.url(&self.base)?;
        log::debug!("GET {url}");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = error_detail(&body);
            log::warn!("GET {url} -> {status}");
            return Err(crate::ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let data = serde_json::from_slice(&body).map_err(|e| {
            log::error!("failed to decode the body of {url}: {e}");
            e
        })?;
        Ok(data)
    }
}

impl MarketApi for PulseClient {
    async fn top_stocks(&self) -> Result<Vec<TopStock>> {
        self.get(Endpoint::TopStocks).await
    }

    async fn search(&self, query: &str) -> Result<SearchResults> {
        self.get(Endpoint::Search(query)).await
    }

    async fn analyze(&self, ticker: &str, period: Period) -> Result<Analysis> {
        self.get(Endpoint::Analyze { ticker, period }).await
    }

    async fn live(&self, ticker: &str) -> Result<LiveQuote> {
        self.get(Endpoint::Live(ticker)).await
    }

    async fn compare(&self, tickers: &[String]) -> Result<Chart> {
        self.get(Endpoint::Compare(tickers)).await
    }

    async fn risk(&self, ticker: &str) -> Result<RiskReport> {
        self.get(Endpoint::Risk(ticker)).await
    }

    async fn news(&self, ticker: &str) -> Result<NewsReport> {
        self.get(Endpoint::News(ticker)).await
    }

    async fn backtest(&self, ticker: &str, strategy: Strategy) -> Result<BacktestResponse> {
        self.get(Endpoint::Backtest { ticker, strategy }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;

    #[test]
    fn rejects_bad_base_url() {
        let err = PulseClient::new("not a url", "marketpulse-test").unwrap_err();
        assert!(matches!(err, ApiError::Url(_)));
    }

    #[test]
    fn keeps_base_url() {
        let client = PulseClient::new("http://127.0.0.1:8000", "marketpulse-test").unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8000/");
    }

    /// Serve one canned HTTP response on loopback. Resolves to the base URL
    /// and a receiver for the request head the client sent.
    async fn serve_once(
        status: &str,
        body: &str,
    ) -> (String, tokio::sync::oneshot::Receiver<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = tokio::sync::oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        (format!("http://{addr}"), rx)
    }

    #[tokio::test]
    async fn error_status_carries_server_detail() {
        let (base, request) =
            serve_once("404 Not Found", r#"{"detail":"No price data for ZZZZ."}"#).await;
        let client = PulseClient::new(&base, "marketpulse-test").unwrap();

        let err = client.backtest("ZZZZ", Strategy::Rsi).await.unwrap_err();
        match &err {
            ApiError::Status { status, detail } => {
                assert_eq!(*status, 404);
                assert_eq!(detail.as_deref(), Some("No price data for ZZZZ."));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
        assert_eq!(err.detail(), Some("No price data for ZZZZ."));

        let head = request.await.unwrap();
        assert!(head.starts_with("GET /strategy/backtest/ZZZZ?strategy=rsi "));
    }

    #[tokio::test]
    async fn error_status_without_detail() {
        let (base, _request) = serve_once("500 Internal Server Error", "oops").await;
        let client = PulseClient::new(&base, "marketpulse-test").unwrap();

        let err = client.top_stocks().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, detail: None }));
    }

    #[tokio::test]
    async fn compare_sends_bracketed_keys() {
        let (base, request) = serve_once("200 OK", r#"{"labels":[],"datasets":[]}"#).await;
        let client = PulseClient::new(&base, "marketpulse-test").unwrap();

        let tickers = vec!["AAPL".to_string(), "MSFT".to_string()];
        let chart = client.compare(&tickers).await.unwrap();
        assert_eq!(chart, Chart::default());

        let head = request.await.unwrap();
        assert!(head.starts_with("GET /compare/?tickers%5B%5D=AAPL&tickers%5B%5D=MSFT "));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // port 9 (discard) on loopback is closed on any sane test host
        let client = PulseClient::new("http://127.0.0.1:9", "marketpulse-test").unwrap();
        let err = client.top_stocks().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
