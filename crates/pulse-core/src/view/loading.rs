use std::time::Duration;

/// How long each step message stays up.
pub const STEP_INTERVAL: Duration = Duration::from_millis(1500);

pub const PREDICTION_STEPS: &[&str] = &[
    "Fetching live market data...",
    "Analyzing news sentiment...",
    "Calculating technical indicators...",
    "Training prediction model...",
    "Forecasting next-day price...",
];

pub const RISK_STEPS: &[&str] = &[
    "Fetching 5 years of market data...",
    "Calculating volatility and beta...",
    "Computing Sharpe & Sortino ratios...",
    "Running 1000 future-path simulations...",
    "Visualizing Monte Carlo results...",
];

pub const DEFAULT_STEPS: &[&str] = &[
    "Initializing analysis...",
    "Contacting data sources...",
    "Compiling results...",
];

pub const TOP_STOCKS_STEPS: &[&str] = &["Loading top stocks..."];

/// The step on screen after `elapsed`; the list wraps around.
pub fn step_at<'a>(steps: &[&'a str], elapsed: Duration) -> &'a str {
    if steps.is_empty() {
        return "";
    }
    let tick = elapsed.as_millis() / STEP_INTERVAL.as_millis();
    steps[(tick % steps.len() as u128) as usize]
}
