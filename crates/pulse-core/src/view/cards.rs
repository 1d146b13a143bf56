use crate::format::{format_compact, format_currency, format_fixed, format_signed};
use colored::{ColoredString, Colorize};
use pulse_client::schema::{BacktestMetrics, KeyStats, LiveQuote, RiskMetrics, Sentiment, TopStock};
use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Sentiment
//
////////////////////////////////////////////////////////////////////////////////////////////////////

/// Polarity bucket of an average headline score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Scores inside ±0.05 count as neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.05 {
            SentimentLabel::Positive
        } else if score < -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            SentimentLabel::Positive => text.green(),
            SentimentLabel::Negative => text.red(),
            SentimentLabel::Neutral => text.yellow(),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        })
    }
}

fn capitalise(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `(label, score)` text for a possibly incomplete sentiment block.
///
/// An explicit label wins; otherwise the label is derived from the average
/// score. With neither, the label reads `Unavailable` and the score `N/A`.
pub fn sentiment_text(sentiment: Option<&Sentiment>) -> (String, String) {
    let score = sentiment.and_then(|s| s.score.or(s.average_sentiment));
    let label = sentiment
        .and_then(|s| s.label.as_deref())
        .filter(|l| !l.is_empty())
        .map(capitalise)
        .or_else(|| {
            sentiment
                .and_then(|s| s.average_sentiment)
                .map(|avg| SentimentLabel::from_score(avg).to_string())
        })
        .unwrap_or_else(|| "Unavailable".to_string());
    (label, format_fixed(score, 3))
}

fn paint_label(label: &str) -> ColoredString {
    match label {
        "Positive" => SentimentLabel::Positive.paint(label),
        "Negative" => SentimentLabel::Negative.paint(label),
        _ => SentimentLabel::Neutral.paint(label),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Cards
//
////////////////////////////////////////////////////////////////////////////////////////////////////

fn trend(change: f64, text: String) -> ColoredString {
    if change >= 0.0 {
        text.green()
    } else {
        text.red()
    }
}

fn arrow(change: f64) -> &'static str {
    if change >= 0.0 {
        "▲"
    } else {
        "▼"
    }
}

/// Headline price with today's move.
pub fn live_price_card(quote: &LiveQuote) -> String {
    let price = format_currency(Some(quote.price), &quote.currency);
    let change = format!(
        "{} ({}) Today",
        format_signed(quote.change, ""),
        format_signed(quote.change_percent, "%")
    );
    format!(
        "{}  {}\n{}\n",
        quote.ticker.bold(),
        price.bold(),
        trend(quote.change, change)
    )
}

/// Two-column key statistics grid.
pub fn key_stats(stats: &KeyStats) -> String {
    let dividend = stats
        .dividend_yield
        .map(|y| format!("{:.2}%", y * 100.0))
        .unwrap_or_else(|| "N/A".to_string());
    let rows = [
        ("Open", format_fixed(stats.open, 2), "Market Cap", format_compact(stats.market_cap)),
        ("High", format_fixed(stats.day_high, 2), "P/E Ratio", format_fixed(stats.trailing_pe, 2)),
        ("Low", format_fixed(stats.day_low, 2), "Div Yield", dividend),
        (
            "52-wk high",
            format_fixed(stats.fifty_two_week_high, 2),
            "Volume",
            format_compact(stats.volume),
        ),
        (
            "52-wk low",
            format_fixed(stats.fifty_two_week_low, 2),
            "Avg. Volume",
            format_compact(stats.average_volume),
        ),
    ];

    let mut out = format!("{}\n", "Key Statistics".bold());
    for (left, left_value, right, right_value) in rows {
        out.push_str(&format!(
            "  {left:<11}{left_value:>12}    {right:<12}{right_value:>12}\n"
        ));
    }
    out
}

/// Predicted next close plus the news sentiment behind it.
pub fn prediction_card(
    ticker: &str,
    prediction: Option<f64>,
    sentiment: Option<&Sentiment>,
    currency: &str,
) -> String {
    let (label, score) = sentiment_text(sentiment);
    format!(
        "{}\n  Predicted Next Close: {}\n  News Sentiment: {} ({score})\n",
        format!("Analysis for {ticker}").bold(),
        format_currency(prediction, currency).bold(),
        paint_label(&label),
    )
}

/// Overall sentiment of the news page, always derived from the average.
pub fn sentiment_summary(ticker: &str, sentiment: &Sentiment) -> String {
    let (label, score) = match sentiment.average_sentiment {
        Some(avg) => (SentimentLabel::from_score(avg), format!("{avg}")),
        None => (SentimentLabel::Neutral, "N/A".to_string()),
    };
    format!(
        "{}\n  {} ({score})\n",
        format!("Overall Sentiment for {ticker}").bold(),
        label.paint(&label.to_string()).bold(),
    )
}

/// One market mover.
pub fn top_stock_card(stock: &TopStock) -> String {
    let change = format!(
        "{} {} ({}%)",
        arrow(stock.change),
        stock.change,
        stock.change_percent
    );
    format!(
        "{:<12} {:>14}  {}",
        stock.ticker.bold(),
        format_currency(Some(stock.price), &stock.currency),
        trend(stock.change, change)
    )
}

pub fn metric_card(label: &str, value: &str) -> String {
    format!("  {label:<20} {}", value.bold())
}

/// The four headline risk metrics.
pub fn risk_metrics(metrics: &RiskMetrics) -> String {
    let volatility = metrics
        .annualized_volatility
        .map(|v| format!("{v}%"))
        .unwrap_or_else(|| "N/A".to_string());
    let ratio = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string());

    [
        metric_card("Annualized Volatility", &volatility),
        metric_card("Beta (vs. S&P 500)", &ratio(metrics.beta)),
        metric_card("Sharpe Ratio", &ratio(metrics.sharpe_ratio)),
        metric_card("Sortino Ratio", &ratio(metrics.sortino_ratio)),
    ]
    .join("\n")
        + "\n"
}

/// Capital and return of a finished backtest.
pub fn backtest_metrics(metrics: &BacktestMetrics) -> String {
    let total = format!("{}%", metrics.total_return_pct);
    format!(
        "{}\n  Initial Capital: {}\n  Final Value:     {}\n  Total Return:    {}\n",
        format!("Backtest Results ({})", metrics.strategy_name).bold(),
        format_currency(Some(metrics.initial_capital), "USD"),
        format_currency(Some(metrics.final_value), "USD"),
        trend(metrics.total_return_pct, total).bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_client::schema::Headline;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.2), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.051), SentimentLabel::Negative);
    }

    #[test]
    fn sentiment_placeholders() {
        assert_eq!(
            sentiment_text(None),
            ("Unavailable".to_string(), "N/A".to_string())
        );
        let empty = Sentiment::default();
        assert_eq!(
            sentiment_text(Some(&empty)),
            ("Unavailable".to_string(), "N/A".to_string())
        );
    }

    #[test]
    fn sentiment_explicit_label() {
        let sentiment = Sentiment {
            label: Some("positive".to_string()),
            score: Some(0.61234),
            ..Default::default()
        };
        assert_eq!(
            sentiment_text(Some(&sentiment)),
            ("Positive".to_string(), "0.612".to_string())
        );
    }

    #[test]
    fn sentiment_from_average() {
        let sentiment = Sentiment {
            average_sentiment: Some(-0.2),
            headlines: vec![Headline {
                title: "Recall".into(),
                url: String::new(),
            }],
            ..Default::default()
        };
        assert_eq!(
            sentiment_text(Some(&sentiment)),
            ("Negative".to_string(), "-0.200".to_string())
        );
    }

    #[test]
    fn prediction_card_text() {
        plain();
        let text = prediction_card("AAPL", Some(191.234), None, "USD");
        assert!(text.contains("Analysis for AAPL"));
        assert!(text.contains("Predicted Next Close: $191.23"));
        assert!(text.contains("News Sentiment: Unavailable (N/A)"));

        let missing = prediction_card("AAPL", None, None, "USD");
        assert!(missing.contains("Predicted Next Close: N/A"));
    }

    #[test]
    fn live_card_signs() {
        plain();
        let quote = LiveQuote {
            ticker: "RELIANCE.NS".into(),
            price: 2950.4,
            change: -12.5,
            change_percent: -0.42,
            currency: "INR".into(),
            color: None,
            key_stats: None,
            intraday_chart: Default::default(),
        };
        let text = live_price_card(&quote);
        assert!(text.contains("₹2,950.40"));
        assert!(text.contains("-12.50 (-0.42%) Today"));
    }

    #[test]
    fn key_stats_placeholders() {
        plain();
        let stats = KeyStats {
            market_cap: Some(2.9e12),
            dividend_yield: Some(0.0051),
            ..Default::default()
        };
        let text = key_stats(&stats);
        assert!(text.contains("2.90T"));
        assert!(text.contains("0.51%"));
        assert!(text.contains("N/A"));
    }

    #[test]
    fn top_stock_arrow() {
        plain();
        let stock = TopStock {
            ticker: "MSFT".into(),
            price: 410.5,
            change: -2.0,
            change_percent: -0.49,
            currency: "USD".into(),
        };
        let text = top_stock_card(&stock);
        assert!(text.contains("$410.50"));
        assert!(text.contains("▼ -2 (-0.49%)"));
    }

    #[test]
    fn risk_cards() {
        plain();
        let metrics = RiskMetrics {
            annualized_volatility: Some(28.41),
            beta: Some(1.12),
            sharpe_ratio: Some(0.87),
            sortino_ratio: None,
            daily_volatility: Some(1.79),
        };
        let text = risk_metrics(&metrics);
        assert!(text.contains("Annualized Volatility 28.41%"));
        assert!(text.contains("Beta (vs. S&P 500)   1.12"));
        assert!(text.contains("Sortino Ratio        N/A"));
    }

    #[test]
    fn backtest_summary() {
        plain();
        let metrics = BacktestMetrics {
            strategy_name: "RSI (30/70)".into(),
            initial_capital: 100000.0,
            final_value: 104210.55,
            total_return_pct: 4.21,
        };
        let text = backtest_metrics(&metrics);
        assert!(text.contains("Backtest Results (RSI (30/70))"));
        assert!(text.contains("Initial Capital: $100,000.00"));
        assert!(text.contains("Final Value:     $104,210.55"));
        assert!(text.contains("Total Return:    4.21%"));
    }
}
