use crate::ui;
use anyhow::{anyhow, Result};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Select};
use pulse_client::prelude::*;
use pulse_core::page::{
    compare::ComparePage,
    home::HomePage,
    news::NewsPage,
    predict::PredictPage,
    risk::{monte_carlo_title, RiskPage},
    strategy::StrategyPage,
    tape::TickerTape,
};
use pulse_core::view::{cards, chart, lists, loading};
use pulse_core::ViewState;
use std::time::Duration;

/// Settle a page into output: errors become the command's error, idle pages
/// print nothing.
fn show<T>(view: &ViewState<T>, render: impl FnOnce(&T)) -> Result<()> {
    match view {
        ViewState::Success(data) => {
            render(data);
            Ok(())
        }
        ViewState::Error(message) => Err(anyhow!(message.clone())),
        ViewState::Idle | ViewState::Loading => Ok(()),
    }
}

/// Let the user pick a search match; `None` when they back out.
fn pick(hits: &[SearchHit]) -> Result<Option<String>> {
    let labels: Vec<String> = hits.iter().map(lists::hit_label).collect();
    let choice = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a company")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| hits[i].ticker.clone()))
}

fn list_matches(hits: &[SearchHit]) {
    println!("{}", "Select a company:".bold());
    print!("{}", lists::search_results(hits));
    println!("Re-run with one of the tickers above, or pass --interactive to pick one.");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Home
//
////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn home<A: MarketApi>(api: &A) -> Result<()> {
    let mut page = HomePage::new();
    ui::with_steps(loading::TOP_STOCKS_STEPS, page.load(api)).await;

    show(page.view(), |stocks| {
        println!("{}", "Today's Market Movers".bold());
        if stocks.is_empty() {
            println!("  No market data available.");
        }
        for stock in stocks {
            println!("  {}", cards::top_stock_card(stock));
        }
    })
}

pub async fn tape<A: MarketApi>(api: &A, width: usize, ticks: usize) -> Result<()> {
    let mut tape = TickerTape::new();
    ui::with_steps(loading::TOP_STOCKS_STEPS, tape.load(api)).await;
    if tape.is_empty() {
        log::warn!("ticker tape has nothing to show");
        return Ok(());
    }

    let bar = ui::tape_bar();
    let mut interval = tokio::time::interval(Duration::from_millis(150));
    for offset in 0..ticks {
        interval.tick().await;
        bar.set_message(tape.frame(offset, width));
    }
    bar.finish();
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Predict
//
////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn predict<A: MarketApi>(
    api: &A,
    query: &str,
    period: Period,
    interactive: bool,
) -> Result<()> {
    let mut page = PredictPage::new();
    page.change_period(period);

    let request = match ui::with_steps(loading::DEFAULT_STEPS, page.search(api, query)).await {
        Some(request) => request,
        None if page.is_choosing() => {
            if !interactive {
                list_matches(page.candidates());
                return Ok(());
            }
            match pick(page.candidates())? {
                Some(ticker) => page.select(&ticker),
                None => return Ok(()),
            }
        }
        None => return show(page.view(), |_| ()),
    };

    let outcome = ui::with_steps(loading::PREDICTION_STEPS, request.run(api)).await;
    page.commit(outcome);
    show(page.view(), print_detail)?;

    if !interactive {
        return Ok(());
    }
    while let Some(period) = pick_period(page.period())? {
        if let Some(request) = page.change_period(period) {
            let outcome = ui::with_steps(loading::DEFAULT_STEPS, request.run(api)).await;
            page.commit_period(outcome);
        }
        show(page.view(), print_detail)?;
    }
    Ok(())
}

fn pick_period(current: Period) -> Result<Option<Period>> {
    let mut items: Vec<String> = Period::ALL
        .iter()
        .map(|p| p.as_str().to_uppercase())
        .collect();
    items.push("Done".to_string());

    let default = Period::ALL.iter().position(|p| *p == current).unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Change range")
        .items(&items)
        .default(default)
        .interact_opt()?;
    Ok(choice.and_then(|i| Period::ALL.get(i).copied()))
}

fn print_detail(detail: &pulse_core::page::predict::Detail) {
    let live = &detail.live;
    let analysis = &detail.analysis;
    let currency = detail.currency();

    println!("{}", cards::live_price_card(live));
    if let Some(stats) = &live.key_stats {
        println!("{}", cards::key_stats(stats));
    }
    println!(
        "{}",
        chart::price_chart(
            &format!("{} (Intraday)", live.ticker),
            &live.intraday_chart,
            &live.currency
        )
    );
    println!(
        "{}",
        chart::price_chart(
            &format!("{} (Historical)", analysis.ticker),
            &analysis.chart_data.price_chart,
            currency
        )
    );
    println!(
        "{}",
        cards::prediction_card(
            &analysis.ticker,
            analysis.prediction,
            analysis.sentiment.as_ref(),
            currency
        )
    );

    let headlines = analysis
        .sentiment
        .as_ref()
        .map(|s| s.headlines.as_slice())
        .unwrap_or_default();
    println!("{}", "Recent News".bold());
    print!("{}", lists::news_list(headlines));
}

////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Compare, risk, news, strategy
//
////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn compare<A: MarketApi>(api: &A, tickers: &str) -> Result<()> {
    let mut page = ComparePage::new();
    ui::with_steps(loading::DEFAULT_STEPS, page.compare(api, tickers)).await;
    show(page.view(), |chart| print!("{}", chart::comparison_chart(chart)))
}

pub async fn risk<A: MarketApi>(api: &A, query: &str, interactive: bool) -> Result<()> {
    let mut page = RiskPage::new();
    ui::with_steps(loading::RISK_STEPS, page.search(api, query)).await;

    if page.is_choosing() {
        if !interactive {
            list_matches(page.candidates());
            return Ok(());
        }
        match pick(page.candidates())? {
            Some(ticker) => ui::with_steps(loading::RISK_STEPS, page.select(api, &ticker)).await,
            None => return Ok(()),
        }
    }

    show(page.view(), |report| {
        println!("{}", format!("Risk Profile for {}", report.ticker).bold());
        println!("{}", cards::risk_metrics(&report.risk_metrics));
        print!(
            "{}",
            chart::price_chart(
                &monte_carlo_title(&report.ticker),
                &report.monte_carlo_chart,
                "USD"
            )
        );
    })
}

pub async fn news<A: MarketApi>(api: &A, ticker: &str) -> Result<()> {
    let mut page = NewsPage::new();
    ui::with_steps(loading::DEFAULT_STEPS, page.load(api, ticker)).await;

    let ticker = page.ticker().unwrap_or(ticker).to_string();
    show(page.view(), |report| {
        println!("{}", cards::sentiment_summary(&ticker, &report.sentiment));
        println!("{}", "Top Headlines".bold());
        print!("{}", lists::news_list(&report.sentiment.headlines));
    })
}

pub async fn strategy<A: MarketApi>(api: &A, ticker: &str, strategy: Strategy) -> Result<()> {
    let mut page = StrategyPage::new();
    page.set_strategy(strategy);
    println!("{}", strategy.title().bold());
    ui::with_steps(loading::DEFAULT_STEPS, page.run(api, ticker)).await;

    show(page.view(), |backtest| {
        println!("{}", cards::backtest_metrics(&backtest.metrics));
        println!(
            "{}",
            format!("{} with {} signals", backtest.ticker, backtest.signal_count()).bold()
        );
        print!(
            "{}",
            chart::backtest_chart(&backtest.points, "USD", chart::DEFAULT_WIDTH)
        );
    })
}
