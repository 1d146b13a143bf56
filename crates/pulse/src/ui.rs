use indicatif::{ProgressBar, ProgressStyle};
use pulse_core::view::loading::step_at;
use std::future::Future;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(120);

pub fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(TICK);
    pb
}

/// Await `fut` behind a spinner whose message walks through `steps`.
pub async fn with_steps<F>(steps: &'static [&'static str], fut: F) -> F::Output
where
    F: Future,
{
    let pb = spinner();
    let cycler = tokio::spawn({
        let pb = pb.clone();
        async move {
            let started = Instant::now();
            loop {
                pb.set_message(step_at(steps, started.elapsed()));
                tokio::time::sleep(TICK).await;
            }
        }
    });

    let output = fut.await;
    cycler.abort();
    pb.finish_and_clear();
    output
}

/// Single-line bar used to draw the ticker tape.
pub fn tape_bar() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}
