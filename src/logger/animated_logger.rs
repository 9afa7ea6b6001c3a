use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Stderr progress line for a CLI analysis: the audited URL, a spinner frame
/// and the time spent so far.
pub struct AnimatedLogger {
    url: String,
    started: Option<Instant>,
    done_tx: Option<watch::Sender<bool>>,
    ticker: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            started: None,
            done_tx: None,
            ticker: None,
        }
    }

    pub fn start(&mut self) {
        let started = Instant::now();
        let (done_tx, mut done_rx) = watch::channel(false);
        let url = self.url.clone();

        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(FRAME_INTERVAL);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r🔍 Analyzing {} {} {:.1}s ", url, frame, started.elapsed().as_secs_f64());
                        let _ = std::io::stderr().flush();
                    }
                    _ = done_rx.changed() => break,
                }
            }
        }));
        self.started = Some(started);
        self.done_tx = Some(done_tx);
    }

    async fn finish(&mut self) -> Option<Duration> {
        if let Some(done_tx) = self.done_tx.take() {
            let _ = done_tx.send(true);
        }
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.await;
        }
        self.started.take().map(|started| started.elapsed())
    }

    /// Clears the progress line and reports how long the analysis of the URL took.
    pub async fn stop(&mut self, outcome: &str) {
        if let Some(elapsed) = self.finish().await {
            eprintln!("\r\x1b[K✅ {} for {} in {:.1}s", outcome, self.url, elapsed.as_secs_f64());
        }
    }

    pub async fn error(&mut self, outcome: &str) {
        if let Some(elapsed) = self.finish().await {
            eprintln!("\r\x1b[K❌ {} for {} after {:.1}s", outcome, self.url, elapsed.as_secs_f64());
        }
    }
}
