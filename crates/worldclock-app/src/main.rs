//! World Clock terminal entry point.

use std::error::Error;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;
use worldclock_app::config::AppConfig;
use worldclock_app::host::{self, TokioFrameScheduler};
use worldclock_app::terminal::{HELP, TerminalBellSink};
use worldclock_app::{Widget, WidgetPorts};
use worldclock_core::clock::{MonotonicClock, SystemClock, SystemMonotonicClock};
use worldclock_core::time_source::TimeZoneId;
use worldclock_timezone::TzdbTimeSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they do not interleave with the status line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting World Clock");

    let config = AppConfig::from_env()?;

    let mut time_source = TzdbTimeSource::new().with_enumeration(config.enumerate_zones);
    if let Some(hint) = &config.local_zone_hint {
        time_source = time_source.with_local_hint(hint.as_str());
    }

    let (frames, mut frame_rx) = TokioFrameScheduler::new(config.frame_interval);
    let monotonic: Arc<dyn MonotonicClock> = Arc::new(SystemMonotonicClock::new());

    let mut widget = Widget::new(
        WidgetPorts {
            clock: Arc::new(SystemClock),
            monotonic: Arc::clone(&monotonic),
            time_source: Arc::new(time_source),
            sink: Arc::new(TerminalBellSink),
            frames: Box::new(frames),
        },
        config.initial_zone.map(TimeZoneId::new),
    );

    println!("{HELP}");
    host::run(
        &mut widget,
        &mut frame_rx,
        monotonic.as_ref(),
        config.tick_interval,
        BufReader::new(tokio::io::stdin()),
    )
    .await?;

    Ok(())
}
