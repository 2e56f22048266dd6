//! Tokio host: drives the widget from a tick interval, frame callbacks and
//! terminal input on one task.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use worldclock_core::clock::MonotonicClock;
use worldclock_core::frame::{FrameHandle, FrameScheduler};

use crate::error::AppError;
use crate::terminal::{self, Input};
use crate::widget::Widget;

/// Frame scheduler backed by one pacing task per subscription. Each task
/// sends its handle down a channel at the frame interval until aborted.
#[derive(Debug)]
pub struct TokioFrameScheduler {
    interval: Duration,
    sender: mpsc::UnboundedSender<FrameHandle>,
    tasks: HashMap<FrameHandle, JoinHandle<()>>,
    next_id: u64,
}

impl TokioFrameScheduler {
    /// Creates a scheduler and the receiver its frames arrive on.
    #[must_use]
    pub fn new(interval: Duration) -> (Self, mpsc::UnboundedReceiver<FrameHandle>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            interval,
            sender,
            tasks: HashMap::new(),
            next_id: 0,
        };
        (scheduler, receiver)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn active(&self) -> usize {
        self.tasks.len()
    }
}

impl FrameScheduler for TokioFrameScheduler {
    /// Must be called from within a tokio runtime.
    fn request_frames(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        let sender = self.sender.clone();
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if sender.send(handle).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(handle, task);
        tracing::debug!(frame = %handle, "frame subscription started");
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
            tracing::debug!(frame = %handle, "frame subscription cancelled");
        }
    }
}

impl Drop for TokioFrameScheduler {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}

/// Runs the widget until `quit`, end of input, or Ctrl-C.
///
/// The face is redrawn on a single status line whenever its digital time
/// changes, and again on every stopwatch frame while running.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing to the terminal fails.
pub async fn run<R>(
    widget: &mut Widget,
    frames: &mut mpsc::UnboundedReceiver<FrameHandle>,
    monotonic: &dyn MonotonicClock,
    tick_interval: Duration,
    input: R,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
{
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = input.lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut stopwatch_display = widget.stopwatch().display;
    let mut last_digital = String::new();

    tracing::info!(tick_interval = ?tick_interval, "host loop started");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(face) = widget.tick_now() else { continue };
                if face.digital != last_digital {
                    last_digital.clone_from(&face.digital);
                    redraw(&terminal::render_status(face, &stopwatch_display))?;
                }
            }
            Some(handle) = frames.recv() => {
                if let Some(display) = widget.on_animation_frame(handle, monotonic.now()) {
                    stopwatch_display = display;
                    if let Some(face) = widget.face() {
                        redraw(&terminal::render_status(face, &stopwatch_display))?;
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("input closed");
                    break;
                };
                let input = match terminal::parse_input(&line) {
                    Ok(Some(Input::Quit)) => break,
                    Ok(Some(input)) => input,
                    Ok(None) => continue,
                    Err(err) => {
                        print_lines(&[terminal::user_message(&err)])?;
                        continue;
                    }
                };
                print_lines(&terminal::execute(widget, input))?;
                stopwatch_display = widget.stopwatch().display;
                if let Some(face) = widget.face() {
                    redraw(&terminal::render_status(face, &stopwatch_display))?;
                }
            }
            _ = &mut shutdown => {
                tracing::info!("interrupt received");
                break;
            }
        }
    }

    widget.stop_stopwatch();
    println!();
    tracing::info!("host loop stopped");
    Ok(())
}

fn redraw(status: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r\x1b[2K{status}")?;
    stdout.flush()
}

fn print_lines(lines: &[String]) -> std::io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r\x1b[2K")?;
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()
}
