//! Line-oriented terminal front end.
//!
//! Parses one command per input line, renders the face and stopwatch on a
//! single status line, and rings the bell for fired alarms.

use std::io::Write;

use worldclock_alarms::application::query_handlers::AlarmListView;
use worldclock_alarms::domain::alarm::AlarmId;
use worldclock_clock_face::domain::presenter::ClockFaceView;
use worldclock_core::error::DomainError;
use worldclock_core::notification::{Alert, NotificationSink};

use crate::widget::Widget;

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  zone <query>            show the zone best matching a city or zone name
  local                   show the local zone
  find <query>            list matching zones
  alarm [zone] <HH:MM>    add an alarm (current zone if omitted)
  toggle <id>             arm or disarm an alarm
  remove <id>             delete an alarm
  alarms                  list alarms
  start | stop | lap | reset
  help | quit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `zone <query>`
    Zone(String),
    /// `local`
    Local,
    /// `find <query>`
    Find(String),
    /// `alarm [zone] <HH:MM>`
    Alarm {
        /// Explicit zone; the displayed zone when `None`.
        zone: Option<String>,
        /// Time as typed.
        time: String,
    },
    /// `toggle <id>`
    Toggle(AlarmId),
    /// `remove <id>`
    Remove(AlarmId),
    /// `alarms`
    Alarms,
    /// `start`
    Start,
    /// `stop`
    Stop,
    /// `lap`
    Lap,
    /// `reset`
    Reset,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Parses a line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an unknown command or a bad alarm
/// id.
pub fn parse_input(line: &str) -> Result<Option<Input>, DomainError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "zone" => Input::Zone(rest.to_owned()),
        "local" => Input::Local,
        "find" => Input::Find(rest.to_owned()),
        "alarm" => match rest.rsplit_once(char::is_whitespace) {
            Some((zone, time)) => Input::Alarm {
                zone: Some(zone.trim().to_owned()),
                time: time.to_owned(),
            },
            None if looks_like_time(rest) => Input::Alarm {
                zone: None,
                time: rest.to_owned(),
            },
            None => Input::Alarm {
                zone: Some(rest.to_owned()),
                time: String::new(),
            },
        },
        "toggle" => Input::Toggle(parse_alarm_id(rest)?),
        "remove" => Input::Remove(parse_alarm_id(rest)?),
        "alarms" => Input::Alarms,
        "start" => Input::Start,
        "stop" => Input::Stop,
        "lap" => Input::Lap,
        "reset" => Input::Reset,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => {
            return Err(DomainError::Validation(format!(
                "unknown command {other:?}, type \"help\""
            )));
        }
    };
    Ok(Some(input))
}

fn looks_like_time(text: &str) -> bool {
    text.is_empty() || text.starts_with(|c: char| c.is_ascii_digit()) || text.contains(':')
}

fn parse_alarm_id(text: &str) -> Result<AlarmId, DomainError> {
    text.trim_start_matches('#')
        .parse()
        .map(AlarmId)
        .map_err(|_| DomainError::Validation(format!("not an alarm id: {text:?}")))
}

/// Applies `input` to the widget and returns the lines to print.
/// `Input::Quit` is the host's to handle and produces nothing here.
pub fn execute(widget: &mut Widget, input: Input) -> Vec<String> {
    match input {
        Input::Zone(query) => match widget.select_zone(&query) {
            Ok(zone) => vec![format!("Showing {zone}")],
            Err(err) => vec![user_message(&err)],
        },
        Input::Local => vec![format!("Showing {}", widget.use_local_zone())],
        Input::Find(query) => {
            let suggestions = widget.suggest_zones(&query);
            if suggestions.is_empty() {
                vec![format!("No zones match {query:?}")]
            } else {
                suggestions
                    .into_iter()
                    .map(|entry| format!("{}  ({})", entry.label, entry.zone))
                    .collect()
            }
        }
        Input::Alarm { zone, time } => {
            let zone = match zone {
                Some(query) => match widget.resolve_zone(&query) {
                    Ok(zone) => zone,
                    Err(err) => return vec![user_message(&err)],
                },
                None => widget.zone().clone(),
            };
            match widget.add_alarm(zone, &time) {
                Ok(alarm) => vec![format!(
                    "Alarm #{} set for {} ({})",
                    alarm.id, alarm.time, alarm.zone
                )],
                Err(err) => vec![user_message(&err)],
            }
        }
        Input::Toggle(id) => match widget.toggle_alarm(id) {
            Some(true) => vec![format!("Alarm #{id} On")],
            Some(false) => vec![format!("Alarm #{id} Off")],
            None => vec![format!("No alarm #{id}")],
        },
        Input::Remove(id) => {
            if widget.remove_alarm(id) {
                vec![format!("Alarm #{id} removed")]
            } else {
                vec![format!("No alarm #{id}")]
            }
        }
        Input::Alarms => render_alarms(&widget.alarms()),
        Input::Start => {
            widget.start_stopwatch();
            Vec::new()
        }
        Input::Stop => {
            widget.stop_stopwatch();
            vec![format!("Stopped at {}", widget.stopwatch().display)]
        }
        Input::Lap => {
            widget.lap();
            widget
                .stopwatch()
                .laps
                .first()
                .map(|lap| lap.label.clone())
                .into_iter()
                .collect()
        }
        Input::Reset => {
            widget.reset_stopwatch();
            vec![format!("Reset to {}", widget.stopwatch().display)]
        }
        Input::Help => HELP.lines().map(str::to_owned).collect(),
        Input::Quit => Vec::new(),
    }
}

/// Text shown for a failed command. Validation messages are already
/// phrased for the user and are shown bare.
#[must_use]
pub fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

/// One status line: digital time, zone, date, stopwatch and any notice.
#[must_use]
pub fn render_status(face: &ClockFaceView, stopwatch: &str) -> String {
    let mut status = format!(
        "{}  {}  {}  | stopwatch {stopwatch}",
        face.digital, face.zone, face.date_label
    );
    if let Some(notice) = &face.notice {
        status.push_str("  | ");
        status.push_str(notice);
    }
    status
}

/// Alarm list lines, or the empty placeholder.
#[must_use]
pub fn render_alarms(list: &AlarmListView) -> Vec<String> {
    if let Some(message) = list.empty_message {
        return vec![message.to_owned()];
    }
    list.alarms
        .iter()
        .map(|alarm| {
            format!(
                "#{}  {}  {}  [{}]",
                alarm.id, alarm.time, alarm.zone, alarm.state
            )
        })
        .collect()
}

/// Notification sink that rings the terminal bell and prints the alert.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBellSink;

impl NotificationSink for TerminalBellSink {
    fn notify(&self, alert: &Alert) -> Result<(), DomainError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "\x07\n{}", alert.message)
            .and_then(|()| stdout.flush())
            .map_err(|e| DomainError::NotificationSinkFailure(e.to_string()))
    }
}
