use crate::monitor::{AlertEvent, AlertSink, AlertState};
use crate::stats::{StatsReport, StatsSink};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// Colored text
    Pretty,
    /// Text without colors
    Plain,
    /// One JSON object per line
    Json,
}

pub fn default_output_mode() -> OutputMode {
    if io::stdout().is_terminal() {
        OutputMode::Pretty
    } else {
        OutputMode::Plain
    }
}

/// Writes stats reports and alert transitions to stdout, one line per event.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    mode: OutputMode,
}

impl Console {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    fn emit(&self, line: &str) {
        let mut out = io::stdout().lock();
        // A closed stdout (e.g. piped into `head`) is not worth failing the replay over.
        let _ = writeln!(out, "{line}");
    }
}

impl StatsSink for Console {
    fn on_stats(&mut self, report: StatsReport) {
        self.emit(&format_stats(&report, self.mode));
    }
}

impl AlertSink for Console {
    fn on_alert(&mut self, event: AlertEvent) {
        self.emit(&format_alert(&event, self.mode));
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ConsoleEvent<'a> {
    Stats(&'a StatsReport),
    Alert(&'a AlertEvent),
}

pub fn format_stats(report: &StatsReport, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return json_line(&ConsoleEvent::Stats(report));
    }

    let mut line = format!("[STATS]\t{}\t", time_label(report.tick));
    if report.top.is_empty() {
        line.push_str("no traffic");
    } else {
        let sections: Vec<String> = report
            .top
            .iter()
            .map(|s| format!("{}: {}", section_label(&s.section), s.hits))
            .collect();
        line.push_str(&sections.join(" "));
    }

    match mode {
        OutputMode::Pretty => line.yellow().to_string(),
        _ => line,
    }
}

pub fn format_alert(event: &AlertEvent, mode: OutputMode) -> String {
    if mode == OutputMode::Json {
        return json_line(&ConsoleEvent::Alert(event));
    }

    let time = time_label(event.tick);
    match event.state {
        AlertState::Alerting => {
            let line = format!(
                "[ALERT]\t{time}\tHigh traffic generated an alert - hits = {}",
                event.hits
            );
            match mode {
                OutputMode::Pretty => line.red().to_string(),
                _ => line,
            }
        }
        AlertState::Normal => {
            let line = format!("[ALERT]\t{time}\tAlert recovered - hits = {}", event.hits);
            match mode {
                OutputMode::Pretty => line.green().to_string(),
                _ => line,
            }
        }
    }
}

fn json_line(event: &ConsoleEvent<'_>) -> String {
    serde_json::to_string(event).expect("console events always serialize")
}

fn time_label(tick: i64) -> String {
    match chrono::DateTime::from_timestamp(tick, 0) {
        Some(dt) => format!("{} ({tick})", dt.format("%Y-%m-%d %H:%M:%S UTC")),
        None => tick.to_string(),
    }
}

fn section_label(section: &str) -> &str {
    if section.is_empty() { "<none>" } else { section }
}
