//! Terminal rendering for calgrid-core types.
//!
//! Extension traits and helpers that turn core values into colored text
//! using owo_colors.

use calgrid_core::EventRecord;
use calgrid_core::clock::Clock;
use calgrid_core::grid::{
    DAYS_PER_WEEK, calendar_grid, events_for_day, format_day_number, format_month_label,
    format_time, is_current_month, is_today,
};
use calgrid_core::layout::{CellEvents, MONTH_CELL_LIMIT};
use calgrid_core::stats::EventStats;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let time = format!(
            "{}-{}",
            format_time(self.start_date),
            format_time(self.end_date)
        );
        let category = self
            .category
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();

        format!(
            "{} {} {}{} {}",
            swatch(&self.color),
            time,
            self.title.bold(),
            category,
            self.id.dimmed()
        )
    }
}

impl Render for EventStats {
    fn render(&self) -> String {
        format!(
            "{} {}   {} {}   {} {}",
            self.total.bold(),
            "total".dimmed(),
            self.meetings.bold(),
            pluralize("meeting", self.meetings).dimmed(),
            self.work_items.bold(),
            pluralize("work item", self.work_items).dimmed(),
        )
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Parse `#rrggbb`.
pub fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// A colored dot for the event color, or a plain one if it isn't hex.
pub fn swatch(color: &str) -> String {
    match hex_to_rgb(color) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

/// The 6x7 month grid. Days with events get a marker; days outside the
/// month are dimmed and today is highlighted.
pub fn render_month(reference: NaiveDate, events: &[EventRecord], clock: &impl Clock) -> String {
    let mut lines = vec![
        format_month_label(reference).bold().to_string(),
        WEEKDAY_HEADER
            .iter()
            .map(|d| format!("{:>4}", d))
            .collect::<String>()
            .dimmed()
            .to_string(),
    ];

    for week in calendar_grid(reference).chunks(DAYS_PER_WEEK) {
        let row: String = week
            .iter()
            .map(|day| render_cell(*day, reference, events, clock))
            .collect();
        lines.push(row);
    }

    lines.join("\n")
}

fn render_cell(
    day: NaiveDate,
    reference: NaiveDate,
    events: &[EventRecord],
    clock: &impl Clock,
) -> String {
    let marker = if events_for_day(events, day).is_empty() {
        " "
    } else {
        "•"
    };
    let label = format!("{:>3}", format_day_number(day));

    let label = if is_today(day, clock) {
        label.reversed().to_string()
    } else if !is_current_month(day, reference) {
        label.dimmed().to_string()
    } else {
        label
    };

    format!("{}{}", label, marker)
}

/// Events of one month cell, as the month view would list them.
pub fn render_cell_events(events: Vec<&EventRecord>) -> Vec<String> {
    let cell = CellEvents::split(events, MONTH_CELL_LIMIT);
    let mut lines: Vec<String> = cell
        .visible
        .iter()
        .map(|e| format!("  {}", e.render()))
        .collect();
    if let Some(more) = cell.more_label() {
        lines.push(format!("  {}", more.dimmed()));
    }
    lines
}
