//! Month and week grids, and picking the events that land on a given day.
//!
//! Weeks start on Sunday. Everything works on local civil dates; there is no
//! timezone handling here.
//!
//! All functions are total over chrono's date range. At its very edges a
//! grid is cut short: the last month chrono can represent yields fewer than
//! 42 cells, and weeks before the first representable Sunday start at
//! `NaiveDate::MIN`.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::Clock;
use crate::event::EventRecord;

/// Cells in a month view: 6 full weeks.
pub const GRID_CELLS: usize = 42;

pub const DAYS_PER_WEEK: usize = 7;

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    date.checked_sub_days(offset).unwrap_or(NaiveDate::MIN)
}

/// The 42 dates shown for the month containing `reference`, starting on the
/// Sunday on or before the 1st. Leading and trailing days come from the
/// neighbouring months.
pub fn calendar_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    days_from(start_of_week(start_of_month(reference)), GRID_CELLS)
}

/// The Sunday-to-Saturday week containing `reference`.
pub fn week_days(reference: NaiveDate) -> Vec<NaiveDate> {
    days_from(start_of_week(reference), DAYS_PER_WEEK)
}

/// Up to `count` consecutive days from `first`, stopping at `NaiveDate::MAX`.
fn days_from(first: NaiveDate, count: usize) -> Vec<NaiveDate> {
    std::iter::successors(Some(first), |d| d.succ_opt())
        .take(count)
        .collect()
}

/// 00:00:00.000 on `date`.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on `date`.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli)
}

/// Events overlapping the civil day of `date`, for month cells.
///
/// An event that runs past midnight shows up on every day it touches.
pub fn events_for_day<'a, I>(events: I, date: NaiveDate) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let start = day_start(date);
    let end = day_end(date);

    events
        .into_iter()
        .filter(|e| e.start_date <= end && e.end_date >= start)
        .collect()
}

/// Events that start on the civil day of `date`, for the week time grid.
///
/// Unlike `events_for_day` this does not look at the end: an event is only
/// anchored to the day it begins.
pub fn events_for_week_day<'a, I>(events: I, date: NaiveDate) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let start = day_start(date);
    let end = day_end(date);

    events
        .into_iter()
        .filter(|e| e.start_date >= start && e.start_date <= end)
        .collect()
}

/// "October 2026"
pub fn format_month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "09:05"
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// "5"
pub fn format_day_number(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// Whether `date` is today according to `clock`. Reads the clock every call.
pub fn is_today(date: NaiveDate, clock: &impl Clock) -> bool {
    date == clock.today()
}

/// Whether `date` falls in the same month and year as `reference`.
pub fn is_current_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.month() == reference.month() && date.year() == reference.year()
}
