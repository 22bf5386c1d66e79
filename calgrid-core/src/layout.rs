//! Placement helpers for month cells and the week time grid.

use chrono::{NaiveDateTime, Timelike};

use crate::event::EventRecord;
use crate::grid::day_end;

/// Events a month cell shows before collapsing the rest into "+N more".
pub const MONTH_CELL_LIMIT: usize = 3;

/// Smallest height (percent of the day) a week-grid block is drawn with.
pub const MIN_SLOT_HEIGHT: f64 = 2.0;

/// Events of one month cell, split into shown and hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEvents<'a> {
    pub visible: Vec<&'a EventRecord>,
    pub hidden: usize,
}

impl<'a> CellEvents<'a> {
    pub fn split(events: Vec<&'a EventRecord>, limit: usize) -> Self {
        let hidden = events.len().saturating_sub(limit);
        let mut visible = events;
        visible.truncate(limit);
        CellEvents { visible, hidden }
    }

    /// "+2 more", or None when nothing is hidden.
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

/// Vertical placement of an event in a day column, in percent of 24 hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPosition {
    pub top: f64,
    pub height: f64,
}

fn hours_into_day(dt: NaiveDateTime) -> f64 {
    f64::from(dt.hour()) + f64::from(dt.minute()) / 60.0
}

/// Where an event sits in the week view's day column.
///
/// Events are anchored to their start day; anything past that day's end is
/// cut off at midnight.
pub fn slot_position(event: &EventRecord) -> SlotPosition {
    let start = hours_into_day(event.start_date);
    let end = if event.end_date > day_end(event.start_date.date()) {
        24.0
    } else {
        hours_into_day(event.end_date)
    };

    SlotPosition {
        top: start / 24.0 * 100.0,
        height: ((end - start) / 24.0 * 100.0).max(MIN_SLOT_HEIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn event(start: NaiveDateTime, end: NaiveDateTime) -> EventRecord {
        EventRecord::new("Block", start, end, None, None, None)
    }

    #[test]
    fn test_split_cell_events() {
        let events: Vec<EventRecord> = (0..5)
            .map(|i| event(at(1, 8 + i, 0), at(1, 9 + i, 0)))
            .collect();

        let cell = CellEvents::split(events.iter().collect(), MONTH_CELL_LIMIT);
        assert_eq!(cell.visible.len(), 3);
        assert_eq!(cell.visible[0].id, events[0].id);
        assert_eq!(cell.hidden, 2);
        assert_eq!(cell.more_label().as_deref(), Some("+2 more"));
    }

    #[test]
    fn test_split_without_overflow() {
        let events = vec![event(at(1, 8, 0), at(1, 9, 0))];
        let cell = CellEvents::split(events.iter().collect(), MONTH_CELL_LIMIT);
        assert_eq!(cell.visible.len(), 1);
        assert_eq!(cell.hidden, 0);
        assert_eq!(cell.more_label(), None);
    }

    #[test]
    fn test_slot_position() {
        let pos = slot_position(&event(at(1, 6, 0), at(1, 12, 0)));
        assert_eq!(pos, SlotPosition { top: 25.0, height: 25.0 });
    }

    #[test]
    fn test_short_event_gets_minimum_height() {
        let pos = slot_position(&event(at(1, 12, 0), at(1, 12, 15)));
        assert_eq!(pos.top, 50.0);
        assert_eq!(pos.height, MIN_SLOT_HEIGHT);
    }

    #[test]
    fn test_overnight_event_is_cut_at_midnight() {
        let pos = slot_position(&event(at(1, 18, 0), at(2, 2, 0)));
        assert_eq!(pos.top, 75.0);
        assert_eq!(pos.height, 25.0);
    }
}
