//! Which month is on screen and in which view.

use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::grid::{calendar_grid, format_month_label, start_of_month, week_days};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalendarView::Month => write!(f, "month"),
            CalendarView::Week => write!(f, "week"),
        }
    }
}

impl FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            other => Err(format!("Unknown view '{}'. Expected month or week", other)),
        }
    }
}

/// Navigation state. The current date is always the 1st of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: NaiveDate,
    view: CalendarView,
}

impl Navigator {
    pub fn new(date: NaiveDate, view: CalendarView) -> Self {
        Navigator {
            current: start_of_month(date),
            view,
        }
    }

    pub fn today(clock: &impl Clock, view: CalendarView) -> Self {
        Self::new(clock.today(), view)
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.current.checked_add_months(Months::new(1)) {
            self.current = next;
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(prev) = self.current.checked_sub_months(Months::new(1)) {
            self.current = prev;
        }
    }

    pub fn go_to_today(&mut self, clock: &impl Clock) {
        self.current = start_of_month(clock.today());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.current = start_of_month(date);
    }

    pub fn month_label(&self) -> String {
        format_month_label(self.current)
    }

    /// Dates to render for the active view.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        match self.view {
            CalendarView::Month => calendar_grid(self.current),
            CalendarView::Week => week_days(self.current),
        }
    }
}
