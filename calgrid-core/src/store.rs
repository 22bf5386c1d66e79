//! File-backed storage for the event collection.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use crate::codec;
use crate::collection::EventCollection;
use crate::error::CalGridResult;
use crate::event::{Category, EventDraft, EventRecord};
use crate::grid::start_of_month;
use crate::validate::validate_event;

/// Reads and writes the events file.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored collection.
    ///
    /// Records that no longer pass validation are skipped with a warning.
    pub fn load(&self) -> CalGridResult<EventCollection> {
        let content = std::fs::read_to_string(&self.path)?;
        let records = codec::deserialize(&content)?;

        let valid = records.into_iter().filter(|record| {
            let errors = validate_event(&EventDraft::from_record(record));
            if !errors.is_empty() {
                log::warn!("Skipping invalid event {}: {}", record.id, errors.join(", "));
            }
            errors.is_empty()
        });

        Ok(valid.collect())
    }

    /// Read the stored collection, or `fallback` if the file is missing or
    /// can't be read.
    pub fn load_or(&self, fallback: EventCollection) -> EventCollection {
        if !self.path.exists() {
            log::debug!("No events file at {}, using fallback", self.path.display());
            return fallback;
        }

        match self.load() {
            Ok(events) => {
                log::debug!("Loaded {} events from {}", events.len(), self.path.display());
                events
            }
            Err(e) => {
                log::warn!(
                    "Could not read events from {}: {}. Using fallback",
                    self.path.display(),
                    e
                );
                fallback
            }
        }
    }

    pub fn save(&self, events: &EventCollection) -> CalGridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = codec::serialize(events)?;
        std::fs::write(&self.path, content)?;

        log::debug!("Saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }
}

fn on(day: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    day.and_hms_opt(hour, minute, 0)
}

/// A few example events in the month of `today`, for a first run.
pub fn sample_events(today: NaiveDate) -> EventCollection {
    let first = start_of_month(today);
    let Some(day15) = first.checked_add_days(chrono::Days::new(14)) else {
        return EventCollection::new();
    };
    let Some(day16) = day15.succ_opt() else {
        return EventCollection::new();
    };

    let samples = [
        (
            "Team Standup",
            on(day15, 9, 0),
            on(day15, 9, 30),
            "#1a73e8",
            Some("Daily sync with the team"),
            Category::Meeting,
        ),
        (
            "Design Review",
            on(day15, 14, 0),
            on(day15, 15, 30),
            "#34a853",
            Some("Review new component designs"),
            Category::Work,
        ),
        (
            "Client Presentation",
            on(day16, 10, 0),
            on(day16, 11, 30),
            "#fbbc04",
            None,
            Category::Meeting,
        ),
    ];

    samples
        .into_iter()
        .filter_map(|(title, start, end, color, description, category)| {
            Some(EventRecord::new(
                title,
                start?,
                end?,
                Some(color.to_string()),
                description.map(str::to_string),
                Some(category),
            ))
        })
        .collect()
}
