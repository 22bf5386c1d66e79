//! Create/edit session behind the event form.
//!
//! The editor holds the draft being edited and whether it belongs to an
//! existing event. Saving validates the draft and hands back the next
//! collection; invalid drafts leave the collection untouched.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::clock::Clock;
use crate::collection::EventCollection;
use crate::event::{DEFAULT_COLOR, EventDraft, EventRecord};
use crate::grid::day_start;
use crate::validate::validate_event;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Closed,
    Creating,
    Editing(String),
}

#[derive(Debug, Clone, Default)]
pub struct EventEditor {
    mode: EditorMode,
    draft: EventDraft,
}

fn start_of_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(dt)
}

impl EventEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != EditorMode::Closed
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.draft
    }

    /// Start a new event. Picking a day cell starts it at that day's
    /// midnight; otherwise it starts now. Either way it lasts one hour.
    pub fn open_create(&mut self, date: Option<NaiveDate>, clock: &impl Clock) -> &mut EventDraft {
        let start = match date {
            Some(d) => day_start(d),
            None => start_of_minute(clock.now()),
        };

        self.mode = EditorMode::Creating;
        self.draft = EventDraft {
            start_date: Some(start.into()),
            end_date: Some((start + Duration::hours(1)).into()),
            color: Some(DEFAULT_COLOR.to_string()),
            ..Default::default()
        };
        &mut self.draft
    }

    pub fn open_edit(&mut self, record: &EventRecord) -> &mut EventDraft {
        self.mode = EditorMode::Editing(record.id.clone());
        self.draft = EventDraft::from_record(record);
        &mut self.draft
    }

    pub fn close(&mut self) {
        self.mode = EditorMode::Closed;
        self.draft = EventDraft::default();
    }

    /// Validate the draft and apply it. On success the editor closes and the
    /// new collection is returned; on failure every violation is returned
    /// and the editor stays open.
    pub fn save(&mut self, events: &EventCollection) -> Result<EventCollection, Vec<String>> {
        let errors = validate_event(&self.draft);
        if !errors.is_empty() {
            return Err(errors);
        }

        let next = match &self.mode {
            EditorMode::Editing(id) => self
                .draft
                .to_patch()
                .map(|patch| events.with_updated(id, &patch)),
            EditorMode::Creating | EditorMode::Closed => {
                self.draft.to_record().map(|record| {
                    log::debug!("Creating event {} ({})", record.id, record.title);
                    events.with_added(record)
                })
            }
        };

        self.close();
        // A draft that passed validation always has a title and both dates.
        Ok(next.unwrap_or_else(|| events.clone()))
    }

    /// Remove the event being edited. Does nothing while creating.
    pub fn delete(&mut self, events: &EventCollection) -> EventCollection {
        let next = match &self.mode {
            EditorMode::Editing(id) => events.without(id),
            _ => return events.clone(),
        };
        self.close();
        next
    }
}
