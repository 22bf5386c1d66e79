//! The event collection owned by the controller.
//!
//! Changes never mutate a collection in place: each operation returns a new
//! collection derived from the old one.

use std::collections::HashSet;

use crate::error::{CalGridError, CalGridResult};
use crate::event::{EventPatch, EventRecord};

/// Events keyed by id. Insertion order is kept for stable display only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCollection {
    events: Vec<EventRecord>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded records. Later duplicates of an id are dropped.
    pub fn from_records(records: Vec<EventRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut events: Vec<EventRecord> = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id.clone()) {
                log::warn!("Dropping duplicate event id {}", record.id);
                continue;
            }
            events.push(record);
        }
        EventCollection { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Like `get`, for callers that want to report a missing id.
    pub fn require(&self, id: &str) -> CalGridResult<&EventRecord> {
        self.get(id)
            .ok_or_else(|| CalGridError::EventNotFound(id.to_string()))
    }

    /// Collection with `record` appended. A record whose id is already
    /// present replaces the existing one in place.
    pub fn with_added(&self, record: EventRecord) -> Self {
        let mut events = self.events.clone();
        match events.iter_mut().find(|e| e.id == record.id) {
            Some(existing) => *existing = record,
            None => events.push(record),
        }
        EventCollection { events }
    }

    /// Collection with the event `id` patched. Unknown ids are a no-op.
    pub fn with_updated(&self, id: &str, patch: &EventPatch) -> Self {
        let events = self
            .events
            .iter()
            .map(|e| {
                let mut e = e.clone();
                if e.id == id {
                    e.apply(patch);
                }
                e
            })
            .collect();
        EventCollection { events }
    }

    /// Collection without the event `id`. Unknown ids are a no-op.
    pub fn without(&self, id: &str) -> Self {
        let events = self
            .events
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        EventCollection { events }
    }

    pub fn into_vec(self) -> Vec<EventRecord> {
        self.events
    }
}

impl<'a> IntoIterator for &'a EventCollection {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl FromIterator<EventRecord> for EventCollection {
    fn from_iter<T: IntoIterator<Item = EventRecord>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn sample() -> EventCollection {
        EventCollection::new()
            .with_added(EventRecord::new("One", at(9), at(10), None, None, None))
            .with_added(EventRecord::new("Two", at(11), at(12), None, None, None))
    }

    #[test]
    fn test_add_keeps_original() {
        let before = sample();
        let after = before.with_added(EventRecord::new("Three", at(13), at(14), None, None, None));

        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 3);
        assert_eq!(after.as_slice()[2].title, "Three");
    }

    #[test]
    fn test_update_by_id() {
        let events = sample();
        let id = events.as_slice()[1].id.clone();

        let updated = events.with_updated(
            &id,
            &EventPatch {
                title: Some("Two (moved)".to_string()),
                start_date: Some(at(15)),
                end_date: Some(at(16)),
                category: Some(Some(Category::Work)),
                ..Default::default()
            },
        );

        let event = updated.get(&id).unwrap();
        assert_eq!(event.id, id);
        assert_eq!(event.title, "Two (moved)");
        assert_eq!(event.start_date, at(15));
        assert_eq!(event.category, Some(Category::Work));
        assert_eq!(updated.as_slice()[0], events.as_slice()[0]);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let events = sample();
        let updated = events.with_updated(
            "evt-missing",
            &EventPatch {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(updated, events);
    }

    #[test]
    fn test_delete() {
        let events = sample();
        let id = events.as_slice()[0].id.clone();

        let remaining = events.without(&id);
        assert_eq!(remaining.len(), 1);
        assert!(remaining.get(&id).is_none());

        assert_eq!(remaining.without("evt-missing"), remaining);
    }

    #[test]
    fn test_require_reports_missing_id() {
        let err = sample().require("evt-missing").unwrap_err();
        assert!(matches!(err, CalGridError::EventNotFound(id) if id == "evt-missing"));
    }

    #[test]
    fn test_from_records_drops_duplicate_ids() {
        let one = EventRecord::new("One", at(9), at(10), None, None, None);
        let mut dup = one.clone();
        dup.title = "Impostor".to_string();

        let events = EventCollection::from_records(vec![one.clone(), dup]);
        assert_eq!(events.len(), 1);
        assert_eq!(events.get(&one.id).unwrap().title, "One");
    }
}
