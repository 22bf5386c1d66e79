//! The event record and its factory.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp::{DateInput, serde_timestamp};

/// Accent color used when an event doesn't pick one.
pub const DEFAULT_COLOR: &str = "#1a73e8";

/// Colors offered by the event form, default first.
pub fn event_colors() -> &'static [&'static str] {
    &[
        "#1a73e8", "#34a853", "#fbbc04", "#ea4335", "#9c27b0", "#00acc1", "#ff9800", "#795548",
    ]
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A calendar event in local civil time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "serde_timestamp")]
    pub start_date: NaiveDateTime,
    #[serde(with = "serde_timestamp")]
    pub end_date: NaiveDateTime,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Meeting,
    Work,
    Personal,
    Holiday,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Meeting,
        Category::Work,
        Category::Personal,
        Category::Holiday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meeting => "Meeting",
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Holiday => "Holiday",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}'. Expected one of: Meeting, Work, Personal, Holiday",
                    s
                )
            })
    }
}

/// Generate a fresh event id: creation time in millis plus a random suffix.
pub fn generate_id() -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("evt-{}-{}", Utc::now().timestamp_millis(), &random[..9])
}

impl EventRecord {
    /// Build a new event with a fresh id. Does not validate; run
    /// `validate_event` first when the input comes from a user.
    pub fn new(
        title: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        color: Option<String>,
        description: Option<String>,
        category: Option<Category>,
    ) -> Self {
        EventRecord {
            id: generate_id(),
            title: title.into(),
            description,
            start_date,
            end_date,
            color: color.unwrap_or_else(default_color),
            category,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    /// Apply a partial change. The id never changes.
    pub fn apply(&mut self, patch: &EventPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(start) = patch.start_date {
            self.start_date = start;
        }
        if let Some(end) = patch.end_date {
            self.end_date = end;
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Factory matching the record constructor, for callers holding loose fields.
pub fn create_event(
    title: impl Into<String>,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    color: Option<String>,
    description: Option<String>,
    category: Option<Category>,
) -> EventRecord {
    EventRecord::new(title, start_date, end_date, color, description, category)
}

/// Partial change to an existing event.
///
/// `None` leaves a field alone. For the optional fields the inner `Option`
/// is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub color: Option<String>,
    pub category: Option<Option<Category>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }
}

/// Event fields as they stand in an edit form, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
    pub color: Option<String>,
    pub category: Option<Category>,
}

impl EventDraft {
    pub fn from_record(record: &EventRecord) -> Self {
        EventDraft {
            title: Some(record.title.clone()),
            description: record.description.clone(),
            start_date: Some(DateInput::Parsed(record.start_date)),
            end_date: Some(DateInput::Parsed(record.end_date)),
            color: Some(record.color.clone()),
            category: record.category,
        }
    }

    /// Turn a draft into a full patch. Returns None when title or dates are
    /// missing or unparsed; validate first.
    pub fn to_patch(&self) -> Option<EventPatch> {
        let title = self.title.clone()?;
        let start = self.start_date.as_ref()?.as_datetime()?;
        let end = self.end_date.as_ref()?.as_datetime()?;

        Some(EventPatch {
            title: Some(title),
            description: Some(self.description.clone()),
            start_date: Some(start),
            end_date: Some(end),
            color: Some(self.color.clone().unwrap_or_else(default_color)),
            category: Some(self.category),
        })
    }

    /// Build a new record from a complete draft.
    pub fn to_record(&self) -> Option<EventRecord> {
        let title = self.title.clone()?;
        let start = self.start_date.as_ref()?.as_datetime()?;
        let end = self.end_date.as_ref()?.as_datetime()?;

        Some(EventRecord::new(
            title,
            start,
            end,
            self.color.clone(),
            self.description.clone(),
            self.category,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn make_test_event() -> EventRecord {
        EventRecord::new(
            "Team Standup",
            at(15, 9, 0),
            at(15, 9, 30),
            None,
            Some("Daily sync".to_string()),
            Some(Category::Meeting),
        )
    }

    #[test]
    fn test_new_event_defaults_color() {
        let event = make_test_event();
        assert_eq!(event.color, DEFAULT_COLOR);
        assert!(event.id.starts_with("evt-"));
        assert_eq!(event.duration(), Duration::minutes(30));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = create_event("A", at(1, 9, 0), at(1, 10, 0), None, None, None);
        let b = create_event("B", at(1, 9, 0), at(1, 10, 0), None, None, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_patch_keeps_id() {
        let mut event = make_test_event();
        let id = event.id.clone();

        event.apply(&EventPatch {
            title: Some("Retro".to_string()),
            description: Some(None),
            end_date: Some(at(15, 10, 0)),
            category: Some(Some(Category::Work)),
            ..Default::default()
        });

        assert_eq!(event.id, id);
        assert_eq!(event.title, "Retro");
        assert_eq!(event.description, None);
        assert_eq!(event.start_date, at(15, 9, 0));
        assert_eq!(event.end_date, at(15, 10, 0));
        assert_eq!(event.category, Some(Category::Work));
        assert_eq!(event.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut event = make_test_event();
        let before = event.clone();
        let patch = EventPatch::default();

        assert!(patch.is_empty());
        event.apply(&patch);
        assert_eq!(event, before);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("meeting".parse::<Category>(), Ok(Category::Meeting));
        assert_eq!(" Holiday ".parse::<Category>(), Ok(Category::Holiday));
        assert!("Design".parse::<Category>().is_err());
    }

    #[test]
    fn test_draft_roundtrip_through_record() {
        let event = make_test_event();
        let draft = EventDraft::from_record(&event);
        let patch = draft.to_patch().expect("complete draft");

        let mut copy = event.clone();
        copy.apply(&patch);
        assert_eq!(copy, event);
    }

    #[test]
    fn test_incomplete_draft_has_no_record() {
        let draft = EventDraft {
            title: Some("Lunch".to_string()),
            start_date: Some(DateInput::parse("tomorrow-ish")),
            end_date: Some(at(2, 13, 0).into()),
            ..Default::default()
        };
        assert!(draft.to_record().is_none());
        assert!(draft.to_patch().is_none());
    }

    #[test]
    fn test_palette_starts_with_default() {
        assert_eq!(event_colors()[0], DEFAULT_COLOR);
        assert_eq!(event_colors().len(), 8);
    }
}
