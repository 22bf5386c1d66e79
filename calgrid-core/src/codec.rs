//! Text encoding of an event collection.
//!
//! The format is a JSON array of event objects with `startDate`/`endDate`
//! as ISO-8601 text. Files written by the browser version of the app (UTC
//! `...Z` timestamps) are read as well.

use crate::error::CalGridResult;
use crate::event::EventRecord;

pub fn serialize<'a, I>(events: I) -> CalGridResult<String>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let events: Vec<&EventRecord> = events.into_iter().collect();
    Ok(serde_json::to_string_pretty(&events)?)
}

pub fn deserialize(text: &str) -> CalGridResult<Vec<EventRecord>> {
    Ok(serde_json::from_str(text)?)
}
