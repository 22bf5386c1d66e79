//! Summary counts over an event collection.

use serde::Serialize;

use crate::event::{Category, EventRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: usize,
    pub meetings: usize,
    /// Work and Personal events together.
    pub work_items: usize,
}

pub fn event_stats<'a, I>(events: I) -> EventStats
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    events
        .into_iter()
        .fold(EventStats::default(), |mut stats, event| {
            stats.total += 1;
            match event.category {
                Some(Category::Meeting) => stats.meetings += 1,
                Some(Category::Work) | Some(Category::Personal) => stats.work_items += 1,
                Some(Category::Holiday) | None => {}
            }
            stats
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn with_category(category: Option<Category>) -> EventRecord {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        EventRecord::new(
            "Event",
            start,
            start + chrono::Duration::hours(1),
            None,
            None,
            category,
        )
    }

    #[test]
    fn test_meetings_and_work() {
        let events = vec![
            with_category(Some(Category::Meeting)),
            with_category(Some(Category::Work)),
            with_category(Some(Category::Meeting)),
        ];
        assert_eq!(
            event_stats(&events),
            EventStats {
                total: 3,
                meetings: 2,
                work_items: 1
            }
        );
    }

    #[test]
    fn test_personal_counts_as_work_item() {
        let events = vec![
            with_category(Some(Category::Personal)),
            with_category(Some(Category::Holiday)),
            with_category(None),
        ];
        let stats = event_stats(&events);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.meetings, 0);
        assert_eq!(stats.work_items, 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(event_stats(&Vec::<EventRecord>::new()), EventStats::default());
    }
}
