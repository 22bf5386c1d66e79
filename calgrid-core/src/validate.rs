//! Validation of event drafts.

use crate::event::EventDraft;
use crate::timestamp::DateInput;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Check a draft and return every problem found; an empty list means valid.
///
/// All rules run, so a form can show every field error at once.
pub fn validate_event(draft: &EventDraft) -> Vec<String> {
    let mut errors = Vec::new();

    match draft.title.as_deref() {
        None => errors.push("Title is required".to_string()),
        Some(title) if title.trim().is_empty() => errors.push("Title is required".to_string()),
        Some(title) if title.trim().chars().count() > MAX_TITLE_LEN => {
            errors.push(format!("Title must be {} characters or less", MAX_TITLE_LEN))
        }
        Some(_) => {}
    }

    if draft
        .description
        .as_ref()
        .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN)
    {
        errors.push(format!(
            "Description must be {} characters or less",
            MAX_DESCRIPTION_LEN
        ));
    }

    let start = check_date(draft.start_date.as_ref(), "Start", &mut errors);
    let end = check_date(draft.end_date.as_ref(), "End", &mut errors);

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.push("End date must be after start date".to_string());
        }
    }

    errors
}

fn check_date(
    input: Option<&DateInput>,
    label: &str,
    errors: &mut Vec<String>,
) -> Option<chrono::NaiveDateTime> {
    match input {
        None => {
            errors.push(format!("{} date is required", label));
            None
        }
        Some(DateInput::Unparsed(_)) => {
            errors.push(format!("{} date must be a valid date", label));
            None
        }
        Some(DateInput::Parsed(dt)) => Some(*dt),
    }
}
