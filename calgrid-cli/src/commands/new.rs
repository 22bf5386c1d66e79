use anyhow::Result;
use calgrid_core::Category;
use calgrid_core::editor::EventEditor;
use calgrid_core::event::EventDraft;
use calgrid_core::timestamp::DateInput;
use chrono::Duration;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub struct NewArgs {
    pub title: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

pub fn run(mut ctx: Context, args: NewArgs) -> Result<()> {
    let mut editor = EventEditor::new();
    let draft = editor.open_create(None, &ctx.clock);

    draft.title = Some(args.title);
    draft.description = args.description.filter(|d| !d.is_empty());
    draft.category = args.category;
    draft.color = Some(args.color.unwrap_or_else(|| ctx.config.default_color.clone()));

    apply_times(draft, args.start.as_deref(), args.end.as_deref());

    let before: Vec<String> = ctx.events.iter().map(|e| e.id.clone()).collect();
    let events = match editor.save(&ctx.events) {
        Ok(events) => events,
        Err(errors) => return super::report_invalid(errors),
    };

    let created = events.iter().find(|e| !before.contains(&e.id)).cloned();
    ctx.commit(events)?;

    if let Some(event) = created {
        println!("{}", "  Created:".green());
        println!("  {}", event.render());
    }
    Ok(())
}

/// Put the typed start/end into the draft. Without an explicit end, the
/// end follows a parsed start by one hour; an unparsable start leaves the
/// default end in place.
fn apply_times(draft: &mut EventDraft, start: Option<&str>, end: Option<&str>) {
    if let Some(start) = start {
        let start = DateInput::parse(start);
        if let (None, DateInput::Parsed(dt)) = (end, &start) {
            draft.end_date = Some((*dt + Duration::hours(1)).into());
        }
        draft.start_date = Some(start);
    }
    if let Some(end) = end {
        draft.end_date = Some(DateInput::parse(end));
    }
}
