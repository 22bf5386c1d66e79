use anyhow::{Result, bail};
use calgrid_core::Category;
use calgrid_core::editor::EventEditor;
use calgrid_core::timestamp::DateInput;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub struct EditArgs {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.color.is_none()
            && self.description.is_none()
            && self.category.is_none()
    }
}

/// "none" (or empty) clears the category.
fn parse_category(input: &str) -> Result<Option<Category>> {
    if input.is_empty() || input.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    input.parse::<Category>().map(Some).map_err(anyhow::Error::msg)
}

pub fn run(mut ctx: Context, id: &str, args: EditArgs) -> Result<()> {
    if args.is_empty() {
        bail!(
            "Nothing to change. Pass at least one of --title, --start, --end, --color, \
             --description, --category"
        );
    }

    let record = ctx.events.require(id)?.clone();

    let mut editor = EventEditor::new();
    let draft = editor.open_edit(&record);

    if let Some(title) = args.title {
        draft.title = Some(title);
    }
    if let Some(start) = args.start {
        draft.start_date = Some(DateInput::parse(&start));
    }
    if let Some(end) = args.end {
        draft.end_date = Some(DateInput::parse(&end));
    }
    if let Some(color) = args.color {
        draft.color = Some(color);
    }
    if let Some(description) = args.description {
        draft.description = if description.is_empty() {
            None
        } else {
            Some(description)
        };
    }
    if let Some(category) = args.category {
        draft.category = parse_category(&category)?;
    }

    let events = match editor.save(&ctx.events) {
        Ok(events) => events,
        Err(errors) => return super::report_invalid(errors),
    };
    ctx.commit(events)?;

    if let Some(event) = ctx.events.get(id) {
        println!("{}", "  Updated:".yellow());
        println!("  {}", event.render());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("none").unwrap(), None);
        assert_eq!(parse_category("").unwrap(), None);
        assert_eq!(parse_category("work").unwrap(), Some(Category::Work));
        assert!(parse_category("Design").is_err());
    }
}
