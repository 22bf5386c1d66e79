use anyhow::Result;
use calgrid_core::editor::EventEditor;
use owo_colors::OwoColorize;

use crate::context::Context;

pub fn run(mut ctx: Context, id: &str) -> Result<()> {
    let record = ctx.events.require(id)?.clone();

    let mut editor = EventEditor::new();
    editor.open_edit(&record);
    let events = editor.delete(&ctx.events);

    ctx.commit(events)?;
    println!("{}", format!("  Deleted: {}", record.title).red());
    Ok(())
}
