use anyhow::Result;
use calgrid_core::clock::Clock;
use calgrid_core::grid::events_for_day;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context, date: Option<NaiveDate>) -> Result<()> {
    let day = date.unwrap_or_else(|| ctx.clock.today());
    println!("{}", day.format("%A %B %-d, %Y").to_string().bold());

    let mut events = events_for_day(&ctx.events, day);
    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    events.sort_by_key(|e| e.start_date);
    for event in events {
        let spans = if event.start_date.date() != day || event.end_date.date() != day {
            format!(
                " ({} to {})",
                event.start_date.format("%b %-d %H:%M"),
                event.end_date.format("%b %-d %H:%M")
            )
        } else {
            String::new()
        };
        println!("  {}{}", event.render(), spans.dimmed());
    }

    Ok(())
}
