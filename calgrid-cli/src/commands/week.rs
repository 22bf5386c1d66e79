use anyhow::Result;
use calgrid_core::clock::Clock;
use calgrid_core::grid::{events_for_week_day, week_days};
use calgrid_core::layout::slot_position;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

/// Width of the bar showing where an event sits in its day.
const BAR_WIDTH: f64 = 24.0;

pub fn run(ctx: &Context, date: Option<NaiveDate>) -> Result<()> {
    let reference = date.unwrap_or_else(|| ctx.clock.today());

    for (i, day) in week_days(reference).into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let label = day.format("%a %b %-d").to_string();
        if day == ctx.clock.today() {
            println!("{}", label.bold().reversed());
        } else {
            println!("{}", label.bold());
        }

        let mut events = events_for_week_day(&ctx.events, day);
        if events.is_empty() {
            println!("  {}", "-".dimmed());
            continue;
        }
        events.sort_by_key(|e| e.start_date);

        for event in events {
            let pos = slot_position(event);
            let offset = (pos.top / 100.0 * BAR_WIDTH).round() as usize;
            let width = ((pos.height / 100.0 * BAR_WIDTH).round() as usize).max(1);
            let bar = format!(
                "{}{}{}",
                " ".repeat(offset),
                "█".repeat(width),
                " ".repeat((BAR_WIDTH as usize).saturating_sub(offset + width))
            );
            println!("  {} {}", bar.dimmed(), event.render());
        }
    }

    Ok(())
}
