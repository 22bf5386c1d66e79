use anyhow::Result;
use calgrid_core::clock::Clock;
use calgrid_core::grid::{calendar_grid, events_for_day, is_current_month};
use calgrid_core::navigation::{CalendarView, Navigator};
use calgrid_core::stats::event_stats;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::{Render, render_cell_events, render_month};

pub fn run(ctx: &Context, date: Option<NaiveDate>) -> Result<()> {
    let mut nav = Navigator::today(&ctx.clock, CalendarView::Month);
    if let Some(date) = date {
        nav.go_to(date);
    }
    let reference = nav.current();

    println!("{}", render_month(reference, ctx.events.as_slice(), &ctx.clock));
    println!();

    let days_with_events: Vec<NaiveDate> = calendar_grid(reference)
        .into_iter()
        .filter(|day| is_current_month(*day, reference))
        .filter(|day| !events_for_day(&ctx.events, *day).is_empty())
        .collect();

    if days_with_events.is_empty() {
        println!("{}", "No events this month".dimmed());
    }

    for day in days_with_events {
        let label = day.format("%a %b %-d").to_string();
        if day == ctx.clock.today() {
            println!("{}", format!("{} (today)", label).bold());
        } else {
            println!("{}", label.bold());
        }
        for line in render_cell_events(events_for_day(&ctx.events, day)) {
            println!("{}", line);
        }
    }

    println!();
    println!("{}", event_stats(&ctx.events).render());
    Ok(())
}
