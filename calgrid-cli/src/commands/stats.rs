use anyhow::Result;
use calgrid_core::stats::event_stats;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &Context) -> Result<()> {
    println!("{}", event_stats(&ctx.events).render());
    Ok(())
}
