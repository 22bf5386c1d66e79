pub mod colors;
pub mod day;
pub mod delete;
pub mod edit;
pub mod month;
pub mod new;
pub mod stats;
pub mod week;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

/// Print every validation message and fail.
fn report_invalid(errors: Vec<String>) -> Result<()> {
    for error in &errors {
        eprintln!("  {}", error.red());
    }
    bail!("Event not saved ({} problem{})", errors.len(), if errors.len() == 1 { "" } else { "s" });
}
