use calgrid_core::event::{DEFAULT_COLOR, event_colors};
use owo_colors::OwoColorize;

use crate::render::swatch;

pub fn run() {
    for color in event_colors() {
        let note = if *color == DEFAULT_COLOR { " (default)" } else { "" };
        println!("{} {}{}", swatch(color), color, note.dimmed());
    }
}
