//! Core of the calgrid calendar.
//!
//! This crate has no UI. It provides:
//! - `EventRecord` and its factory, plus drafts and patches for editing
//! - `validate_event`, which lists every problem with a draft
//! - `grid` for month/week date grids and per-day event selection
//! - `stats` for summary counts
//! - `codec` and `store` for persisting the event collection

pub mod clock;
pub mod codec;
pub mod collection;
pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod navigation;
pub mod stats;
pub mod store;
pub mod timestamp;
pub mod validate;

pub use collection::EventCollection;
pub use error::{CalGridError, CalGridResult};
pub use event::{Category, EventDraft, EventPatch, EventRecord, create_event};
pub use validate::validate_event;
