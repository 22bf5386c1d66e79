//! Loaded config, store and events for one command invocation.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use calgrid_core::EventCollection;
use calgrid_core::clock::{Clock, SystemClock};
use calgrid_core::config::CalgridConfig;
use calgrid_core::store::{EventStore, sample_events};

pub struct Context {
    pub config: CalgridConfig,
    pub store: EventStore,
    pub events: EventCollection,
    pub clock: SystemClock,
}

impl Context {
    pub fn load(file_override: Option<PathBuf>) -> Result<Self> {
        let config = CalgridConfig::load().context("Failed to load calgrid config")?;
        let clock = SystemClock;

        let path = file_override.unwrap_or_else(|| config.events_path());
        log::debug!("Using events file {}", path.display());
        let store = EventStore::new(path);

        let fallback = if config.seed_sample_events {
            sample_events(clock.today())
        } else {
            EventCollection::new()
        };
        let events = store.load_or(fallback);

        Ok(Context {
            config,
            store,
            events,
            clock,
        })
    }

    /// Persist `events` as the new collection.
    pub fn commit(&mut self, events: EventCollection) -> Result<()> {
        self.store
            .save(&events)
            .with_context(|| format!("Failed to write {}", self.store.path().display()))?;
        self.events = events;
        Ok(())
    }
}
