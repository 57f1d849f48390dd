use crate::catalog::{CatalogError, CatalogPage, SkipRecord};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// What the page needs to decide between loading, error, empty and populated.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub items: Vec<SkipRecord>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub skipped: usize,
}

/// Owner of the fetched list and its loading/error flags.
///
/// Every load is tagged with a generation; a result only lands if no newer
/// load has started since, so overlapping loads can finish in any order.
#[derive(Debug)]
pub struct CatalogState {
    items: Vec<SkipRecord>,
    is_loading: bool,
    error_message: Option<String>,
    skipped: usize,
    generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            // nothing fetched yet, the first load is always pending
            is_loading: true,
            error_message: None,
            skipped: 0,
            generation: 0,
        }
    }
}

impl CatalogState {
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error_message = None;
        self.generation
    }

    /// Returns `false` when the result was stale and thrown away.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<CatalogPage, CatalogError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                "discarding stale catalog response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.items = page.records;
                self.skipped = page.skipped;
                self.error_message = None;
            }
            Err(e) => {
                self.items = Vec::new();
                self.skipped = 0;
                self.error_message = Some(e.to_string());
            }
        }
        self.is_loading = false;
        true
    }

    pub fn items(&self) -> &[SkipRecord] {
        &self.items
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            items: self.items.clone(),
            is_loading: self.is_loading,
            error_message: self.error_message.clone(),
            skipped: self.skipped,
        }
    }
}

/// Thread-shared wrapper used by the server workers.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: Mutex<CatalogState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin(&self) -> u64 {
        self.lock().begin_load()
    }

    /// Lands a result for `generation`. When it is the latest load and it
    /// succeeded, `on_fresh` sees the new items before the lock is released,
    /// so nothing derived from them can be overtaken by a newer load.
    ///
    /// Returns whether `on_fresh` ran.
    pub fn complete<F>(
        &self,
        generation: u64,
        result: Result<CatalogPage, CatalogError>,
        on_fresh: F,
    ) -> bool
    where
        F: FnOnce(&[SkipRecord]),
    {
        let mut state = self.lock();
        if state.finish_load(generation, result) && state.error_message().is_none() {
            on_fresh(state.items());
            true
        } else {
            false
        }
    }

    /// Runs `f` against the live items with the lock held.
    pub fn with_items<T>(&self, f: impl FnOnce(&[SkipRecord]) -> T) -> T {
        f(self.lock().items())
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.lock().snapshot()
    }
}
