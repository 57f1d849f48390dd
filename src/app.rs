// src/app.rs
use crate::catalog::{
    CatalogClient, CatalogError, CatalogPage, CatalogSnapshot, CatalogSource, CatalogStore,
    SkipId, SkipRecord,
};
use crate::config::AppConfig;
use crate::domain::{derive, RoadFilter, Selection, SortKey};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

/// The four mutually exclusive things the page can show.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Loading,
    Error(String),
    /// Nothing left after filtering (or nothing fetched at all).
    Empty,
    Populated,
}

impl DisplayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayState::Loading => "loading",
            DisplayState::Error(_) => "error",
            DisplayState::Empty => "empty",
            DisplayState::Populated => "populated",
        }
    }
}

/// Everything a page render needs, taken under one look at the state.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub state: DisplayState,
    pub sort: SortKey,
    pub filter: RoadFilter,
    pub items: Vec<SkipRecord>,
    pub selection: Selection,
    pub skipped: usize,
}

/// Shared handle passed to every request. Cheap to clone.
#[derive(Clone)]
pub struct App {
    pub config: Arc<AppConfig>,
    client: CatalogClient,
    catalog: Arc<CatalogStore>,
    selection: Arc<Mutex<Selection>>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, CatalogError> {
        let client = CatalogClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
            catalog: Arc::new(CatalogStore::new()),
            selection: Arc::new(Mutex::new(Selection::new())),
        })
    }

    /// Fetch on the calling thread.
    #[cfg(test)]
    pub fn load(&self) {
        self.load_from(&self.client);
    }

    #[cfg(test)]
    pub fn load_from(&self, source: &impl CatalogSource) {
        let generation = self.catalog.begin();
        self.finish_load(generation, source.fetch_catalog());
    }

    /// Fetch in the background; the page keeps rendering the loading state
    /// until it lands.
    pub fn spawn_load(&self) {
        let app = self.clone();
        let generation = self.catalog.begin();
        debug!(generation, "starting background catalog load");

        let spawned = std::thread::Builder::new()
            .name("catalog-load".into())
            .spawn(move || {
                let result = app.client.fetch_catalog();
                app.finish_load(generation, result);
            });

        if let Err(e) = spawned {
            error!(error = %e, "could not spawn catalog load thread");
            self.finish_load(generation, Err(CatalogError::Network(e.to_string())));
        }
    }

    /// The selection is re-validated while the catalog lock is still held,
    /// so a superseded load can never touch it.
    fn finish_load(&self, generation: u64, result: Result<CatalogPage, CatalogError>) {
        self.catalog
            .complete(generation, result, |items| self.selection().reconcile(items));
    }

    /// Select the skip with `raw_id` if the live catalog shows it under this
    /// sort and filter.
    pub fn select_visible(
        &self,
        raw_id: &str,
        sort: SortKey,
        filter: RoadFilter,
    ) -> Option<SkipId> {
        self.catalog.with_items(|items| {
            let visible = derive(items, sort, filter);
            let record = visible.iter().find(|r| r.id.matches(raw_id))?;
            self.selection().select(record);
            Some(record.id.clone())
        })
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub fn catalog(&self) -> CatalogSnapshot {
        self.catalog.snapshot()
    }

    pub fn view(&self, sort: SortKey, filter: RoadFilter) -> CatalogView {
        let snap = self.catalog();
        let items = derive(&snap.items, sort, filter);

        let state = if snap.is_loading {
            DisplayState::Loading
        } else if let Some(msg) = snap.error_message {
            DisplayState::Error(msg)
        } else if items.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Populated
        };

        CatalogView {
            state,
            sort,
            filter,
            items,
            selection: self.selection().clone(),
            skipped: snap.skipped,
        }
    }

    pub fn selection(&self) -> MutexGuard<'_, Selection> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
