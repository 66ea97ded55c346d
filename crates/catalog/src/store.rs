// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog store implementations.
//!
//! A store is the collaborator that holds gym records. The catalog only
//! needs filtered reads, so the trait has a single query operation.

use crate::data_models::GymRecord;
use crate::error::StoreError;
use crate::fallback::fallback_records;
use crate::filter::CatalogFilter;
use std::collections::HashSet;
use std::future::{Future, ready};
use std::path::Path;
use tracing::{debug, info};

/// Built-in demo catalog.
const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// A source of gym records.
pub trait CatalogStore: Send + Sync {
    /// Returns every record matching the filter, in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot answer the query.
    fn query(
        &self,
        filter: &CatalogFilter,
    ) -> impl Future<Output = Result<Vec<GymRecord>, StoreError>> + Send;
}

/// A store holding its records in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    records: Vec<GymRecord>,
}

impl InMemoryStore {
    /// Creates a store from records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MalformedRecord` if two records share an id.
    pub fn new(records: Vec<GymRecord>) -> Result<Self, StoreError> {
        let mut seen: HashSet<i64> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::MalformedRecord {
                    id: record.id,
                    reason: String::from("duplicate id"),
                });
            }
        }
        Ok(Self { records })
    }

    /// Parses a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid record array or ids
    /// are repeated.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let records: Vec<GymRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Loads a JSON array of records from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let json: String = std::fs::read_to_string(path)?;
        let store: Self = Self::from_json_str(&json)?;
        info!(path = %path.display(), records = store.len(), "Loaded catalog file");
        Ok(store)
    }

    /// Returns the built-in demo catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled catalog does not parse.
    pub fn demo() -> Result<Self, StoreError> {
        Self::from_json_str(DEMO_CATALOG)
    }

    /// Returns a store holding the seed gyms that also make up the
    /// fallback dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            records: fallback_records(),
        }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CatalogStore for InMemoryStore {
    fn query(
        &self,
        filter: &CatalogFilter,
    ) -> impl Future<Output = Result<Vec<GymRecord>, StoreError>> + Send {
        let matched: Vec<GymRecord> = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        debug!(
            areas = ?filter.areas,
            tags = ?filter.tags,
            matched = matched.len(),
            "In-memory catalog query"
        );
        ready(Ok(matched))
    }
}

/// A store that fails every query.
///
/// Used for offline operation, where every search is served from the
/// fallback dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    /// Creates a store failing with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl CatalogStore for UnavailableStore {
    fn query(
        &self,
        _filter: &CatalogFilter,
    ) -> impl Future<Output = Result<Vec<GymRecord>, StoreError>> + Send {
        ready(Err(StoreError::Unavailable(self.reason.clone())))
    }
}
