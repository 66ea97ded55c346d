// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::fallback::fallback_gyms;
use crate::filter::CatalogFilter;
use crate::store::CatalogStore;
use taikan::{FacetKind, SearchConditions, SearchOutcome};
use taikan_domain::GymDetail;
use tracing::{debug, error, info, warn};

/// The query component between the search screens and a catalog store.
///
/// Store failures never reach the caller. A failed search is answered
/// with the fallback dataset and flagged as such.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
}

impl<S: CatalogStore> Catalog<S> {
    /// Creates a catalog over a store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Runs one search for a condition snapshot.
    ///
    /// On store failure the whole fallback dataset is returned,
    /// unfiltered, with `fallback` set.
    pub async fn search(&self, conditions: &SearchConditions) -> SearchOutcome {
        let filter: CatalogFilter = CatalogFilter::from_conditions(conditions);
        info!(
            areas = ?filter.areas,
            tags = ?filter.tags,
            "Searching catalog"
        );
        for kind in [FacetKind::Date, FacetKind::Keyword] {
            if let Some(value) = conditions.display(kind) {
                debug!(facet = ?kind, value = %value, "Facet not applied to catalog query");
            }
        }

        match self.store.query(&filter).await {
            Ok(records) => {
                let items: Vec<GymDetail> = records.into_iter().map(GymDetail::from).collect();
                info!(total = items.len(), "Catalog search complete");
                SearchOutcome::live(items)
            }
            Err(err) => {
                error!(error = %err, "Catalog query failed, serving fallback dataset");
                SearchOutcome::fallback(fallback_gyms())
            }
        }
    }

    /// Looks up one gym by id.
    ///
    /// On store failure the fallback dataset is searched instead.
    pub async fn find_gym(&self, id: i64) -> Option<GymDetail> {
        match self.store.query(&CatalogFilter::default()).await {
            Ok(records) => records
                .into_iter()
                .find(|record| record.id == id)
                .map(GymDetail::from),
            Err(err) => {
                warn!(id, error = %err, "Catalog lookup failed, using fallback dataset");
                fallback_gyms().into_iter().find(|gym| gym.id == id)
            }
        }
    }
}
