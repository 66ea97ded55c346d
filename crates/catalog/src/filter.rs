// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation of a condition snapshot into catalog constraints.
//!
//! Only two facets constrain the catalog:
//!
//! - area: the record's `area` must equal one of the selected cities or
//!   stations, or the current-location label when that is chosen
//! - sport: the record's tags must contain at least one selected sport
//!
//! The date and keyword facets are accepted and ignored.

use crate::data_models::GymRecord;
use serde::{Deserialize, Serialize};
use taikan::{AreaFacet, SearchConditions};
use taikan_domain::{CURRENT_LOCATION_LABEL, Sport};

/// Constraints handed to a [`crate::CatalogStore`].
///
/// Empty lists apply no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Accepted values of the record's `area` field.
    pub areas: Vec<String>,
    /// Tags of which the record must carry at least one.
    pub tags: Vec<String>,
}

impl CatalogFilter {
    /// Builds the filter for a condition snapshot.
    #[must_use]
    pub fn from_conditions(conditions: &SearchConditions) -> Self {
        Self {
            areas: conditions.area().map(accepted_areas).unwrap_or_default(),
            tags: conditions
                .sports()
                .iter()
                .map(|sport| sport.label().to_string())
                .collect(),
        }
    }

    /// Matches records in one area.
    #[must_use]
    pub fn by_area(area: impl Into<String>) -> Self {
        Self {
            areas: vec![area.into()],
            tags: Vec::new(),
        }
    }

    /// Matches records carrying one tag.
    #[must_use]
    pub fn tag_contains(tag: impl Into<String>) -> Self {
        Self {
            areas: Vec::new(),
            tags: vec![tag.into()],
        }
    }

    /// Matches records offering one sport.
    #[must_use]
    pub fn sport(sport: Sport) -> Self {
        Self::tag_contains(sport.label())
    }

    /// Checks if the filter applies no constraint.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.areas.is_empty() && self.tags.is_empty()
    }

    /// Checks if a record satisfies every constraint.
    #[must_use]
    pub fn matches(&self, record: &GymRecord) -> bool {
        let area_ok: bool = self.areas.is_empty() || self.areas.contains(&record.area);
        let tag_ok: bool = self.tags.is_empty() || self.tags.iter().any(|t| record.has_tag(t));
        area_ok && tag_ok
    }
}

/// Values of `area` accepted for an area facet.
fn accepted_areas(facet: &AreaFacet) -> Vec<String> {
    match facet {
        AreaFacet::Places { areas, stations } => areas.iter().chain(stations).cloned().collect(),
        AreaFacet::CurrentLocation => vec![CURRENT_LOCATION_LABEL.to_string()],
    }
}
