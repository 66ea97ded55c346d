// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::FacetEdit;
use crate::conditions::{AreaFacet, DateFacet, FacetKind, SearchConditions};
use taikan_domain::Sport;

/// Holds the committed facets of the search form.
///
/// Selectors own their transient state until they confirm; the confirmed
/// value is committed here. The accumulator does not interpret facet
/// values beyond dropping empty ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionAccumulator {
    committed: SearchConditions,
    open: Option<FacetKind>,
}

impl ConditionAccumulator {
    /// Creates an accumulator with no committed facets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a selector as open.
    pub const fn open(&mut self, kind: FacetKind) {
        self.open = Some(kind);
    }

    /// Closes the open selector without committing anything.
    pub const fn close(&mut self) {
        self.open = None;
    }

    /// Returns the selector currently open, if any.
    #[must_use]
    pub const fn open_facet(&self) -> Option<FacetKind> {
        self.open
    }

    /// Commits a facet edit and closes the open selector.
    ///
    /// Non-empty values are stored; empty values clear the facet.
    pub fn commit(&mut self, edit: FacetEdit) {
        match edit {
            FacetEdit::Area(facet) => {
                self.committed.area = facet.filter(|f| !f.is_empty());
            }
            FacetEdit::Date(facet) => {
                self.committed.date = facet.filter(|f| !f.dates.is_empty());
            }
            FacetEdit::Sport(sports) => {
                let mut unique: Vec<Sport> = Vec::with_capacity(sports.len());
                for sport in sports {
                    if !unique.contains(&sport) {
                        unique.push(sport);
                    }
                }
                self.committed.sport = Some(unique).filter(|s| !s.is_empty());
            }
            FacetEdit::Keyword(keyword) => {
                let trimmed: &str = keyword.trim();
                self.committed.keyword = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
        }
        self.open = None;
    }

    /// Commits the area facet.
    pub fn set_area(&mut self, facet: Option<AreaFacet>) {
        self.commit(FacetEdit::Area(facet));
    }

    /// Commits the date facet.
    pub fn set_date(&mut self, facet: Option<DateFacet>) {
        self.commit(FacetEdit::Date(facet));
    }

    /// Commits the sport facet.
    pub fn set_sport(&mut self, sports: Vec<Sport>) {
        self.commit(FacetEdit::Sport(sports));
    }

    /// Commits the keyword.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.commit(FacetEdit::Keyword(keyword.into()));
    }

    /// Clears one facet.
    pub fn clear(&mut self, kind: FacetKind) {
        match kind {
            FacetKind::Area => self.committed.area = None,
            FacetKind::Date => self.committed.date = None,
            FacetKind::Sport => self.committed.sport = None,
            FacetKind::Keyword => self.committed.keyword = None,
        }
    }

    /// Returns the committed conditions without copying.
    #[must_use]
    pub const fn committed(&self) -> &SearchConditions {
        &self.committed
    }

    /// Builds the snapshot handed to the catalog query.
    #[must_use]
    pub fn snapshot(&self) -> SearchConditions {
        self.committed.clone()
    }

    /// Returns how many selector facets (area, date, sport) are set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.committed.active_count()
    }

    /// Checks if any selector facet is set.
    #[must_use]
    pub fn has_conditions(&self) -> bool {
        self.active_count() > 0
    }
}
