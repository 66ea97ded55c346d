// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::conditions::{AreaFacet, DateFacet, FacetKind};
use taikan_domain::Sport;

/// A facet edit represents a confirmed selector value as data only.
///
/// Edits are the only way to change the committed conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetEdit {
    /// Replace the area facet. `None` or an empty selection clears it.
    Area(Option<AreaFacet>),
    /// Replace the date facet. `None` or an empty selection clears it.
    Date(Option<DateFacet>),
    /// Replace the sport facet. An empty list clears it.
    Sport(Vec<Sport>),
    /// Replace the keyword. A blank keyword clears it.
    Keyword(String),
}

impl FacetEdit {
    /// Returns the facet this edit targets.
    #[must_use]
    pub const fn kind(&self) -> FacetKind {
        match self {
            Self::Area(_) => FacetKind::Area,
            Self::Date(_) => FacetKind::Date,
            Self::Sport(_) => FacetKind::Sport,
            Self::Keyword(_) => FacetKind::Keyword,
        }
    }
}
