// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The committed search-condition snapshot and its facet values.
//!
//! Facets stay structured from the selectors down to the catalog filter.
//! Comma-joined display strings are produced only through the `display`
//! accessors and are never parsed back into filters.

use serde::{Deserialize, Serialize};
use taikan_domain::{CURRENT_LOCATION_LABEL, Sport, TimeOption, date_label};
use time::Date;

/// Separator used when a multi-value facet is shown as one string.
pub const DISPLAY_SEPARATOR: &str = ", ";

/// One independent search dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKind {
    /// Area, station or current location.
    Area,
    /// Dates and time window.
    Date,
    /// Sports.
    Sport,
    /// Free-text keyword.
    Keyword,
}

impl FacetKind {
    /// Facets that are edited through a selector modal.
    pub const SELECTORS: [Self; 3] = [Self::Area, Self::Date, Self::Sport];

    /// Returns the badge prefix shown next to an active facet.
    ///
    /// Sports are shown without a prefix.
    #[must_use]
    pub const fn badge_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Area => Some("エリア"),
            Self::Date => Some("日時"),
            Self::Sport => None,
            Self::Keyword => Some("キーワード"),
        }
    }
}

/// The committed value of the area facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AreaFacet {
    /// Cities and stations picked on the area and station tabs.
    Places {
        /// Selected cities, in selection order.
        areas: Vec<String>,
        /// Selected stations, in selection order.
        stations: Vec<String>,
    },
    /// Search around the user's current location.
    CurrentLocation,
}

impl AreaFacet {
    /// Returns the selected cities (empty for the current location).
    #[must_use]
    pub fn areas(&self) -> &[String] {
        match self {
            Self::Places { areas, .. } => areas,
            Self::CurrentLocation => &[],
        }
    }

    /// Returns the selected stations (empty for the current location).
    #[must_use]
    pub fn stations(&self) -> &[String] {
        match self {
            Self::Places { stations, .. } => stations,
            Self::CurrentLocation => &[],
        }
    }

    /// Checks if the facet carries no selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Places { areas, stations } => areas.is_empty() && stations.is_empty(),
            Self::CurrentLocation => false,
        }
    }

    /// Returns cities followed by stations, joined for display.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Places { areas, stations } => areas
                .iter()
                .chain(stations)
                .map(String::as_str)
                .collect::<Vec<&str>>()
                .join(DISPLAY_SEPARATOR),
            Self::CurrentLocation => CURRENT_LOCATION_LABEL.to_string(),
        }
    }
}

/// The committed value of the date facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFacet {
    /// Selected dates, in click order.
    pub dates: Vec<Date>,
    /// Requested start of the time window.
    pub start_time: TimeOption,
    /// Requested end of the time window.
    pub end_time: TimeOption,
}

impl DateFacet {
    /// Returns the date labels, e.g. `11月5日`, in click order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.dates.iter().copied().map(date_label).collect()
    }

    /// Returns the date labels joined for display.
    ///
    /// The time window is not part of the display string.
    #[must_use]
    pub fn display(&self) -> String {
        self.labels().join(DISPLAY_SEPARATOR)
    }
}

/// An immutable snapshot of the committed facets driving one search.
///
/// A facet is present only when its selection is non-empty. Snapshots are
/// built by [`crate::ConditionAccumulator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConditions {
    pub(crate) area: Option<AreaFacet>,
    pub(crate) date: Option<DateFacet>,
    pub(crate) sport: Option<Vec<Sport>>,
    pub(crate) keyword: Option<String>,
}

impl SearchConditions {
    /// Returns the area facet, if set.
    #[must_use]
    pub const fn area(&self) -> Option<&AreaFacet> {
        self.area.as_ref()
    }

    /// Returns the date facet, if set.
    #[must_use]
    pub const fn date(&self) -> Option<&DateFacet> {
        self.date.as_ref()
    }

    /// Returns the selected sports (empty when the facet is not set).
    #[must_use]
    pub fn sports(&self) -> &[Sport] {
        self.sport.as_deref().unwrap_or_default()
    }

    /// Returns the keyword, if set.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Checks if a facet is set.
    #[must_use]
    pub const fn is_set(&self, kind: FacetKind) -> bool {
        match kind {
            FacetKind::Area => self.area.is_some(),
            FacetKind::Date => self.date.is_some(),
            FacetKind::Sport => self.sport.is_some(),
            FacetKind::Keyword => self.keyword.is_some(),
        }
    }

    /// Returns how many selector facets (area, date, sport) are set.
    ///
    /// The keyword is not counted.
    #[must_use]
    pub fn active_count(&self) -> usize {
        FacetKind::SELECTORS
            .into_iter()
            .filter(|kind| self.is_set(*kind))
            .count()
    }

    /// Checks if no facet is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.area.is_none() && self.date.is_none() && self.sport.is_none() && self.keyword.is_none()
    }

    /// Returns the display string of a facet, or `None` when unset.
    #[must_use]
    pub fn display(&self, kind: FacetKind) -> Option<String> {
        match kind {
            FacetKind::Area => self.area.as_ref().map(AreaFacet::display),
            FacetKind::Date => self.date.as_ref().map(DateFacet::display),
            FacetKind::Sport => self.sport.as_ref().map(|sports| {
                sports
                    .iter()
                    .map(Sport::label)
                    .collect::<Vec<&str>>()
                    .join(DISPLAY_SEPARATOR)
            }),
            FacetKind::Keyword => self.keyword.clone(),
        }
    }

    /// Returns the badges for the active facets, in result-screen order
    /// (date, area, sport, keyword).
    #[must_use]
    pub fn badges(&self) -> Vec<String> {
        [
            FacetKind::Date,
            FacetKind::Area,
            FacetKind::Sport,
            FacetKind::Keyword,
        ]
        .into_iter()
        .filter_map(|kind| {
            self.display(kind).map(|value| match kind.badge_prefix() {
                Some(prefix) => format!("{prefix}: {value}"),
                None => value,
            })
        })
        .collect()
    }
}
