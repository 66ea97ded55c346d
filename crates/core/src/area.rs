// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hierarchical area picker.
//!
//! Two orthogonal axes of state:
//!
//! - expansion, per prefecture (initially only the first prefecture is open)
//! - selection, per city and per station
//!
//! Expansion never affects selection. Cities are selected in one flat list
//! across all prefectures.

use crate::conditions::AreaFacet;
use serde::{Deserialize, Serialize};
use taikan_domain::{DomainError, PREFECTURES, cities_of, is_known_station, prefecture_of};

/// Tabs of the area picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTab {
    /// エリア: prefecture and city list.
    #[default]
    Area,
    /// 駅: station list.
    Station,
    /// 現在地: current location.
    CurrentLocation,
}

/// Flips membership of `value` in `list`, returning the new membership.
fn toggle_member(list: &mut Vec<String>, value: &str) -> bool {
    if let Some(index) = list.iter().position(|item| item == value) {
        list.remove(index);
        false
    } else {
        list.push(value.to_string());
        true
    }
}

/// Transient state of the area picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSelector {
    tab: LocationTab,
    expanded: Vec<&'static str>,
    selected_areas: Vec<String>,
    selected_stations: Vec<String>,
}

impl Default for AreaSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaSelector {
    /// Creates a picker with the first prefecture expanded and nothing
    /// selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab: LocationTab::Area,
            expanded: PREFECTURES.iter().take(1).map(|(name, _)| *name).collect(),
            selected_areas: Vec::new(),
            selected_stations: Vec::new(),
        }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn tab(&self) -> LocationTab {
        self.tab
    }

    /// Switches the active tab. Selection state is kept.
    pub const fn set_tab(&mut self, tab: LocationTab) {
        self.tab = tab;
    }

    /// Checks if a prefecture is expanded.
    #[must_use]
    pub fn is_expanded(&self, prefecture: &str) -> bool {
        self.expanded.contains(&prefecture)
    }

    /// Flips the expansion of a prefecture.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPrefecture` for names outside the
    /// reference data.
    pub fn toggle_expand(&mut self, prefecture: &str) -> Result<bool, DomainError> {
        let name: &'static str = PREFECTURES
            .iter()
            .map(|(name, _)| *name)
            .find(|name| *name == prefecture)
            .ok_or_else(|| DomainError::UnknownPrefecture(prefecture.to_string()))?;

        if let Some(index) = self.expanded.iter().position(|p| *p == name) {
            self.expanded.remove(index);
            Ok(false)
        } else {
            self.expanded.push(name);
            Ok(true)
        }
    }

    /// Flips the selection of a city.
    ///
    /// Returns whether the city is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCity` for cities outside the reference
    /// data.
    pub fn toggle_city(&mut self, city: &str) -> Result<bool, DomainError> {
        if prefecture_of(city).is_none() {
            return Err(DomainError::UnknownCity(city.to_string()));
        }
        Ok(toggle_member(&mut self.selected_areas, city))
    }

    /// Bulk-toggles every city of a prefecture.
    ///
    /// If all of the prefecture's cities are selected they are all
    /// removed; otherwise the missing ones are appended in reference
    /// order. Selections in other prefectures are never touched, and the
    /// relative order of already-selected cities is kept.
    ///
    /// Returns whether the prefecture is fully selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPrefecture` for names outside the
    /// reference data.
    pub fn select_all_in_prefecture(&mut self, prefecture: &str) -> Result<bool, DomainError> {
        let cities: &[&str] = cities_of(prefecture)?;

        if self.all_selected(cities) {
            self.selected_areas
                .retain(|selected| !cities.contains(&selected.as_str()));
            return Ok(false);
        }

        for city in cities {
            if !self.selected_areas.iter().any(|selected| selected == city) {
                self.selected_areas.push((*city).to_string());
            }
        }
        Ok(true)
    }

    fn all_selected(&self, cities: &[&str]) -> bool {
        cities
            .iter()
            .all(|city| self.selected_areas.iter().any(|selected| selected == city))
    }

    /// Checks if every city of a prefecture is selected.
    ///
    /// Unknown prefectures are never fully selected.
    #[must_use]
    pub fn is_all_selected(&self, prefecture: &str) -> bool {
        cities_of(prefecture).is_ok_and(|cities| self.all_selected(cities))
    }

    /// Returns how many cities of a prefecture are selected.
    #[must_use]
    pub fn selected_count_in(&self, prefecture: &str) -> usize {
        cities_of(prefecture).map_or(0, |cities| {
            cities
                .iter()
                .filter(|city| self.selected_areas.iter().any(|s| s == *city))
                .count()
        })
    }

    /// Flips the selection of a station.
    ///
    /// Returns whether the station is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStation` for stations outside the
    /// reference data.
    pub fn toggle_station(&mut self, station: &str) -> Result<bool, DomainError> {
        if !is_known_station(station) {
            return Err(DomainError::UnknownStation(station.to_string()));
        }
        Ok(toggle_member(&mut self.selected_stations, station))
    }

    /// Returns the selected cities in selection order.
    #[must_use]
    pub fn selected_areas(&self) -> &[String] {
        &self.selected_areas
    }

    /// Returns the selected stations in selection order.
    #[must_use]
    pub fn selected_stations(&self) -> &[String] {
        &self.selected_stations
    }

    /// Returns the number of selected cities and stations.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_areas.len() + self.selected_stations.len()
    }

    /// Checks if the shared confirm action is enabled.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.selected_count() > 0
    }

    /// Confirms the city and station selection.
    ///
    /// Returns `None` (confirm disabled) when nothing is selected.
    #[must_use]
    pub fn confirm(&self) -> Option<AreaFacet> {
        if !self.can_confirm() {
            return None;
        }
        Some(AreaFacet::Places {
            areas: self.selected_areas.clone(),
            stations: self.selected_stations.clone(),
        })
    }

    /// Chooses the current location, bypassing the selection state.
    pub const fn choose_current_location(&mut self) -> AreaFacet {
        self.tab = LocationTab::CurrentLocation;
        AreaFacet::CurrentLocation
    }
}
