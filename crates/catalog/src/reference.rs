// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use taikan_domain::{CURRENT_LOCATION_LABEL, PREFECTURES, STATIONS, Sport, TimeOption};

/// One prefecture and its cities, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefectureEntry {
    /// Prefecture name, e.g. `東京都`.
    pub name: String,
    /// Cities and wards offered for the prefecture.
    pub cities: Vec<String>,
}

/// The master data the selectors offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Prefectures in display order; the first one starts expanded.
    pub prefectures: Vec<PrefectureEntry>,
    /// Stations offered on the station tab.
    pub stations: Vec<String>,
    /// Label of the current-location choice.
    pub current_location: String,
    /// Sports offered by the sport picker.
    pub sports: Vec<Sport>,
    /// Start and end time options, unspecified first.
    pub time_options: Vec<TimeOption>,
}

/// Lists the areas, stations, sports and time options.
#[must_use]
pub fn reference_data() -> ReferenceData {
    ReferenceData {
        prefectures: PREFECTURES
            .iter()
            .map(|(name, cities)| PrefectureEntry {
                name: (*name).to_string(),
                cities: cities.iter().map(|c| (*c).to_string()).collect(),
            })
            .collect(),
        stations: STATIONS.iter().map(|s| (*s).to_string()).collect(),
        current_location: CURRENT_LOCATION_LABEL.to_string(),
        sports: Sport::ALL.to_vec(),
        time_options: TimeOption::ALL.to_vec(),
    }
}
