// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::accumulator::ConditionAccumulator;
use crate::area::AreaSelector;
use crate::conditions::SearchConditions;
use crate::date::DateSelector;
use crate::error::CoreError;
use crate::sport::SportSelector;
use serde::{Deserialize, Serialize};
use taikan_domain::{Sport, TimeOption};
use time::Date;

/// A complete facet selection expressed with reference-data labels.
///
/// This is the shape a caller outside the selectors (for example an HTTP
/// client) uses to describe a search. Every label is validated by
/// replaying it through the matching selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetSelection {
    /// City names.
    pub areas: Vec<String>,
    /// Station names.
    pub stations: Vec<String>,
    /// Search around the current location; cities and stations are ignored.
    pub current_location: bool,
    /// Date labels, e.g. `6月20日`.
    pub dates: Vec<String>,
    /// Start time label, e.g. `9:00`.
    pub start_time: Option<String>,
    /// End time label, e.g. `21:00`.
    pub end_time: Option<String>,
    /// Sport names.
    pub sports: Vec<String>,
    /// Free-text keyword.
    pub keyword: Option<String>,
}

/// Replays a facet selection through the selectors and builds the
/// resulting snapshot.
///
/// Repeated labels are selected once. Facets with nothing selected are
/// left unset.
///
/// # Arguments
///
/// * `selection` - The labels to select
/// * `today` - The current day, bounding the selectable dates
///
/// # Errors
///
/// Returns an error if any label is not part of the reference data, or a
/// date is not selectable in the window starting at `today`.
pub fn apply_selection(
    selection: &FacetSelection,
    today: Date,
) -> Result<SearchConditions, CoreError> {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();

    if selection.current_location {
        let mut area: AreaSelector = AreaSelector::new();
        accumulator.set_area(Some(area.choose_current_location()));
    } else {
        let mut area: AreaSelector = AreaSelector::new();
        for city in &selection.areas {
            if !area.selected_areas().contains(city) {
                area.toggle_city(city)?;
            }
        }
        for station in &selection.stations {
            if !area.selected_stations().contains(station) {
                area.toggle_station(station)?;
            }
        }
        accumulator.set_area(area.confirm());
    }

    let mut date: DateSelector = DateSelector::new(today)?;
    for label in &selection.dates {
        let resolved: Date = date.resolve_label(label)?;
        if !date.is_selected(resolved) {
            date.toggle_date(resolved)?;
        }
    }
    if let Some(label) = &selection.start_time {
        date.set_start_time(label.parse::<TimeOption>()?)?;
    }
    if let Some(label) = &selection.end_time {
        date.set_end_time(label.parse::<TimeOption>()?)?;
    }
    accumulator.set_date(date.confirm());

    let mut sport: SportSelector = SportSelector::new();
    for name in &selection.sports {
        let parsed: Sport = name.trim().parse()?;
        if !sport.is_selected(parsed) {
            sport.toggle_sport(parsed);
        }
    }
    accumulator.set_sport(sport.confirm());

    if let Some(keyword) = &selection.keyword {
        accumulator.set_keyword(keyword.as_str());
    }

    Ok(accumulator.snapshot())
}
