// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use taikan::FacetSelection;
use taikan_domain::GymDetail;

/// API request to search the gym catalog.
///
/// Facets are given as reference-data labels and validated by replaying
/// them through the selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The current day (`YYYY-MM-DD`). Defaults to the server's date.
    #[serde(default)]
    pub today: Option<String>,
    /// The facet labels to apply.
    #[serde(flatten)]
    pub selection: FacetSelection,
}

/// Display form of the conditions a search ran with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionsInfo {
    /// Cities and stations, or the current-location label.
    pub area: Option<String>,
    /// Date labels.
    pub date: Option<String>,
    /// Start of the time window, when dates are set.
    pub start_time: Option<String>,
    /// End of the time window, when dates are set.
    pub end_time: Option<String>,
    /// Sport names.
    pub sport: Option<String>,
    /// Free-text keyword.
    pub keyword: Option<String>,
    /// Badges in result-screen order.
    pub badges: Vec<String>,
    /// Number of selector facets set (area, date, sport).
    pub active_count: usize,
}

/// API response for a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of facilities returned.
    pub total: usize,
    /// The facilities.
    pub items: Vec<GymDetail>,
    /// Set when the store failed and the fallback dataset was returned.
    pub fallback: bool,
    /// The applied conditions.
    pub conditions: ConditionsInfo,
}

/// API response for a single facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymDetailResponse {
    /// The facility.
    #[serde(flatten)]
    pub gym: GymDetail,
    /// Whether any slot can still be joined.
    pub has_availability: bool,
}

/// One day cell of a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInfo {
    /// Day of the month.
    pub day: u8,
    /// Date label, e.g. `6月20日`.
    pub label: String,
    /// Past days are shown but cannot be selected.
    pub disabled: bool,
}

/// One month of the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonthInfo {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1 to 12.
    pub month: u8,
    /// Heading, e.g. `2024年 6月`.
    pub title: String,
    /// Blank cells before the first visible day.
    pub leading_blanks: u8,
    /// Visible days in calendar order.
    pub days: Vec<DayInfo>,
}

/// API response for the date picker window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The day the window was computed for (`YYYY-MM-DD`).
    pub today: String,
    /// Column headings, Sunday first.
    pub weekday_labels: Vec<String>,
    /// The current and the following month.
    pub months: Vec<CalendarMonthInfo>,
    /// Time options offered for the time window.
    pub time_options: Vec<String>,
}
