// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers composing the selectors and the catalog.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CalendarMonthInfo, CalendarResponse, ConditionsInfo, DayInfo, GymDetailResponse,
    SearchRequest, SearchResponse,
};
use taikan::{DateSelector, FacetKind, SearchConditions, SearchOutcome, apply_selection};
use taikan_catalog::{Catalog, CatalogStore, ReferenceData, reference_data};
use taikan_domain::{CalendarMonth, TimeOption, WEEKDAY_LABELS, calendar_date, date_label};
use time::Date;
use time::macros::format_description;
use tracing::{debug, info, warn};

/// Resolves the `today` of a request.
///
/// # Arguments
///
/// * `value` - The requested day (`YYYY-MM-DD`), if any
/// * `clock_today` - The day to use when none was requested
///
/// # Errors
///
/// Returns an error if `value` is not a valid date.
pub fn parse_today(value: Option<&str>, clock_today: Date) -> Result<Date, ApiError> {
    let Some(value) = value else {
        return Ok(clock_today);
    };
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        ApiError::InvalidInput {
            field: String::from("today"),
            message: format!("Invalid date format: {value}"),
        }
    })
}

/// Builds the display form of a condition snapshot.
#[must_use]
pub fn describe_conditions(conditions: &SearchConditions) -> ConditionsInfo {
    ConditionsInfo {
        area: conditions.display(FacetKind::Area),
        date: conditions.display(FacetKind::Date),
        start_time: conditions.date().map(|d| d.start_time.label()),
        end_time: conditions.date().map(|d| d.end_time.label()),
        sport: conditions.display(FacetKind::Sport),
        keyword: conditions.display(FacetKind::Keyword),
        badges: conditions.badges(),
        active_count: conditions.active_count(),
    }
}

/// Searches the catalog with the facets of a request.
///
/// Store failures are not errors: the response then carries the fallback
/// dataset with `fallback` set.
///
/// # Arguments
///
/// * `catalog` - The catalog to search
/// * `request` - The search request
/// * `clock_today` - The day to use when the request names none
///
/// # Errors
///
/// Returns an error if `today` or any facet label is invalid.
pub async fn search_gyms<S: CatalogStore>(
    catalog: &Catalog<S>,
    request: &SearchRequest,
    clock_today: Date,
) -> Result<SearchResponse, ApiError> {
    let today: Date = parse_today(request.today.as_deref(), clock_today)?;
    let conditions: SearchConditions =
        apply_selection(&request.selection, today).map_err(translate_core_error)?;
    debug!(badges = ?conditions.badges(), "Applied search conditions");

    let outcome: SearchOutcome = catalog.search(&conditions).await;
    if outcome.fallback {
        warn!(total = outcome.total, "Search answered from fallback dataset");
    }

    Ok(SearchResponse {
        total: outcome.total,
        items: outcome.items,
        fallback: outcome.fallback,
        conditions: describe_conditions(&conditions),
    })
}

/// Retrieves one facility.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no facility has this id.
pub async fn get_gym_detail<S: CatalogStore>(
    catalog: &Catalog<S>,
    id: i64,
) -> Result<GymDetailResponse, ApiError> {
    let gym = catalog
        .find_gym(id)
        .await
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Gym"),
            message: format!("Gym {id} does not exist"),
        })?;
    info!(id, name = %gym.name, "Retrieved gym detail");

    let has_availability: bool = gym.has_availability();
    Ok(GymDetailResponse {
        gym,
        has_availability,
    })
}

/// Lists the reference data offered by the selectors.
#[must_use]
pub fn get_reference() -> ReferenceData {
    reference_data()
}

fn month_info(month: &CalendarMonth) -> Result<CalendarMonthInfo, ApiError> {
    let days: Vec<DayInfo> = month
        .days
        .iter()
        .map(|cell| {
            let date: Date =
                calendar_date(month.year, month.month, cell.day).map_err(translate_domain_error)?;
            Ok(DayInfo {
                day: cell.day,
                label: date_label(date),
                disabled: cell.disabled,
            })
        })
        .collect::<Result<Vec<DayInfo>, ApiError>>()?;

    Ok(CalendarMonthInfo {
        year: month.year,
        month: u8::from(month.month),
        title: month.title(),
        leading_blanks: month.leading_blanks,
        days,
    })
}

/// Computes the two months of the date picker.
///
/// # Arguments
///
/// * `today` - The requested day (`YYYY-MM-DD`), if any
/// * `clock_today` - The day to use when none was requested
///
/// # Errors
///
/// Returns an error if `today` is not a valid date.
pub fn get_calendar(today: Option<&str>, clock_today: Date) -> Result<CalendarResponse, ApiError> {
    let today: Date = parse_today(today, clock_today)?;
    let selector: DateSelector = DateSelector::new(today).map_err(translate_domain_error)?;

    let months: Vec<CalendarMonthInfo> = selector
        .months()
        .into_iter()
        .map(month_info)
        .collect::<Result<Vec<CalendarMonthInfo>, ApiError>>()?;

    Ok(CalendarResponse {
        today: selector.today().to_string(),
        weekday_labels: WEEKDAY_LABELS.iter().map(|l| (*l).to_string()).collect(),
        months,
        time_options: TimeOption::ALL.iter().map(TimeOption::label).collect(),
    })
}
