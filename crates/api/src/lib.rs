// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Taikan gym search.
//!
//! Requests carry facets as reference-data labels. Handlers validate them
//! through the selectors, run the catalog query and return display-ready
//! responses. Domain and core errors are translated into [`ApiError`] and
//! never leak past this crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    describe_conditions, get_calendar, get_gym_detail, get_reference, parse_today, search_gyms,
};
pub use request_response::{
    CalendarMonthInfo, CalendarResponse, ConditionsInfo, DayInfo, GymDetailResponse,
    SearchRequest, SearchResponse,
};
pub use taikan_catalog::ReferenceData;
