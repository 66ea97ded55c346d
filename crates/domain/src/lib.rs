// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod calendar;
mod error;
mod reference;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{
    CalendarMonth, DayCell, WEEKDAY_LABELS, calendar_date, date_label, days_in_month,
    parse_date_label, visible_days, week_start_day, weekday_from_sunday,
};
pub use error::DomainError;
pub use reference::{
    CURRENT_LOCATION_LABEL, PREFECTURES, STATIONS, cities_of, is_known_station, prefecture_names,
    prefecture_of,
};
pub use types::{Courts, GymDetail, ScheduleSlot, SlotStatus, Sport, TimeOption};
