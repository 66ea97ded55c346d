// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while validating facet selections against the
/// reference data and the calendar window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The prefecture is not part of the area reference data.
    UnknownPrefecture(String),
    /// The city is not listed under any prefecture.
    UnknownCity(String),
    /// The station is not part of the station reference data.
    UnknownStation(String),
    /// The sport is not part of the sport catalog.
    UnknownSport(String),
    /// The time label is not one of the fixed time options.
    UnknownTimeOption(String),
    /// A calendar component was out of range.
    InvalidCalendarDate {
        /// The year component.
        year: i32,
        /// The month component (1-12).
        month: u8,
        /// The day component.
        day: u8,
    },
    /// The date is disabled or outside the visible calendar window.
    DateNotSelectable {
        /// The rejected date.
        date: time::Date,
    },
    /// A date label could not be parsed as `{month}月{day}日`.
    InvalidDateLabel(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPrefecture(name) => write!(f, "Unknown prefecture: {name}"),
            Self::UnknownCity(name) => write!(f, "Unknown city: {name}"),
            Self::UnknownStation(name) => write!(f, "Unknown station: {name}"),
            Self::UnknownSport(name) => write!(f, "Unknown sport: {name}"),
            Self::UnknownTimeOption(label) => write!(f, "Unknown time option: {label}"),
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "Invalid calendar date: {year}-{month:02}-{day:02}")
            }
            Self::DateNotSelectable { date } => {
                write!(f, "Date {date} is not selectable in the current window")
            }
            Self::InvalidDateLabel(label) => write!(f, "Invalid date label: {label}"),
        }
    }
}

impl std::error::Error for DomainError {}
