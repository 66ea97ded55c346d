// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar window generation for the date picker.
//!
//! The picker shows two months: the month containing `today` and the
//! month after it.
//!
//! ## Invariants
//!
//! - The current month starts at the Sunday of this week, or day 1 when
//!   that Sunday falls in the previous month
//! - Days before `today` are present but disabled
//! - The following month is shown in full with nothing disabled
//! - Leading blank cells equal the weekday (Sun = 0) of the first
//!   visible day, so weekday columns stay aligned
//!
//! All functions are pure: `today` is always passed in.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Weekday column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// One rendered day of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of month (1-based).
    pub day: u8,
    /// Disabled days are rendered but cannot be selected.
    pub disabled: bool,
}

/// Returns the number of days in a month.
#[must_use]
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Returns the weekday of a date counted from Sunday (Sunday = 0).
#[must_use]
pub const fn weekday_from_sunday(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

/// Returns the day of month of this week's Sunday.
///
/// The result is zero or negative when that Sunday lies in the previous
/// month.
#[must_use]
pub fn week_start_day(today: Date) -> i32 {
    i32::from(today.day()) - i32::from(weekday_from_sunday(today))
}

/// Computes the visible days of a month.
///
/// # Arguments
///
/// * `year` - Calendar year
/// * `month` - Calendar month
/// * `today` - Days strictly before this day are marked disabled
/// * `week_start` - Days strictly before this day are omitted
///
/// With neither `today` nor `week_start` the full month is returned and
/// nothing is disabled.
#[must_use]
pub fn visible_days(
    year: i32,
    month: Month,
    today: Option<u8>,
    week_start: Option<i32>,
) -> Vec<DayCell> {
    let last: i32 = i32::from(days_in_month(year, month));
    let first: i32 = week_start.map_or(1, |start| start.max(1));

    (first..=last)
        .filter_map(|day| u8::try_from(day).ok())
        .map(|day| DayCell {
            day,
            disabled: today.is_some_and(|t| day < t),
        })
        .collect()
}

/// Formats a date as a picker label, e.g. `11月5日`.
#[must_use]
pub fn date_label(date: Date) -> String {
    format!("{}月{}日", u8::from(date.month()), date.day())
}

/// Parses a picker label into `(month, day)`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateLabel` if the label is not of the
/// form `{month}月{day}日` with numeric components.
pub fn parse_date_label(label: &str) -> Result<(u8, u8), DomainError> {
    let invalid = || DomainError::InvalidDateLabel(label.to_string());

    let body: &str = label.trim().strip_suffix('日').ok_or_else(invalid)?;
    let (month, day) = body.split_once('月').ok_or_else(invalid)?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let day: u8 = day.parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok((month, day))
}

/// Builds a date, mapping out-of-range components to a domain error.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarDate` if the day does not exist.
pub fn calendar_date(year: i32, month: Month, day: u8) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, day).map_err(|_| DomainError::InvalidCalendarDate {
        year,
        month: u8::from(month),
        day,
    })
}

/// One month of the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: Month,
    /// Number of blank cells before the first visible day.
    pub leading_blanks: u8,
    /// Visible days in order.
    pub days: Vec<DayCell>,
}

impl CalendarMonth {
    /// Builds the month containing `today`, truncated at this week's
    /// Sunday with past days disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the first visible day cannot be built.
    pub fn current(today: Date) -> Result<Self, DomainError> {
        Self::build(
            today.year(),
            today.month(),
            Some(today.day()),
            Some(week_start_day(today)),
        )
    }

    /// Builds the month after the one containing `today`, in full.
    ///
    /// # Errors
    ///
    /// Returns an error if the first day cannot be built.
    pub fn following(today: Date) -> Result<Self, DomainError> {
        let month: Month = today.month().next();
        let year: i32 = if month == Month::January {
            today.year() + 1
        } else {
            today.year()
        };
        Self::build(year, month, None, None)
    }

    fn build(
        year: i32,
        month: Month,
        today: Option<u8>,
        week_start: Option<i32>,
    ) -> Result<Self, DomainError> {
        let days: Vec<DayCell> = visible_days(year, month, today, week_start);
        let leading_blanks: u8 = match days.first() {
            Some(first) => weekday_from_sunday(calendar_date(year, month, first.day)?),
            None => 0,
        };

        Ok(Self {
            year,
            month,
            leading_blanks,
            days,
        })
    }

    /// Returns the heading, e.g. `2024年 6月`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{}年 {}月", self.year, u8::from(self.month))
    }

    /// Returns the visible cell for a day, if rendered.
    #[must_use]
    pub fn cell(&self, day: u8) -> Option<&DayCell> {
        self.days.iter().find(|cell| cell.day == day)
    }

    /// Checks if a day is rendered and enabled.
    #[must_use]
    pub fn is_selectable(&self, day: u8) -> bool {
        self.cell(day).is_some_and(|cell| !cell.disabled)
    }

    /// Checks if a date falls in this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
