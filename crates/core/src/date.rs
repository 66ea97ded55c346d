// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and time-window picker.
//!
//! The picker is built around an injected `today`; it never reads the
//! wall clock. Selected dates keep click order, not calendar order.

use crate::conditions::DateFacet;
use taikan_domain::{
    CalendarMonth, DomainError, TimeOption, calendar_date, date_label, parse_date_label,
};
use time::Date;

/// Transient state of the date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelector {
    today: Date,
    current: CalendarMonth,
    following: CalendarMonth,
    selected_dates: Vec<Date>,
    start_time: TimeOption,
    end_time: TimeOption,
}

impl DateSelector {
    /// Creates a picker for the window starting at `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar months cannot be built.
    pub fn new(today: Date) -> Result<Self, DomainError> {
        Ok(Self {
            today,
            current: CalendarMonth::current(today)?,
            following: CalendarMonth::following(today)?,
            selected_dates: Vec::new(),
            start_time: TimeOption::Unspecified,
            end_time: TimeOption::Unspecified,
        })
    }

    /// Returns the injected current day.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Returns the month containing `today`.
    #[must_use]
    pub const fn current_month(&self) -> &CalendarMonth {
        &self.current
    }

    /// Returns the month after the current one.
    #[must_use]
    pub const fn following_month(&self) -> &CalendarMonth {
        &self.following
    }

    /// Returns both months in display order.
    #[must_use]
    pub const fn months(&self) -> [&CalendarMonth; 2] {
        [&self.current, &self.following]
    }

    /// Checks if a date is rendered and enabled in either month.
    #[must_use]
    pub fn is_selectable(&self, date: Date) -> bool {
        self.months()
            .into_iter()
            .any(|month| month.contains(date) && month.is_selectable(date.day()))
    }

    /// Checks if a date is selected.
    #[must_use]
    pub fn is_selected(&self, date: Date) -> bool {
        self.selected_dates.contains(&date)
    }

    /// Flips the selection of a date.
    ///
    /// Returns whether the date is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateNotSelectable` for past days and days
    /// outside the two visible months. The selection is unchanged.
    pub fn toggle_date(&mut self, date: Date) -> Result<bool, DomainError> {
        if !self.is_selectable(date) {
            return Err(DomainError::DateNotSelectable { date });
        }

        if let Some(index) = self.selected_dates.iter().position(|d| *d == date) {
            self.selected_dates.remove(index);
            Ok(false)
        } else {
            self.selected_dates.push(date);
            Ok(true)
        }
    }

    /// Flips the selection of a date given by its label, e.g. `11月5日`.
    ///
    /// # Errors
    ///
    /// Returns an error if the label cannot be parsed, names a month
    /// outside the window, or names a day that is not selectable.
    pub fn toggle_label(&mut self, label: &str) -> Result<bool, DomainError> {
        let date: Date = self.resolve_label(label)?;
        self.toggle_date(date)
    }

    /// Resolves a label against the two visible months.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is malformed or its month is not
    /// visible.
    pub fn resolve_label(&self, label: &str) -> Result<Date, DomainError> {
        let (month, day) = parse_date_label(label)?;
        let target: &CalendarMonth = self
            .months()
            .into_iter()
            .find(|m| u8::from(m.month) == month)
            .ok_or_else(|| DomainError::InvalidDateLabel(label.to_string()))?;
        calendar_date(target.year, target.month, day)
    }

    /// Returns the selected dates in click order.
    #[must_use]
    pub fn selected_dates(&self) -> &[Date] {
        &self.selected_dates
    }

    /// Returns the selected dates as labels, in click order.
    #[must_use]
    pub fn selected_labels(&self) -> Vec<String> {
        self.selected_dates.iter().copied().map(date_label).collect()
    }

    /// Returns the number of selected dates.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_dates.len()
    }

    /// Sets the start of the time window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTimeOption` for hours outside the fixed
    /// option list.
    pub fn set_start_time(&mut self, option: TimeOption) -> Result<(), DomainError> {
        self.start_time = offered(option)?;
        Ok(())
    }

    /// Sets the end of the time window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTimeOption` for hours outside the fixed
    /// option list.
    pub fn set_end_time(&mut self, option: TimeOption) -> Result<(), DomainError> {
        self.end_time = offered(option)?;
        Ok(())
    }

    /// Returns the start of the time window.
    #[must_use]
    pub const fn start_time(&self) -> TimeOption {
        self.start_time
    }

    /// Returns the end of the time window.
    #[must_use]
    pub const fn end_time(&self) -> TimeOption {
        self.end_time
    }

    /// Checks if start is not after end when both are specified.
    ///
    /// Informational only: an inverted window is accepted.
    #[must_use]
    pub fn time_window_is_ordered(&self) -> bool {
        match (self.start_time.hour(), self.end_time.hour()) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    /// Checks if the confirm action is enabled.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        !self.selected_dates.is_empty()
    }

    /// Confirms the selection.
    ///
    /// Returns `None` (confirm disabled) when no date is selected.
    #[must_use]
    pub fn confirm(&self) -> Option<DateFacet> {
        if !self.can_confirm() {
            return None;
        }
        Some(DateFacet {
            dates: self.selected_dates.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
        })
    }
}

fn offered(option: TimeOption) -> Result<TimeOption, DomainError> {
    if option.is_offered() {
        Ok(option)
    } else {
        Err(DomainError::UnknownTimeOption(option.label()))
    }
}
