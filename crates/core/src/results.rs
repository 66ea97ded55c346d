// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State of the result screen.
//!
//! Each committed snapshot starts a new fetch and supersedes every fetch
//! started before it. A completion carries the ticket of the fetch that
//! produced it; completions for superseded tickets are discarded so a slow
//! stale response can never overwrite fresher results.

use crate::conditions::SearchConditions;
use serde::{Deserialize, Serialize};
use taikan_domain::GymDetail;

/// The outcome of one catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Matching facilities.
    pub items: Vec<GymDetail>,
    /// Number of matching facilities.
    pub total: usize,
    /// Set when the store failed and the fallback dataset was returned.
    pub fallback: bool,
}

impl SearchOutcome {
    /// Wraps results delivered by the catalog store.
    #[must_use]
    pub fn live(items: Vec<GymDetail>) -> Self {
        let total: usize = items.len();
        Self {
            items,
            total,
            fallback: false,
        }
    }

    /// Wraps the fallback dataset substituted after a store failure.
    #[must_use]
    pub fn fallback(items: Vec<GymDetail>) -> Self {
        let total: usize = items.len();
        Self {
            items,
            total,
            fallback: true,
        }
    }
}

/// Fetch state of the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// A fetch is in flight.
    Loading,
    /// The latest fetch returned results from the catalog store.
    Ready(SearchOutcome),
    /// The catalog store failed; the fallback dataset is shown.
    Fallback(SearchOutcome),
}

impl FetchState {
    /// Returns the outcome shown in this state, or `None` while loading.
    #[must_use]
    pub const fn outcome(&self) -> Option<&SearchOutcome> {
        match self {
            Self::Loading => None,
            Self::Ready(outcome) | Self::Fallback(outcome) => Some(outcome),
        }
    }
}

/// Identifies one fetch started by [`ResultsView::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome is now shown.
    Applied,
    /// A newer fetch had started; the outcome was discarded.
    Stale,
}

/// How results are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Sorted list of facilities.
    #[default]
    List,
    /// Month grid with per-day availability.
    Calendar,
}

/// State of the result screen for one logical screen instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    conditions: SearchConditions,
    generation: u64,
    state: FetchState,
    view: ViewMode,
    selected_day: Option<u8>,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsView {
    /// Creates a result screen waiting for its first fetch.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: SearchConditions::default(),
            generation: 0,
            state: FetchState::Loading,
            view: ViewMode::List,
            selected_day: None,
        }
    }

    /// Starts a fetch for a new snapshot, superseding any fetch in flight.
    pub fn begin(&mut self, conditions: SearchConditions) -> FetchTicket {
        self.generation += 1;
        self.conditions = conditions;
        self.state = FetchState::Loading;
        self.selected_day = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of a fetch if it is still the latest one.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: SearchOutcome) -> Completion {
        if ticket.generation != self.generation {
            return Completion::Stale;
        }
        self.state = if outcome.fallback {
            FetchState::Fallback(outcome)
        } else {
            FetchState::Ready(outcome)
        };
        Completion::Applied
    }

    /// Returns the snapshot of the latest fetch.
    #[must_use]
    pub const fn conditions(&self) -> &SearchConditions {
        &self.conditions
    }

    /// Returns the fetch state.
    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    /// Checks if a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    /// Checks if the shown results are the fallback dataset.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.state, FetchState::Fallback(_))
    }

    /// Checks if a successful fetch matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(&self.state, FetchState::Ready(outcome) if outcome.items.is_empty())
    }

    /// Returns the shown facilities (empty while loading).
    #[must_use]
    pub fn items(&self) -> &[GymDetail] {
        match self.state.outcome() {
            Some(outcome) => &outcome.items,
            None => &[],
        }
    }

    /// Returns the result count, or `None` while loading.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.state.outcome().map(|outcome| outcome.total)
    }

    /// Returns the presentation mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Switches between list and calendar presentation.
    pub const fn toggle_view(&mut self) -> ViewMode {
        self.view = match self.view {
            ViewMode::List => ViewMode::Calendar,
            ViewMode::Calendar => ViewMode::List,
        };
        self.view
    }

    /// Selects a day in the calendar presentation.
    pub const fn select_day(&mut self, day: u8) {
        self.selected_day = Some(day);
    }

    /// Returns the day selected in the calendar presentation.
    #[must_use]
    pub const fn selected_day(&self) -> Option<u8> {
        self.selected_day
    }

    /// Returns the open facilities for the calendar presentation.
    ///
    /// Schedules carry no date, so every day of the grid shows the same
    /// facilities.
    pub fn available_gyms(&self) -> impl Iterator<Item = &GymDetail> {
        self.items().iter().filter(|gym| gym.has_availability())
    }

    /// Returns the badges for the facets of the latest snapshot.
    #[must_use]
    pub fn condition_badges(&self) -> Vec<String> {
        self.conditions.badges()
    }
}
