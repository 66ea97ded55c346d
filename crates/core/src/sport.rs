// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use taikan_domain::Sport;
use tracing::warn;

/// Transient state of the sport picker.
///
/// Unlike the other pickers, confirming an empty selection is allowed and
/// clears the facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportSelector {
    selected: Vec<Sport>,
}

impl SportSelector {
    /// Creates a picker with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a picker pre-selecting the given sports.
    #[must_use]
    pub fn with_selection(sports: &[Sport]) -> Self {
        let mut selector: Self = Self::new();
        for sport in sports {
            if !selector.is_selected(*sport) {
                selector.selected.push(*sport);
            }
        }
        selector
    }

    /// Creates a picker from a comma-joined list of sport names.
    ///
    /// Names are trimmed; blank and unknown names are skipped.
    #[must_use]
    pub fn from_initial(initial: &str) -> Self {
        let mut selector: Self = Self::new();
        for name in initial.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.parse::<Sport>() {
                Ok(sport) if !selector.is_selected(sport) => selector.selected.push(sport),
                Ok(_) => {}
                Err(err) => warn!(name, error = %err, "Skipping sport in initial value"),
            }
        }
        selector
    }

    /// Flips the selection of a sport, returning the new membership.
    pub fn toggle_sport(&mut self, sport: Sport) -> bool {
        if let Some(index) = self.selected.iter().position(|s| *s == sport) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(sport);
            true
        }
    }

    /// Checks if a sport is selected.
    #[must_use]
    pub fn is_selected(&self, sport: Sport) -> bool {
        self.selected.contains(&sport)
    }

    /// Returns the selected sports in click order.
    #[must_use]
    pub fn selected(&self) -> &[Sport] {
        &self.selected
    }

    /// Returns the number of selected sports.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Confirms the selection. Never disabled; may be empty.
    #[must_use]
    pub fn confirm(&self) -> Vec<Sport> {
        self.selected.clone()
    }
}
