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

mod accumulator;
mod apply;
mod area;
mod command;
mod conditions;
mod date;
mod error;
mod results;
mod sport;

#[cfg(test)]
mod tests;

// Re-export public types
pub use accumulator::ConditionAccumulator;
pub use apply::{FacetSelection, apply_selection};
pub use area::{AreaSelector, LocationTab};
pub use command::FacetEdit;
pub use conditions::{AreaFacet, DISPLAY_SEPARATOR, DateFacet, FacetKind, SearchConditions};
pub use date::DateSelector;
pub use error::CoreError;
pub use results::{Completion, FetchState, FetchTicket, ResultsView, SearchOutcome, ViewMode};
pub use sport::SportSelector;
