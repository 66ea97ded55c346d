// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gym catalog access for the Taikan gym search.
//!
//! This crate turns a committed condition snapshot into a catalog query,
//! runs it against a [`CatalogStore`] and converts raw records into
//! [`taikan_domain::GymDetail`] values.
//!
//! ## Stores
//!
//! - [`InMemoryStore`] holds records in memory. It is loaded from a JSON
//!   array of records or from the bundled demo catalog.
//! - [`UnavailableStore`] fails every query and is used for offline
//!   operation.
//!
//! ## Fallback
//!
//! Any store failure during [`Catalog::search`] is logged and answered
//! with the fixed three-gym dataset from [`fallback_gyms`]. The caller
//! can tell through [`taikan::SearchOutcome::fallback`].

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

mod catalog;
mod data_models;
mod error;
mod fallback;
mod filter;
mod reference;
mod store;

#[cfg(test)]
mod tests;

pub use catalog::Catalog;
pub use data_models::{GymRecord, UNKNOWN_DISTANCE};
pub use error::StoreError;
pub use fallback::{fallback_gyms, fallback_records};
pub use filter::CatalogFilter;
pub use reference::{PrefectureEntry, ReferenceData, reference_data};
pub use store::{CatalogStore, InMemoryStore, UnavailableStore};
