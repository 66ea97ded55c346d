// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::SearchRequest;
use taikan::FacetSelection;
use taikan_catalog::{Catalog, InMemoryStore, UnavailableStore};
use time::Date;
use time::macros::date;

pub const fn create_test_today() -> Date {
    date!(2024 - 06 - 15)
}

pub fn create_test_catalog() -> Catalog<InMemoryStore> {
    Catalog::new(InMemoryStore::demo().unwrap())
}

pub fn create_test_offline_catalog() -> Catalog<UnavailableStore> {
    Catalog::new(UnavailableStore::new("offline"))
}

pub fn create_test_request(selection: FacetSelection) -> SearchRequest {
    SearchRequest {
        today: Some(String::from("2024-06-15")),
        selection,
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
