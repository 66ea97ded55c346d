// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Catalog, GymRecord, InMemoryStore, UNKNOWN_DISTANCE};
use taikan::{AreaFacet, ConditionAccumulator, SearchConditions};
use taikan_domain::Sport;

pub fn create_test_record(id: i64, area: &str, tags: &[&str]) -> GymRecord {
    GymRecord {
        id,
        name: format!("Test Gym {id}"),
        distance: UNKNOWN_DISTANCE.to_string(),
        area: area.to_string(),
        address: String::from("東京都"),
        tel: String::from("03-0000-0000"),
        courts: std::collections::BTreeMap::new(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        schedule: Vec::new(),
        format: String::new(),
        restrictions: Vec::new(),
        parking: String::new(),
    }
}

/// Four gyms across three wards.
pub fn create_test_catalog() -> Catalog<InMemoryStore> {
    let store: InMemoryStore = InMemoryStore::new(vec![
        create_test_record(10, "渋谷区", &["バドミントン"]),
        create_test_record(11, "新宿区", &["卓球", "バドミントン"]),
        create_test_record(12, "新宿区", &["バスケットボール"]),
        create_test_record(13, "港区", &["フットサル", "卓球"]),
    ])
    .unwrap();
    Catalog::new(store)
}

pub fn create_test_conditions(areas: &[&str], sports: &[Sport]) -> SearchConditions {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    if !areas.is_empty() {
        accumulator.set_area(Some(AreaFacet::Places {
            areas: areas.iter().map(|a| (*a).to_string()).collect(),
            stations: Vec::new(),
        }));
    }
    accumulator.set_sport(sports.to_vec());
    accumulator.snapshot()
}

pub fn ids(items: &[taikan_domain::GymDetail]) -> Vec<i64> {
    items.iter().map(|gym| gym.id).collect()
}
