// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_conditions, create_test_record};
use crate::CatalogFilter;
use taikan::{AreaFacet, ConditionAccumulator, DateFacet, SearchConditions};
use taikan_domain::{Sport, TimeOption};
use time::macros::date;

#[test]
fn test_empty_conditions_are_unconstrained() {
    let filter: CatalogFilter = CatalogFilter::from_conditions(&SearchConditions::default());
    assert!(filter.is_unconstrained());
    assert!(filter.matches(&create_test_record(1, "渋谷区", &[])));
}

#[test]
fn test_sports_become_individual_tags() {
    let filter: CatalogFilter = CatalogFilter::from_conditions(&create_test_conditions(
        &[],
        &[Sport::Badminton, Sport::TableTennis],
    ));

    assert_eq!(filter.tags, ["バドミントン", "卓球"]);
    assert!(filter.matches(&create_test_record(1, "渋谷区", &["卓球"])));
    assert!(!filter.matches(&create_test_record(2, "渋谷区", &["バドミントン, 卓球"])));
}

#[test]
fn test_areas_match_exactly() {
    let filter: CatalogFilter =
        CatalogFilter::from_conditions(&create_test_conditions(&["渋谷区", "港区"], &[]));

    assert!(filter.matches(&create_test_record(1, "港区", &[])));
    assert!(!filter.matches(&create_test_record(2, "渋谷", &[])));
}

#[test]
fn test_stations_join_the_accepted_areas() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_area(Some(AreaFacet::Places {
        areas: vec![String::from("渋谷区")],
        stations: vec![String::from("新宿駅")],
    }));

    let filter: CatalogFilter = CatalogFilter::from_conditions(&accumulator.snapshot());

    assert_eq!(filter.areas, ["渋谷区", "新宿駅"]);
    assert!(filter.matches(&create_test_record(1, "渋谷区", &[])));
    assert!(filter.matches(&create_test_record(2, "新宿駅", &[])));
    assert!(!filter.matches(&create_test_record(3, "新宿区", &[])));
}

#[test]
fn test_current_location_uses_its_label() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_area(Some(AreaFacet::CurrentLocation));

    let filter: CatalogFilter = CatalogFilter::from_conditions(&accumulator.snapshot());

    assert_eq!(filter.areas, ["現在地周辺"]);
    assert!(!filter.is_unconstrained());
    assert!(!filter.matches(&create_test_record(1, "渋谷区", &[])));
}

#[test]
fn test_date_and_keyword_pass_through() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_date(Some(DateFacet {
        dates: vec![date!(2024 - 06 - 20)],
        start_time: TimeOption::At(18),
        end_time: TimeOption::At(21),
    }));
    accumulator.set_keyword("シャワー");

    let filter: CatalogFilter = CatalogFilter::from_conditions(&accumulator.snapshot());

    assert!(filter.is_unconstrained());
}

#[test]
fn test_helper_constructors() {
    let record = create_test_record(1, "新宿区", &["フットサル"]);

    assert!(CatalogFilter::by_area("新宿区").matches(&record));
    assert!(!CatalogFilter::by_area("港区").matches(&record));
    assert!(CatalogFilter::tag_contains("フットサル").matches(&record));
    assert!(!CatalogFilter::sport(Sport::Pool).matches(&record));
}
