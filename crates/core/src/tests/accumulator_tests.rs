// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_area_facet, create_test_date_facet};
use crate::{AreaFacet, ConditionAccumulator, FacetEdit, FacetKind, SearchConditions};
use taikan_domain::Sport;
use time::macros::date;

#[test]
fn test_new_accumulator_has_no_conditions() {
    let accumulator: ConditionAccumulator = ConditionAccumulator::new();

    assert!(accumulator.committed().is_empty());
    assert_eq!(accumulator.active_count(), 0);
    assert!(!accumulator.has_conditions());
    assert!(accumulator.committed().badges().is_empty());
}

#[test]
fn test_commit_closes_open_selector() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.open(FacetKind::Sport);
    assert_eq!(accumulator.open_facet(), Some(FacetKind::Sport));

    accumulator.commit(FacetEdit::Sport(vec![Sport::TableTennis]));

    assert_eq!(accumulator.open_facet(), None);
    assert_eq!(accumulator.committed().sports(), [Sport::TableTennis]);
}

#[test]
fn test_close_keeps_committed_values() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_keyword("体育館");
    accumulator.open(FacetKind::Area);
    accumulator.close();

    assert_eq!(accumulator.open_facet(), None);
    assert_eq!(accumulator.committed().keyword(), Some("体育館"));
}

#[test]
fn test_empty_values_leave_facet_unset() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_area(Some(create_test_area_facet(&[], &[])));
    accumulator.set_date(Some(create_test_date_facet(&[])));
    accumulator.set_sport(Vec::new());
    accumulator.set_keyword("   ");

    assert!(accumulator.committed().is_empty());
}

#[test]
fn test_empty_commit_clears_previous_value() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_sport(vec![Sport::Pool]);
    accumulator.set_sport(Vec::new());

    assert!(!accumulator.committed().is_set(FacetKind::Sport));
    assert!(accumulator.committed().sports().is_empty());
}

#[test]
fn test_sport_commit_drops_duplicates() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_sport(vec![Sport::Futsal, Sport::Pool, Sport::Futsal]);

    assert_eq!(accumulator.committed().sports(), [Sport::Futsal, Sport::Pool]);
}

#[test]
fn test_keyword_is_trimmed() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_keyword("  駐車場  ");
    assert_eq!(accumulator.committed().keyword(), Some("駐車場"));
}

#[test]
fn test_active_count_ignores_keyword() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_keyword("シャワー");
    assert_eq!(accumulator.active_count(), 0);

    accumulator.set_area(Some(AreaFacet::CurrentLocation));
    accumulator.set_sport(vec![Sport::Badminton]);
    assert_eq!(accumulator.active_count(), 2);
    assert!(accumulator.has_conditions());
}

#[test]
fn test_snapshot_reports_the_same_active_count() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_keyword("夜間");
    accumulator.set_date(Some(create_test_date_facet(&[date!(2024 - 06 - 20)])));

    let snapshot: SearchConditions = accumulator.snapshot();

    assert_eq!(snapshot.active_count(), 1);
    assert_eq!(snapshot.active_count(), accumulator.active_count());
    assert_eq!(SearchConditions::default().active_count(), 0);
}

#[test]
fn test_clear_removes_one_facet() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_area(Some(create_test_area_facet(&["渋谷区"], &[])));
    accumulator.set_sport(vec![Sport::Basketball]);

    accumulator.clear(FacetKind::Area);

    assert!(!accumulator.committed().is_set(FacetKind::Area));
    assert!(accumulator.committed().is_set(FacetKind::Sport));
}

#[test]
fn test_snapshot_is_independent_of_later_edits() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_sport(vec![Sport::TableTennis]);

    let snapshot: SearchConditions = accumulator.snapshot();
    accumulator.set_sport(vec![Sport::Volleyball]);

    assert_eq!(snapshot.sports(), [Sport::TableTennis]);
    assert_eq!(accumulator.committed().sports(), [Sport::Volleyball]);
}

#[test]
fn test_display_strings_join_with_separator() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_area(Some(create_test_area_facet(
        &["渋谷区", "新宿区"],
        &["品川駅"],
    )));
    accumulator.set_date(Some(create_test_date_facet(&[
        date!(2024 - 06 - 20),
        date!(2024 - 07 - 01),
    ])));
    accumulator.set_sport(vec![Sport::Badminton, Sport::TableTennis]);

    let conditions: &SearchConditions = accumulator.committed();
    assert_eq!(
        conditions.display(FacetKind::Area).as_deref(),
        Some("渋谷区, 新宿区, 品川駅")
    );
    assert_eq!(
        conditions.display(FacetKind::Date).as_deref(),
        Some("6月20日, 7月1日")
    );
    assert_eq!(
        conditions.display(FacetKind::Sport).as_deref(),
        Some("バドミントン, 卓球")
    );
    assert_eq!(conditions.display(FacetKind::Keyword), None);
}

#[test]
fn test_badges_follow_result_screen_order() {
    let mut accumulator: ConditionAccumulator = ConditionAccumulator::new();
    accumulator.set_keyword("初心者");
    accumulator.set_sport(vec![Sport::Futsal]);
    accumulator.set_area(Some(AreaFacet::CurrentLocation));
    accumulator.set_date(Some(create_test_date_facet(&[date!(2024 - 06 - 16)])));

    assert_eq!(
        accumulator.committed().badges(),
        [
            "日時: 6月16日",
            "エリア: 現在地周辺",
            "フットサル",
            "キーワード: 初心者",
        ]
    );
}

#[test]
fn test_edit_kind_matches_target_facet() {
    assert_eq!(FacetEdit::Area(None).kind(), FacetKind::Area);
    assert_eq!(FacetEdit::Date(None).kind(), FacetKind::Date);
    assert_eq!(FacetEdit::Sport(Vec::new()).kind(), FacetKind::Sport);
    assert_eq!(
        FacetEdit::Keyword(String::new()).kind(),
        FacetKind::Keyword
    );
}
