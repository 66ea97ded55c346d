// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SportSelector;
use taikan_domain::Sport;

#[test]
fn test_from_initial_trims_names() {
    let selector: SportSelector = SportSelector::from_initial("バドミントン, 卓球 ,フットサル");

    assert_eq!(
        selector.selected(),
        [Sport::Badminton, Sport::TableTennis, Sport::Futsal]
    );
}

#[test]
fn test_from_initial_skips_unknown_blank_and_repeated_names() {
    let selector: SportSelector = SportSelector::from_initial("卓球,,テニス, 卓球 ,プール");

    assert_eq!(selector.selected(), [Sport::TableTennis, Sport::Pool]);
}

#[test]
fn test_from_initial_of_empty_string_selects_nothing() {
    let selector: SportSelector = SportSelector::from_initial("");
    assert_eq!(selector.selected_count(), 0);
}

#[test]
fn test_toggle_twice_is_a_no_op() {
    let mut selector: SportSelector = SportSelector::with_selection(&[Sport::Basketball]);

    assert!(selector.toggle_sport(Sport::Volleyball));
    assert!(!selector.toggle_sport(Sport::Volleyball));

    assert_eq!(selector.selected(), [Sport::Basketball]);
    assert!(!selector.is_selected(Sport::Volleyball));
}

#[test]
fn test_with_selection_drops_duplicates() {
    let selector: SportSelector =
        SportSelector::with_selection(&[Sport::Pool, Sport::Futsal, Sport::Pool]);
    assert_eq!(selector.selected(), [Sport::Pool, Sport::Futsal]);
}

#[test]
fn test_empty_confirm_is_allowed() {
    let mut selector: SportSelector = SportSelector::with_selection(&[Sport::Badminton]);
    selector.toggle_sport(Sport::Badminton);

    assert!(selector.confirm().is_empty());
}
