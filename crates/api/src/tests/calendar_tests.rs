// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_today;
use crate::{ApiError, CalendarResponse, get_calendar, parse_today};
use time::macros::date;

#[test]
fn test_calendar_for_mid_june() {
    let response: CalendarResponse = get_calendar(Some("2024-06-15"), create_test_today()).unwrap();

    assert_eq!(response.today, "2024-06-15");
    assert_eq!(response.weekday_labels.first().map(String::as_str), Some("日"));
    assert_eq!(response.months.len(), 2);

    let june = &response.months[0];
    assert_eq!(june.title, "2024年 6月");
    assert_eq!(june.leading_blanks, 0);
    assert_eq!(june.days.first().map(|d| d.day), Some(9));
    assert_eq!(june.days.last().map(|d| d.day), Some(30));
    assert!(june.days.iter().filter(|d| d.day < 15).all(|d| d.disabled));
    assert!(june.days.iter().filter(|d| d.day >= 15).all(|d| !d.disabled));
    assert_eq!(june.days[0].label, "6月9日");

    let july = &response.months[1];
    assert_eq!(july.month, 7);
    assert_eq!(july.days.len(), 31);
    assert!(july.days.iter().all(|d| !d.disabled));
}

#[test]
fn test_calendar_lists_time_options() {
    let response: CalendarResponse = get_calendar(None, create_test_today()).unwrap();

    assert_eq!(
        response.time_options,
        ["指定なし", "9:00", "12:00", "15:00", "18:00", "21:00"]
    );
}

#[test]
fn test_calendar_rolls_into_next_year() {
    let response: CalendarResponse = get_calendar(Some("2024-12-30"), create_test_today()).unwrap();

    assert_eq!(response.months[1].year, 2025);
    assert_eq!(response.months[1].month, 1);
    assert_eq!(response.months[1].title, "2025年 1月");
}

#[test]
fn test_parse_today() {
    assert_eq!(
        parse_today(Some(" 2025-02-28 "), create_test_today()),
        Ok(date!(2025 - 02 - 28))
    );
    assert_eq!(parse_today(None, create_test_today()), Ok(create_test_today()));
    assert!(matches!(
        parse_today(Some("2025-02-30"), create_test_today()),
        Err(ApiError::InvalidInput { .. })
    ));
}
