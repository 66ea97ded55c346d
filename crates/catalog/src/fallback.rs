// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed local dataset served when the catalog store fails.

use crate::data_models::GymRecord;
use taikan_domain::{Courts, GymDetail, ScheduleSlot, SlotStatus};

const SLOT_TIMES: [&str; 6] = ["09:00", "11:00", "13:00", "15:00", "17:00", "19:00"];

fn schedule(codes: [SlotStatus; 6]) -> Vec<ScheduleSlot> {
    SLOT_TIMES
        .iter()
        .zip(codes)
        .map(|(time, code)| ScheduleSlot {
            time: (*time).to_string(),
            status: code.symbol().to_string(),
            status_code: code,
        })
        .collect()
}

fn courts(entries: &[(&str, u32)]) -> Courts {
    entries
        .iter()
        .map(|(key, count)| ((*key).to_string(), *count))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Returns the three seed gyms as raw records.
#[must_use]
pub fn fallback_records() -> Vec<GymRecord> {
    use SlotStatus::{Available, Few, Full};

    vec![
        GymRecord {
            id: 1,
            name: String::from("渋谷区スポーツセンター"),
            distance: String::from("現在地から 1.2km"),
            area: String::from("渋谷区"),
            address: String::from("東京都渋谷区西原1-40-18"),
            tel: String::from("03-3468-9051"),
            courts: courts(&[("badminton", 6), ("tableTennis", 12)]),
            tags: strings(&["バドミントン", "卓球", "プール"]),
            schedule: schedule([Available, Few, Full, Available, Available, Full]),
            format: String::from("個人開放（当日受付）"),
            restrictions: strings(&[
                "中学生以下は保護者同伴",
                "室内シューズ必須",
                "ラケット・ボール等は持参",
            ]),
            parking: String::from("あり（30台・有料）"),
        },
        GymRecord {
            id: 2,
            name: String::from("新宿コズミックセンター"),
            distance: String::from("現在地から 2.5km"),
            area: String::from("新宿区"),
            address: String::from("東京都新宿区大久保3-1-2"),
            tel: String::from("03-3232-7701"),
            courts: courts(&[("basketball", 2), ("badminton", 8)]),
            tags: strings(&["バスケットボール", "バドミントン"]),
            schedule: schedule([Full, Available, Available, Few, Full, Full]),
            format: String::from("個人開放（事前予約制）"),
            restrictions: strings(&["高校生以上", "予約は1週間前から", "室内シューズ必須"]),
            parking: String::from("なし（近隣にコインパーキングあり）"),
        },
        GymRecord {
            id: 3,
            name: String::from("中央区立総合スポーツセンター"),
            distance: String::from("現在地から 4.8km"),
            area: String::from("中央区"),
            address: String::from("東京都中央区日本橋浜町2-59-1"),
            tel: String::from("03-3666-1501"),
            courts: courts(&[("tableTennis", 20), ("badminton", 4)]),
            tags: strings(&["卓球", "バドミントン", "弓道"]),
            schedule: schedule([Available, Available, Available, Available, Few, Available]),
            format: String::from("個人開放（当日受付・予約可）"),
            restrictions: strings(&["小学生以上", "室内シューズ必須", "用具レンタルあり（有料）"]),
            parking: String::from("あり（50台・有料）"),
        },
    ]
}

/// Returns the fallback dataset.
///
/// Served in full, unfiltered, whenever the store fails.
#[must_use]
pub fn fallback_gyms() -> Vec<GymDetail> {
    fallback_records().into_iter().map(GymDetail::from).collect()
}
