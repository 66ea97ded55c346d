// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static reference data for the area and station pickers.
//!
//! The data is read-only. Prefectures keep their display order, and the
//! cities of each prefecture keep the order in which the picker lists
//! them.

use crate::error::DomainError;

/// Prefecture → ordered city list, in display order.
pub const PREFECTURES: &[(&str, &[&str])] = &[
    (
        "東京都",
        &[
            "千代田区",
            "中央区",
            "港区",
            "新宿区",
            "文京区",
            "台東区",
            "墨田区",
            "江東区",
            "品川区",
            "目黒区",
            "大田区",
            "世田谷区",
            "渋谷区",
            "中野区",
            "杉並区",
            "豊島区",
        ],
    ),
    (
        "神奈川県",
        &[
            "横浜市",
            "川崎市",
            "相模原市",
            "横須賀市",
            "平塚市",
            "鎌倉市",
            "藤沢市",
        ],
    ),
    (
        "埼玉県",
        &["さいたま市", "川口市", "川越市", "所沢市", "越谷市"],
    ),
    ("千葉県", &["千葉市", "船橋市", "松戸市", "市川市", "柏市"]),
];

/// Major stations offered by the station tab.
pub const STATIONS: &[&str] = &[
    "新宿駅",
    "渋谷駅",
    "池袋駅",
    "東京駅",
    "品川駅",
    "上野駅",
    "横浜駅",
    "川崎駅",
    "武蔵小杉駅",
    "大宮駅",
    "浦和駅",
    "千葉駅",
    "西船橋駅",
    "吉祥寺駅",
    "立川駅",
    "町田駅",
];

/// Label emitted by the "current location" tab.
pub const CURRENT_LOCATION_LABEL: &str = "現在地周辺";

/// Returns the prefecture names in display order.
pub fn prefecture_names() -> impl Iterator<Item = &'static str> {
    PREFECTURES.iter().map(|(name, _)| *name)
}

/// Returns the cities of a prefecture.
///
/// # Errors
///
/// Returns `DomainError::UnknownPrefecture` if the prefecture is not part
/// of the reference data.
pub fn cities_of(prefecture: &str) -> Result<&'static [&'static str], DomainError> {
    PREFECTURES
        .iter()
        .find(|(name, _)| *name == prefecture)
        .map(|(_, cities)| *cities)
        .ok_or_else(|| DomainError::UnknownPrefecture(prefecture.to_string()))
}

/// Returns the prefecture a city belongs to, if any.
#[must_use]
pub fn prefecture_of(city: &str) -> Option<&'static str> {
    PREFECTURES
        .iter()
        .find(|(_, cities)| cities.contains(&city))
        .map(|(name, _)| *name)
}

/// Checks if a station is part of the station reference data.
#[must_use]
pub fn is_known_station(station: &str) -> bool {
    STATIONS.contains(&station)
}
