// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use taikan_domain::{Courts, GymDetail, ScheduleSlot};

/// Distance text used when a record carries none.
pub const UNKNOWN_DISTANCE: &str = "距離不明";

fn unknown_distance() -> String {
    UNKNOWN_DISTANCE.to_string()
}

/// A gym document as stored in the catalog.
///
/// Only `id`, `name`, `area`, `address` and `tel` are required. Every
/// other field falls back to a default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymRecord {
    pub id: i64,
    pub name: String,
    #[serde(default = "unknown_distance")]
    pub distance: String,
    pub area: String,
    pub address: String,
    pub tel: String,
    #[serde(default)]
    pub courts: Courts,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub parking: String,
}

impl GymRecord {
    /// Checks if the tag set contains the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl From<GymRecord> for GymDetail {
    fn from(record: GymRecord) -> Self {
        // An empty distance counts as missing.
        let distance: String = if record.distance.is_empty() {
            unknown_distance()
        } else {
            record.distance
        };

        Self {
            id: record.id,
            name: record.name,
            distance,
            area: record.area,
            address: record.address,
            tel: record.tel,
            courts: record.courts,
            tags: record.tags,
            schedule: record.schedule,
            format: record.format,
            restrictions: record.restrictions,
            parking: record.parking,
        }
    }
}
