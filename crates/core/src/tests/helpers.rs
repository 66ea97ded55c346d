// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AreaFacet, DateFacet};
use std::collections::BTreeMap;
use taikan_domain::{GymDetail, TimeOption};
use time::Date;
use time::macros::date;

/// Saturday 2024-06-15.
pub const fn create_test_today() -> Date {
    date!(2024 - 06 - 15)
}

pub fn create_test_area_facet(areas: &[&str], stations: &[&str]) -> AreaFacet {
    AreaFacet::Places {
        areas: areas.iter().map(|a| (*a).to_string()).collect(),
        stations: stations.iter().map(|s| (*s).to_string()).collect(),
    }
}

pub fn create_test_date_facet(dates: &[Date]) -> DateFacet {
    DateFacet {
        dates: dates.to_vec(),
        start_time: TimeOption::Unspecified,
        end_time: TimeOption::Unspecified,
    }
}

pub fn create_test_gym(id: i64, area: &str, tags: &[&str]) -> GymDetail {
    GymDetail {
        id,
        name: format!("Gym {id}"),
        distance: String::from("現在地から 1.0km"),
        area: area.to_string(),
        address: String::new(),
        tel: String::new(),
        courts: BTreeMap::new(),
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        schedule: Vec::new(),
        format: String::new(),
        restrictions: Vec::new(),
        parking: String::new(),
    }
}
