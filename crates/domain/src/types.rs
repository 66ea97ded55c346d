// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A sport or activity offered by the sport picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    /// バドミントン
    #[serde(rename = "バドミントン")]
    Badminton,
    /// 卓球
    #[serde(rename = "卓球")]
    TableTennis,
    /// バスケットボール
    #[serde(rename = "バスケットボール")]
    Basketball,
    /// バレーボール
    #[serde(rename = "バレーボール")]
    Volleyball,
    /// フットサル
    #[serde(rename = "フットサル")]
    Futsal,
    /// プール
    #[serde(rename = "プール")]
    Pool,
}

impl Sport {
    /// The fixed sport catalog, in picker order.
    pub const ALL: [Self; 6] = [
        Self::Badminton,
        Self::TableTennis,
        Self::Basketball,
        Self::Volleyball,
        Self::Futsal,
        Self::Pool,
    ];

    /// Returns the display label, which is also the catalog tag value.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Badminton => "バドミントン",
            Self::TableTennis => "卓球",
            Self::Basketball => "バスケットボール",
            Self::Volleyball => "バレーボール",
            Self::Futsal => "フットサル",
            Self::Pool => "プール",
        }
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sport| sport.label() == s)
            .ok_or_else(|| DomainError::UnknownSport(s.to_string()))
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A start or end time choice in the date picker.
///
/// Either unspecified or one of the fixed hour marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeOption {
    /// 指定なし
    #[default]
    Unspecified,
    /// A whole hour (24h clock).
    At(u8),
}

impl TimeOption {
    /// The fixed option list, in picker order.
    pub const ALL: [Self; 6] = [
        Self::Unspecified,
        Self::At(9),
        Self::At(12),
        Self::At(15),
        Self::At(18),
        Self::At(21),
    ];

    /// Label used for the unspecified sentinel.
    pub const UNSPECIFIED_LABEL: &'static str = "指定なし";

    /// Returns the display label, e.g. `9:00` or `指定なし`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Unspecified => Self::UNSPECIFIED_LABEL.to_string(),
            Self::At(hour) => format!("{hour}:00"),
        }
    }

    /// Returns the hour, or `None` when unspecified.
    #[must_use]
    pub const fn hour(&self) -> Option<u8> {
        match self {
            Self::Unspecified => None,
            Self::At(hour) => Some(*hour),
        }
    }

    /// Checks if this option is one of the fixed choices.
    #[must_use]
    pub fn is_offered(&self) -> bool {
        Self::ALL.contains(self)
    }
}

impl FromStr for TimeOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| DomainError::UnknownTimeOption(s.to_string()))
    }
}

impl TryFrom<String> for TimeOption {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOption> for String {
    fn from(option: TimeOption) -> Self {
        option.label()
    }
}

impl std::fmt::Display for TimeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Availability of one schedule slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// ○: open.
    Available,
    /// △: few places left.
    Few,
    /// ×: fully booked.
    Full,
    /// Any status code the catalog does not define.
    #[serde(other)]
    Unknown,
}

impl SlotStatus {
    /// Returns the symbol shown in the schedule table.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Available => "○",
            Self::Few => "△",
            Self::Full => "×",
            Self::Unknown => "-",
        }
    }

    /// Checks if a slot with this status can still be joined.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Available | Self::Few)
    }
}

/// One row of a gym's daily schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Slot start, e.g. `09:00`.
    pub time: String,
    /// Display symbol as delivered by the catalog.
    pub status: String,
    /// Machine-readable status.
    pub status_code: SlotStatus,
}

/// Court counts keyed by sport key (e.g. `badminton` → 6).
pub type Courts = BTreeMap<String, u32>;

/// A sports facility as shown in the result list and detail view.
///
/// Built once from a catalog record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymDetail {
    /// Catalog identifier.
    pub id: i64,
    /// Facility name.
    pub name: String,
    /// Distance text, e.g. `現在地から 1.2km`.
    pub distance: String,
    /// City or ward the facility is in.
    pub area: String,
    /// Postal address.
    pub address: String,
    /// Phone number.
    pub tel: String,
    /// Court counts per sport key.
    pub courts: Courts,
    /// Sport names the facility supports.
    pub tags: Vec<String>,
    /// Ordered daily schedule.
    pub schedule: Vec<ScheduleSlot>,
    /// Opening format, e.g. `個人開放（当日受付）`.
    pub format: String,
    /// Usage restrictions.
    pub restrictions: Vec<String>,
    /// Parking information.
    pub parking: String,
}

impl GymDetail {
    /// Checks if the tag set contains the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Checks if the tag set contains any of the given sports.
    ///
    /// An empty sport list matches every facility.
    #[must_use]
    pub fn offers_any(&self, sports: &[Sport]) -> bool {
        sports.is_empty() || sports.iter().any(|sport| self.has_tag(sport.label()))
    }

    /// Returns the slots that can still be joined.
    pub fn open_slots(&self) -> impl Iterator<Item = &ScheduleSlot> {
        self.schedule.iter().filter(|slot| slot.status_code.is_open())
    }

    /// Checks if at least one slot can still be joined.
    #[must_use]
    pub fn has_availability(&self) -> bool {
        self.open_slots().next().is_some()
    }
}
