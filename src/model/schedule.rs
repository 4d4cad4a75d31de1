// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule models.
//!
//! The vendor signals "nothing scheduled" with an empty JSON object
//! (`device/{id}/current_schedule`) or an empty array
//! (`device/{id}/scheduleitem`). The device resource normalizes both to
//! `None` at the decode boundary so callers never see an empty-container
//! sentinel.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The schedule currently running on a device.
///
/// Timestamps arrive as epoch milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// The device the schedule is running on.
    #[serde(default)]
    pub device_id: String,

    /// Id of the schedule rule, when one triggered the run.
    #[serde(default)]
    pub schedule_id: Option<String>,

    /// Schedule kind as reported by the vendor (e.g. `AUTOMATIC`, `MANUAL`).
    #[serde(default, rename = "type")]
    pub schedule_type: Option<String>,

    /// Run status as reported by the vendor.
    #[serde(default)]
    pub status: Option<String>,

    /// When the run started.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub start_date: Option<DateTime<Utc>>,

    /// Total run duration in seconds.
    #[serde(default)]
    pub duration: Option<u32>,

    /// The zone currently watering.
    #[serde(default)]
    pub zone_id: Option<String>,

    /// When the current zone started.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub zone_start_date: Option<DateTime<Utc>>,

    /// Duration of the current zone in seconds.
    #[serde(default)]
    pub zone_duration: Option<u32>,
}

/// One upcoming schedule entry from the next-two-weeks window.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Id of the schedule rule this entry belongs to.
    #[serde(default)]
    pub schedule_rule_id: Option<String>,

    /// Absolute start time of the entry.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub absolute_start_date: Option<DateTime<Utc>>,

    /// Start time as reported in the device's local calendar day.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub start_date: Option<DateTime<Utc>>,

    /// Total duration of the entry in seconds.
    #[serde(default)]
    pub total_duration: Option<u32>,
}
