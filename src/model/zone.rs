// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone model and watering request payloads.
//!
//! Zone starts come in two explicitly named shapes: [`ZoneNumberRun`] for
//! callers addressing zones by their human-facing number (resolved against
//! a device's zone list before sending), and [`ZoneIdRun`] for callers that
//! already hold the opaque zone id. There is no type-sniffing between the
//! two; the device resource exposes one entry point per shape.

use serde::{Deserialize, Serialize};

/// A single irrigation zone on a device.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// The opaque zone id the API requires for start/stop calls.
    pub id: String,

    /// The human-facing 1-based zone number. Unique per device only.
    #[serde(default)]
    pub zone_number: u8,

    /// User-assigned zone name.
    #[serde(default)]
    pub name: String,

    /// Whether the zone is enabled on the controller.
    #[serde(default)]
    pub enabled: bool,
}

/// A watering request addressed by zone number.
///
/// The zone number is resolved to its id against the current device's zone
/// list before the request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneNumberRun {
    /// The 1-based zone number.
    pub zone_number: u8,
    /// Watering duration in seconds.
    pub duration: u32,
}

impl ZoneNumberRun {
    /// Creates a run for the given zone number and duration in seconds.
    #[must_use]
    pub const fn new(zone_number: u8, duration: u32) -> Self {
        Self {
            zone_number,
            duration,
        }
    }
}

/// A watering request addressed by a pre-resolved zone id.
///
/// No lookup is performed; the id is sent as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneIdRun {
    /// The opaque zone id.
    pub id: String,
    /// Watering duration in seconds.
    pub duration: u32,
}

impl ZoneIdRun {
    /// Creates a run for the given zone id and duration in seconds.
    #[must_use]
    pub fn new(id: impl Into<String>, duration: u32) -> Self {
        Self {
            id: id.into(),
            duration,
        }
    }
}

/// One entry of a multi-zone start payload.
///
/// `sort_order` is the 0-based position in the caller-supplied run list.
/// The controller serializes zone activations by this field; it has nothing
/// to do with wall-clock concurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRun {
    /// The opaque zone id.
    pub id: String,
    /// Watering duration in seconds.
    pub duration: u32,
    /// Activation position, assigned from input order.
    pub sort_order: u32,
}

/// Body for `PUT zone/start`.
#[derive(Debug, Serialize)]
pub(crate) struct StartZonePayload<'a> {
    pub id: &'a str,
    pub duration: u32,
}

/// Body for `PUT zone/start_multiple`.
#[derive(Debug, Serialize)]
pub(crate) struct StartMultiplePayload {
    pub zones: Vec<ZoneRun>,
}

impl StartMultiplePayload {
    /// Builds the payload from resolved runs, assigning `sortOrder` from
    /// the 0-based input position.
    pub(crate) fn from_runs(runs: &[ZoneIdRun]) -> Self {
        let zones = runs
            .iter()
            .enumerate()
            .map(|(index, run)| ZoneRun {
                id: run.id.clone(),
                duration: run.duration,
                sort_order: u32::try_from(index).unwrap_or(u32::MAX),
            })
            .collect();
        Self { zones }
    }
}

/// Body for `PUT device/stop_water`.
#[derive(Debug, Serialize)]
pub(crate) struct StopWaterPayload<'a> {
    pub id: &'a str,
}
