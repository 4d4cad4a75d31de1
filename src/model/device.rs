// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device model.

use serde::Deserialize;

use crate::model::Zone;

/// Connectivity status of a Rachio controller.
///
/// Statuses the vendor may add later decode as [`DeviceStatus::Unknown`]
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    /// The controller is reachable.
    Online,
    /// The controller is not reachable.
    Offline,
    /// Any status this library does not know about.
    #[serde(other)]
    #[default]
    Unknown,
}

impl DeviceStatus {
    /// Returns true only for [`DeviceStatus::Online`].
    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

/// A Rachio controller, as returned by `device/{id}`.
///
/// # Examples
///
/// ```
/// use rachio_lib::model::{Device, DeviceStatus};
///
/// let json = r#"{
///     "id": "0123456789",
///     "status": "ONLINE",
///     "name": "Back yard",
///     "zones": [{"id": "z-1", "zoneNumber": 1}]
/// }"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.status, DeviceStatus::Online);
/// assert!(device.zone_by_number(1).is_some());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// The device id.
    pub id: String,

    /// Connectivity status.
    #[serde(default)]
    pub status: DeviceStatus,

    /// User-assigned device name.
    #[serde(default)]
    pub name: String,

    /// Zones wired to this controller.
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl Device {
    /// Looks up a zone by its human-facing 1-based number.
    ///
    /// Zone numbers are only unique within a device, so the lookup scans
    /// this device's zone list. Linear scan; controllers have at most a few
    /// tens of zones.
    #[must_use]
    pub fn zone_by_number(&self, zone_number: u8) -> Option<&Zone> {
        self.zones.iter().find(|z| z.zone_number == zone_number)
    }
}
