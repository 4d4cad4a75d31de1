// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data model for the Rachio API.
//!
//! Read models are snapshots of server state decoded from JSON responses;
//! nothing here tracks staleness. Write payloads (`zone/start`,
//! `zone/start_multiple`, `device/stop_water`) are serialized as-is.

mod account;
mod device;
mod schedule;
mod zone;

pub use account::Account;
pub use device::{Device, DeviceStatus};
pub use schedule::{Schedule, ScheduleItem};
pub use zone::{Zone, ZoneIdRun, ZoneNumberRun, ZoneRun};

pub(crate) use zone::{StartMultiplePayload, StartZonePayload, StopWaterPayload};
