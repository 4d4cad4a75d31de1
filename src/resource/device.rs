// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device resource handler: enumeration, status, schedules, and the zone
//! start/stop orchestration.

use crate::client::AuthorizedClient;
use crate::error::{DecodeError, Error, Result};
use crate::model::{
    Device, DeviceStatus, Schedule, ScheduleItem, StartMultiplePayload, StartZonePayload,
    StopWaterPayload, ZoneIdRun, ZoneNumberRun,
};
use crate::resource::AccountResource;

/// Handler for device and zone operations.
///
/// The only state a handler carries is its optional "current device" cache:
/// the device zone starts apply to when the caller addresses zones by
/// number. The cache is written only by [`DeviceResource::set_device`] and
/// [`DeviceResource::set_default_device`] and is per-instance; two handlers
/// never share it.
///
/// # Examples
///
/// ```no_run
/// use rachio_lib::{Rachio, ZoneNumberRun};
///
/// # async fn example() -> rachio_lib::Result<()> {
/// let rachio = Rachio::new("8e600a4c-0027-4a9a-9bda-dc8d5c90350d")?;
/// let mut device = rachio.device();
///
/// device.set_default_device().await?;
///
/// // Water zone 6 for ten minutes, then zone 8 for five.
/// let status = device
///     .start_by_zone_number(&[ZoneNumberRun::new(6, 600), ZoneNumberRun::new(8, 300)])
///     .await?;
/// assert_eq!(status, 204);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceResource {
    client: AuthorizedClient,
    device: Option<Device>,
}

impl DeviceResource {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self {
            client,
            device: None,
        }
    }

    /// Returns every device registered to the account.
    ///
    /// # Errors
    ///
    /// Propagates the account retrieval errors.
    pub async fn all(&self) -> Result<Vec<Device>> {
        let account = AccountResource::new(self.client.clone()).retrieve().await?;
        Ok(account.devices)
    }

    /// Fetches a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the id is unknown to the vendor.
    pub async fn find(&self, id: &str) -> Result<Device> {
        self.client.get_json(&format!("device/{id}")).await
    }

    /// Returns the first device in the account, refetched by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDevice`] when the account has no devices.
    pub async fn first(&self) -> Result<Device> {
        let head = self.first_of_account().await?;
        self.find(&head.id).await
    }

    /// Returns the "main" device in the account.
    ///
    /// An alias for [`DeviceResource::first`]. Most accounts have a single
    /// controller, so this is a convenient way to get it.
    ///
    /// # Errors
    ///
    /// Same as [`DeviceResource::first`].
    pub async fn main(&self) -> Result<Device> {
        self.first().await
    }

    /// Sets the current device zone starts apply to.
    pub fn set_device(&mut self, device: Device) {
        self.device = Some(device);
    }

    /// Sets the current device to the account's first device.
    ///
    /// This is the caller's opt-in; no operation writes the cache
    /// implicitly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDevice`] when the account has no devices.
    pub async fn set_default_device(&mut self) -> Result<&Device> {
        let head = self.first_of_account().await?;
        Ok(self.device.insert(head))
    }

    /// Returns the cached current device, if one has been set.
    #[must_use]
    pub fn current_device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    /// Returns the connectivity status of a device.
    ///
    /// # Errors
    ///
    /// Same as [`DeviceResource::find`].
    pub async fn status(&self, id: &str) -> Result<DeviceStatus> {
        Ok(self.find(id).await?.status)
    }

    /// Returns true when the device reports `ONLINE`.
    ///
    /// # Errors
    ///
    /// Same as [`DeviceResource::find`].
    pub async fn online(&self, id: &str) -> Result<bool> {
        Ok(self.status(id).await?.is_online())
    }

    /// Returns true when the device is not online.
    ///
    /// Strictly the negation of [`DeviceResource::online`].
    ///
    /// # Errors
    ///
    /// Same as [`DeviceResource::find`].
    pub async fn offline(&self, id: &str) -> Result<bool> {
        Ok(!self.online(id).await?)
    }

    /// Returns the schedule currently running on a device.
    ///
    /// The vendor signals "nothing running" with an empty JSON object;
    /// that decodes to `None` here, never to an empty schedule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown device id, or
    /// [`Error::Decode`] when the body is not valid JSON.
    pub async fn current_schedule(&self, id: &str) -> Result<Option<Schedule>> {
        let body: serde_json::Value = self
            .client
            .get_json(&format!("device/{id}/current_schedule"))
            .await?;

        if body.as_object().is_some_and(serde_json::Map::is_empty) {
            return Ok(None);
        }

        let schedule = serde_json::from_value(body).map_err(DecodeError::Json)?;
        Ok(Some(schedule))
    }

    /// Returns the next two weeks of scheduled items for a device.
    ///
    /// An empty array from the vendor decodes to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown device id, or
    /// [`Error::Decode`] when the body is not valid JSON.
    pub async fn upcoming_schedule(&self, id: &str) -> Result<Option<Vec<ScheduleItem>>> {
        let items: Vec<ScheduleItem> = self
            .client
            .get_json(&format!("device/{id}/scheduleitem"))
            .await?;

        Ok(if items.is_empty() { None } else { Some(items) })
    }

    /// Stops all watering on a device.
    ///
    /// `PUT device/stop_water`. Returns the vendor's status code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the call cannot be completed.
    pub async fn stop(&self, id: &str) -> Result<u16> {
        self.client
            .put_json("device/stop_water", &StopWaterPayload { id })
            .await
    }

    /// Starts watering on zones addressed by their human-facing numbers.
    ///
    /// Each number is resolved against the current device's zone list, or
    /// against the account's first device when no current device is set.
    /// A single run goes to `zone/start`; several runs go to
    /// `zone/start_multiple` with `sortOrder` assigned from input position,
    /// which fixes the order the controller waters the zones in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyZoneList`] for an empty run list,
    /// [`Error::ZoneNotFound`] when a number matches no zone on the device,
    /// [`Error::NoDevice`] when no current device is set and the account
    /// has none.
    pub async fn start_by_zone_number(&self, runs: &[ZoneNumberRun]) -> Result<u16> {
        if runs.is_empty() {
            return Err(Error::EmptyZoneList);
        }

        let device = match &self.device {
            Some(device) => device.clone(),
            None => self.first_of_account().await?,
        };

        let resolved = resolve_runs(&device, runs)?;
        self.start_by_zone_id(&resolved).await
    }

    /// Starts watering on zones addressed by pre-resolved zone ids.
    ///
    /// No lookup is performed; ids are sent as given. Dispatch is the same
    /// as [`DeviceResource::start_by_zone_number`]: one run goes to
    /// `zone/start`, several to `zone/start_multiple` in input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyZoneList`] for an empty run list, or
    /// [`Error::Transport`] when the call cannot be completed.
    pub async fn start_by_zone_id(&self, runs: &[ZoneIdRun]) -> Result<u16> {
        match runs {
            [] => Err(Error::EmptyZoneList),
            [run] => {
                self.client
                    .put_json(
                        "zone/start",
                        &StartZonePayload {
                            id: &run.id,
                            duration: run.duration,
                        },
                    )
                    .await
            }
            _ => {
                self.client
                    .put_json("zone/start_multiple", &StartMultiplePayload::from_runs(runs))
                    .await
            }
        }
    }

    async fn first_of_account(&self) -> Result<Device> {
        let devices = self.all().await?;
        devices.into_iter().next().ok_or(Error::NoDevice)
    }
}

/// Resolves zone numbers to ids against one device's zone list.
///
/// Input order is preserved; the caller's ordering becomes the watering
/// order downstream.
fn resolve_runs(device: &Device, runs: &[ZoneNumberRun]) -> Result<Vec<ZoneIdRun>> {
    runs.iter()
        .map(|run| {
            device
                .zone_by_number(run.zone_number)
                .map(|zone| ZoneIdRun::new(zone.id.clone(), run.duration))
                .ok_or_else(|| Error::ZoneNotFound {
                    zone_number: run.zone_number,
                    device_id: device.id.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device_with_zones() -> Device {
        serde_json::from_str(
            r#"{
                "id": "0123456789",
                "status": "ONLINE",
                "zones": [
                    {"id": "z-1", "zoneNumber": 1},
                    {"id": "z-6", "zoneNumber": 6},
                    {"id": "z-8", "zoneNumber": 8}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn resolve_runs_preserves_input_order() {
        let device = device_with_zones();
        let runs = [ZoneNumberRun::new(8, 10), ZoneNumberRun::new(6, 10)];

        let resolved = resolve_runs(&device, &runs).unwrap();

        assert_eq!(resolved[0], ZoneIdRun::new("z-8", 10));
        assert_eq!(resolved[1], ZoneIdRun::new("z-6", 10));
    }

    #[test]
    fn resolve_runs_unknown_number_fails() {
        let device = device_with_zones();

        let err = resolve_runs(&device, &[ZoneNumberRun::new(9, 10)]).unwrap_err();
        assert!(matches!(err, Error::ZoneNotFound { zone_number: 9, .. }));
    }

    #[test]
    fn resolve_runs_is_idempotent() {
        let device = device_with_zones();
        let runs = [ZoneNumberRun::new(6, 10)];

        let first = resolve_runs(&device, &runs).unwrap();
        let second = resolve_runs(&device, &runs).unwrap();

        assert_eq!(first, second);
    }
}
