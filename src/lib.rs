// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Rachio` Lib - A Rust client for the Rachio irrigation API.
//!
//! This library provides async APIs for the vendor's public REST API
//! (`https://api.rach.io/1/public/`): account info, device enumeration,
//! schedule queries, and starting/stopping watering on one or more zones.
//!
//! Every call is authorized with the account's API key; account- and
//! device-scoped calls first resolve the person id from `person/info`, the
//! vendor's required two-step flow.
//!
//! # Quick Start
//!
//! ```no_run
//! use rachio_lib::{Rachio, ZoneNumberRun};
//!
//! #[tokio::main]
//! async fn main() -> rachio_lib::Result<()> {
//!     let rachio = Rachio::new("8e600a4c-0027-4a9a-9bda-dc8d5c90350d")?;
//!
//!     // Who am I?
//!     let account = rachio.account().retrieve().await?;
//!     println!("{} <{}>", account.full_name, account.email);
//!
//!     // Water zone 6 for ten minutes on the account's only controller.
//!     let mut device = rachio.device();
//!     device.set_default_device().await?;
//!     device.start_by_zone_number(&[ZoneNumberRun::new(6, 600)]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Resolving resources by name
//!
//! Handlers can also be resolved dynamically from a logical resource name,
//! tolerant of plural forms:
//!
//! ```no_run
//! use rachio_lib::{Rachio, Resource};
//!
//! # async fn example() -> rachio_lib::Result<()> {
//! let rachio = Rachio::new("8e600a4c-0027-4a9a-9bda-dc8d5c90350d")?;
//! if let Resource::Account(account) = rachio.resource("accounts")? {
//!     println!("person id: {}", account.get_id().await?);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod model;
mod resource;
pub mod transport;
mod types;

pub use client::Rachio;
pub use error::{DecodeError, Error, Result, TransportError};
pub use model::{
    Account, Device, DeviceStatus, Schedule, ScheduleItem, Zone, ZoneIdRun, ZoneNumberRun, ZoneRun,
};
pub use resource::{AccountResource, DeviceResource, Resource};
pub use transport::{RawResponse, TransportConfig};
pub use types::{ApiKey, PersonId};
