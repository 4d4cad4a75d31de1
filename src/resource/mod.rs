// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resource handlers and the name-to-handler router.
//!
//! The router is a closed mapping over the known resource set; there is no
//! runtime type lookup. Handlers are ephemeral values created per logical
//! call chain and safe to discard after use.

mod account;
mod device;

pub use account::AccountResource;
pub use device::DeviceResource;

use crate::client::AuthorizedClient;
use crate::error::{Error, Result};

/// A resolved resource handler.
///
/// # Examples
///
/// ```no_run
/// use rachio_lib::{Rachio, Resource};
///
/// # async fn example() -> rachio_lib::Result<()> {
/// let rachio = Rachio::new("8e600a4c-0027-4a9a-9bda-dc8d5c90350d")?;
///
/// // Plural names resolve to the same handler as their singular form.
/// match rachio.resource("devices")? {
///     Resource::Device(device) => {
///         let all = device.all().await?;
///         println!("{} controller(s)", all.len());
///     }
///     Resource::Account(_) => unreachable!(),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub enum Resource {
    /// Account operations.
    Account(AccountResource),
    /// Device and zone operations.
    Device(DeviceResource),
}

impl Resource {
    /// Resolves a logical resource name to its handler.
    ///
    /// A single trailing `s` is stripped before matching, so `"accounts"`
    /// and `"devices"` resolve like their singular forms.
    pub(crate) fn resolve(name: &str, client: AuthorizedClient) -> Result<Self> {
        let singular = name.strip_suffix('s').unwrap_or(name);

        match singular {
            "account" => Ok(Self::Account(AccountResource::new(client))),
            "device" => Ok(Self::Device(DeviceResource::new(client))),
            _ => Err(Error::UnknownEndpoint(name.to_string())),
        }
    }
}
