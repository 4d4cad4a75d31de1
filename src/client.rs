// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The top-level Rachio client and the authorized request layer.
//!
//! [`Rachio`] owns the API key and the transport; resource handlers are
//! cheap, per-use values it hands out. [`AuthorizedClient`] is the base
//! capability every handler calls through: it attaches bearer-auth headers
//! to each request and performs the two-step identity resolution the vendor
//! requires before any account- or device-scoped call.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DecodeError, Error, Result, TransportError};
use crate::resource::{AccountResource, DeviceResource, Resource};
use crate::transport::{HttpTransport, TransportConfig};
use crate::types::{ApiKey, PersonId};

/// Client for the Rachio irrigation API.
///
/// # Examples
///
/// ```no_run
/// use rachio_lib::Rachio;
///
/// # async fn example() -> rachio_lib::Result<()> {
/// let rachio = Rachio::new("8e600a4c-0027-4a9a-9bda-dc8d5c90350d")?;
///
/// let account = rachio.account().retrieve().await?;
/// println!("{} has {} device(s)", account.full_name, account.devices.len());
///
/// let device = rachio.device().main().await?;
/// println!("main controller: {}", device.name);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Rachio {
    client: AuthorizedClient,
}

impl Rachio {
    /// Creates a client for the vendor API with the given API key.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP transport cannot be created.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        Self::with_config(api_key, TransportConfig::new())
    }

    /// Creates a client with a custom transport configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP transport cannot be created.
    pub fn with_config(api_key: impl Into<ApiKey>, config: TransportConfig) -> Result<Self> {
        let transport = config.into_transport()?;
        Ok(Self {
            client: AuthorizedClient {
                transport,
                api_key: api_key.into(),
            },
        })
    }

    /// Resolves a logical resource name to its handler.
    ///
    /// Names are plural-tolerant: a trailing `s` is stripped before
    /// matching, so `"devices"` resolves to the device handler. Any name
    /// outside the known set fails with [`Error::UnknownEndpoint`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] for unrecognized names.
    pub fn resource(&self, name: &str) -> Result<Resource> {
        Resource::resolve(name, self.client.clone())
    }

    /// Returns a handler for account operations.
    #[must_use]
    pub fn account(&self) -> AccountResource {
        AccountResource::new(self.client.clone())
    }

    /// Returns a handler for device and zone operations.
    #[must_use]
    pub fn device(&self) -> DeviceResource {
        DeviceResource::new(self.client.clone())
    }
}

/// The authorized request layer shared by all resource handlers.
///
/// Every call carries `Authorization: Bearer <key>` and
/// `Content-Type: application/json`. The authorization result is never
/// cached here; each [`AuthorizedClient::authorize`] call hits the network,
/// and operations needing the person id more than once cache it within
/// their own scope.
#[derive(Debug, Clone)]
pub(crate) struct AuthorizedClient {
    transport: HttpTransport,
    api_key: ApiKey,
}

impl AuthorizedClient {
    fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Authorization", self.api_key.bearer()),
            ("Content-Type", "application/json".to_string()),
        ]
    }

    /// Resolves the person id for the configured API key.
    ///
    /// `GET person/info`. Fails with [`Error::Authentication`] when the
    /// vendor rejects the call or the response lacks an `id` field.
    pub(crate) async fn authorize(&self) -> Result<PersonId> {
        let response = self.transport.get("person/info", &self.headers()).await?;

        if !response.is_success() {
            return Err(Error::Authentication(format!(
                "identity call returned HTTP {}",
                response.status
            )));
        }

        let body: serde_json::Value =
            serde_json::from_str(&response.body).map_err(DecodeError::Json)?;

        match body.get("id").and_then(serde_json::Value::as_str) {
            Some(id) => Ok(PersonId::new(id)),
            None => Err(Error::Authentication(
                "identity response has no id field".to_string(),
            )),
        }
    }

    /// Authorized GET, decoded into `T`.
    ///
    /// Status mapping: 401/403 become [`Error::Authentication`], 404
    /// becomes [`Error::NotFound`], any other non-2xx surfaces as a
    /// transport status error.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.transport.get(path, &self.headers()).await?;

        match response.status {
            401 | 403 => Err(Error::Authentication(format!(
                "HTTP {} for {path}",
                response.status
            ))),
            404 => Err(Error::NotFound {
                path: path.to_string(),
            }),
            status if !response.is_success() => Err(TransportError::Status {
                status,
                path: path.to_string(),
            }
            .into()),
            _ => serde_json::from_str(&response.body)
                .map_err(|err| DecodeError::Json(err).into()),
        }
    }

    /// Authorized PUT with a JSON body.
    ///
    /// Returns the vendor's status code unchanged; the watering endpoints
    /// answer 204 and callers see exactly that.
    pub(crate) async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<u16> {
        let body = serde_json::to_string(body).map_err(DecodeError::Json)?;
        let response = self.transport.put(path, &self.headers(), body).await?;
        Ok(response.status)
    }
}
