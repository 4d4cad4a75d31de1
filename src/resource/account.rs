// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account resource handler.

use crate::client::AuthorizedClient;
use crate::error::Result;
use crate::model::Account;
use crate::types::PersonId;

/// Handler for account (person) operations.
///
/// Stateless; every read re-fetches from the vendor.
#[derive(Debug)]
pub struct AccountResource {
    client: AuthorizedClient,
}

impl AccountResource {
    pub(crate) fn new(client: AuthorizedClient) -> Self {
        Self { client }
    }

    /// Returns the person id for the account.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Authentication`] when the identity call is
    /// rejected.
    pub async fn get_id(&self) -> Result<PersonId> {
        self.client.authorize().await
    }

    /// Fetches the full account record, devices included.
    ///
    /// Two strictly sequential calls: `GET person/info` for the person id,
    /// then `GET person/{id}`. The second path depends on the first
    /// result, so the calls are never issued concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Authentication`] from the identity call,
    /// [`crate::Error::NotFound`] when the account lookup returns 404, or
    /// [`crate::Error::Decode`] when the body is not a valid account.
    pub async fn retrieve(&self) -> Result<Account> {
        let person_id = self.client.authorize().await?;
        self.client.get_json(&format!("person/{person_id}")).await
    }
}
