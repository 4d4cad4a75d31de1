// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Account (person) model.

use serde::Deserialize;

use crate::model::Device;

/// A Rachio account, as returned by `person/{id}`.
///
/// # Examples
///
/// ```
/// use rachio_lib::model::Account;
///
/// let json = r#"{
///     "id": "9876543210",
///     "username": "jdoe",
///     "fullName": "John Doe",
///     "email": "me@example.com",
///     "devices": [{"id": "0123456789", "status": "ONLINE"}]
/// }"#;
/// let account: Account = serde_json::from_str(json).unwrap();
/// assert_eq!(account.full_name, "John Doe");
/// assert_eq!(account.devices.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The person id.
    pub id: String,

    /// Account username.
    #[serde(default)]
    pub username: String,

    /// The account holder's full name.
    #[serde(default)]
    pub full_name: String,

    /// Contact email address.
    #[serde(default)]
    pub email: String,

    /// Roles granted to the account.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Devices registered to the account.
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_account_with_defaults() {
        let json = r#"{"id": "9876543210"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, "9876543210");
        assert!(account.username.is_empty());
        assert!(account.roles.is_empty());
        assert!(account.devices.is_empty());
    }

    #[test]
    fn decodes_camel_case_fields() {
        let json = r#"{
            "id": "9876543210",
            "fullName": "John Doe",
            "roles": ["USER"]
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.full_name, "John Doe");
        assert_eq!(account.roles, vec!["USER".to_string()]);
    }
}
