// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Credential and identifier types for the Rachio API.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// The API key for a Rachio account.
///
/// Created once at client construction and shared by reference with every
/// resource handler the client creates. The key is never logged; the
/// `Debug` implementation redacts it.
///
/// # Examples
///
/// ```
/// use rachio_lib::ApiKey;
///
/// let key = ApiKey::new("8e600a4c-0027-4a9a-9bda-dc8d5c90350d");
/// assert_eq!(key.bearer(), "Bearer 8e600a4c-0027-4a9a-9bda-dc8d5c90350d");
/// ```
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Creates a new API key from the given credential string.
    #[must_use]
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this key.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// The person id for a Rachio account.
///
/// This is the vendor's top-level account identifier. Every account- or
/// device-scoped call starts by fetching it from `person/info`; it is not
/// cached across operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Creates a person id from a raw identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_bearer_value() {
        let key = ApiKey::new("0123456789");
        assert_eq!(key.bearer(), "Bearer 0123456789");
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn person_id_display() {
        let id = PersonId::new("9876543210");
        assert_eq!(id.to_string(), "9876543210");
    }
}
