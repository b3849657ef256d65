//! sessionStorage wrapper over `web_sys::Storage`.
//!
//! The only persisted client state: the `pendingOrders` and
//! `redirectAfterLogin` one-shot handoffs. `take` reads and clears in one
//! step so consumed keys cannot be replayed.

use serde::Serialize;
use serde::de::DeserializeOwned;

pub struct SessionStorage;

impl SessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }

    /// Read and clear a one-shot key.
    pub fn take(key: &str) -> Option<String> {
        let value = Self::get(key)?;
        Self::delete(key);
        Some(value)
    }

    pub fn set_json<T: Serialize>(key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(json) => Self::set(key, &json),
            Err(_) => false,
        }
    }

    /// Read and clear a one-shot JSON key; an undecodable value is dropped.
    pub fn take_json<T: DeserializeOwned>(key: &str) -> Option<T> {
        let raw = Self::take(key)?;
        serde_json::from_str(&raw).ok()
    }
}
