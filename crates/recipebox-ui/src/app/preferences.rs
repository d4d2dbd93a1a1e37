//! Persisted settings for the app shell.

use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use recipebox_client::ClientConfig;

use crate::core::config::{API_BASE_URL_KEY, client_config_from_override};

/// Client configuration, honouring a base URL stored in local storage.
pub(crate) fn client_config() -> ClientConfig {
    let stored = read_storage(API_BASE_URL_KEY);
    client_config_from_override(stored.as_deref())
}

fn read_storage(key: &'static str) -> Option<String> {
    match LocalStorage::get::<String>(key) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            log_storage_error("get", key, &err.to_string());
            None
        }
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
