use contracts::shared::error::AppError;
use contracts::shared::record_store::KeyValueStore;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a raw value from localStorage
pub fn read_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Write a raw value to localStorage, logging failures
pub fn write_item(key: &str, value: &str) {
    if let Err(e) = BrowserStorage.write(key, value) {
        log::warn!("could not write {}: {}", key, e);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    read_item(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
}

/// `window.localStorage` as a key-value store.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, AppError> {
        get_local_storage().ok_or_else(|| AppError::server("Local storage is not available"))
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::server(format!("Failed to read {}: {:?}", key, e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::server(format!("Failed to write {}: {:?}", key, e)))
    }
}
