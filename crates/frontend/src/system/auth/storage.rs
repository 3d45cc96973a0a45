use contracts::system::auth::SessionStorage;
use web_sys::window;

/// `window.localStorage` as session storage. Failures (private mode, quota)
/// degrade to "nothing stored".
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage: failed to write '{}'", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
