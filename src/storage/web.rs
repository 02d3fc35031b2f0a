use super::ProgressStore;

/// `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        WebStorage
    }

    fn local_storage() -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
        window
            .local_storage()
            .map_err(|e| format!("localStorage access denied: {:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl ProgressStore for WebStorage {
    fn read(&self, slot: &str) -> Option<String> {
        let storage = Self::local_storage().ok()?;
        storage.get_item(slot).ok().flatten()
    }

    fn write(&mut self, slot: &str, value: &str) -> Result<(), String> {
        Self::local_storage()?
            .set_item(slot, value)
            .map_err(|e| format!("localStorage write to {} failed: {:?}", slot, e))
    }
}
