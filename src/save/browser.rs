use super::store::Store;
use anyhow::Context;

/// The page's `window.localStorage`.
#[derive(Debug, Clone)]
pub struct Browser(web_sys::Storage);

impl Browser {
    pub fn new() -> anyhow::Result<Self> {
        web_sys::window()
            .context("no window")?
            .local_storage()
            .map_err(|e| anyhow::anyhow!("localStorage unavailable: {:?}", e))?
            .context("localStorage disabled")
            .map(Self)
    }
}

impl Store for Browser {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.0
            .get_item(key)
            .map_err(|e| anyhow::anyhow!("read {}: {:?}", key, e))
    }
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("write {}: {:?}", key, e))
    }
    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.0
            .remove_item(key)
            .map_err(|e| anyhow::anyhow!("remove {}: {:?}", key, e))
    }
}
