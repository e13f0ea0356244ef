use super::store::Store;
use std::collections::HashMap;

/// In-process store. Nothing outlives the value.
#[derive(Debug, Default, Clone)]
pub struct Memory(HashMap<String, String>);

impl Memory {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl Store for Memory {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.0.remove(key);
        Ok(())
    }
}
