/// A string-keyed, string-valued local store, the shape of the browser's
/// `localStorage`. Anything that can hold one saved game per key fits.
pub trait Store {
    /// `Ok(None)` when nothing is stored under `key`.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    /// replace whatever is stored under `key`
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    /// removing an absent key is not an error
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}
