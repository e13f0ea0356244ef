//! Saving and restoring the whole session under one key.
mod disk;
mod memory;
mod persistence;
mod record;
mod store;

#[cfg(feature = "client")]
mod browser;

pub use disk::*;
pub use memory::*;
pub use persistence::*;
pub use record::*;
pub use store::*;

#[cfg(feature = "client")]
pub use browser::*;
