//! Persistence and the mutable task store for taskdeck.

pub mod error;
pub mod storage;
pub mod store;
pub mod transfer;

pub use error::StoreError;
pub use storage::JsonStorage;
pub use store::TaskStore;
