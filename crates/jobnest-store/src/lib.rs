//! File-backed snapshot store.
//!
//! This crate provides:
//! - Whole-file load/save of the `Snapshot` aggregate as a single JSON
//!   document
//! - A lock-guarded `update` that serializes load, mutate, and save within
//!   one process
//! - Crash-safe replacement via a temp file and atomic rename

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::SnapshotStore;
