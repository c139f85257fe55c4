//! Background task runners: the cache cleaner and the blocklist
//! auto-updater. Both are plain `tokio::spawn` loops gated by a
//! `CancellationToken`, matching the rest of this workspace's shutdown
//! idiom — neither ever lets an error escape and crash the process.

pub mod blocklist_auto_update;
pub mod cache_cleaner;

pub use blocklist_auto_update::BlocklistAutoUpdateJob;
pub use cache_cleaner::CacheCleanerJob;
