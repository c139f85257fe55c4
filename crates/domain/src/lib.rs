//! Aegis DNS domain layer.
//!
//! Plain types and pure functions only — no I/O, no locking, no async.
//! Everything here is shared by `application` and `infrastructure`.

pub mod block_action;
pub mod blocklist_source;
pub mod cached_response;
pub mod config;
pub mod custom_entry;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod schedule;
pub mod stats;

pub use block_action::BlockAction;
pub use blocklist_source::BlocklistSource;
pub use cached_response::CachedResponse;
pub use config::Config;
pub use custom_entry::{CustomBlocklistFile, CustomEntry};
pub use dns_query::{CacheKey, DnsQuery};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use schedule::{ScheduleRule, Weekday};
pub use stats::{Stats, StatsSnapshot};
