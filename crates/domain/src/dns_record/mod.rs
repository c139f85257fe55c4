//! DNS record and query-type vocabulary used across the workspace.

mod record_type;

pub use record_type::RecordType;
