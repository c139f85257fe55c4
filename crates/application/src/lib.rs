//! Aegis DNS application layer: ports and use cases.
//!
//! No concrete I/O lives here — only trait seams (`ports`) and the
//! orchestration that composes them (`pipeline`, `use_cases`).

pub mod pipeline;
pub mod ports;
pub mod use_cases;

pub use pipeline::{Pipeline, PipelineConfig};
