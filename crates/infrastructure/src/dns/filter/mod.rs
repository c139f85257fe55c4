mod engine;
mod parse;
mod schedule;
mod whitelist;

pub use engine::FilterEngine;
pub use parse::{parse_list_line, parse_list_text};
