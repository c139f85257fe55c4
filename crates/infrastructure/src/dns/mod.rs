pub mod cache;
pub mod codec;
pub mod filter;
pub mod listener;
pub mod upstream;

pub use cache::ResponseCache;
pub use codec::WireCodec;
pub use filter::FilterEngine;
pub use listener::Listener;
pub use upstream::UpstreamPool;
