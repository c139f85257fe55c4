pub mod cache_port;
pub mod filter_port;
pub mod persistence_port;
pub mod upstream_port;
pub mod wire_codec_port;

pub use cache_port::CachePort;
pub use filter_port::FilterPort;
pub use persistence_port::PersistencePort;
pub use upstream_port::UpstreamPort;
pub use wire_codec_port::WireCodecPort;
