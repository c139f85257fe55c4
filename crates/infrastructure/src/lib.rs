//! Concrete adapters for the application layer's ports: the real UDP
//! socket, cache, filter engine, and upstream pool.

pub mod dns;
