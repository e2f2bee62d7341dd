//! TTL cache for the MATEX popular-materials aggregate.
//!
//! Single-slot in-memory cache with a fixed expiration window.

mod cache;

pub use cache::PopularCache;
