//! # MATEX Materials Project integration
//!
//! Upstream client for the Materials Project summary endpoint, plus the
//! catalog service that combines the client with the popular-materials
//! cache.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod catalog;
mod client;

pub use catalog::{CatalogConfig, MaterialsCatalog, PopularMaterials};
pub use client::{MpClient, MpConfig};
