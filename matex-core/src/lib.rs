//! # MATEX Core
//!
//! Core types, errors, and projection logic for the MATEX materials API.
//!
//! This crate provides the foundational building blocks used by all other
//! MATEX crates:
//!
//! - **Types**: the open-ended upstream record and the projected shape the
//!   frontend consumes
//! - **Projection**: the allow-list field projection with the symmetry
//!   special case
//! - **Errors**: error types with context
//! - **Constants**: the popular formula list, the essential field set, and
//!   the cache TTL
//!
//! ## Example
//!
//! ```rust
//! use matex_core::{project_material, RawMaterialRecord};
//!
//! let raw: RawMaterialRecord = serde_json::from_str(
//!     r#"{"material_id": "mp-149", "formula_pretty": "Si", "band_gap": 0.61}"#,
//! ).unwrap();
//! let projected = project_material(&raw);
//! assert_eq!(projected.material_id.as_deref(), Some("mp-149"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod project;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{MatexError, Result};
pub use project::project_material;
pub use types::*;
