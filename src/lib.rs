//! Lightweight row mapping for SQL result sets.
//!
//! `rowmap` sits between a database client and application structs: it
//! resolves result-set columns to struct properties (by name, explicit alias
//! or underscore-to-camelCase derivation, with per-type caching), converts
//! values through a pluggable type-handler registry, and walks cursors with a
//! single-pass iterator offering `first` / `unique` / `list` terminals. It is
//! not an ORM: no relationships, no change tracking, no connection handling.

pub use rowmap_core::*;
pub use rowmap_macros::Mapped;
