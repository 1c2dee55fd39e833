//! Domain logic for the cultor registry.
//!
//! Everything in this crate is storage-agnostic: the record store and the
//! reference data are reached through the [`lookup::LookupRegistry`] and
//! [`uniqueness::UniquenessGuard`] traits, implemented by `cultores-db`.

pub mod cultor;
pub mod error;
pub mod filter;
pub mod formats;
pub mod lookup;
pub mod naming;
pub mod pagination;
pub mod types;
pub mod uniqueness;
