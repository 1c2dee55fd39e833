//! Domain model structs.
//!
//! Reference entities (municipalities, parishes, art categories and
//! disciplines) are defined in `cultores_core::lookup` and mapped from rows
//! by `LookupRepo`; only cultors have a row struct here.

pub mod cultor;
