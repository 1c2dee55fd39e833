//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod cultor_repo;
pub mod lookup_repo;

pub use cultor_repo::CultorRepo;
pub use lookup_repo::LookupRepo;
