//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `cultores_db`, run writes through
//! the validation pipeline in `cultores_core`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod cultor;
pub mod lookup;
