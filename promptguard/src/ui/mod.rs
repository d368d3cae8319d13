//! Terminal output helpers.

pub mod summary;
