// promptguard-core/src/engines/mod.rs
//! Concrete sanitization engines.
//!
//! * `string_engine`: the ordered rule pipeline for one string (`StringSanitizer`).
//! * `data_engine`: the depth-bounded walker over structured values (`DataSanitizer`).
//!
//! # License
//! MIT OR Apache-2.0

pub mod data_engine;
pub mod string_engine;
