//! Rule specifications and their compilation.
//!
//! `compiler` turns `RuleSpec`s into regex-backed `CompiledRule`s; `rules`
//! holds the built-in prompt-injection table and compiles it once per
//! process.

pub mod compiler;
pub mod rules;
