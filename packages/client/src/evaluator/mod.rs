//! Rule evaluator
//!
//! [`TransformEngine`] is the recursive core: string rules resolve paths or
//! pass literals through, object rules build objects entry by entry, and
//! `$each` rules enumerate items and aggregate the per-item results.

mod aggregate;
mod engine;

pub use aggregate::Intermediate;
pub use engine::TransformEngine;
