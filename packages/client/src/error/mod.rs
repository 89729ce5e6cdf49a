//! Transform error handling module
//!
//! Error types, constructors and helpers shared by the path resolver, the
//! rule compiler and the evaluator.

mod constructors;
mod types;

pub use constructors::kind_name;
pub use types::{ErrorKind, TransformError, TransformResult};
