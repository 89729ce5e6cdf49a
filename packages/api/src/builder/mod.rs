//! Transformer builder API modules
//!
//! Fluent configuration followed by compile/transform terminal methods.

pub mod compiled;
pub mod transformer;

pub use self::compiled::*;
pub use self::transformer::*;
