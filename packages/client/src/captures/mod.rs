//! Captures: variable bindings created by `$each` enumeration
//!
//! - [`Captures`] holds the bindings visible to the rule being evaluated
//! - [`enumerate`] expands an enumeration path into items and bindings
//! - [`Substituter`] rewrites values by replacing variable references

mod bindings;
mod enumerate;
mod substitute;

pub use bindings::Captures;
pub use enumerate::{Binding, ITEM_KEY, ITEM_VALUE, enumerate};
pub use substitute::Substituter;
