//! # Rulemorph interpreter
//!
//! Declarative JSON-to-JSON transformation. A rule document mirrors the
//! shape of the desired output; its strings are literals or `$`-rooted paths
//! into the input, and objects carrying `$each` repeat their body once per
//! enumerated item.
//!
//! ## Features
//!
//! - **Path rules** (`$`, `$.a.0.b`) resolved with null vs missing distinction
//! - **Captures**: variable tokens (`$.rows.:row.cells`) bound per enumeration
//!   and substituted wherever the token string appears in output
//! - **Aggregation** into arrays ordered by `$index` or objects keyed by `$key`
//! - **Compile once, apply many**: rules are validated up front and immutable
//!
//! ## Usage
//!
//! ```rust
//! use rulemorph_client::TransformEngine;
//! use serde_json::json;
//!
//! let engine = TransformEngine::default();
//! let output = engine
//!     .transform(
//!         &json!({"m": {"x": 1, "y": 2}}),
//!         &json!({"out": {"$each": "$.m", "$key": "$.$key", "value": "$.$value"}}),
//!     )
//!     .expect("valid rules");
//!
//! assert_eq!(output, json!({"out": {"x": {"value": 1}, "y": {"value": 2}}}));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod captures;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod null_semantics;
pub mod path;
pub mod rule;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
