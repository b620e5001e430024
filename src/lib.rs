//! Normalizes JSON documents: object fields holding `null` or `""` are
//! dropped and every object's keys are re-emitted in ascending code-point
//! order. Array slots and the root value are never removed.
//!
//! ```
//! use json_normalize::normalize;
//!
//! let output = normalize(r#"{"name":"John","age":null,"Address":{"city":"","country":"US"}}"#).unwrap();
//! assert_eq!(output, r#"{"Address":{"country":"US"},"name":"John"}"#);
//! ```

pub mod clean_json;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod number;
pub mod sort_json;

/// Remaining stack below which the recursive passes switch to a fresh segment.
pub(crate) const RED_ZONE: usize = 64 * 1024;
/// Size of each stack segment allocated for deeply nested documents.
pub(crate) const STACK_GROWTH: usize = 2 * 1024 * 1024;

pub use clean_json::clean_json;
pub use config::EnvVarConfig;
pub use error::{NormalizeError, INVALID_JSON_MESSAGE};
pub use normalizer::{normalize, normalize_slice};
pub use sort_json::sort_json;
