//! Error types for code generation

use thiserror::Error;

/// Result type alias for generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generation operations
///
/// The core deliberately performs no schema validation: duplicate names,
/// unknown type spellings, and the like surface later as C++ compile
/// errors in the generated code. The only hard precondition is that a
/// class name is set before generating.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// `generate()` was called before `set_class_name()`
    #[error("class name not set: call set_class_name() before generate()")]
    MissingClassName,

    /// The renderer bindings could not be serialized to JSON
    #[error("bindings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
