//! structgen-core - Schema model and C++ code generation
//!
//! This crate turns a class schema (member variables and member functions
//! with typed parameters) into C++ source text containing:
//!
//! - a plain data class with public fields and method declarations,
//! - one JSON-serializable "parameter bundle" type per member function,
//! - a wrapper class exposing each method as a JSON-in/JSON-out call.
//!
//! The pieces:
//! - [`TypeExpr`] / [`TypeKind`] for describing types
//! - [`cpp_type`] for translating them to C++ spellings
//! - [`MemberFunction`] for describing functions
//! - [`ClassGenerator`] for assembling and generating the class

mod cpp;
mod cpp_types;
mod error;
mod generator;
mod ir;
mod params;

pub use cpp::emit_class;
pub use cpp_types::cpp_type;
pub use error::{CodegenError, CodegenResult};
pub use generator::{ClassBindings, ClassGenerator, FunctionBinding};
pub use ir::{Field, MemberFunction, TypeExpr, TypeKind};
pub use params::{BoundField, ParamBundle, bundle_type_name};
