//! Class assembly: registration, binding production, and generation.
//!
//! [`ClassGenerator`] is the schema author's entry point. Registrations
//! translate types eagerly (at registration time, never later), so the
//! stored state is already target-language text; `generate()` only
//! assembles it. The generator has a single state: it accepts
//! registrations until the caller is done, and `generate()` may be called
//! any number of times, each call re-deriving output from the current
//! registrations.

use serde::Serialize;

use crate::cpp;
use crate::cpp_types::cpp_type;
use crate::error::{CodegenError, CodegenResult};
use crate::ir::{MemberFunction, TypeExpr};
use crate::params::{BoundField, ParamBundle};

/// Renderer bindings for one member function.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionBinding {
    /// Translated return type spelling, e.g. `"int&"` or `"void"`.
    pub return_type: String,

    /// Function name, shared by the data-class declaration and the
    /// wrapper method.
    pub name: String,

    /// Translated parameters in declaration order.
    pub params: Vec<BoundField>,

    /// Rendered C++ source of this function's parameter bundle.
    pub param_bundle_source: String,
}

/// The full binding record handed to the renderer.
///
/// Serializes with the field names a templating engine would consume
/// (`className`, `memberVariables`, `memberFunctions`), for hosts that
/// render with their own engine instead of the built-in emitter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBindings {
    pub class_name: String,
    pub member_variables: Vec<BoundField>,
    pub member_functions: Vec<FunctionBinding>,
}

/// Incremental builder for one generated class.
///
/// Self-contained: no shared state between instances. A single instance is
/// not synchronized for concurrent registration; the intended usage is
/// build-then-render on one thread.
#[derive(Debug, Default)]
pub struct ClassGenerator {
    class_name: String,
    member_variables: Vec<BoundField>,
    member_functions: Vec<FunctionBinding>,
}

impl ClassGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generated class name. No default exists.
    ///
    /// Bundle type names are derived from the class name when a function
    /// is registered, so call this before `add_member_function`.
    pub fn set_class_name(&mut self, name: impl Into<String>) {
        self.class_name = name.into();
    }

    /// Registers a member variable, translating its type immediately.
    pub fn add_member_variable(&mut self, ty: TypeExpr, name: impl Into<String>) {
        self.member_variables.push(BoundField {
            ty: cpp_type(&ty),
            name: name.into(),
        });
    }

    /// Registers a member function.
    ///
    /// The return type and every parameter type are translated
    /// immediately, and the parameter bundle source is produced here. The
    /// bundle's fields double as the call-site parameter list, so the data
    /// class, the bundle, and the wrapper dispatch can never disagree on
    /// a field name.
    pub fn add_member_function(&mut self, function: &MemberFunction) {
        let bundle = ParamBundle::build(&self.class_name, function);

        self.member_functions.push(FunctionBinding {
            return_type: cpp_type(function.return_type()),
            name: function.name().to_string(),
            params: bundle.fields.clone(),
            param_bundle_source: bundle.render(),
        });
    }

    /// Assembles the renderer binding record from current registrations.
    ///
    /// # Errors
    ///
    /// [`CodegenError::MissingClassName`] if `set_class_name` was never
    /// called.
    pub fn bindings(&self) -> CodegenResult<ClassBindings> {
        if self.class_name.is_empty() {
            return Err(CodegenError::MissingClassName);
        }

        Ok(ClassBindings {
            class_name: self.class_name.clone(),
            member_variables: self.member_variables.clone(),
            member_functions: self.member_functions.clone(),
        })
    }

    /// Renders the binding record as a JSON document, for hosts that feed
    /// an external templating engine.
    pub fn bindings_json(&self) -> CodegenResult<serde_json::Value> {
        Ok(serde_json::to_value(self.bindings()?)?)
    }

    /// Generates the complete C++ source: data class, one parameter
    /// bundle per function, wrapper class.
    ///
    /// Idempotent: with no intervening registrations, repeated calls
    /// yield byte-identical output.
    pub fn generate(&self) -> CodegenResult<String> {
        Ok(cpp::emit_class(&self.bindings()?))
    }
}
