//! Parameter bundle generation.
//!
//! Every registered member function gets one auxiliary C++ type carrying
//! its parameters as named fields. The bundle is the unit of
//! (de)serialization for that function's call: the generated wrapper
//! deserializes an incoming JSON document into the bundle, then spreads the
//! fields positionally into the real method call.

use serde::Serialize;

use crate::cpp_types::cpp_type;
use crate::ir::MemberFunction;

/// Derive the bundle type name for a function on a class.
///
/// Deterministic from the pair, so bundle names are unique across a class
/// as long as function names are (not cross-checked).
///
/// # Examples
///
/// ```
/// use structgen_core::bundle_type_name;
///
/// assert_eq!(bundle_type_name("Bar", "foo"), "Bar_foo_Params");
/// ```
pub fn bundle_type_name(class_name: &str, function_name: &str) -> String {
    format!("{class_name}_{function_name}_Params")
}

/// A field whose type has already been translated to its C++ spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundField {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

/// A generated parameter bundle: one function's parameters as named,
/// translated fields, in declaration order.
///
/// Built once when the function is registered; never mutated afterward.
#[derive(Debug, Clone, Serialize)]
pub struct ParamBundle {
    pub type_name: String,
    pub fields: Vec<BoundField>,
}

impl ParamBundle {
    /// Builds the bundle for `function` on `class_name`, translating every
    /// parameter type.
    pub fn build(class_name: &str, function: &MemberFunction) -> Self {
        let fields = function
            .params()
            .iter()
            .map(|param| BoundField {
                ty: cpp_type(&param.ty),
                name: param.name.clone(),
            })
            .collect();

        Self {
            type_name: bundle_type_name(class_name, function.name()),
            fields,
        }
    }

    /// Renders the bundle as a C++ class definition.
    ///
    /// The `NLOHMANN_DEFINE_TYPE_INTRUSIVE` directive lists every field
    /// exactly once, in declaration order. With no parameters the
    /// zero-field form is emitted, so the type still round-trips an empty
    /// JSON object.
    pub fn render(&self) -> String {
        let mut code = String::new();

        code.push_str(&format!("class {}\n{{\npublic:\n", self.type_name));

        for field in &self.fields {
            code.push_str(&format!("    {} {};\n", field.ty, field.name));
        }

        if self.fields.is_empty() {
            code.push_str(&format!(
                "    NLOHMANN_DEFINE_TYPE_INTRUSIVE({});\n",
                self.type_name
            ));
        } else {
            let names: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();
            code.push_str(&format!(
                "    NLOHMANN_DEFINE_TYPE_INTRUSIVE({}, {});\n",
                self.type_name,
                names.join(", ")
            ));
        }

        code.push_str("};\n");
        code
    }
}
