//! C++ source emission from assembled class bindings.
//!
//! The emitter renders three coordinated artifacts into one translation
//! unit:
//!
//! 1. the data class: public member variables plus method declarations
//!    only (the schema author implements the bodies separately — the
//!    generator defines the calling contract, not the business logic),
//! 2. every function's parameter bundle, and
//! 3. the wrapper class: a private instance of the data class and one
//!    `nlohmann::json -> nlohmann::json` method per function.

use crate::generator::{ClassBindings, FunctionBinding};
use crate::params::bundle_type_name;

/// Emit the complete generated source for a class.
pub fn emit_class(bindings: &ClassBindings) -> String {
    let mut code = String::new();

    code.push_str("#include <nlohmann/json.hpp>\n\n");

    emit_data_class(&mut code, bindings);
    code.push('\n');

    for func in &bindings.member_functions {
        code.push_str(&func.param_bundle_source);
        code.push('\n');
    }

    emit_wrapper_class(&mut code, bindings);
    code
}

fn emit_data_class(code: &mut String, bindings: &ClassBindings) {
    code.push_str(&format!("class {}\n{{\npublic:\n", bindings.class_name));

    for var in &bindings.member_variables {
        code.push_str(&format!("    {} {};\n", var.ty, var.name));
    }

    if !bindings.member_variables.is_empty() && !bindings.member_functions.is_empty() {
        code.push('\n');
    }

    for func in &bindings.member_functions {
        code.push_str(&format!(
            "    {} {}({});\n",
            func.return_type,
            func.name,
            declaration_params(func)
        ));
    }

    code.push_str("};\n");
}

fn emit_wrapper_class(code: &mut String, bindings: &ClassBindings) {
    code.push_str(&format!(
        "class {}Wrapper\n{{\nprivate:\n    {} instance;\n\npublic:\n",
        bindings.class_name, bindings.class_name
    ));

    for (i, func) in bindings.member_functions.iter().enumerate() {
        if i > 0 {
            code.push('\n');
        }
        emit_wrapper_method(code, &bindings.class_name, func);
    }

    code.push_str("};\n");
}

/// One wrapper method: deserialize the bundle, call the real method with
/// the fields spread positionally, serialize the result (or return an
/// empty document for void).
fn emit_wrapper_method(code: &mut String, class_name: &str, func: &FunctionBinding) {
    let bundle = bundle_type_name(class_name, &func.name);
    let args = call_arguments(func);

    code.push_str(&format!(
        "    nlohmann::json {}(const nlohmann::json& j)\n    {{\n",
        func.name
    ));
    code.push_str(&format!("        auto params = j.get<{bundle}>();\n"));

    if func.return_type == "void" {
        code.push_str(&format!("        instance.{}({});\n", func.name, args));
        code.push_str("        return nlohmann::json{};\n");
    } else {
        code.push_str(&format!(
            "        auto result = instance.{}({});\n",
            func.name, args
        ));
        code.push_str("        return result;\n");
    }

    code.push_str("    }\n");
}

/// `type name, type name, ...` for the data-class declaration.
fn declaration_params(func: &FunctionBinding) -> String {
    let mut out = String::new();
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{} {}", param.ty, param.name));
    }
    out
}

/// `params.a, params.b, ...` in declaration order for the call site.
fn call_arguments(func: &FunctionBinding) -> String {
    let mut out = String::new();
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("params.{}", param.name));
    }
    out
}
