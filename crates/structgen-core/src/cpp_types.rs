//! C++ type spellings for schema type expressions.

use crate::ir::{TypeExpr, TypeKind};

/// Translate a type expression into its C++ spelling.
///
/// The base spelling is formed first, then `const ` is prefixed and `&` is
/// suffixed, in that order. Translation is a pure function of the
/// expression: the same input always yields the same string, wherever it
/// appears (member variable, parameter, return type).
///
/// # Examples
///
/// ```
/// use structgen_core::{TypeExpr, cpp_type};
///
/// assert_eq!(cpp_type(&TypeExpr::primitive("int")), "int");
/// assert_eq!(cpp_type(&TypeExpr::list("Foo")), "std::vector<Foo>");
/// assert_eq!(
///     cpp_type(&TypeExpr::primitive("int").constant().reference()),
///     "const int&"
/// );
/// ```
pub fn cpp_type(expr: &TypeExpr) -> String {
    let mut spelling = base_spelling(&expr.kind);

    if expr.is_const {
        spelling = format!("const {spelling}");
    }
    if expr.is_reference {
        spelling.push('&');
    }

    spelling
}

/// The unqualified spelling of a type shape.
///
/// Map keys and values recurse through here, so nested qualifier flags are
/// never consulted: qualifiers act only at the outermost level.
fn base_spelling(kind: &TypeKind) -> String {
    match kind {
        TypeKind::Primitive(name) => name.clone(),
        TypeKind::List(element) => format!("std::vector<{element}>"),
        TypeKind::Map(key, value) => format!(
            "std::map<{}, {}>",
            base_spelling(&key.kind),
            base_spelling(&value.kind)
        ),
    }
}

#[cfg(test)]
#[path = "cpp_types/cpp_types_tests.rs"]
mod cpp_types_tests;

#[cfg(test)]
#[path = "cpp_types/cpp_types_parameterized_tests.rs"]
mod cpp_types_parameterized_tests;
