//! Intermediate representation for class schemas.
//!
//! This module defines the language-agnostic model a schema author builds
//! before any C++ is emitted:
//!
//! - [`TypeExpr`]: a type shape ([`TypeKind`]) plus outer const/reference
//!   qualifiers
//! - [`Field`]: a named member variable or function parameter
//! - [`MemberFunction`]: a function's name, return type, and ordered
//!   parameter list
//!
//! The model is plain data. Translation to C++ spellings happens in
//! [`crate::cpp_type`]; assembly into source text happens in
//! [`crate::ClassGenerator`].

/// The shape of a type, without qualifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// A primitive or user-defined type name, used verbatim.
    ///
    /// No validation is performed: an unknown spelling passes through and
    /// surfaces, if wrong, as a C++ compile error in the generated code.
    Primitive(String),

    /// A homogeneous sequence, emitted as `std::vector<element>`.
    ///
    /// The element is an opaque type *name*: the schema model cannot
    /// express a list of lists or a list of maps. This is a documented
    /// limitation of the source model, kept rather than fixed.
    List(String),

    /// An associative container, emitted as `std::map<key, value>`.
    ///
    /// Key and value are full type expressions and are translated
    /// recursively, but always unqualified (their own const/reference
    /// flags are ignored).
    Map(Box<TypeExpr>, Box<TypeExpr>),
}

/// A type expression: a [`TypeKind`] plus the outermost qualifiers.
///
/// Qualifiers apply once, to the whole translated expression. They never
/// propagate into nested map keys or values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub kind: TypeKind,
    pub is_const: bool,
    pub is_reference: bool,
}

impl TypeExpr {
    /// An unqualified primitive (or user-defined) type.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Primitive(name.into()),
            is_const: false,
            is_reference: false,
        }
    }

    /// An unqualified list of the named element type.
    pub fn list(element: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::List(element.into()),
            is_const: false,
            is_reference: false,
        }
    }

    /// An unqualified map from `key` to `value`.
    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self {
            kind: TypeKind::Map(Box::new(key), Box::new(value)),
            is_const: false,
            is_reference: false,
        }
    }

    /// The default return type: unqualified `void`.
    pub fn void() -> Self {
        Self::primitive("void")
    }

    /// Adds the outer `const` qualifier.
    #[must_use]
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Adds the outer reference qualifier.
    #[must_use]
    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }
}

/// A named field: a class member variable or a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A member function description.
///
/// Parameters are stored in the exact order added. That order is preserved
/// verbatim in the generated parameter bundle, the wrapper's call site, and
/// the serialization directive; no reordering, deduplication, or validation
/// is performed.
#[derive(Debug, Clone)]
pub struct MemberFunction {
    name: String,
    return_type: TypeExpr,
    params: Vec<Field>,
}

impl MemberFunction {
    /// Creates a function returning unqualified `void`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: TypeExpr::void(),
            params: Vec::new(),
        }
    }

    /// Replaces the return type.
    pub fn set_return_type(&mut self, ty: TypeExpr) {
        self.return_type = ty;
    }

    /// Appends a parameter. Order is significant.
    pub fn add_param(&mut self, name: impl Into<String>, ty: TypeExpr) {
        self.params.push(Field::new(name, ty));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> &TypeExpr {
        &self.return_type
    }

    pub fn params(&self) -> &[Field] {
        &self.params
    }
}

#[cfg(test)]
#[path = "ir/ir_tests.rs"]
mod ir_tests;
