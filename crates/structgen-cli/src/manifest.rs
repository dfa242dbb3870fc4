//! Schema manifest parsing and validation
//!
//! The manifest keeps the flat, keyword-argument style schema surface
//! (`type` plus optional `element`, `key`, `value`, `const`, `ref`) and
//! converts it into the tagged [`TypeExpr`] model, rejecting combinations
//! the tagged model makes unrepresentable. Duplicate-name detection also
//! lives here: the core generator stays garbage-in/garbage-out, and the
//! manifest layer is where a schema gets checked before generation.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use structgen_core::{ClassGenerator, MemberFunction, TypeExpr};

/// structgen.toml manifest structure
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub class: ClassSection,

    #[serde(default)]
    pub variables: Vec<FieldEntry>,

    #[serde(default)]
    pub functions: Vec<FunctionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassSection {
    pub name: String,
}

/// A member variable or function parameter entry.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldEntry {
    pub name: String,

    #[serde(flatten)]
    pub ty: TypeSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionEntry {
    pub name: String,

    /// Return type; omitted means `void`.
    #[serde(default, rename = "return")]
    pub return_type: Option<TypeSpec>,

    #[serde(default)]
    pub params: Vec<FieldEntry>,
}

/// Keyword-argument style type description.
///
/// `type = "list"` requires `element`; `type = "map"` requires `key` and
/// `value`; anything else is a primitive (or user-defined) type name used
/// verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSpec {
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub element: Option<String>,

    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default, rename = "const")]
    pub is_const: bool,

    #[serde(default, rename = "ref")]
    pub is_reference: bool,
}

impl TypeSpec {
    /// Convert into the tagged type expression.
    ///
    /// `context` names the entry being converted, for error messages.
    pub fn to_type_expr(&self, context: &str) -> Result<TypeExpr> {
        let expr = match self.ty.as_str() {
            "list" => {
                if self.key.is_some() || self.value.is_some() {
                    bail!("{context}: `key`/`value` are not valid on a list type");
                }
                let element = self
                    .element
                    .as_ref()
                    .with_context(|| format!("{context}: list type requires `element`"))?;
                TypeExpr::list(element)
            }
            "map" => {
                if self.element.is_some() {
                    bail!("{context}: `element` is not valid on a map type");
                }
                let key = self
                    .key
                    .as_ref()
                    .with_context(|| format!("{context}: map type requires `key`"))?;
                let value = self
                    .value
                    .as_ref()
                    .with_context(|| format!("{context}: map type requires `value`"))?;
                TypeExpr::map(TypeExpr::primitive(key), TypeExpr::primitive(value))
            }
            name => {
                if self.element.is_some() || self.key.is_some() || self.value.is_some() {
                    bail!("{context}: `element`/`key`/`value` are only valid on list and map types");
                }
                TypeExpr::primitive(name)
            }
        };

        let expr = if self.is_const { expr.constant() } else { expr };
        let expr = if self.is_reference {
            expr.reference()
        } else {
            expr
        };
        Ok(expr)
    }
}

impl Manifest {
    /// Load a manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse a manifest from a string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    ///
    /// Duplicate names would make the generated C++ fail to compile, so
    /// they are rejected here rather than passed through.
    pub fn validate(&self) -> Result<()> {
        if self.class.name.is_empty() {
            bail!("Class name cannot be empty");
        }

        let mut variable_names = HashSet::new();
        for variable in &self.variables {
            if variable.name.is_empty() {
                bail!("Variable name cannot be empty");
            }
            if !variable_names.insert(variable.name.as_str()) {
                bail!("Duplicate variable name: '{}'", variable.name);
            }
        }

        let mut function_names = HashSet::new();
        for function in &self.functions {
            if function.name.is_empty() {
                bail!("Function name cannot be empty");
            }
            if !function_names.insert(function.name.as_str()) {
                bail!("Duplicate function name: '{}'", function.name);
            }

            let mut param_names = HashSet::new();
            for param in &function.params {
                if !param_names.insert(param.name.as_str()) {
                    bail!(
                        "Duplicate parameter name '{}' in function '{}'",
                        param.name,
                        function.name
                    );
                }
            }
        }

        Ok(())
    }

    /// Build the class generator from this manifest.
    pub fn to_generator(&self) -> Result<ClassGenerator> {
        let mut generator = ClassGenerator::new();
        generator.set_class_name(&self.class.name);

        for variable in &self.variables {
            let ty = variable
                .ty
                .to_type_expr(&format!("variable '{}'", variable.name))?;
            generator.add_member_variable(ty, &variable.name);
        }

        for function in &self.functions {
            let mut func = MemberFunction::new(&function.name);

            if let Some(return_type) = &function.return_type {
                func.set_return_type(
                    return_type
                        .to_type_expr(&format!("function '{}' return type", function.name))?,
                );
            }

            for param in &function.params {
                let ty = param.ty.to_type_expr(&format!(
                    "function '{}' parameter '{}'",
                    function.name, param.name
                ))?;
                func.add_param(&param.name, ty);
            }

            generator.add_member_function(&func);
        }

        Ok(generator)
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| "structgen.toml".to_string());

    println!("Checking schema: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;
    manifest.to_generator()?;

    println!("✓ Schema is valid");
    println!("  Class: {}", manifest.class.name);
    println!("  Variables: {}", manifest.variables.len());
    println!("  Functions: {}", manifest.functions.len());

    Ok(())
}
