use serde::{Deserialize, Serialize};

use crate::type_map::{TypeShape, VOID, map_type};

/// One formal parameter as declared upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeParam {
    /// Parameter name
    pub name: String,
    /// Raw platform type token, possibly pointer- or `const`-qualified
    #[serde(rename = "type")]
    pub ty: String,
}

impl NativeParam {
    /// Creates a parameter from a name and raw type token.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, ty: T) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// One native function entry of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeDefinition {
    /// Declared `SNAKE_CASE` name, absent for unnamed natives
    #[serde(default)]
    pub name: Option<String>,
    /// Parameters in call order
    pub params: Vec<NativeParam>,
    /// Raw declared return type
    #[serde(default)]
    pub results: Option<String>,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Native hash used in documentation links
    #[serde(default)]
    pub hash: String,
    /// Namespace the native declares itself in
    #[serde(default, alias = "ns")]
    pub namespace: Option<String>,
    /// API set (`client`, `server`, `shared`)
    #[serde(default)]
    pub apiset: Option<String>,
    /// Historical names that still resolve to this native
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Older spelling of `aliases` used by earlier catalog revisions
    #[serde(default)]
    pub old_names: Vec<String>,
}

impl NativeDefinition {
    /// Declared return type, `void` when none is given.
    pub fn declared_result(&self) -> &str {
        match self.results.as_deref() {
            Some(result) if !result.trim().is_empty() => result,
            _ => VOID,
        }
    }

    /// Every historical name, `aliases` first, in catalog order.
    pub fn all_aliases(&self) -> Vec<&str> {
        self.aliases
            .iter()
            .chain(&self.old_names)
            .map(String::as_str)
            .collect()
    }
}

/// A parameter after type mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalParam {
    /// Parameter name as declared, not yet sanitized
    pub name: String,
    /// Canonical type
    pub canonical_type: &'static str,
}

/// Canonical signature consumed by the declaration assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalSignature {
    /// `PascalCase` function identifier
    pub identifier: String,
    /// Canonical return types, empty or `void` meaning no value
    pub return_types: Vec<&'static str>,
    /// Canonical parameters in call order
    pub parameters: Vec<CanonicalParam>,
}

impl CanonicalSignature {
    /// Maps every raw type of `return_types` and `params` exactly once.
    pub fn from_raw(identifier: String, return_types: &[String], params: &[NativeParam]) -> Self {
        let raw_returns = TypeShape::Sequence(return_types.iter().map(String::as_str).collect());
        let raw_params = TypeShape::Sequence(params.iter().map(|param| param.ty.as_str()).collect());

        let parameters = params
            .iter()
            .zip(map_type(&raw_params).into_vec())
            .map(|(param, canonical_type)| CanonicalParam {
                name: param.name.clone(),
                canonical_type,
            })
            .collect();

        Self {
            identifier,
            return_types: map_type(&raw_returns).into_vec(),
            parameters,
        }
    }
}
