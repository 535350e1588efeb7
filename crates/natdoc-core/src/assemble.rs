//! Formatting of one native into a Lua declaration block.

use crate::naming::ReservedWords;
use crate::type_map::VOID;
use crate::types::CanonicalSignature;

/// Documentation base URL the native hash is appended to.
pub const DEFAULT_DOC_URL_PREFIX: &str = "https://docs.fivem.net/natives/?_";
/// API set assumed for natives that do not declare one.
pub const DEFAULT_APISET: &str = "client";
/// Text used when the catalog has no description for a native.
pub const MISSING_DESCRIPTION: &str = "This native does not have an official description.";

/// Everything needed to lay out one declaration.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationParts<'parts> {
    /// Namespace shown in the header
    pub namespace: &'parts str,
    /// Declared API set, if any
    pub apiset: Option<&'parts str>,
    /// Native hash for the documentation link
    pub hash: &'parts str,
    /// Upstream free-text description
    pub description: Option<&'parts str>,
    /// `---@param` lines, newline terminated
    pub param_docs: &'parts str,
    /// Canonical return types
    pub return_types: &'parts [&'static str],
    /// `function ... end` line without trailing newline
    pub signature: &'parts str,
    /// Deprecated alias bindings
    pub aliases: Option<&'parts str>,
}

/// Lays out declaration blocks.
#[derive(Debug, Clone)]
pub struct DeclarationAssembler {
    doc_url_prefix: String,
    default_apiset: String,
    reserved: ReservedWords,
}

impl DeclarationAssembler {
    /// Creates an assembler with the given link prefix and fallback API set.
    pub fn new<P: Into<String>, A: Into<String>>(doc_url_prefix: P, default_apiset: A) -> Self {
        Self {
            doc_url_prefix: doc_url_prefix.into(),
            default_apiset: default_apiset.into(),
            reserved: ReservedWords::default(),
        }
    }

    /// Replaces the reserved parameter words.
    #[must_use]
    pub fn with_reserved_words(mut self, reserved: ReservedWords) -> Self {
        self.reserved = reserved;
        self
    }

    /// One `---@param` line per parameter.
    pub fn param_docs(&self, signature: &CanonicalSignature) -> String {
        signature
            .parameters
            .iter()
            .map(|param| {
                format!(
                    "---@param {} {}\n",
                    self.reserved.sanitize_param_name(&param.name),
                    param.canonical_type
                )
            })
            .collect()
    }

    /// The `function Name(a, b) end` line.
    pub fn signature_line(&self, signature: &CanonicalSignature) -> String {
        let params = signature
            .parameters
            .iter()
            .map(|param| self.reserved.sanitize_param_name(&param.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("function {}({params}) end", signature.identifier)
    }

    /// Assembles the full declaration text, trailing blank line included.
    pub fn assemble(&self, parts: &DeclarationParts<'_>) -> String {
        let mut out = String::new();
        let apiset = parts.apiset.unwrap_or(self.default_apiset.as_str());

        out.push_str(&format!("---**`{}` `{apiset}`**  \n", parts.namespace));
        out.push_str(&format!(
            "---[Native Documentation]({}{})  \n",
            self.doc_url_prefix, parts.hash
        ));

        match parts.description.filter(|text| !text.trim().is_empty()) {
            Some(text) => {
                for line in text.split('\n') {
                    out.push_str("---");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            None => {
                out.push_str("---");
                out.push_str(MISSING_DESCRIPTION);
                out.push('\n');
            }
        }

        out.push_str(parts.param_docs);
        if let Some(annotation) = return_annotation(parts.return_types) {
            out.push_str(&annotation);
            out.push('\n');
        }
        out.push_str(parts.signature);
        out.push('\n');
        if let Some(aliases) = parts.aliases {
            out.push_str(aliases);
        }
        out.push('\n');
        out
    }
}

impl Default for DeclarationAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_URL_PREFIX, DEFAULT_APISET)
    }
}

/// `---@return` line for the given types, `None` when nothing is returned.
///
/// Residual `void` entries are dropped before joining.
pub fn return_annotation(return_types: &[&str]) -> Option<String> {
    let values = return_types
        .iter()
        .copied()
        .filter(|ty| *ty != VOID)
        .collect::<Vec<_>>();
    (!values.is_empty()).then(|| format!("---@return {}", values.join(", ")))
}
