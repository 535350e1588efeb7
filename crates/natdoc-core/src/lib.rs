//! Signature normalization for native function catalogs.
//!
//! This crate turns the loosely typed native descriptions published by the
//! game platform into Lua declaration blocks: it maps raw types, normalizes
//! names, promotes pointer out-parameters to return values, resolves
//! deprecated aliases and lays everything out per namespace.
#![cfg_attr(
    test,
    allow(
        dead_code,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::print_stdout,
        clippy::print_stderr,
        reason = "Allow for tests"
    )
)]

/// Deprecated alias bindings.
pub mod alias;
/// Declaration block layout.
pub mod assemble;
/// In-memory catalog and record parsing.
pub mod catalog;
/// Generator configuration.
pub mod config;
/// Namespace-by-namespace catalog processing.
pub mod driver;
/// Error types and result definitions.
pub mod error;
/// Identifier and parameter name normalization.
pub mod naming;
/// Pointer out-parameter promotion.
pub mod promote;
/// Raw type token mapping.
pub mod type_map;
/// Catalog data model and canonical signatures.
pub mod types;
/// Output seam for finished namespaces.
pub mod writer;

pub use alias::resolve_aliases;
pub use assemble::{DeclarationAssembler, DeclarationParts};
pub use catalog::Catalog;
pub use config::GeneratorConfig;
pub use driver::{CatalogDriver, NamespaceOutput, RunReport};
pub use error::{Error, Result};
pub use naming::{ReservedWords, normalize_name};
pub use promote::{OutParamPromoter, Promotion};
pub use type_map::{TypeShape, map_type};
pub use types::{CanonicalSignature, NativeDefinition, NativeParam};
pub use writer::{MemoryWriter, NamespaceWriter};
