//! Library interface for natdoc-cli
//!
//! Exposes the catalog sources and the Lua file writer for integration testing
#![cfg_attr(
    test,
    allow(
        dead_code,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        reason = "Allow for tests"
    )
)]

/// Catalog sources and loading.
pub mod source;
/// Lua meta file writer.
pub mod writer;

pub use source::{CatalogSource, load_catalog};
pub use writer::{LuaFileWriter, META_HEADER};
