use core::result::Result as CoreResult;
use std::io::Error as IoError;

use serde_json::Error as SerdeJsonError;
use thiserror::Error;
use toml::de::Error as TomlError;
use toml::ser::Error as TomlSerError;

/// Result type for generator operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur while turning a native catalog into declarations.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// TOML serialization failed.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] TomlSerError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A native has neither a declared name nor a catalog key.
    #[error("Native in namespace `{namespace}` has no name and no key")]
    MissingIdentifier {
        /// Namespace the native was listed under
        namespace: String,
        /// Catalog key of the native, empty when absent
        key: String,
    },

    /// A native record does not have the expected shape.
    #[error("Malformed native `{key}` in namespace `{namespace}`: {reason}")]
    MalformedNative {
        /// Namespace the native was listed under
        namespace: String,
        /// Catalog key of the native
        key: String,
        /// What was wrong with the record
        reason: String,
    },

    /// The catalog document itself does not have the expected shape.
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),

    /// The output collaborator failed to store a namespace.
    #[error("Failed to write namespace `{namespace}`: {source}")]
    NamespaceWrite {
        /// Namespace whose output could not be written
        namespace: String,
        /// Underlying cause reported by the writer
        #[source]
        source: Box<Self>,
    },
}

impl Error {
    /// Determines whether this error only affects a single native.
    ///
    /// Per-native faults are skipped and reported; they never abort a run.
    pub fn is_per_native(&self) -> bool {
        matches!(
            self,
            Self::MissingIdentifier { .. } | Self::MalformedNative { .. }
        )
    }

    /// Wraps a writer failure with the namespace it belongs to.
    #[must_use]
    pub fn namespace_write<T: Into<String>>(namespace: T, source: Self) -> Self {
        Self::NamespaceWrite {
            namespace: namespace.into(),
            source: Box::new(source),
        }
    }
}
