//! Generator configuration loaded from `natdoc.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assemble::{DEFAULT_APISET, DEFAULT_DOC_URL_PREFIX, DeclarationAssembler};
use crate::naming::{LUA_KEYWORDS, ReservedWords};
use crate::promote::{DEFAULT_NON_RETURN_POINTER_NATIVES, OutParamPromoter};
use crate::{Error, Result};

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "natdoc.toml";

/// Catalog of game natives.
pub const GAME_NATIVES_URL: &str = "https://runtime.fivem.net/doc/natives.json";
/// Catalog of platform (CFX) natives.
pub const CFX_NATIVES_URL: &str = "https://runtime.fivem.net/doc/natives_cfx.json";

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix the native hash is appended to in documentation links
    pub doc_url_prefix: String,
    /// API set assumed when a native declares none
    pub default_apiset: String,
    /// Identifiers whose pointer parameters are never promoted
    pub non_return_pointer_natives: Vec<String>,
    /// Parameter names that must be escaped
    pub reserved_words: Vec<String>,
    /// Directory receiving one `.lua` file per namespace
    pub output_dir: PathBuf,
    /// Catalog locations, file paths or HTTP URLs, merged in order
    pub sources: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            doc_url_prefix: DEFAULT_DOC_URL_PREFIX.to_owned(),
            default_apiset: DEFAULT_APISET.to_owned(),
            non_return_pointer_natives: DEFAULT_NON_RETURN_POINTER_NATIVES
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            reserved_words: LUA_KEYWORDS.iter().map(|word| (*word).to_owned()).collect(),
            output_dir: PathBuf::from("natives"),
            sources: vec![GAME_NATIVES_URL.to_owned(), CFX_NATIVES_URL.to_owned()],
        }
    }
}

impl GeneratorConfig {
    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or fails validation
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|error| {
            Error::Config(format!("Failed to read {}: {error}", path.display()))
        })?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;

        debug!(
            "Loaded config from {}: {} sources, {} pointer exclusions",
            path.display(),
            config.sources.len(),
            config.non_return_pointer_natives.len()
        );
        Ok(config)
    }

    /// Load an explicit config file, or `natdoc.toml` from `dir` when present.
    ///
    /// Falls back to defaults when no file is given and none exists.
    ///
    /// # Errors
    /// Returns an error if an explicit file is missing or any file is invalid
    pub fn load_or_default(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load_from_file(&candidate)
        } else {
            debug!("No {DEFAULT_CONFIG_FILE} in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Renders the configuration as commented TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        let contents = toml::to_string_pretty(self)?;
        let header = "# natdoc configuration\n\
                      # Remove a key to fall back to its default\n\n";
        Ok(format!("{header}{contents}"))
    }

    /// Checks values that would produce unusable output.
    ///
    /// # Errors
    /// Returns [`Error::Config`] describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.doc_url_prefix.trim().is_empty() {
            return Err(Error::Config("doc_url_prefix must not be empty".to_owned()));
        }
        if self.default_apiset.trim().is_empty() {
            return Err(Error::Config("default_apiset must not be empty".to_owned()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(Error::Config("output_dir must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Promoter using the configured exclusion list.
    pub fn promoter(&self) -> OutParamPromoter {
        OutParamPromoter::new(self.non_return_pointer_natives.iter().cloned())
    }

    /// Assembler using the configured link prefix, API set and reserved words.
    pub fn assembler(&self) -> DeclarationAssembler {
        DeclarationAssembler::new(self.doc_url_prefix.clone(), self.default_apiset.clone())
            .with_reserved_words(ReservedWords::new(self.reserved_words.iter().cloned()))
    }
}
