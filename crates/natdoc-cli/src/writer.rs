//! Writes one `<namespace>.lua` meta file per namespace.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use natdoc_core::{NamespaceWriter, Result};
use tokio::fs::{self as async_fs, OpenOptions};
use tokio::io::AsyncWriteExt as _;
use tracing::{debug, info};

/// Header marking a file as a definition-only Lua module.
pub const META_HEADER: &str = "---@meta\n\n";

/// Stores namespace declarations under a directory.
#[derive(Debug, Clone)]
pub struct LuaFileWriter {
    directory: PathBuf,
}

impl LuaFileWriter {
    /// Creates a writer targeting `directory`.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File receiving the declarations of `namespace`.
    pub fn file_path(&self, namespace: &str) -> PathBuf {
        self.directory.join(format!("{namespace}.lua"))
    }
}

#[async_trait]
impl NamespaceWriter for LuaFileWriter {
    async fn prepare(&self, namespaces: &[String]) -> Result<()> {
        async_fs::create_dir_all(&self.directory).await?;

        // Only the namespace files are touched; anything else in the directory stays.
        for namespace in namespaces {
            let path = self.file_path(namespace);
            if async_fs::try_exists(&path).await? {
                debug!("Truncating {}", path.display());
            }
            async_fs::write(&path, META_HEADER).await?;
        }
        info!(
            "Prepared {} namespace files in {}",
            namespaces.len(),
            self.directory.display()
        );
        Ok(())
    }

    async fn write_namespace(&self, namespace: &str, declarations: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.file_path(namespace))
            .await?;
        file.write_all(declarations.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
