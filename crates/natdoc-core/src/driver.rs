//! Walks a catalog namespace by namespace and produces declaration blobs.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::alias::resolve_aliases;
use crate::assemble::{DeclarationAssembler, DeclarationParts};
use crate::catalog::{Catalog, parse_native};
use crate::config::GeneratorConfig;
use crate::naming::normalize_name;
use crate::promote::OutParamPromoter;
use crate::types::CanonicalSignature;
use crate::writer::NamespaceWriter;
use crate::{Error, Result};

/// A native that could not be turned into a declaration.
#[derive(Debug)]
pub struct SkippedNative {
    /// Namespace the native was listed under
    pub namespace: String,
    /// Catalog key of the native
    pub key: String,
    /// Why it was skipped
    pub error: Error,
}

/// A namespace whose output was not stored.
#[derive(Debug)]
pub struct NamespaceFailure {
    /// Namespace name
    pub namespace: String,
    /// Underlying cause
    pub error: Error,
}

/// Declarations of one namespace, ordered by identifier.
#[derive(Debug, Default)]
pub struct NamespaceOutput {
    /// Namespace name
    pub namespace: String,
    /// Identifier → declaration text, ordinal order
    pub declarations: BTreeMap<String, String>,
    /// Natives skipped while building this namespace
    pub skipped: Vec<SkippedNative>,
}

impl NamespaceOutput {
    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether no declaration was produced.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Concatenated declarations in identifier order.
    pub fn text(&self) -> String {
        self.declarations.values().map(String::as_str).collect()
    }
}

/// Per-namespace declaration count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSummary {
    /// Namespace name
    pub namespace: String,
    /// Declarations written
    pub count: usize,
}

/// Outcome of a full catalog run. Counts are informational.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Natives listed in the catalog
    pub total_natives: usize,
    /// Declarations written across all namespaces
    pub generated: usize,
    /// Namespaces written, in catalog order
    pub namespaces: Vec<NamespaceSummary>,
    /// Natives skipped because of data faults
    pub skipped: Vec<SkippedNative>,
    /// Namespaces that were malformed or could not be written
    pub failed_namespaces: Vec<NamespaceFailure>,
}

impl RunReport {
    /// Whether every namespace was written.
    pub fn is_success(&self) -> bool {
        self.failed_namespaces.is_empty()
    }
}

/// Runs normalization, promotion, alias resolution and assembly per native.
#[derive(Debug, Clone)]
pub struct CatalogDriver {
    promoter: OutParamPromoter,
    assembler: DeclarationAssembler,
}

impl CatalogDriver {
    /// Creates a driver from the generator configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            promoter: config.promoter(),
            assembler: config.assembler(),
        }
    }

    /// Creates a driver from already built components.
    pub fn with_components(promoter: OutParamPromoter, assembler: DeclarationAssembler) -> Self {
        Self {
            promoter,
            assembler,
        }
    }

    /// Turns one raw catalog record into `(identifier, declaration)`.
    ///
    /// # Errors
    /// Returns [`Error::MalformedNative`] for records of the wrong shape and
    /// [`Error::MissingIdentifier`] when neither a name nor a key is present
    pub fn process_native(
        &self,
        namespace: &str,
        key: &str,
        record: &Value,
    ) -> Result<(String, String)> {
        let native = parse_native(namespace, key, record)?;

        let declared = native.name.as_deref().filter(|name| !name.is_empty());
        let fallback = Some(key).filter(|candidate| !candidate.is_empty());
        let identifier =
            normalize_name(declared, fallback).ok_or_else(|| Error::MissingIdentifier {
                namespace: namespace.to_owned(),
                key: key.to_owned(),
            })?;

        let promotion = self.promoter.promote(&native, &identifier);
        let signature =
            CanonicalSignature::from_raw(identifier, &promotion.return_types, &promotion.params);
        let aliases = resolve_aliases(&signature.identifier, &native.all_aliases());

        let param_docs = self.assembler.param_docs(&signature);
        let signature_line = self.assembler.signature_line(&signature);
        let text = self.assembler.assemble(&DeclarationParts {
            namespace: native.namespace.as_deref().unwrap_or(namespace),
            apiset: native.apiset.as_deref(),
            hash: &native.hash,
            description: native.description.as_deref(),
            param_docs: &param_docs,
            return_types: &signature.return_types,
            signature: &signature_line,
            aliases: aliases.as_deref(),
        });

        Ok((signature.identifier, text))
    }

    /// Builds every declaration of one namespace.
    ///
    /// Faulty natives are skipped and recorded; a later native with the same
    /// identifier replaces the earlier declaration.
    ///
    /// # Errors
    /// Returns [`Error::MalformedCatalog`] if `entries` is not an object
    pub fn build_namespace(&self, namespace: &str, entries: &Value) -> Result<NamespaceOutput> {
        let Value::Object(natives) = entries else {
            return Err(Error::MalformedCatalog(format!(
                "namespace `{namespace}` is not an object"
            )));
        };

        let mut output = NamespaceOutput {
            namespace: namespace.to_owned(),
            ..NamespaceOutput::default()
        };

        for (key, record) in natives {
            match self.process_native(namespace, key, record) {
                Ok((identifier, text)) => {
                    if output.declarations.insert(identifier.clone(), text).is_some() {
                        debug!("{namespace}: `{identifier}` declared twice, keeping the last one");
                    }
                }
                Err(error) if error.is_per_native() => {
                    warn!("Skipping native: {error}");
                    output.skipped.push(SkippedNative {
                        namespace: namespace.to_owned(),
                        key: key.clone(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        Ok(output)
    }

    /// Builds and hands off every namespace of `catalog`, in catalog order.
    ///
    /// Malformed namespaces and write failures are recorded in the report and
    /// do not stop the remaining namespaces.
    ///
    /// # Errors
    /// Returns an error only if the writer cannot be prepared
    pub async fn run(&self, catalog: &Catalog, writer: &dyn NamespaceWriter) -> Result<RunReport> {
        let mut report = RunReport {
            total_natives: catalog.native_count(),
            ..RunReport::default()
        };
        info!(
            "Generating {} natives across {} namespaces",
            report.total_natives,
            catalog.len()
        );

        writer.prepare(&catalog.namespace_names()).await?;

        for (namespace, entries) in catalog.namespaces() {
            let mut output = match self.build_namespace(namespace, entries) {
                Ok(output) => output,
                Err(error) => {
                    warn!("{error}");
                    report.failed_namespaces.push(NamespaceFailure {
                        namespace: namespace.to_owned(),
                        error,
                    });
                    continue;
                }
            };
            report.skipped.append(&mut output.skipped);

            if let Err(source) = writer.write_namespace(namespace, &output.text()).await {
                let error = Error::namespace_write(namespace, source);
                warn!("{error}");
                report.failed_namespaces.push(NamespaceFailure {
                    namespace: namespace.to_owned(),
                    error,
                });
                continue;
            }

            report.generated += output.len();
            report.namespaces.push(NamespaceSummary {
                namespace: namespace.to_owned(),
                count: output.len(),
            });
            info!(
                "[{}/{}] {namespace}: {} natives",
                report.generated,
                report.total_natives,
                output.len()
            );
        }

        info!(
            "Generated {} declarations, {} natives skipped, {} namespaces failed",
            report.generated,
            report.skipped.len(),
            report.failed_namespaces.len()
        );
        Ok(report)
    }
}

impl Default for CatalogDriver {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}
