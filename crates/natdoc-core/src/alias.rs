//! Deprecated alias bindings for renamed natives.

use std::collections::BTreeSet;

use tracing::debug;

use crate::naming::normalize_name;

/// Builds the block of `---@deprecated` bindings for a native.
///
/// Aliases that look like raw hashes (leading `0`), that normalize to the
/// canonical identifier, or that repeat an earlier alias are skipped. Returns
/// `None` when nothing is left to emit.
pub fn resolve_aliases(canonical: &str, raw_aliases: &[&str]) -> Option<String> {
    let mut seen = BTreeSet::new();
    let mut block = String::new();

    for &raw in raw_aliases {
        if raw.starts_with('0') {
            continue;
        }
        let Some(alias) = normalize_name(Some(raw), None) else {
            continue;
        };
        if alias == canonical || !seen.insert(alias.clone()) {
            debug!("{canonical}: dropping no-op alias `{raw}`");
            continue;
        }
        block.push_str(&format!("\n---@deprecated\n{alias} = {canonical}\n"));
    }

    (!block.is_empty()).then_some(block)
}
