//! Promotion of pointer out-parameters to additional return values.
//!
//! Natives write results through pointer parameters. In Lua those values come
//! back as extra return values instead, so the pointer parameter disappears
//! from the call site and its pointee type is appended to the return list.

use std::collections::BTreeSet;

use tracing::trace;

use crate::type_map::VOID;
use crate::types::{NativeDefinition, NativeParam};

/// Substring marking the ambiguous entity-handle `Object` type.
const AMBIGUOUS_OBJECT: &str = "Object";
/// Token that replaces [`AMBIGUOUS_OBJECT`] so it is not read as a table.
const DISAMBIGUATED_OBJECT: &str = "object_1";

/// Natives that release or mutate a handle through its pointer.
pub const DEFAULT_NON_RETURN_POINTER_NATIVES: &[&str] = &[
    "DeleteEntity",
    "DeleteObject",
    "DeletePed",
    "DeleteVehicle",
    "DeleteMissionTrain",
    "DeleteRope",
    "DeleteCheckpoint",
    "SetEntityAsNoLongerNeeded",
    "SetPedAsNoLongerNeeded",
    "SetVehicleAsNoLongerNeeded",
    "SetObjectAsNoLongerNeeded",
    "RemoveBlip",
    "ClearSequenceTask",
];

/// Result of promoting a native's out-parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    /// Raw return types: primary result first, then promoted pointees
    pub return_types: Vec<String>,
    /// Parameters that remain call-site arguments, in call order
    pub params: Vec<NativeParam>,
}

/// Rewrites pointer parameters into return values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutParamPromoter {
    exclusions: BTreeSet<String>,
}

impl OutParamPromoter {
    /// Creates a promoter that never promotes for the given identifiers.
    pub fn new<I, S>(exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether pointer parameters of `identifier` stay as inputs.
    pub fn is_excluded(&self, identifier: &str) -> bool {
        self.exclusions.contains(identifier)
    }

    /// Computes the return types and remaining parameters of a native.
    ///
    /// `identifier` is the normalized function name, used for the exclusion
    /// check. The native itself is left untouched.
    pub fn promote(&self, native: &NativeDefinition, identifier: &str) -> Promotion {
        let result = disambiguate(native.declared_result());
        let declared = strip_pointer(&result).unwrap_or(result.as_str()).to_owned();
        let seeded_void = declared == VOID;
        let excluded = self.is_excluded(identifier);

        let mut return_types = vec![declared];
        let mut params = Vec::with_capacity(native.params.len());
        let mut promoted_any = false;

        for param in &native.params {
            let ty = disambiguate(&param.ty);
            let Some(pointee) = strip_pointer(&ty) else {
                params.push(NativeParam::new(param.name.clone(), ty));
                continue;
            };

            if excluded || pointee.eq_ignore_ascii_case("char") {
                params.push(NativeParam::new(param.name.clone(), pointee));
                continue;
            }

            if seeded_void && !promoted_any {
                return_types.clear();
            }
            trace!("{identifier}: promoting `{name}` as {pointee}", name = param.name);
            return_types.push(pointee.to_owned());
            promoted_any = true;
        }

        Promotion {
            return_types,
            params,
        }
    }
}

impl Default for OutParamPromoter {
    fn default() -> Self {
        Self::new(DEFAULT_NON_RETURN_POINTER_NATIVES.iter().copied())
    }
}

fn disambiguate(ty: &str) -> String {
    ty.replace(AMBIGUOUS_OBJECT, DISAMBIGUATED_OBJECT)
}

/// Strips one trailing `*` and a leading `const` qualifier.
///
/// Returns `None` for types that are not pointers.
fn strip_pointer(ty: &str) -> Option<&str> {
    let pointee = ty.strip_suffix('*')?.trim_end();
    let unqualified = pointee
        .strip_prefix("const")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map_or(pointee, str::trim_start);
    Some(unqualified)
}
