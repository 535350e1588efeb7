//! Identifier normalization for native names and parameter names.

use std::borrow::Cow;
use std::collections::BTreeSet;

/// Lua keywords that cannot be used as parameter names.
pub const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Converts a raw native name into a `PascalCase` identifier.
///
/// The declared name wins over the catalog key. Returns `None` only when both
/// are absent; callers must treat that as a data error for the native.
pub fn normalize_name(declared: Option<&str>, fallback: Option<&str>) -> Option<String> {
    let raw = declared.or(fallback)?;
    let lowered = raw.to_lowercase().replacen("0x", "n_0x", 1);

    let mut camel = String::with_capacity(lowered.len());
    let mut chars = lowered.chars().peekable();
    while let Some(current) = chars.next() {
        match chars.peek() {
            Some(&next) if current == '_' && next.is_ascii_lowercase() => {
                camel.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => camel.push(current),
        }
    }

    if let Some(first) = camel.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    Some(camel)
}

/// Set of words that must be escaped when used as parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    words: BTreeSet<String>,
}

impl ReservedWords {
    /// Creates a reserved-word set from arbitrary words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is reserved.
    pub fn contains(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    /// Prefixes reserved parameter names with an underscore.
    ///
    /// Never apply this to function identifiers.
    pub fn sanitize_param_name<'name>(&self, name: &'name str) -> Cow<'name, str> {
        if self.contains(name) {
            Cow::Owned(format!("_{name}"))
        } else {
            Cow::Borrowed(name)
        }
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new(LUA_KEYWORDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_to_pascal_case() {
        assert_eq!(
            normalize_name(Some("GET_ENTITY_COORDS"), None).as_deref(),
            Some("GetEntityCoords")
        );
        assert_eq!(
            normalize_name(Some("_GET_PED_LAST_WEAPON"), None).as_deref(),
            Some("GetPedLastWeapon")
        );
    }

    #[test]
    fn test_hex_key_fallback() {
        assert_eq!(
            normalize_name(None, Some("0x9614299DCB53E54B")).as_deref(),
            Some("N_0x9614299dcb53e54b")
        );
        assert_eq!(
            normalize_name(Some("_0xA4D1C9D54EB45F48"), Some("0xA4D1C9D54EB45F48")).as_deref(),
            Some("N_0xa4d1c9d54eb45f48")
        );
    }

    #[test]
    fn test_declared_name_wins() {
        assert_eq!(
            normalize_name(Some("IS_PED_DEAD"), Some("0x1234")).as_deref(),
            Some("IsPedDead")
        );
    }

    #[test]
    fn test_missing_both_inputs() {
        assert!(normalize_name(None, None).is_none());
    }

    #[test]
    fn test_underscore_before_digit_is_kept() {
        assert_eq!(
            normalize_name(Some("SET_VEHICLE_MOD_2"), None).as_deref(),
            Some("SetVehicleMod_2")
        );
        assert_eq!(normalize_name(Some("A__B"), None).as_deref(), Some("A_B"));
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let first = normalize_name(Some("NETWORK_GET_ENTITY_FROM_NETWORK_ID"), None);
        let second = normalize_name(Some("NETWORK_GET_ENTITY_FROM_NETWORK_ID"), None);
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("NetworkGetEntityFromNetworkId"));
    }

    #[test]
    fn test_sanitize_reserved_params() {
        let reserved = ReservedWords::default();
        assert_eq!(reserved.sanitize_param_name("end"), "_end");
        assert_eq!(reserved.sanitize_param_name("repeat"), "_repeat");
        assert_eq!(reserved.sanitize_param_name("local"), "_local");
        assert_eq!(reserved.sanitize_param_name("entity"), "entity");
    }

    #[test]
    fn test_custom_reserved_words() {
        let reserved = ReservedWords::new(["self"]);
        assert_eq!(reserved.sanitize_param_name("self"), "_self");
        assert_eq!(reserved.sanitize_param_name("end"), "end");
    }
}
