//! Mapping from raw platform type tokens to canonical Lua types.

/// Canonical type for values of unknown shape.
pub const ANY: &str = "any";
/// Canonical type used when a native returns nothing.
pub const VOID: &str = "void";

/// Either a single type or an ordered sequence of types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape<T> {
    /// One type token.
    Scalar(T),
    /// Several type tokens, order significant.
    Sequence(Vec<T>),
}

impl<T> TypeShape<T> {
    /// Consumes the shape and returns its tokens in order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Scalar(token) => vec![token],
            Self::Sequence(tokens) => tokens,
        }
    }
}

/// Maps raw type tokens, element-wise for sequences.
///
/// Pointer and qualifier stripping is the caller's responsibility; this only
/// looks at the bare token, case-insensitively.
pub fn map_type(raw: &TypeShape<&str>) -> TypeShape<&'static str> {
    match raw {
        TypeShape::Scalar(token) => TypeShape::Scalar(map_token(token)),
        TypeShape::Sequence(tokens) => {
            TypeShape::Sequence(tokens.iter().map(|token| map_token(token)).collect())
        }
    }
}

/// Maps a single raw type token to its canonical type.
///
/// Unknown tokens degrade to [`ANY`]. The table is defined over raw tokens
/// only, so feeding a canonical type back in (other than the few that are
/// their own raw spelling) yields [`ANY`].
pub fn map_token(raw: &str) -> &'static str {
    match raw.to_ascii_lowercase().as_str() {
        "vector3" => "vector3",
        "string" | "char" => "string",
        "void" => VOID,
        "bool" => "boolean",
        "object" => "table",
        "func" => "function",
        "ped" | "vehicle" | "entity" | "float" | "long" | "uint" | "int" | "player" | "blip"
        | "cam" | "fireid" | "pickup" | "hash" | "object_1" | "decisionmaker" | "cargenerator"
        | "group" | "train" | "weapon" | "interior" | "texture" | "texturedict" | "coverpoint"
        | "camera" | "tasksequence" | "sphere" | "scrhandle" | "itemset" | "animscene"
        | "perschar" | "popzone" | "prompt" | "propset" | "volume" => "number",
        _ => ANY,
    }
}
