//! `Variant::Type` vocabulary.
//!
//! A script type is a *value type* when it matches one of the engine's variant type tags (`int`, `String`,
//! `Vector2`, `PackedStringArray`, ...). Every other named type is an engine or user class and is held through an
//! owning handle (`Ref<T>`) in generated code.

use crate::conventions::{ARRAY_TYPE_SUFFIX, ENUM_TYPE_SUFFIX};

/// Tag prefix shared by every entry in [`VARIANT_TYPES`].
pub const TYPE_TAG_PREFIX: &str = "TYPE_";

/// Reflection tag used for anything that is not a value type.
pub const OBJECT_TYPE_ENUM: &str = "Variant::OBJECT";

/// Every `Variant::Type` tag, in engine order (`TYPE_MAX` excluded).
pub const VARIANT_TYPES: &[&str] = &[
    "TYPE_NIL",
    "TYPE_BOOL",
    "TYPE_INT",
    "TYPE_FLOAT",
    "TYPE_STRING",
    "TYPE_VECTOR2",
    "TYPE_VECTOR2I",
    "TYPE_RECT2",
    "TYPE_RECT2I",
    "TYPE_VECTOR3",
    "TYPE_VECTOR3I",
    "TYPE_TRANSFORM2D",
    "TYPE_VECTOR4",
    "TYPE_VECTOR4I",
    "TYPE_PLANE",
    "TYPE_QUATERNION",
    "TYPE_AABB",
    "TYPE_BASIS",
    "TYPE_TRANSFORM3D",
    "TYPE_PROJECTION",
    "TYPE_COLOR",
    "TYPE_STRING_NAME",
    "TYPE_NODE_PATH",
    "TYPE_RID",
    "TYPE_OBJECT",
    "TYPE_CALLABLE",
    "TYPE_SIGNAL",
    "TYPE_DICTIONARY",
    "TYPE_ARRAY",
    "TYPE_PACKED_BYTE_ARRAY",
    "TYPE_PACKED_INT32_ARRAY",
    "TYPE_PACKED_INT64_ARRAY",
    "TYPE_PACKED_FLOAT32_ARRAY",
    "TYPE_PACKED_FLOAT64_ARRAY",
    "TYPE_PACKED_STRING_ARRAY",
    "TYPE_PACKED_VECTOR2_ARRAY",
    "TYPE_PACKED_VECTOR3_ARRAY",
    "TYPE_PACKED_COLOR_ARRAY",
    "TYPE_PACKED_VECTOR4_ARRAY",
];

/// Resolve the `Variant::Type` tag for a script type, if it is a value type.
///
/// Enum types bind as `int` and typed arrays (`T[]`) as `Array`. Matching ignores case and the underscores of the
/// tag, so `PackedStringArray` resolves to `TYPE_PACKED_STRING_ARRAY` and `string` to `TYPE_STRING`.
pub fn variant_type_constant(ty: &str) -> Option<&'static str> {
    let normalized = if ty.ends_with(ENUM_TYPE_SUFFIX) {
        "int"
    } else if ty.ends_with(ARRAY_TYPE_SUFFIX) {
        "Array"
    } else {
        ty
    };
    let wanted = normalized.to_ascii_uppercase();
    VARIANT_TYPES.iter().copied().find(|tag| {
        let bare = tag.strip_prefix(TYPE_TAG_PREFIX).unwrap_or(tag);
        bare.replace('_', "") == wanted
    })
}

/// Render the reflection enum used in binding calls (`Variant::INT`, `Variant::OBJECT`, ...).
pub fn variant_type_enum(ty: &str) -> String {
    match variant_type_constant(ty) {
        Some(tag) => format!("Variant::{}", tag.strip_prefix(TYPE_TAG_PREFIX).unwrap_or(tag)),
        None => OBJECT_TYPE_ENUM.to_string(),
    }
}

/// Whether values of this type are held through an owning handle rather than by value.
///
/// An absent or empty type is never a handle.
pub fn is_owning_handle(ty: Option<&str>) -> bool {
    match ty {
        Some(ty) if !ty.is_empty() => variant_type_constant(ty).is_none(),
        _ => false,
    }
}
