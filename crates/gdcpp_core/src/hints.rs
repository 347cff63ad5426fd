//! `@export` annotation vocabulary.
//!
//! Export annotations attached to a member become `ClassDB::add_property` calls; the annotation picks the
//! `PROPERTY_HINT_*` constant. Member-less export annotations (`@export_group`, ...) become grouping calls.

use crate::{NameMapping, lookup, map};

/// Prefix shared by every export annotation.
pub const EXPORT_PREFIX: &str = "export";

/// The plain `@export` annotation, which registers a property without a hint.
pub const PLAIN_EXPORT: &str = "export";

/// Annotation → `PROPERTY_HINT_*` constant.
pub const EXPORT_HINTS: &[NameMapping] = &[
    map("export_range", "PROPERTY_HINT_RANGE"),
    map("export_enum", "PROPERTY_HINT_ENUM"),
    map("export_enum_suggestion", "PROPERTY_HINT_ENUM_SUGGESTION"),
    map("export_exp_easing", "PROPERTY_HINT_EXP_EASING"),
    map("export_link", "PROPERTY_HINT_LINK"),
    map("export_flags", "PROPERTY_HINT_FLAGS"),
    map("export_layers_2d_render", "PROPERTY_HINT_LAYERS_2D_RENDER"),
    map("export_layers_2d_physics", "PROPERTY_HINT_LAYERS_2D_PHYSICS"),
    map("export_layers_2d_navigation", "PROPERTY_HINT_LAYERS_2D_NAVIGATION"),
    map("export_layers_3d_render", "PROPERTY_HINT_LAYERS_3D_RENDER"),
    map("export_layers_3d_physics", "PROPERTY_HINT_LAYERS_3D_PHYSICS"),
    map("export_layers_3d_navigation", "PROPERTY_HINT_LAYERS_3D_NAVIGATION"),
    map("export_layers_avoidance", "PROPERTY_HINT_LAYERS_AVOIDANCE"),
    map("export_file", "PROPERTY_HINT_FILE"),
    map("export_dir", "PROPERTY_HINT_DIR"),
    map("export_global_file", "PROPERTY_HINT_GLOBAL_FILE"),
    map("export_global_dir", "PROPERTY_HINT_GLOBAL_DIR"),
    map("export_resource_type", "PROPERTY_HINT_RESOURCE_TYPE"),
    map("export_multiline_text", "PROPERTY_HINT_MULTILINE_TEXT"),
    map("export_expression", "PROPERTY_HINT_EXPRESSION"),
    map("export_placeholder_text", "PROPERTY_HINT_PLACEHOLDER_TEXT"),
    map("export_color_no_alpha", "PROPERTY_HINT_COLOR_NO_ALPHA"),
    map("export_object_id", "PROPERTY_HINT_OBJECT_ID"),
    map("export_type_string", "PROPERTY_HINT_TYPE_STRING"),
    map("export_node_path_to_edited_node", "PROPERTY_HINT_NODE_PATH_TO_EDITED_NODE"),
    map("export_object_too_big", "PROPERTY_HINT_OBJECT_TOO_BIG"),
    map("export_node_path_valid_types", "PROPERTY_HINT_NODE_PATH_VALID_TYPES"),
    map("export_save_file", "PROPERTY_HINT_SAVE_FILE"),
    map("export_global_save_file", "PROPERTY_HINT_GLOBAL_SAVE_FILE"),
    map("export_int_is_objectid", "PROPERTY_HINT_INT_IS_OBJECTID"),
    map("export_int_is_pointer", "PROPERTY_HINT_INT_IS_POINTER"),
    map("export_array_type", "PROPERTY_HINT_ARRAY_TYPE"),
    map("export_locale_id", "PROPERTY_HINT_LOCALE_ID"),
    map("export_localizable_string", "PROPERTY_HINT_LOCALIZABLE_STRING"),
    map("export_node_type", "PROPERTY_HINT_NODE_TYPE"),
    map("export_hide_quaternion_edit", "PROPERTY_HINT_HIDE_QUATERNION_EDIT"),
    map("export_password", "PROPERTY_HINT_PASSWORD"),
];

/// Grouping annotations and the `ClassDB::add_property_*` suffix they map to.
pub const GROUP_ANNOTATIONS: &[NameMapping] = &[
    map("export_group", "group"),
    map("export_subgroup", "subgroup"),
    map("export_category", "category"),
];

/// Whether an annotation name belongs to the export family.
pub fn is_export_annotation(name: &str) -> bool {
    name.starts_with(EXPORT_PREFIX)
}

/// The property hint for an export annotation.
///
/// Returns `None` for the plain `@export`. Unknown export annotations fall back to their upper-cased spelling so the
/// generated registration still names the annotation that produced it.
pub fn property_hint(annotation: &str) -> Option<String> {
    if annotation == PLAIN_EXPORT {
        return None;
    }
    Some(lookup(EXPORT_HINTS, annotation).map_or_else(|| annotation.to_ascii_uppercase(), str::to_string))
}

/// The grouping kind (`group`, `subgroup`, `category`) of a member-less export annotation.
pub fn group_kind(annotation: &str) -> Option<&'static str> {
    lookup(GROUP_ANNOTATIONS, annotation)
}
