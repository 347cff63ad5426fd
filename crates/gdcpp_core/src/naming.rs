//! Include-path derivation for engine classes.

/// Directory of the generated godot-cpp class headers.
pub const CLASSES_INCLUDE_DIR: &str = "godot_cpp/classes";

/// Insert `_` before every inner capital and lowercase the result (`RigidBody3D` → `rigid_body3_d`).
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Header file name of an engine class; the `2D`/`3D` suffix tokens stay glued (`sprite2d`, not `sprite2_d`).
pub fn header_file_name(class_name: &str) -> String {
    format!("{}.hpp", to_snake_case(class_name).replace("2_d", "2d").replace("3_d", "3d"))
}

/// Full `#include` directive for an engine class.
pub fn include_directive(class_name: &str) -> String {
    format!("#include <{}/{}>", CLASSES_INCLUDE_DIR, header_file_name(class_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("Node"), "node");
        assert_eq!(to_snake_case("AnimationPlayer"), "animation_player");
    }

    #[test]
    fn test_dimension_suffixes_stay_glued() {
        assert_eq!(header_file_name("Sprite2D"), "sprite2d.hpp");
        assert_eq!(header_file_name("RigidBody3D"), "rigid_body3d.hpp");
        assert_eq!(header_file_name("CharacterBody2D"), "character_body2d.hpp");
    }

    #[test]
    fn test_include_directive() {
        assert_eq!(include_directive("Sprite2D"), "#include <godot_cpp/classes/sprite2d.hpp>");
    }
}
