//! Global functions and constants with a godot-cpp equivalent.
//!
//! Calls to global script functions are rewritten through [`FUNCTION_REPLACEMENTS`]; bare identifiers through
//! [`VARIABLE_REPLACEMENTS`]. Names without an entry are emitted unchanged.

use crate::{NameMapping, lookup, map};

/// Global constants and the receiver.
pub const VARIABLE_REPLACEMENTS: &[NameMapping] = &[
    map("self", "this"),
    map("PI", "Math_PI"),
    map("TAU", "Math_TAU"),
    map("INF", "Math_INF"),
    map("NAN", "Math_NAN"),
];

/// Global functions.
pub const FUNCTION_REPLACEMENTS: &[NameMapping] = &[
    map("preload", "/* preload has no equivalent, add a 'ResourcePreloader' Node in your scene */"),
    map("weakref", "UtilityFunctions::weakref"),
    map("instance_from_id", "UtilityFunctions::instance_from_id"),
    map("is_instance_id_valid", "UtilityFunctions::is_instance_id_valid"),
    map("is_instance_valid", "UtilityFunctions::is_instance_valid"),
    map("abs", "Math::abs"),
    map("absf", "Math::abs"),
    map("absi", "Math::abs"),
    map("acos", "Math::acos"),
    map("acosh", "Math::acosh"),
    map("angle_difference", "Math::angle_difference"),
    map("asin", "Math::asin"),
    map("asinh", "Math::asinh"),
    map("atan", "Math::atan"),
    map("atan2", "Math::atan2"),
    map("atanh", "Math::atanh"),
    map("bezier_derivative", "Math::bezier_derivative"),
    map("bezier_interpolate", "Math::bezier_interpolate"),
    map("bytes_to_var", "UtilityFunctions::bytes_to_var"),
    map("bytes_to_var_with_objects", "UtilityFunctions::bytes_to_var_with_objects"),
    map("ceil", "Math::ceil"),
    map("ceilf", "Math::ceil"),
    map("ceili", "Math::ceil_to_int"),
    map("clamp", "Math::clamp"),
    map("clampf", "Math::clamp"),
    map("clampi", "Math::clamp"),
    map("cos", "Math::cos"),
    map("cosh", "Math::cosh"),
    map("cubic_interpolate", "Math::cubic_interpolate"),
    map("cubic_interpolate_angle", "Math::cubic_interpolate_angle"),
    map("cubic_interpolate_angle_in_time", "Math::cubic_interpolate_angle_in_time"),
    map("cubic_interpolate_in_time", "Math::cubic_interpolate_in_time"),
    map("db_to_linear", "Math::db_to_linear"),
    map("deg_to_rad", "Math::deg_to_rad"),
    map("ease", "Math::ease"),
    map("error_string", "UtilityFunctions::error_string"),
    map("exp", "Math::exp"),
    map("floor", "Math::floor"),
    map("floorf", "Math::floor"),
    map("floori", "Math::floor_to_int"),
    map("fmod", "Math::fmod"),
    map("fposmod", "Math::fposmod"),
    map("hash", "UtilityFunctions::hash"),
    map("inverse_lerp", "Math::inverse_lerp"),
    map("is_equal_approx", "Math::is_equal_approx"),
    map("is_finite", "Math::is_finite"),
    map("is_inf", "Math::is_inf"),
    map("is_nan", "Math::is_nan"),
    map("is_same", "UtilityFunctions::is_same"),
    map("is_zero_approx", "Math::is_zero_approx"),
    map("lerp", "Math::lerp"),
    map("lerp_angle", "Math::lerp_angle"),
    map("lerpf", "Math::lerp"),
    map("linear_to_db", "Math::linear_to_db"),
    map("log", "Math::log"),
    map("max", "Math::max"),
    map("maxf", "Math::max"),
    map("maxi", "Math::max"),
    map("min", "Math::min"),
    map("minf", "Math::min"),
    map("mini", "Math::min"),
    map("move_toward", "Math::move_toward"),
    map("nearest_po2", "Math::nearest_po2"),
    map("pingpong", "Math::pingpong"),
    map("posmod", "Math::posmod"),
    map("pow", "Math::pow"),
    map("print", "UtilityFunctions::print"),
    map("print_rich", "UtilityFunctions::print_rich"),
    map("printerr", "UtilityFunctions::printerr"),
    map("printraw", "UtilityFunctions::printraw"),
    map("prints", "UtilityFunctions::prints"),
    map("printt", "UtilityFunctions::printt"),
    map("push_error", "UtilityFunctions::push_error"),
    map("push_warning", "UtilityFunctions::push_warning"),
    map("rad_to_deg", "Math::rad_to_deg"),
    map("rand_from_seed", "UtilityFunctions::rand_from_seed"),
    map("randf", "UtilityFunctions::randf"),
    map("randf_range", "UtilityFunctions::randf_range"),
    map("randfn", "UtilityFunctions::randfn"),
    map("randi", "UtilityFunctions::randi"),
    map("randi_range", "UtilityFunctions::randi_range"),
    map("randomize", "UtilityFunctions::randomize"),
    map("remap", "Math::remap"),
    map("rotate_toward", "Math::rotate_toward"),
    map("round", "Math::round"),
    map("roundf", "Math::round"),
    map("roundi", "Math::round_to_int"),
    map("seed", "UtilityFunctions::seed"),
    map("sign", "Math::sign"),
    map("signf", "Math::sign"),
    map("signi", "Math::sign"),
    map("sin", "Math::sin"),
    map("sinh", "Math::sinh"),
    map("smoothstep", "Math::smoothstep"),
    map("snapped", "Math::snapped"),
    map("snappedf", "Math::snapped"),
    map("snappedi", "Math::snapped"),
    map("sqrt", "Math::sqrt"),
    map("step_decimals", "Math::step_decimals"),
    map("str_to_var", "UtilityFunctions::str_to_var"),
    map("tan", "Math::tan"),
    map("tanh", "Math::tanh"),
    map("type_convert", "UtilityFunctions::type_convert"),
    map("type_string", "UtilityFunctions::type_string"),
    map("typeof", "UtilityFunctions::type_of"),
    map("var_to_bytes", "UtilityFunctions::var_to_bytes"),
    map("var_to_bytes_with_objects", "UtilityFunctions::var_to_bytes_with_objects"),
    map("var_to_str", "UtilityFunctions::var_to_str"),
    map("wrap", "Math::wrap"),
    map("wrapf", "Math::wrapf"),
    map("wrapi", "Math::wrapi"),
];

/// Native spelling of a global function, if it has one.
pub fn function_replacement(name: &str) -> Option<&'static str> {
    lookup(FUNCTION_REPLACEMENTS, name)
}

/// Native spelling of a global identifier, if it has one.
pub fn variable_replacement(name: &str) -> Option<&'static str> {
    lookup(VARIABLE_REPLACEMENTS, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_maps_to_utility_functions() {
        assert_eq!(function_replacement("print"), Some("UtilityFunctions::print"));
    }

    #[test]
    fn test_unknown_function_is_unmapped() {
        assert_eq!(function_replacement("my_helper"), None);
    }

    #[test]
    fn test_self_becomes_this() {
        assert_eq!(variable_replacement("self"), Some("this"));
        assert_eq!(variable_replacement("PI"), Some("Math_PI"));
        assert_eq!(variable_replacement("speed"), None);
    }
}
