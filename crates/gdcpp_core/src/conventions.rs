//! Shared transpiler conventions (well-known identifiers).

/// Lifecycle method that receives deferred (`@onready`) initializers.
pub const READY_METHOD: &str = "_ready";

/// Synthesized static method that registers a class with `ClassDB`.
pub const BIND_METHODS: &str = "_bind_methods";

/// Methods whose name starts with this marker are not exposed to `ClassDB`.
pub const PRIVATE_PREFIX: &str = "_";

/// Built-in integer range constructor lowered to counted loops.
pub const RANGE_FUNCTION: &str = "range";

/// Suffix the resolver appends to enum-typed names (`Stateenum`, `Player.Stateenum`).
pub const ENUM_TYPE_SUFFIX: &str = "enum";

/// Suffix of typed arrays (`Node[]`).
pub const ARRAY_TYPE_SUFFIX: &str = "[]";

/// Dynamic "any" type; passes through translation untouched.
pub const VARIANT_TYPE_NAME: &str = "Variant";

/// Member types starting with this prefix denote signals, which have no storage.
pub const SIGNAL_TYPE_PREFIX: &str = "signal";

/// Script spelling of the receiver.
pub const SELF_NAME: &str = "self";

/// Native spelling of the receiver.
pub const THIS_NAME: &str = "this";

/// Scrutinee types the native `switch` statement accepts.
pub const SWITCHABLE_TYPES: &[&str] = &["int", "string", "String", "float"];

/// Parameter name of synthesized setters.
pub const SETTER_VALUE_NAME: &str = "value";

/// Name of the getter generated for a property.
pub fn getter_name(member: &str) -> String {
    format!("get_{member}")
}

/// Name of the setter generated for a property.
pub fn setter_name(member: &str) -> String {
    format!("set_{member}")
}

/// Whether a method is kept out of the binding table.
pub fn is_private_method(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}

/// Whether a recorded member type denotes a signal.
pub fn is_signal_type(ty: &str) -> bool {
    ty.starts_with(SIGNAL_TYPE_PREFIX)
}
