//! End of script: includes, file templates, normalization.

use gdcpp_core::naming::include_directive;

use super::{TranspileResult, Transpiler};
use crate::backend::lowering::prettify;

const HEADER_TEMPLATE: &str = "
#ifndef __GUARD__
#define __GUARD__

#include <godot_cpp/godot.hpp>
#include <godot_cpp/variant/array.hpp>
#include <godot_cpp/variant/dictionary.hpp>
__INCLUDES__

using namespace godot;

__IMPLEMENTATION__

#endif // __GUARD__
";

const SOURCE_TEMPLATE: &str = "
#include \"__HEADER__.hpp\"

#include <godot_cpp/core/object.hpp>
#include <godot_cpp/core/class_db.hpp>
#include <godot_cpp/variant/utility_functions.hpp>


";

/// The generated header/source pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub header: String,
    pub source: String,
}

impl Transpiler {
    /// Close the script and render both files.
    #[tracing::instrument(skip_all, fields(script = %self.config.script_name))]
    pub fn finish(mut self) -> TranspileResult<GeneratedFiles> {
        if let Some(name) = self.current.clone() {
            self.end_class(&name)?;
        }
        let unfinished: Vec<String> =
            self.classes.values().filter(|class| !class.is_finished()).map(|class| class.name.clone()).collect();
        for name in unfinished {
            tracing::warn!(class = %name, "class was never closed");
            self.end_class(&name)?;
        }

        self.layers.drain_into_root();
        while self.level > 0 {
            self.down_scope();
        }

        let includes = self.includes();
        let header = HEADER_TEMPLATE
            .replace("__GUARD__", &self.config.include_guard())
            .replace("__INCLUDES__", &includes)
            .replace("__IMPLEMENTATION__", self.header.as_str());
        let source = format!(
            "{}{}",
            SOURCE_TEMPLATE.replace("__HEADER__", &self.config.script_name),
            self.layers.root().as_str().replace("\n}", "\n}\n\n")
        );
        tracing::debug!(header_len = header.len(), source_len = source.len(), "rendered script");
        Ok(GeneratedFiles { header: prettify(&header), source: prettify(&source) })
    }

    /// One `#include` per class used through a handle or as a base, minus classes this script declares.
    fn includes(&self) -> String {
        let mut out: String = self
            .types
            .used_types()
            .iter()
            .filter(|ty| !self.classes.contains_key(ty.as_str()))
            .map(|ty| include_directive(ty))
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}
