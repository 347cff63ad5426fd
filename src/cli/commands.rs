//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{GeneratedFiles, Script, transpile_script};
use crate::config::TranspilerConfig;

use super::{CliError, CliResult, EmitTarget, ExitCode};

const HEADER_EXTENSION: &str = "hpp";
const SOURCE_EXTENSION: &str = "cpp";

/// Read and decode an event log.
pub fn load_script(path: &Path) -> CliResult<Script> {
    let json = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;
    Script::from_json(&json).map_err(|e| CliError::failure(format!("Error decoding {}: {}", path.display(), e)))
}

/// Output base path: `output` with any `.hpp`/`.cpp` extension removed, or the event log path without extension.
pub fn output_base(file: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        Some(output) => {
            let is_generated = output
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == HEADER_EXTENSION || ext == SOURCE_EXTENSION);
            if is_generated { output.with_extension("") } else { output.to_path_buf() }
        }
        None => file.with_extension(""),
    }
}

/// Script name used for the include guard and the source's own `#include`.
pub fn script_name(base: &Path) -> String {
    base.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_else(|| "script".to_string())
}

fn transpile(file: &Path, name: String, use_floats: bool) -> CliResult<GeneratedFiles> {
    let script = load_script(file)?;
    let config = TranspilerConfig::new(name).with_floats(use_floats);
    transpile_script(config, &script).map_err(|e| CliError::failure(format!("Error transpiling {}: {}", file.display(), e)))
}

/// Transpile an event log and write `<base>.hpp` / `<base>.cpp`.
pub fn build_file(file: &Path, output: Option<&Path>, use_floats: bool) -> CliResult<ExitCode> {
    let base = output_base(file, output);
    let files = transpile(file, script_name(&base), use_floats)?;

    if let Some(dir) = base.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| CliError::failure(format!("Error creating {}: {}", dir.display(), e)))?;
    }
    for (extension, text) in [(HEADER_EXTENSION, &files.header), (SOURCE_EXTENSION, &files.source)] {
        let path = base.with_extension(extension);
        fs::write(&path, text).map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "wrote");
    }
    Ok(ExitCode::SUCCESS)
}

/// Transpile an event log and print the requested files.
pub fn emit_file(file: &Path, target: EmitTarget, use_floats: bool) -> CliResult<ExitCode> {
    let files = transpile(file, script_name(&file.with_extension("")), use_floats)?;
    match target {
        EmitTarget::Header => print!("{}", files.header),
        EmitTarget::Source => print!("{}", files.source),
        EmitTarget::Both => print!("{}\n{}", files.header, files.source),
    }
    Ok(ExitCode::SUCCESS)
}
