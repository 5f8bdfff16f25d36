//! clang front end invocation.

use cpp_inspector_core::FrontEndConfig;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Errors from driving the clang front end.
#[derive(Debug, Error)]
pub enum FrontEndError {
    /// The requested source file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),
    /// The compiler could not be started.
    #[error("failed to run {compiler}")]
    Spawn {
        /// Binary that failed to start.
        compiler: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Produces the textual AST dump for `path` via `clang -Xclang -ast-dump`.
///
/// A non-zero clang exit is not fatal: broken source still yields a partial
/// AST, and style checks do not require a fully compiling file. The captured
/// stdout is returned either way.
pub fn ast_dump(path: &Path, frontend: &FrontEndConfig) -> Result<String, FrontEndError> {
    if !path.is_file() {
        return Err(FrontEndError::FileNotFound(path.display().to_string()));
    }

    let output = Command::new(&frontend.compiler)
        .arg("-Xclang")
        .arg("-ast-dump")
        .arg("-fno-diagnostics-color")
        .args(&frontend.extra_args)
        .arg(path)
        .output()
        .map_err(|source| FrontEndError::Spawn {
            compiler: frontend.compiler.clone(),
            source,
        })?;

    if !output.status.success() {
        tracing::warn!(
            "{} exited with {} for {}; using partial dump",
            frontend.compiler,
            output.status,
            path.display()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
