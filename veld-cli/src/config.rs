//! Generation settings.

use std::path::{Path, PathBuf};

/// Resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// File containing the schema declarations.
    pub input_file: PathBuf,

    /// Directory the generated files are written to.
    pub out_dir: PathBuf,

    /// Package name recorded in generated file headers.
    pub package: String,

    /// Dump the parsed syntax tree to stdout.
    pub verbose: bool,
}

impl GenConfig {
    /// Resolve defaults: the output directory falls back to the input
    /// file's directory, the package name to that directory's base name.
    pub fn new(
        input_file: PathBuf,
        out_dir: Option<PathBuf>,
        package: Option<String>,
        verbose: bool,
    ) -> Self {
        let input_dir = parent_dir(&input_file);
        let out_dir = out_dir.unwrap_or_else(|| input_dir.clone());
        let package = package.unwrap_or_else(|| {
            input_dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "generated".to_string())
        });
        Self {
            input_file,
            out_dir,
            package,
            verbose,
        }
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
