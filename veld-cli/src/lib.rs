//! # veld-cli
//!
//! Code generator for the `veld` validation runtime. It reads a Rust
//! source file containing declarative schema-chain declarations, extracts
//! each chain syntactically, and emits one validator module per schema
//! with explicit field names baked in, so validating a value touches no
//! runtime reflection of any kind.
//!
//! ## Pipeline
//!
//! 1. [`extract::scan_schemas`] finds builder chains rooted at
//!    `validate::schema::<T>()` in top-level `static`/`const` items.
//! 2. [`emit::CodeEmitter`] renders each schema into
//!    `<out>/<lowercased type>_validator.rs`.
//!
//! The whole run is driven by [`generate`].

pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod schema;

pub use config::GenConfig;
pub use emit::CodeEmitter;
pub use error::{EmitError, GenError, GenResult};
pub use schema::{ValidationField, ValidationSchema, ValidatorCall};

use std::fs;
use std::path::PathBuf;

/// Run one generation pass over a single input file.
///
/// Parses the file, extracts every schema declaration and emits one
/// validator file per schema. Returns the paths written, in declaration
/// order. A file with no recognizable schema is an error; an emission
/// failure stops the run with files already written left in place.
pub fn generate(config: &GenConfig) -> GenResult<Vec<PathBuf>> {
    let content = fs::read_to_string(&config.input_file).map_err(|source| GenError::Io {
        file: config.input_file.clone(),
        source,
    })?;

    let file = syn::parse_file(&content).map_err(|err| GenError::Parse {
        file: config.input_file.clone(),
        message: err.to_string(),
    })?;

    if config.verbose {
        println!("parsed {}:", config.input_file.display());
        println!("{file:#?}");
    }

    let schemas = extract::scan_schemas(&file);
    if schemas.is_empty() {
        return Err(GenError::NoSchemaFound {
            file: config.input_file.clone(),
        });
    }

    let emitter = CodeEmitter::new(&config.out_dir, config.package.clone());
    let mut written = Vec::with_capacity(schemas.len());
    for schema in &schemas {
        written.push(emitter.emit(schema)?);
    }
    Ok(written)
}
