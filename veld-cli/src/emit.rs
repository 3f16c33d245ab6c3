//! Generated-code rendering and file output.
//!
//! Output is plain string building, one file per schema. The generated file
//! compiles against the `veld` runtime crate and reconstructs the declared
//! chain with explicit field names, so validation needs no runtime
//! inspection of the struct.

use std::fs;
use std::path::PathBuf;

use convert_case::{Case, Casing};

use crate::error::EmitError;
use crate::extract::UNKNOWN_TYPE;
use crate::schema::{ValidationField, ValidationSchema};

/// Renders extracted schemas into Rust source files.
pub struct CodeEmitter {
    out_dir: PathBuf,
    package: String,
}

impl CodeEmitter {
    pub fn new(out_dir: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self {
            out_dir: out_dir.into(),
            package: package.into(),
        }
    }

    /// Write the generated validator for `schema`, returning its path.
    ///
    /// The output directory is created if absent; an existing file of the
    /// same name is overwritten.
    pub fn emit(&self, schema: &ValidationSchema) -> Result<PathBuf, EmitError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| EmitError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })?;
        let path = self.output_path(schema);
        fs::write(&path, self.render(schema)).map_err(|source| EmitError::WriteFile {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Path of the generated file: `<out>/<lowercased type name>_validator.rs`.
    pub fn output_path(&self, schema: &ValidationSchema) -> PathBuf {
        self.out_dir
            .join(format!("{}_validator.rs", schema.type_name.to_lowercase()))
    }

    /// Render the full source of one generated file.
    pub fn render(&self, schema: &ValidationSchema) -> String {
        let type_name = &schema.type_name;
        let snake = type_name.to_case(Case::Snake);
        let mut out = String::new();

        out.push_str("// Code generated by veld. DO NOT EDIT.\n\n");
        out.push_str(&format!(
            "//! Validator for [`{type_name}`] in `{}`.\n\n",
            self.package
        ));
        out.push_str("use veld::validate::{self, Schema};\n\n");
        out.push_str(&format!("use super::{type_name};\n\n"));

        out.push_str(&format!(
            "/// Validate a [`{type_name}`] against [`{snake}_schema`].\n"
        ));
        out.push_str(&format!(
            "pub fn validate_{snake}(value: &{type_name}) -> validate::Errors {{\n"
        ));
        out.push_str(&format!("    {snake}_schema().validate(value)\n"));
        out.push_str("}\n\n");

        out.push_str(&format!("/// Validation schema for [`{type_name}`].\n"));
        out.push_str(&format!(
            "pub fn {snake}_schema() -> Schema<{type_name}> {{\n"
        ));
        out.push_str(&format!("    validate::schema::<{type_name}>()\n"));
        for field in &schema.fields {
            out.push_str(&render_field(type_name, field));
        }
        out.push_str("}\n");
        out
    }
}

/// Render one `.field_as(...)` chain line.
fn render_field(type_name: &str, field: &ValidationField) -> String {
    let selector = if field.ty == UNKNOWN_TYPE {
        format!("|v: {type_name}| v.{}", field.name)
    } else {
        format!("|v: {type_name}| -> {} {{ v.{} }}", field.ty, field.name)
    };
    let mut validator = format!("validate::{}()", constructor_for_type(&field.ty));
    for call in &field.validators {
        validator.push_str(&format!(".{}({})", call.method, call.args.join(", ")));
    }
    format!(
        "        .field_as(\"{}\", {selector}, {validator})\n",
        field.name
    )
}

/// Constructor matching a declared field type. Unannotated and unrecognized
/// types fall back to the JSON validator, which accepts any serializable
/// value.
fn constructor_for_type(ty: &str) -> &'static str {
    match ty {
        "String" | "str" => "string",
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => "int",
        "DateTime" | "NaiveDateTime" | "SystemTime" => "time",
        _ => "json",
    }
}
