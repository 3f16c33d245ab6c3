//! In-memory description of one extracted validation schema.
//!
//! Built transiently per generation run and consumed once by the emitter;
//! nothing here is cached across files or runs.

/// A validation schema extracted from one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    /// Name of the struct under validation. Never empty in a kept schema.
    pub type_name: String,

    /// Fields in source declaration order.
    pub fields: Vec<ValidationField>,
}

/// One field rule inside a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationField {
    /// Struct field identifier, read from the selector closure.
    pub name: String,

    /// Declared type name as written, or `"_"` when the selector carried no
    /// simple named return type.
    pub ty: String,

    /// Validator chain in left-to-right source order.
    pub validators: Vec<ValidatorCall>,
}

/// One validator method call with its raw argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCall {
    /// Validator method name.
    pub method: String,

    /// Argument source tokens, unevaluated: literals verbatim (string quotes
    /// kept), identifiers by name.
    pub args: Vec<String>,
}
