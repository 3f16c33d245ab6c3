//! Schema extraction from parsed Rust source.
//!
//! The scanner walks a file's top-level `static` and `const` items and
//! recognizes initializers of the form
//!
//! ```text
//! validate::schema::<User>()
//!     .field(|v: User| -> String { v.username }, validate::string().min_len(3))
//! ```
//!
//! Recognition is purely syntactic. A declaration that does not match the
//! builder shape is silently skipped; a field call that does not match the
//! selector shape drops that field and keeps the rest. Extraction never
//! fails a generation run on its own.

use convert_case::{Case, Casing};
use quote::ToTokens;
use syn::{
    Attribute, Expr, ExprCall, ExprClosure, ExprMethodCall, File, GenericArgument, Item, Lit,
    Member, Meta, Pat, PathArguments, ReturnType, Stmt, Type, UnOp,
};

use crate::schema::{ValidationField, ValidationSchema, ValidatorCall};

/// Marker recorded when a selector carries no usable return type annotation.
pub const UNKNOWN_TYPE: &str = "_";

/// Doc comment phrase that names the validated type when the builder root
/// has no turbofish.
const DOC_MARKER: &str = "validation schema for";

/// Scan a parsed file for schema declarations, in source order.
pub fn scan_schemas(file: &File) -> Vec<ValidationSchema> {
    let mut schemas = Vec::new();
    for item in &file.items {
        let (ident, attrs, expr) = match item {
            Item::Static(item) => (&item.ident, &item.attrs, item.expr.as_ref()),
            Item::Const(item) => (&item.ident, &item.attrs, item.expr.as_ref()),
            _ => continue,
        };
        let Some(mut schema) = extract_schema(expr) else {
            continue;
        };
        if schema.type_name.is_empty() {
            schema.type_name = doc_comment_type_name(attrs)
                .unwrap_or_else(|| type_name_from_ident(&ident.to_string()));
        }
        if schema.type_name.is_empty() {
            continue;
        }
        schemas.push(schema);
    }
    schemas
}

/// Extract a schema from a candidate initializer expression.
///
/// Returns `None` when the expression is not a `validate::schema` builder
/// chain. The returned `type_name` is empty when the root call carries no
/// turbofish; the caller falls back to doc comment or item name.
pub fn extract_schema(expr: &Expr) -> Option<ValidationSchema> {
    let root = find_root_call(expr)?;
    let type_name = builder_type_name(root)?;

    // The walk visits the outermost (last-chained) call first; collect and
    // reverse once to restore declaration order.
    let mut fields = Vec::new();
    let mut current = expr;
    while let Expr::MethodCall(call) = current {
        if let Some(field) = extract_field(call) {
            fields.push(field);
        }
        current = &call.receiver;
    }
    fields.reverse();

    Some(ValidationSchema { type_name, fields })
}

/// Unwrap method-call receivers until the innermost callee remains.
fn find_root_call(expr: &Expr) -> Option<&ExprCall> {
    let mut current = expr;
    while let Expr::MethodCall(call) = current {
        current = &call.receiver;
    }
    match current {
        Expr::Call(call) => Some(call),
        _ => None,
    }
}

/// Match the builder root `validate::schema::<T>()`.
///
/// Returns the turbofish type name, an empty string when the turbofish is
/// absent, or `None` when the call is not the builder.
fn builder_type_name(call: &ExprCall) -> Option<String> {
    if !call.args.is_empty() {
        return None;
    }
    let Expr::Path(path) = call.func.as_ref() else {
        return None;
    };
    if path.qself.is_some() || path.path.segments.len() != 2 {
        return None;
    }
    let qualifier = &path.path.segments[0];
    let ctor = &path.path.segments[1];
    if qualifier.ident != "validate"
        || !matches!(qualifier.arguments, PathArguments::None)
        || ctor.ident != "schema"
    {
        return None;
    }
    match &ctor.arguments {
        PathArguments::None => Some(String::new()),
        PathArguments::AngleBracketed(args) => {
            if args.args.len() != 1 {
                return None;
            }
            match args.args.first() {
                Some(GenericArgument::Type(ty)) => simple_type_name(ty),
                _ => None,
            }
        }
        PathArguments::Parenthesized(_) => None,
    }
}

/// Extract one field rule from a chained method call.
///
/// `field` takes a selector and a validator; `field_as` takes an explicit
/// string-literal name first, as generated output does. Any other method
/// name, arity, or name argument is not a field rule.
fn extract_field(call: &ExprMethodCall) -> Option<ValidationField> {
    let (selector, validator) = match (call.method.to_string().as_str(), call.args.len()) {
        ("field", 2) => (&call.args[0], &call.args[1]),
        ("field_as", 3) => {
            if !is_str_literal(&call.args[0]) {
                return None;
            }
            (&call.args[1], &call.args[2])
        }
        _ => return None,
    };
    let Expr::Closure(closure) = selector else {
        return None;
    };
    let (name, ty) = selector_projection(closure)?;
    Some(ValidationField {
        name,
        ty,
        validators: extract_validator_calls(validator),
    })
}

/// Read the projected field name and declared type out of a selector.
///
/// The closure must take one parameter and project exactly one named field
/// off it, e.g. `|v: User| -> String { v.username }`. The declared type
/// falls back to [`UNKNOWN_TYPE`] when the return annotation is absent or
/// not a bare name.
fn selector_projection(closure: &ExprClosure) -> Option<(String, String)> {
    if closure.inputs.len() != 1 {
        return None;
    }
    let param = closure_param_name(closure.inputs.first()?)?;
    let projected = projected_member(&closure.body, &param)?;
    let ty = match &closure.output {
        ReturnType::Default => UNKNOWN_TYPE.to_string(),
        ReturnType::Type(_, ty) => {
            simple_type_name(ty).unwrap_or_else(|| UNKNOWN_TYPE.to_string())
        }
    };
    Some((projected, ty))
}

fn closure_param_name(pat: &Pat) -> Option<String> {
    match pat {
        Pat::Ident(ident) => Some(ident.ident.to_string()),
        Pat::Type(typed) => closure_param_name(&typed.pat),
        _ => None,
    }
}

/// Match a closure body that is exactly one field projection of `param`.
fn projected_member(body: &Expr, param: &str) -> Option<String> {
    let expr = match body {
        Expr::Block(block) => {
            if block.block.stmts.len() != 1 {
                return None;
            }
            match &block.block.stmts[0] {
                Stmt::Expr(Expr::Return(ret), _) => ret.expr.as_deref()?,
                Stmt::Expr(expr, _) => expr,
                _ => return None,
            }
        }
        expr => expr,
    };
    let Expr::Field(field) = expr else {
        return None;
    };
    let Expr::Path(base) = field.base.as_ref() else {
        return None;
    };
    if !base.path.is_ident(param) {
        return None;
    }
    match &field.member {
        Member::Named(ident) => Some(ident.to_string()),
        Member::Unnamed(_) => None,
    }
}

/// Walk a validator expression outer-to-inner, collecting its method calls.
///
/// The leading constructor (`validate::string()` and friends) is a path
/// call, not a method call, so the walk never records it; the emitter
/// rebuilds the constructor from the field's declared type.
pub fn extract_validator_calls(expr: &Expr) -> Vec<ValidatorCall> {
    let mut calls = Vec::new();
    let mut current = expr;
    while let Expr::MethodCall(call) = current {
        let args = call.args.iter().filter_map(argument_token).collect();
        calls.push(ValidatorCall {
            method: call.method.to_string(),
            args,
        });
        current = &call.receiver;
    }
    calls.reverse();
    calls
}

/// Render an argument as its source token when it is a literal, a negated
/// literal, or a bare identifier. Anything else (closures, nested calls) is
/// skipped; the call itself is still recorded.
fn argument_token(arg: &Expr) -> Option<String> {
    match arg {
        Expr::Lit(lit) => Some(literal_text(&lit.lit)),
        Expr::Path(path) => path.path.get_ident().map(|ident| ident.to_string()),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => match unary.expr.as_ref() {
            Expr::Lit(lit) => Some(format!("-{}", literal_text(&lit.lit))),
            _ => None,
        },
        _ => None,
    }
}

fn is_str_literal(expr: &Expr) -> bool {
    matches!(expr, Expr::Lit(lit) if matches!(lit.lit, Lit::Str(_)))
}

/// Source text of a literal, quotes and suffixes included.
fn literal_text(lit: &Lit) -> String {
    let tokens: proc_macro2::TokenStream = lit.to_token_stream();
    tokens.to_string()
}

/// The type's identifier when it is a bare single-segment path.
fn simple_type_name(ty: &Type) -> Option<String> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() || path.path.segments.len() != 1 {
        return None;
    }
    let segment = path.path.segments.first()?;
    if !matches!(segment.arguments, PathArguments::None) {
        return None;
    }
    Some(segment.ident.to_string())
}

/// Pull a type name out of a doc comment such as
/// `/// The validation schema for `User`.`
fn doc_comment_type_name(attrs: &[Attribute]) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        let Meta::NameValue(meta) = &attr.meta else {
            continue;
        };
        let Expr::Lit(lit) = &meta.value else {
            continue;
        };
        let Lit::Str(text) = &lit.lit else {
            continue;
        };
        let text = text.value();
        let Some(rest) = text.split(DOC_MARKER).nth(1) else {
            continue;
        };
        let name: String = rest
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '_')
            .to_string();
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

/// Derive a type name from the declaring item's identifier.
///
/// A trailing `_SCHEMA` or `Schema` suffix is stripped, then an all-caps or
/// underscored remainder is normalized to PascalCase: `USER_SCHEMA` becomes
/// `User`, `ORDER_ITEM_SCHEMA` becomes `OrderItem`, `AccountSchema` becomes
/// `Account`. An already-Pascal name passes through untouched.
fn type_name_from_ident(name: &str) -> String {
    let stripped = name
        .strip_suffix("_SCHEMA")
        .or_else(|| name.strip_suffix("Schema"))
        .unwrap_or(name);
    if stripped.is_empty() {
        return String::new();
    }
    if stripped.contains('_') || !stripped.chars().any(|c| c.is_lowercase()) {
        stripped.to_case(Case::Pascal)
    } else {
        stripped.to_string()
    }
}
