//! End-to-end tests for the generation pipeline.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use veld_cli::{extract, generate, EmitError, GenConfig, GenError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn gen_config(input: PathBuf, out: &TempDir) -> GenConfig {
    GenConfig::new(
        input,
        Some(out.path().to_path_buf()),
        Some("models".to_string()),
        false,
    )
}

#[test]
fn test_generates_one_file_per_schema() {
    let out = TempDir::new().unwrap();
    let written = generate(&gen_config(fixture("user_schemas.rs"), &out)).unwrap();

    assert_eq!(written.len(), 2);
    assert_eq!(written[0].file_name().unwrap(), "user_validator.rs");
    assert_eq!(written[1].file_name().unwrap(), "session_validator.rs");

    let source = fs::read_to_string(&written[0]).unwrap();
    assert!(source.starts_with("// Code generated by veld. DO NOT EDIT."));
    assert!(source.contains("`models`"));
    assert!(source.contains("use super::User;"));
    assert!(source.contains("pub fn validate_user(value: &User) -> validate::Errors"));
    assert!(source.contains("pub fn user_schema() -> Schema<User>"));
    assert!(source.contains(
        ".field_as(\"username\", |v: User| -> String { v.username }, \
         validate::string().min_len(3).max_len(32))"
    ));
    assert!(source.contains(
        ".field_as(\"age\", |v: User| -> i64 { v.age }, validate::int().min(0).max(150))"
    ));

    // The doc-comment fallback named the second schema's type.
    let source = fs::read_to_string(&written[1]).unwrap();
    assert!(source.contains("pub fn session_schema() -> Schema<Session>"));
}

#[test]
fn test_generated_output_is_parseable_rust() {
    let out = TempDir::new().unwrap();
    let written = generate(&gen_config(fixture("user_schemas.rs"), &out)).unwrap();
    for path in &written {
        let source = fs::read_to_string(path).unwrap();
        syn::parse_file(&source).expect("generated file should parse");
    }
}

#[test]
fn test_generated_chain_extracts_back_to_same_schema() {
    let out = TempDir::new().unwrap();
    let input = fixture("user_schemas.rs");
    let written = generate(&gen_config(input.clone(), &out)).unwrap();

    let original = syn::parse_file(&fs::read_to_string(&input).unwrap()).unwrap();
    let expected = extract::scan_schemas(&original);

    for (path, expected) in written.iter().zip(&expected) {
        let generated = syn::parse_file(&fs::read_to_string(path).unwrap()).unwrap();
        let chain = schema_fn_body(&generated).expect("generated file has a schema fn");
        let roundtripped = extract::extract_schema(chain).expect("chain should extract");
        assert_eq!(&roundtripped, expected);
    }
}

/// Tail expression of the generated `*_schema` function.
fn schema_fn_body(file: &syn::File) -> Option<&syn::Expr> {
    for item in &file.items {
        if let syn::Item::Fn(func) = item {
            if func.sig.ident.to_string().ends_with("_schema") {
                if let Some(syn::Stmt::Expr(expr, None)) = func.block.stmts.last() {
                    return Some(expr);
                }
            }
        }
    }
    None
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let out = TempDir::new().unwrap();
    let config = gen_config(fixture("user_schemas.rs"), &out);
    let first = generate(&config).unwrap();
    let snapshot: Vec<String> = first
        .iter()
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();

    let second = generate(&config).unwrap();
    assert_eq!(first, second);
    for (path, before) in second.iter().zip(&snapshot) {
        assert_eq!(&fs::read_to_string(path).unwrap(), before);
    }
}

#[test]
fn test_no_schemas_is_an_error_and_writes_nothing() {
    let parent = TempDir::new().unwrap();
    let out = parent.path().join("gen");
    let config = GenConfig::new(fixture("no_schemas.rs"), Some(out.clone()), None, false);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenError::NoSchemaFound { .. }));
    // Scanning failed before emission, so the output dir was never created.
    assert!(!out.exists());
}

#[test]
fn test_missing_input_file() {
    let out = TempDir::new().unwrap();
    let err = generate(&gen_config(fixture("does_not_exist.rs"), &out)).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }));
}

#[test]
fn test_unparseable_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.rs");
    fs::write(&input, "static BROKEN: = validate::schema::<").unwrap();

    let err = generate(&gen_config(input, &dir)).unwrap_err();
    assert!(matches!(err, GenError::Parse { .. }));
}

#[test]
fn test_filename_lowercases_multi_word_type() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("order.rs");
    fs::write(
        &input,
        "static ORDER_ITEM_SCHEMA: Schema<OrderItem> = validate::schema()\n\
             .field(|v: OrderItem| -> String { v.sku }, validate::string().min_len(1));\n",
    )
    .unwrap();

    let written = generate(&gen_config(input, &dir)).unwrap();
    assert_eq!(written[0].file_name().unwrap(), "orderitem_validator.rs");
    let source = fs::read_to_string(&written[0]).unwrap();
    assert!(source.contains("pub fn order_item_schema() -> Schema<OrderItem>"));
}

#[test]
fn test_default_out_dir_is_input_dir() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ticket.rs");
    fs::write(
        &input,
        "static TICKET_SCHEMA: Schema<Ticket> = validate::schema::<Ticket>()\n\
             .field(|v: Ticket| -> String { v.code }, validate::string());\n",
    )
    .unwrap();

    let config = GenConfig::new(input, None, None, false);
    let written = generate(&config).unwrap();
    assert_eq!(written[0], dir.path().join("ticket_validator.rs"));
    assert!(written[0].exists());
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ticket.rs");
    fs::write(
        &input,
        "static TICKET_SCHEMA: Schema<Ticket> = validate::schema::<Ticket>()\n\
             .field(|v: Ticket| -> String { v.code }, validate::string());\n",
    )
    .unwrap();
    let stale = dir.path().join("ticket_validator.rs");
    fs::write(&stale, "// stale content\n").unwrap();

    generate(&GenConfig::new(input, None, None, false)).unwrap();
    let source = fs::read_to_string(&stale).unwrap();
    assert!(!source.contains("stale content"));
    assert!(source.starts_with("// Code generated by veld."));
}

#[test]
fn test_emit_failure_aborts_remaining_schemas() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("models.rs");
    fs::write(
        &input,
        "static ALPHA_SCHEMA: Schema<Alpha> = validate::schema::<Alpha>()\n\
             .field(|v: Alpha| -> String { v.name }, validate::string().min_len(1));\n\
         static BETA_SCHEMA: Schema<Beta> = validate::schema::<Beta>()\n\
             .field(|v: Beta| -> String { v.name }, validate::string().min_len(1));\n\
         static GAMMA_SCHEMA: Schema<Gamma> = validate::schema::<Gamma>()\n\
             .field(|v: Gamma| -> String { v.name }, validate::string().min_len(1));\n",
    )
    .unwrap();
    // A directory squatting on the second output path makes its write fail.
    fs::create_dir(dir.path().join("beta_validator.rs")).unwrap();

    let err = generate(&GenConfig::new(input, None, None, false)).unwrap_err();
    assert!(matches!(err, GenError::Emit(EmitError::WriteFile { .. })));

    // The first schema was written before the failure and stays in place;
    // the schema after the failing one was never emitted.
    let alpha = dir.path().join("alpha_validator.rs");
    assert!(alpha.exists());
    assert!(fs::read_to_string(&alpha)
        .unwrap()
        .contains("pub fn alpha_schema()"));
    assert!(!dir.path().join("gamma_validator.rs").exists());
}

#[test]
fn test_occupied_out_dir_path_fails_before_any_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("occupied");
    fs::write(&out, "a file, not a directory").unwrap();

    let config = GenConfig::new(fixture("user_schemas.rs"), Some(out.clone()), None, false);
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, GenError::Emit(EmitError::CreateDir { .. })));
    assert!(out.is_file());
}

#[test]
fn test_emitted_chain_matches_runtime_behavior() {
    use veld::validate;

    // The shape the emitter writes, built directly against the runtime.
    #[derive(Clone)]
    struct User {
        username: String,
        age: i64,
    }

    let schema = validate::schema::<User>()
        .field_as(
            "username",
            |v: User| -> String { v.username },
            validate::string().min_len(3),
        )
        .field_as("age", |v: User| -> i64 { v.age }, validate::int().min(0));

    let errors = schema.validate(&User {
        username: "ab".to_string(),
        age: -1,
    });
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["username", "age"]);

    let ok = schema.validate(&User {
        username: "abc".to_string(),
        age: 30,
    });
    assert!(!ok.has_errors());
}
