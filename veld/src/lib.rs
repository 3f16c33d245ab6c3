//! # veld
//!
//! Fluent, schema-based struct validation for Rust.
//!
//! A schema describes per-field rules for a struct using a builder chain.
//! Each field pairs a selector closure with a validator chain:
//!
//! ```
//! use veld::validate;
//!
//! #[derive(Clone)]
//! struct User {
//!     username: String,
//!     age: i64,
//! }
//!
//! let schema = validate::schema::<User>()
//!     .field_as("username", |u: User| -> String { u.username }, validate::string().min_len(3))
//!     .field_as("age", |u: User| -> i64 { u.age }, validate::int().min(13));
//!
//! let errs = schema.validate(&User { username: "jo".into(), age: 9 });
//! assert!(errs.has_errors());
//! assert_eq!(errs.get().len(), 2);
//! assert_eq!(errs.get()[0].field, "username");
//! ```
//!
//! The unnamed [`validate::Schema::field`] form is the handwritten schema DSL
//! consumed by `veld-cli`; the generator rewrites it into the `field_as` form
//! above so that error field names are attached without any runtime
//! introspection.
//!
//! Primitive validators cover strings, integers, timestamps and JSON values;
//! [`validate::one_of`], [`validate::all_of`] and [`validate::not`] compose
//! them, [`validate::nested`] delegates to another schema, and string
//! validators can open transform/parse pipelines (`trim`, `parse_int`, ...).

pub mod validate;
