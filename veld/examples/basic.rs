//! Validate a struct against a handwritten schema and print the errors
//! as JSON.
//!
//! ```bash
//! cargo run --example basic
//! ```

use veld::validate;

#[derive(Clone)]
struct User {
    username: String,
    email: String,
    age: i64,
}

fn main() {
    let schema = validate::schema::<User>()
        .field_as(
            "username",
            |u: User| -> String { u.username },
            validate::string().min_len(3).max_len(32),
        )
        .field_as(
            "email",
            |u: User| -> String { u.email },
            validate::string().required().email(),
        )
        .field_as("age", |u: User| -> i64 { u.age }, validate::int().min(13));

    let valid = User {
        username: "johndoe".into(),
        email: "john@example.com".into(),
        age: 25,
    };
    println!("valid user: {} errors", schema.validate(&valid).len());

    let invalid = User {
        username: "jo".into(),
        email: "not-an-email".into(),
        age: 9,
    };
    let errors = schema.validate(&invalid);
    println!(
        "invalid user:\n{}",
        serde_json::to_string_pretty(&errors).expect("errors serialize")
    );
}
