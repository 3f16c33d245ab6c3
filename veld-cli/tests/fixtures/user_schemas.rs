//! Schema declarations for the user models.

use veld::validate::{self, Schema};

pub struct User {
    pub username: String,
    pub email: String,
    pub age: i64,
}

pub struct Session {
    pub token: String,
    pub user_id: i64,
}

static USER_SCHEMA: Schema<User> = validate::schema::<User>()
    .field(
        |v: User| -> String { v.username },
        validate::string().min_len(3).max_len(32),
    )
    .field(
        |v: User| -> String { v.email },
        validate::string().required().email(),
    )
    .field(|v: User| -> i64 { v.age }, validate::int().min(0).max(150));

/// The validation schema for `Session`.
static SESSION_RULES: Schema<Session> = validate::schema()
    .field(
        |v: Session| -> String { v.token },
        validate::string().min_len(16),
    )
    .field(|v: Session| -> i64 { v.user_id }, validate::int().positive());
