//! Validators, composition combinators and the struct schema builder.

pub mod compose;
pub mod custom;
pub mod error;
pub mod int;
pub mod json;
pub mod nested;
pub mod schema;
pub mod string;
pub mod time;
pub mod transform;

pub use self::compose::{all_of, not, one_of, AllOf, Not, OneOf};
pub use self::custom::{custom, Custom};
pub use self::error::{Error, Errors};
pub use self::int::{int, IntValidator};
pub use self::json::{json, JsonValidator};
pub use self::nested::{nested, Nested};
pub use self::schema::{schema, Schema, Validator};
pub use self::string::{string, StringValidator};
pub use self::time::{time, TimeValidator};
pub use self::transform::{Parse, Transform};
