//! Combinators, nested schemas and transform pipelines.
//!
//! ```bash
//! cargo run --example combinators
//! ```

use veld::validate::{self, Validator};

#[derive(Clone)]
struct Address {
    city: String,
}

#[derive(Clone)]
struct Order {
    reference: String,
    ship_to: Address,
}

fn main() {
    let address_schema = validate::schema::<Address>().field_as(
        "city",
        |a: Address| -> String { a.city },
        validate::string().min_len(2),
    );

    // A reference is either an ORD- code or a long free-form id.
    let order_schema = validate::schema::<Order>()
        .field_as(
            "reference",
            |o: Order| -> String { o.reference },
            validate::one_of(vec![
                Box::new(validate::string().pattern("^ORD-[0-9]+$")),
                Box::new(validate::string().min_len(12)),
            ]),
        )
        .field_as(
            "ship_to",
            |o: Order| -> Address { o.ship_to },
            validate::nested(address_schema),
        );

    let errors = order_schema.validate(&Order {
        reference: "nope".into(),
        ship_to: Address { city: "X".into() },
    });
    for err in errors.iter() {
        println!("{}: {} ({})", err.field, err.message, err.code);
    }

    // Transform pipeline: trim before the length check runs.
    let code = validate::string().min_len(3).trim();
    println!(
        "\" ok \" after trim: {:?}",
        code.validate(&" ok ".to_string()).map(|e| e.code)
    );
    println!(
        "\" okay \" after trim: {:?}",
        code.validate(&" okay ".to_string()).map(|e| e.code)
    );
}
