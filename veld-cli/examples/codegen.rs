//! End-to-end walkthrough: write a schema declaration to a scratch
//! directory, run generation over it, and print the generated module.
//!
//! ```bash
//! cargo run --example codegen
//! ```

use std::fs;

use tempfile::TempDir;
use veld_cli::{generate, GenConfig};

const DECLARATION: &str = r#"
use veld::validate::{self, Schema};

pub struct Ticket {
    pub code: String,
    pub seats: i64,
}

static TICKET_SCHEMA: Schema<Ticket> = validate::schema::<Ticket>()
    .field(|v: Ticket| -> String { v.code }, validate::string().min_len(4))
    .field(|v: Ticket| -> i64 { v.seats }, validate::int().positive());
"#;

fn main() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("ticket.rs");
    fs::write(&input, DECLARATION)?;

    println!("// input: ticket.rs\n{DECLARATION}");

    let config = GenConfig::new(input, None, Some("demo".to_string()), false);
    for path in generate(&config)? {
        println!(
            "// generated: {}\n{}",
            path.file_name().unwrap_or_default().to_string_lossy(),
            fs::read_to_string(&path)?
        );
    }
    Ok(())
}
