//! Customizing output with WriterOptions and formatter overrides.
//!
//! Run with: cargo run --example custom_options

use js_tablewriter::{row, JavaScriptTableWriter, Table, Tag, Value, WriterOptions};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let table = Table::new("measurements")
        .with_headers(["sensor", "reading", "count"])
        .with_rows(vec![
            row!["north", 12.5, 3],
            row!["south", f64::INFINITY, 9007199254740993i64],
            row!["east", f64::NAN, 0],
        ]);

    // Two-space indentation and `let`
    println!("Two-space indent, let:");
    let mut writer = JavaScriptTableWriter::javascript(WriterOptions::new().with_indent(2));
    writer.set_variable_declaration("let")?;
    println!("{}", writer.dumps(&table)?);

    // Integers beyond 2^53 as BigInt literals
    println!("BigInt integers:");
    let mut bigint = JavaScriptTableWriter::javascript(WriterOptions::new());
    bigint.register_formatter(Tag::Integer, |value| match value {
        Value::Integer(i) if i.unsigned_abs() > (1u64 << 53) => format!("{}n", i),
        other => other.to_plain_string(),
    });
    bigint.registry_mut().register_literal(Tag::NaN, "Number.NaN");
    println!("{}", bigint.dumps(&table)?);

    // Rows streamed in chunks
    println!("Split write:");
    let header_only = Table::new("stream").with_headers(["n", "square"]);
    let chunks = (1..=4i64).map(|n| vec![row![n, n * n]]);
    let stdout = io::stdout();
    writer.write_table_iter(&header_only, chunks, stdout.lock())?;

    // Without the closing row, more rows can be appended later
    println!("\nNo header, no closing row:");
    let open = WriterOptions::new().with_header(false).with_closing_row(false);
    let fragment = JavaScriptTableWriter::javascript(open).dumps(&table)?;
    print!("{}", fragment);

    Ok(())
}
