//! Basic table writing.
//!
//! Run with: cargo run --example simple

use js_tablewriter::{row, to_string, Table};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let table = Table::new("Sample")
        .with_headers(["id", "name", "score", "passed"])
        .with_rows(vec![
            row![1, "Alice", 91.5, true],
            row![2, "Bob", 78, false],
            row![3, "Carol", null, null],
        ]);

    let js = to_string(&table)?;
    println!("JavaScript output:\n{}", js);

    Ok(())
}
