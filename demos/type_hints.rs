//! Column type hints and datetime rendering.
//!
//! Run with: cargo run --example type_hints

use chrono::{FixedOffset, TimeZone};
use js_tablewriter::{row, to_string, to_string_with_options, Table, TypeHint, WriterOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let jst = FixedOffset::east_opt(9 * 3600).ok_or("invalid offset")?;
    let released = jst
        .with_ymd_and_hms(2017, 1, 1, 0, 0, 0)
        .single()
        .ok_or("ambiguous datetime")?;

    // Without hints, "0042" is inferred as an integer and "true" stays a string.
    let table = Table::new("releases")
        .with_headers(["code", "version", "flag", "released", "stamp"])
        .with_type_hints([
            Some(TypeHint::String),
            Some(TypeHint::RealNumber),
            None,
            None,
            Some(TypeHint::DateTime),
        ])
        .with_rows(vec![
            row!["0042", 1, "true", released, "2017-06-30 12:00:00"],
            row!["0043", "2.5", true, null, 1500000000],
        ]);

    println!("Native dates:\n{}", to_string(&table)?);

    let options = WriterOptions::new().with_datetime_instance_formatting(false);
    println!("Quoted dates:\n{}", to_string_with_options(&table, options)?);

    Ok(())
}
