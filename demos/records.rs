//! Tables from serializable records.
//!
//! Run with: cargo run --example records

use js_tablewriter::{to_writer, Table};
use serde::Serialize;
use std::error::Error;
use std::io;

#[derive(Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    stock: Option<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let products = vec![
        Product {
            sku: "A-100".to_string(),
            name: "Widget".to_string(),
            price: 9.99,
            stock: Some(120),
        },
        Product {
            sku: "A-101".to_string(),
            name: "Gadget \"Pro\"".to_string(),
            price: 24.0,
            stock: None,
        },
    ];

    let table = Table::from_records("Product Catalog", &products)?;
    println!("Headers: {:?}\n", table.headers());

    let stdout = io::stdout();
    to_writer(stdout.lock(), &table)?;

    Ok(())
}
