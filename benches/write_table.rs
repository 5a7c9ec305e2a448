use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use js_tablewriter::{
    row, to_string, Classifier, JavaScriptTableWriter, RawValue, Table, TypeHint, WriterOptions,
};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
    discontinued: bool,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product \"{}\"", i),
            price: 9.99 + f64::from(i),
            quantity: i,
            discontinued: i % 7 == 0,
        })
        .collect()
}

fn product_table(size: u32) -> Table {
    Table::from_records("products", &products(size)).unwrap()
}

fn benchmark_write_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_table");

    for size in [10, 50, 100, 500].iter() {
        let table = product_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| to_string(black_box(table)))
        });
    }
    group.finish();
}

fn benchmark_from_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_records");

    for size in [10, 100, 500].iter() {
        let records = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| Table::from_records("products", black_box(records)))
        });
    }
    group.finish();
}

fn benchmark_string_inference(c: &mut Criterion) {
    let rows: Vec<Vec<RawValue>> = (0..100)
        .map(|i| row![i.to_string(), format!("{}.5", i), "inf", "plain text", "true"])
        .collect();
    let table = Table::new("inferred")
        .with_headers(["int", "float", "inf", "text", "bool"])
        .with_rows(rows);

    c.bench_function("string_inference", |b| b.iter(|| to_string(black_box(&table))));
}

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = Classifier::new();

    let integer = RawValue::from("12345");
    let float = RawValue::from("3.14159");
    let text = RawValue::from("not a number");
    let date = RawValue::from("2017-01-02 03:04:05");

    group.bench_function("integer_string", |b| {
        b.iter(|| classifier.classify(black_box(&integer), None))
    });
    group.bench_function("float_string", |b| {
        b.iter(|| classifier.classify(black_box(&float), None))
    });
    group.bench_function("plain_string", |b| {
        b.iter(|| classifier.classify(black_box(&text), None))
    });
    group.bench_function("datetime_hint", |b| {
        b.iter(|| classifier.classify(black_box(&date), Some(TypeHint::DateTime)))
    });

    group.finish();
}

fn benchmark_split_write(c: &mut Criterion) {
    let writer = JavaScriptTableWriter::javascript(WriterOptions::new());
    let table = Table::new("stream").with_headers(["n", "square"]);

    c.bench_function("write_table_iter_100_chunks", |b| {
        b.iter(|| {
            let chunks = (0..100i64).map(|n| vec![row![n, n * n]]);
            let mut out = Vec::with_capacity(4096);
            writer.write_table_iter(black_box(&table), chunks, &mut out).unwrap();
            out
        })
    });
}

criterion_group!(
    benches,
    benchmark_write_table,
    benchmark_from_records,
    benchmark_string_inference,
    benchmark_classify,
    benchmark_split_write
);
criterion_main!(benches);
