use chrono::NaiveDate;
use js_tablewriter::{row, to_string, RawValue, Table};

#[test]
fn test_row_macro_empty() {
    let cells = row![];
    assert!(cells.is_empty());
}

#[test]
fn test_row_macro_scalars() {
    let cells = row![42, -7, 3.5, true, "text", 'c'];
    assert_eq!(
        cells,
        vec![
            RawValue::Integer(42),
            RawValue::Integer(-7),
            RawValue::Float(3.5),
            RawValue::Bool(true),
            RawValue::String("text".to_string()),
            RawValue::String("c".to_string()),
        ]
    );
}

#[test]
fn test_row_macro_null_anywhere() {
    assert_eq!(row![null], vec![RawValue::Null]);
    assert_eq!(
        row![null, 1, null],
        vec![RawValue::Null, RawValue::Integer(1), RawValue::Null]
    );
}

#[test]
fn test_row_macro_trailing_comma() {
    assert_eq!(row![1, 2,], vec![RawValue::Integer(1), RawValue::Integer(2)]);
}

#[test]
fn test_row_macro_expressions_and_options() {
    let name = String::from("Ada");
    let missing: Option<i32> = None;
    let present = Some(5);
    let cells = row![name.clone(), 2 * 21, missing, present];
    assert_eq!(
        cells,
        vec![
            RawValue::String("Ada".to_string()),
            RawValue::Integer(42),
            RawValue::Null,
            RawValue::Integer(5),
        ]
    );
}

#[test]
fn test_row_macro_datetime_and_lists() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let cells = row![date, vec![1, 2]];
    assert_eq!(cells[0], RawValue::NaiveDateTime(date));
    assert_eq!(
        cells[1],
        RawValue::List(vec![RawValue::Integer(1), RawValue::Integer(2)])
    );
}

#[test]
fn test_row_macro_in_table() {
    let table = Table::new("macro")
        .with_headers(["a", "b"])
        .with_rows(vec![row![1, null], row!["x", 2.5]]);
    assert_eq!(
        to_string(&table).unwrap(),
        "const macro = [\n    [\"a\", \"b\"],\n    [1, null],\n    [\"x\", 2.5]\n];\n"
    );
}
