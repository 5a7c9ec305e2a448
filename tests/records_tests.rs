use js_tablewriter::{to_raw_value, to_string, Error, RawValue, Table};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Employee {
    name: String,
    age: u32,
    salary: f64,
    manager: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Status {
    Active,
    Retired,
}

#[derive(Serialize)]
struct Member {
    id: u64,
    status: Status,
}

#[test]
fn test_struct_records() {
    let employees = vec![
        Employee {
            name: "Alice".to_string(),
            age: 30,
            salary: 5200.5,
            manager: None,
        },
        Employee {
            name: "Bob".to_string(),
            age: 41,
            salary: 7000.0,
            manager: Some("Alice".to_string()),
        },
    ];

    let table = Table::from_records("Staff", &employees).unwrap();
    assert_eq!(table.headers(), vec!["name", "age", "salary", "manager"]);

    let js = to_string(&table).unwrap();
    println!("JavaScript:\n{}", js);
    assert_eq!(
        js,
        concat!(
            "const staff = [\n",
            "    [\"name\", \"age\", \"salary\", \"manager\"],\n",
            "    [\"Alice\", 30, 5200.5, null],\n",
            "    [\"Bob\", 41, 7000.0, \"Alice\"]\n",
            "];\n",
        )
    );
}

#[test]
fn test_unit_variants_become_strings() {
    let members = [
        Member {
            id: 1,
            status: Status::Active,
        },
        Member {
            id: 2,
            status: Status::Retired,
        },
    ];
    let js = to_string(&Table::from_records("members", &members).unwrap()).unwrap();
    assert!(js.contains("[1, \"active\"],"));
    assert!(js.contains("[2, \"retired\"]\n"));
}

#[test]
fn test_json_records_fill_missing_keys_with_null() {
    let records = vec![
        json!({"a": 1, "b": "x"}),
        json!({"a": 2}),
        json!({"b": "z", "a": 3, "c": true}),
    ];

    let table = Table::from_records("json", &records).unwrap();
    assert_eq!(table.headers(), vec!["a", "b"]);
    assert_eq!(table.rows()[1], vec![RawValue::Integer(2), RawValue::Null]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [2, null],\n"));
    assert!(js.contains("    [3, \"z\"]\n"));
}

#[test]
fn test_positional_records() {
    let records = vec![(1, "one", 1.5), (2, "two", 2.5)];
    let table = Table::from_records("pairs", &records).unwrap();
    assert!(table.columns().is_empty());

    let js = to_string(&table).unwrap();
    assert_eq!(js, "const pairs = [\n    [1, \"one\", 1.5],\n    [2, \"two\", 2.5]\n];\n");
}

#[test]
fn test_map_records_use_map_key_order() {
    let mut first = BTreeMap::new();
    first.insert("x", 1);
    first.insert("y", 2);
    let table = Table::from_records("grid", &[first]).unwrap();
    assert_eq!(table.headers(), vec!["x", "y"]);
}

#[test]
fn test_scalar_records_are_rejected() {
    let err = Table::from_records("nums", &[1, 2, 3]).unwrap_err();
    assert!(matches!(err, Error::UnsupportedRecord(_)));
}

#[test]
fn test_mixed_records_are_rejected() {
    let records = vec![json!({"a": 1}), json!([1])];
    let err = Table::from_records("mixed", &records).unwrap_err();
    match err {
        Error::UnsupportedRecord(msg) => assert!(msg.contains("record 1")),
        other => panic!("Expected UnsupportedRecord, got {:?}", other),
    }
}

#[test]
fn test_nested_record_fields_are_written_as_text() {
    let records = vec![json!({"id": 1, "tags": ["a", "b"]})];
    let js = to_string(&Table::from_records("tagged", &records).unwrap()).unwrap();
    assert!(js.contains("[1, \"[a, b]\"]"));
}

#[test]
fn test_to_raw_value_of_json() {
    let raw = to_raw_value(&json!({"n": null, "f": 1.25, "list": [true]})).unwrap();
    match raw {
        RawValue::Map(map) => {
            assert_eq!(map["n"], RawValue::Null);
            assert_eq!(map["f"], RawValue::Float(1.25));
            assert_eq!(map["list"], RawValue::List(vec![RawValue::Bool(true)]));
        }
        other => panic!("Expected map, got {:?}", other),
    }
}
