use chrono::{FixedOffset, NaiveDate, TimeZone};
use js_tablewriter::{
    row, to_string, to_string_with_options, Error, JavaScriptTableWriter, RawValue, Table, Tag,
    TypeHint, Value, VariableDeclaration, WriterOptions,
};

fn sample() -> Table {
    Table::new("Sample")
        .with_headers(["id", "flag"])
        .with_rows(vec![row![1, true], row![2, null]])
}

#[test]
fn test_end_to_end_example() {
    let mut writer = JavaScriptTableWriter::javascript(WriterOptions::new());
    writer.set_variable_declaration("const").unwrap();

    let js = writer.dumps(&sample()).unwrap();
    println!("JavaScript:\n{}", js);

    assert_eq!(
        js,
        concat!(
            "const sample = [\n",
            "    [\"id\", \"flag\"],\n",
            "    [1, true],\n",
            "    [2, null]\n",
            "];\n",
        )
    );
}

#[test]
fn test_declaration_keywords() {
    for (keyword, expected) in [("var", "var sample = ["), ("let", "let sample = [")] {
        let mut writer = JavaScriptTableWriter::javascript(WriterOptions::new());
        writer.set_variable_declaration(keyword).unwrap();
        assert_eq!(writer.variable_declaration().as_str(), keyword);
        assert!(writer.dumps(&sample()).unwrap().starts_with(expected));
    }
}

#[test]
fn test_invalid_declaration_fails_fast() {
    let mut writer = JavaScriptTableWriter::javascript(WriterOptions::new());
    let err = writer.set_variable_declaration("global").unwrap_err();
    assert_eq!(err, Error::InvalidVariableDeclaration("global".to_string()));
    assert_eq!(writer.variable_declaration(), VariableDeclaration::Const);
}

#[test]
fn test_special_floats() {
    let table = Table::new("specials")
        .with_headers(["pos", "neg", "nan"])
        .with_rows(vec![row![f64::INFINITY, f64::NEG_INFINITY, f64::NAN]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [Infinity, -Infinity, NaN]\n"));
}

#[test]
fn test_float_and_integer_literals() {
    let table = Table::new("nums")
        .with_headers(["int", "float", "frac"])
        .with_rows(vec![row![3, 3.0, 0.25]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [3, 3.0, 0.25]\n"));
}

#[test]
fn test_booleans_are_bare_but_boolean_strings_stay_quoted() {
    let table = Table::new("flags")
        .with_headers(["real", "text"])
        .with_rows(vec![row![true, "true"], row![false, "false"]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [true, \"true\"],\n"));
    assert!(js.contains("    [false, \"false\"]\n"));
}

#[test]
fn test_null_cells_are_bare() {
    let table = Table::new("gaps")
        .with_headers(["a", "b"])
        .with_type_hints([Some(TypeHint::String), Some(TypeHint::Integer)])
        .with_rows(vec![row![null, null]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [null, null]\n"));
    assert!(!js.contains("\"null\""));
}

#[test]
fn test_strings_are_escaped() {
    let table = Table::new("quotes")
        .with_headers(["say \"hi\""])
        .with_rows(vec![row!["line1\nline2 \\ \"q\""]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("[\"say \\\"hi\\\"\"],"));
    assert!(js.contains("[\"line1\\nline2 \\\\ \\\"q\\\"\"]"));
}

#[test]
fn test_numeric_strings_are_inferred() {
    let table = Table::new("inferred")
        .with_headers(["a", "b", "c"])
        .with_rows(vec![row!["12", "1.5", "inf"]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [12, 1.5, Infinity]\n"));
}

#[test]
fn test_type_hints() {
    let table = Table::new("hinted")
        .with_headers(["as_str", "as_int", "as_real", "as_date"])
        .with_type_hints([
            Some(TypeHint::String),
            Some(TypeHint::Integer),
            Some(TypeHint::RealNumber),
            Some(TypeHint::DateTime),
        ])
        .with_rows(vec![row![1, "7", 2, "2017-01-01 00:00:00"]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("    [\"1\", 7, 2.0, new Date(\"2017-01-01T00:00:00\")]\n"));
}

#[test]
fn test_datetime_instance_formatting() {
    let aware = FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(2017, 1, 1, 0, 0, 0)
        .unwrap();
    let table = Table::new("times")
        .with_headers(["t"])
        .with_rows(vec![row![aware]]);

    let native = to_string(&table).unwrap();
    assert!(native.contains("[new Date(\"2017-01-01T00:00:00+0900\")]"));

    let quoted = to_string_with_options(
        &table,
        WriterOptions::new().with_datetime_instance_formatting(false),
    )
    .unwrap();
    assert!(quoted.contains("[\"2017-01-01T00:00:00+0900\"]"));
}

#[test]
fn test_datetime_before_min_year_uses_raw_text() {
    let old = NaiveDate::from_ymd_opt(1800, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    let table = Table::new("old").with_headers(["t"]).with_rows(vec![row![old]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("[new Date(\"1800-12-31 23:59:00\")]"));

    let relaxed = to_string_with_options(&table, WriterOptions::new().with_datetime_min_year(1))
        .unwrap();
    assert!(relaxed.contains("[new Date(\"1800-12-31T23:59:00\")]"));
}

#[test]
fn test_aware_datetime_before_min_year_keeps_offset_attached() {
    let old = FixedOffset::east_opt(9 * 3600)
        .unwrap()
        .with_ymd_and_hms(1850, 6, 1, 10, 20, 30)
        .unwrap();
    let table = Table::new("old").with_headers(["t"]).with_rows(vec![row![old]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("[new Date(\"1850-06-01 10:20:30+09:00\")]"));
}

#[test]
fn test_non_ascii_table_names_become_identifiers() {
    for (name, expected) in [
        ("\u{663}abc", "const _abc = [\n"),
        ("x\u{b2}", "const x_ = [\n"),
        ("\u{bd}", "const _ = [\n"),
    ] {
        let table = Table::new(name).with_headers(["a"]).with_rows(vec![row![1]]);
        assert!(to_string(&table).unwrap().starts_with(expected), "{}", name);
    }
}

#[test]
fn test_nested_cells_degrade_to_quoted_text() {
    let table = Table::new("nested")
        .with_headers(["list"])
        .with_rows(vec![vec![RawValue::from(vec![1, 2])]]);

    let js = to_string(&table).unwrap();
    assert!(js.contains("[\"[1, 2]\"]"));
}

#[test]
fn test_variable_name_sanitization() {
    let table = Table::new("Sales Report-2017")
        .with_headers(["a"])
        .with_rows(vec![row![1]]);
    let js = to_string(&table).unwrap();
    assert!(js.starts_with("const sales_report_2017 = [\n"));

    let table = Table::new("2017 sales").with_headers(["a"]).with_rows(vec![row![1]]);
    assert!(to_string(&table).unwrap().starts_with("const _2017_sales = [\n"));
}

#[test]
fn test_header_toggle() {
    let js = to_string_with_options(&sample(), WriterOptions::new().with_header(false)).unwrap();
    assert_eq!(js, "const sample = [\n    [1, true],\n    [2, null]\n];\n");
}

#[test]
fn test_closing_row_toggle_keeps_trailing_separator() {
    let js =
        to_string_with_options(&sample(), WriterOptions::new().with_closing_row(false)).unwrap();
    assert_eq!(
        js,
        "const sample = [\n    [\"id\", \"flag\"],\n    [1, true],\n    [2, null],\n"
    );
}

#[test]
fn test_opening_row_toggle() {
    let js =
        to_string_with_options(&sample(), WriterOptions::new().with_opening_row(false)).unwrap();
    assert_eq!(js, "    [\"id\", \"flag\"],\n    [1, true],\n    [2, null]\n];\n");
}

#[test]
fn test_header_only_table() {
    let table = Table::new("empty").with_headers(["a", "b"]);
    assert_eq!(
        to_string(&table).unwrap(),
        "const empty = [\n    [\"a\", \"b\"]\n];\n"
    );
}

#[test]
fn test_headerless_table() {
    let table = Table::new("raw").with_rows(vec![row![1, 2], row![3, 4]]);
    assert_eq!(
        to_string(&table).unwrap(),
        "const raw = [\n    [1, 2],\n    [3, 4]\n];\n"
    );
}

#[test]
fn test_empty_table_name() {
    let table = Table::new("").with_headers(["a"]).with_rows(vec![row![1]]);
    assert_eq!(to_string(&table), Err(Error::EmptyTableName));
}

#[test]
fn test_empty_table_data() {
    let table = Table::new("nothing");
    assert_eq!(to_string(&table), Err(Error::EmptyTableData));
}

#[test]
fn test_ragged_rows_are_rejected() {
    let table = Table::new("ragged")
        .with_headers(["a", "b"])
        .with_rows(vec![row![1, 2], row![3]]);
    assert_eq!(
        to_string(&table),
        Err(Error::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_formatter_override_is_per_writer() {
    let mut custom = JavaScriptTableWriter::javascript(WriterOptions::new());
    custom.register_formatter(Tag::Integer, |value| match value {
        Value::Integer(i) => format!("{}n", i),
        other => other.to_plain_string(),
    });

    let table = Table::new("big").with_headers(["n"]).with_rows(vec![row![10]]);
    assert!(custom.dumps(&table).unwrap().contains("[10n]"));

    let default = JavaScriptTableWriter::javascript(WriterOptions::new());
    assert!(default.dumps(&table).unwrap().contains("[10]"));
}

#[test]
fn test_write_table_iter_chunks() {
    let writer = JavaScriptTableWriter::javascript(WriterOptions::new());
    let table = Table::new("stream").with_headers(["n", "sq"]);

    let chunks = (1..=3).map(|n: i64| vec![row![n, n * n]]);
    let mut out = Vec::new();
    writer.write_table_iter(&table, chunks, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "const stream = [\n",
            "    [\"n\", \"sq\"],\n",
            "    [1, 1],\n",
            "    [2, 4],\n",
            "    [3, 9]\n",
            "];\n",
        )
    );
}

#[test]
fn test_write_table_iter_trailing_empty_chunk() {
    let writer = JavaScriptTableWriter::javascript(WriterOptions::new().with_indent(2));
    let table = Table::new("t").with_headers(["a"]).with_rows(vec![row![1]]);

    let mut out = Vec::new();
    writer
        .write_table_iter(&table, vec![vec![row![2]], Vec::new()], &mut out)
        .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "const t = [\n  [\"a\"],\n  [1],\n  [2]\n];\n"
    );
}

#[test]
fn test_write_table_iter_requires_headers() {
    let writer = JavaScriptTableWriter::javascript(WriterOptions::new());
    let table = Table::new("t").with_rows(vec![row![1]]);
    let mut out = Vec::new();
    assert_eq!(
        writer.write_table_iter(&table, Vec::new(), &mut out),
        Err(Error::EmptyHeader)
    );
    assert!(out.is_empty());
}

#[test]
fn test_write_table_iter_ragged_chunk_reports_global_row() {
    let writer = JavaScriptTableWriter::javascript(WriterOptions::new());
    let table = Table::new("t").with_headers(["a"]).with_rows(vec![row![1], row![2]]);
    let mut out = Vec::new();
    let result = writer.write_table_iter(&table, vec![vec![row![3, 4]]], &mut out);
    assert_eq!(result, Err(Error::ragged_row(2, 1, 2)));
    assert!(String::from_utf8(out).unwrap().ends_with("[2],\n"));
}
