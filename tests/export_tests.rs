mod common;
use chrono::NaiveDate;
use common::temp_out;
use servdash::export::{ExportFormat, default_file_name, export_table};
use servdash::models::{Table, Value, ViewFilter};
use std::fs;
use std::path::Path;

fn sample() -> Table {
    let mut table = Table::new(vec!["Data".into(), "Nota".into(), "Texto Breve".into(), "total".into()]);
    table.push_row(vec![
        Value::Date(NaiveDate::from_ymd_opt(2024, 1, 2).expect("date")),
        Value::Text("000123".into()),
        Value::Text("Troca de medidor, urgente".into()),
        Value::Int(3),
    ]);
    table.push_row(vec![
        Value::Text("2024-01-05".into()),
        Value::Text("777".into()),
        Value::Null,
        Value::Float(1.5),
    ]);
    table
}

#[test]
fn test_export_csv_keeps_header_and_text() {
    let out = temp_out("export_csv", "csv");
    export_table(&sample(), ExportFormat::Csv, &out, "Dados", true).expect("export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Data,Nota,Texto Breve,total");
    assert_eq!(lines[1], "2024-01-02,000123,\"Troca de medidor, urgente\",3");
    assert_eq!(lines[2], "2024-01-05,777,,1.5");
}

#[test]
fn test_export_json_rows_are_objects_in_column_order() {
    let out = temp_out("export_json", "json");
    export_table(&sample(), ExportFormat::Json, &out, "Dados", true).expect("export");

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Nota"], "000123");
    assert_eq!(rows[0]["total"], 3);
    assert!(rows[1]["Texto Breve"].is_null());

    let data = content.find("\"Data\"").expect("Data key");
    let nota = content.find("\"Nota\"").expect("Nota key");
    assert!(data < nota);
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let out = temp_out("export_xlsx", "xlsx");
    export_table(&sample(), ExportFormat::Xlsx, &out, "Notas APR", true).expect("export");

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_table_writes_nothing() {
    let out = temp_out("export_empty", "csv");
    let empty = Table::new(vec!["Data".into()]);
    export_table(&empty, ExportFormat::Csv, &out, "Dados", true).expect("export");
    assert!(!out.exists());
}

#[test]
fn test_export_force_overwrites() {
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    export_table(&sample(), ExportFormat::Csv, &out, "Dados", true).expect("export");
    let content = fs::read_to_string(&out).expect("read");
    assert!(content.starts_with("Data,"));
}

#[test]
fn test_default_file_names() {
    let filter = ViewFilter::between(
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        NaiveDate::from_ymd_opt(2024, 1, 7).expect("date"),
    )
    .expect("filter");

    assert_eq!(
        default_file_name("inicio_turno", &filter, ExportFormat::Csv),
        Path::new("inicio_turno_2024-01-01_a_2024-01-07.csv")
    );
    assert_eq!(
        default_file_name("ofs_apr", &filter, ExportFormat::Xlsx),
        Path::new("ofs_apr_2024-01-01_a_2024-01-07.xlsx")
    );
}

#[test]
fn test_format_from_extension() {
    assert_eq!(ExportFormat::from_path(Path::new("a.XLSX")), Some(ExportFormat::Xlsx));
    assert_eq!(ExportFormat::from_path(Path::new("a.csv")), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::from_path(Path::new("a.txt")), None);
}
