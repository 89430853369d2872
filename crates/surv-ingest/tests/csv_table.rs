//! Integration tests for CSV reading against files on disk.

use std::io::Write;

use tempfile::NamedTempFile;

use surv_ingest::{read_csv_table, read_raw_records};

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write csv");
    file
}

#[test]
fn reads_plain_export() {
    let file = write_csv(
        "DTDIAG,DTULTINFO,TOPOGRUP,EC\n\
         2020-01-01,2021-06-01,C50,IIIA\n\
         2019-03-10,2020-03-10,C34,IV\n",
    );
    let table = read_csv_table(file.path()).expect("read table");
    assert_eq!(table.headers, vec!["DTDIAG", "DTULTINFO", "TOPOGRUP", "EC"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.cell(0, 3), Some("IIIA"));
}

#[test]
fn skips_title_row_above_header() {
    let file = write_csv(
        "Exported 2024-05-01,,,\n\
         DTDIAG,DTULTINFO,TOPOGRUP,EC\n\
         2020-01-01,2021-06-01,C50,IIIA\n",
    );
    let table = read_csv_table(file.path()).expect("read table");
    assert_eq!(table.headers.len(), 4);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn blank_rows_are_dropped() {
    let file = write_csv(
        "DTDIAG,DTULTINFO\n\
         ,\n\
         2020-01-01,2021-06-01\n",
    );
    let table = read_csv_table(file.path()).expect("read table");
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn short_rows_are_padded() {
    let file = write_csv(
        "DTDIAG,DTULTINFO,EC\n\
         2020-01-01,2021-06-01\n",
    );
    let table = read_csv_table(file.path()).expect("read table");
    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.cell(0, 2), None);
}

#[test]
fn raw_records_tolerate_missing_columns() {
    let file = write_csv(
        "DTDIAG,EC\n\
         2020-01-01,IIIA\n\
         ,IV\n",
    );
    let records = read_raw_records(file.path()).expect("read records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].last_info_date, None);
    assert_eq!(records[1].diagnosis_date, None);
    assert_eq!(records[1].stage.as_deref(), Some("IV"));
}

#[test]
fn empty_file_yields_empty_table() {
    let file = write_csv("");
    let table = read_csv_table(file.path()).expect("read table");
    assert!(table.headers.is_empty());
    assert!(table.rows.is_empty());
}
