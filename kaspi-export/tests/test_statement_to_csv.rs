use kaspi_export::{default_output_path, export_csv};
use kaspi_ingest::{AmountParser, PdfStatement, Table, parse_statement};
use std::fs;

fn table(rows: &[&[&str]]) -> Table {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

/// Two-page statement: summary table, header table, then a continuation on page 2.
fn sample_pages() -> Vec<Vec<Table>> {
    vec![
        vec![
            table(&[&["Card", "Kaspi Gold", "", ""], &["Balance", "12 000 ₸", "", ""]]),
            table(&[
                &["Date", "Amount", "Transaction", "Details"],
                &["01.03.24", "+ 1 000,50 ₸", "Transfer", "Alice"],
                &["02.03.24", "- 250 ₸", "Purchase", "Shop"],
            ]),
        ],
        vec![table(&[
            &["03.03.24", "- 19,99 USD", "Purchase", "Spotify"],
            &["04.03.24", "- 1 999,50 ₸", "Purchase", "Sulpak"],
        ])],
    ]
}

#[test]
fn test_multi_page_statement_to_csv() {
    let report = parse_statement(&sample_pages(), &AmountParser::default());
    assert!(report.is_complete());
    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.totals.count, 3);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("march.csv");
    export_csv(&report.transactions, &out).unwrap();

    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "\"Date\",\"Payee\",\"Memo\",\"Amount\"",
            "\"2024-03-01\",\"Alice\",\"\",\"1001\"",
            "\"2024-03-02\",\"Shop\",\"\",\"-250\"",
            "\"2024-03-04\",\"Sulpak\",\"\",\"-2000\"",
        ]
    );
}

#[test]
fn test_statement_without_header_exports_header_only() {
    let pages = vec![vec![table(&[&["01.03.24", "+ 1 ₸", "Transfer", "A"]])]];
    let report = parse_statement(&pages, &AmountParser::default());
    assert!(report.failure.is_some());
    assert!(report.transactions.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let out = default_output_path(dir.path().join("empty.pdf"));
    export_csv(&report.transactions, &out).unwrap();

    assert_eq!(fs::read_to_string(&out).unwrap(), "\"Date\",\"Payee\",\"Memo\",\"Amount\"\r\n");
}

#[test]
fn test_text_statement_to_csv() {
    let statement = PdfStatement::from_page_text(
        "statement.pdf",
        vec![
            "Күні Сомасы Операция Толығырақ\n15.02.24 - 3 500 ₸ Аударым Magnum Almaty\n".to_string(),
        ],
    );
    let report = parse_statement(&statement, &AmountParser::default());
    assert_eq!(report.transactions.len(), 1);
    assert_eq!(report.transactions[0].date, chrono::NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("kz.csv");
    export_csv(&report.transactions, &out).unwrap();
    assert!(fs::read_to_string(&out).unwrap().contains("\"2024-02-15\",\"Magnum Almaty\",\"\",\"-3500\""));
}

#[test]
fn test_unwritable_destination_is_an_error() {
    let report = parse_statement(&sample_pages(), &AmountParser::default());
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.csv");
    assert!(export_csv(&report.transactions, &out).is_err());
}
