//! Line-grid table detection over extracted page text.
//!
//! Expected page text after PDF-to-text:
//!   Date        Amount           Transaction    Details
//!   01.03.24    + 1 000,50 ₸     Transfer       Alice
//!   02.03.24 - 250 ₸ Purchase Shop
//!
//! Row lines are split into four cells; a run of consecutive row lines is one
//! table, and any other non-blank line ends it.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{Row, Table};

const COLUMNS: usize = 4;

fn column_gap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("column gap regex"))
}

fn transaction_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<date>\d{2}\.\d{2}\.\d{2})\s+",
            r"(?P<amount>[+-]\s*\d[\d ,]* \S+)\s+",
            r"(?P<operation>\S+)\s+",
            r"(?P<details>.+)$"
        ))
        .expect("transaction line regex")
    })
}

/// Split one text line into four cells, if it looks like a table row.
pub fn split_row(line: &str) -> Option<Row> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let cells: Vec<&str> = column_gap_re().split(line).collect();
    if cells.len() == COLUMNS {
        return Some(cells.into_iter().map(str::to_string).collect());
    }

    if let Some(caps) = transaction_line_re().captures(line) {
        return Some(
            ["date", "amount", "operation", "details"]
                .iter()
                .map(|name| caps[*name].trim().to_string())
                .collect(),
        );
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() == COLUMNS {
        return Some(words.into_iter().map(str::to_string).collect());
    }

    None
}

/// Group the rows of one page's text into tables.
pub fn tables_from_text(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current = Table::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match split_row(line) {
            Some(row) => current.push(row),
            None => {
                if !current.is_empty() {
                    tables.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        tables.push(current);
    }

    tables
}
