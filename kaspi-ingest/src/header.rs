//! Recognition of the transaction table's header row.
//!
//! Matching is exact and ordered against a closed list; a statement in any
//! other language is unsupported.

use crate::types::Row;

/// Statement language a header signature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLocale {
    English,
    Russian,
    Kazakh,
}

/// Known header rows: Date, Amount, Transaction type, Details.
pub const HEADER_SIGNATURES: [(HeaderLocale, [&str; 4]); 3] = [
    (HeaderLocale::English, ["Date", "Amount", "Transaction", "Details"]),
    (HeaderLocale::Russian, ["Дата", "Сумма", "Операция", "Детали"]),
    (HeaderLocale::Kazakh, ["Күні", "Сомасы", "Операция", "Толығырақ"]),
];

/// Locale whose signature equals `row` cell for cell, if any.
pub fn match_header(row: &[String]) -> Option<HeaderLocale> {
    HEADER_SIGNATURES
        .iter()
        .find(|(_, signature)| {
            row.len() == signature.len() && row.iter().zip(signature).all(|(cell, name)| cell == name)
        })
        .map(|(locale, _)| *locale)
}

/// Header locale of `table` when its first row is a known signature.
pub fn match_header_table(table: &[Row]) -> Option<HeaderLocale> {
    table.first().and_then(|row| match_header(row))
}
