//! Normalized transaction record produced from one statement row

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single statement transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Posting date (statement rows carry no time component)
    pub date: NaiveDate,
    /// Verbatim text of the row's details cell
    pub payee: String,
    /// Always empty when produced by the parser
    pub memo: String,
    /// Positive = inflow, negative = outflow
    pub amount: f64,
}

impl Transaction {
    /// Create a transaction with an empty memo.
    pub fn new(date: NaiveDate, payee: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            payee: payee.into(),
            memo: String::new(),
            amount,
        }
    }

    /// Returns true if money came into the account
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction[{}, {}, \"{}\"]",
            self.date.format("%Y.%m.%d"),
            self.amount,
            self.payee
        )
    }
}
