//! Per-run accumulators reported after a statement is parsed

use crate::transaction::Transaction;

/// Count, net change, inflow and outflow of one parsing run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunTotals {
    pub count: usize,
    pub net_change: f64,
    pub inflow: f64,
    pub outflow: f64,
}

impl RunTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one transaction. Anything not strictly positive is outflow, zero included.
    pub fn record(&mut self, txn: &Transaction) {
        self.count += 1;
        self.net_change += txn.amount;
        if txn.is_inflow() {
            self.inflow += txn.amount;
        } else {
            self.outflow += txn.amount;
        }
    }
}

impl<'a> FromIterator<&'a Transaction> for RunTotals {
    fn from_iter<I: IntoIterator<Item = &'a Transaction>>(iter: I) -> Self {
        let mut totals = RunTotals::new();
        for txn in iter {
            totals.record(txn);
        }
        totals
    }
}
