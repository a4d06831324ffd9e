//! Signed currency amounts as printed in statement cells, e.g. `+ 1 000,50 ₸`.

use kaspi_core::AmountError;
use regex::Regex;
use std::sync::OnceLock;

/// Tenge sign, the currency of the statements this crate targets
pub const DEFAULT_CURRENCY: &str = "₸";

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?P<sign>[+-])\s*(?P<amount>[\d, ]+) (?P<currency>\S+)$")
            .expect("amount regex")
    })
}

/// Parses amount cells, accepting a single expected currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountParser {
    currency: String,
}

impl Default for AmountParser {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl AmountParser {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Parse the first line of `text`; later lines of a wrapped cell are ignored.
    ///
    /// Spaces in the number group thousands and the comma is the decimal separator.
    pub fn parse(&self, text: &str) -> Result<f64, AmountError> {
        let first_line = text.lines().next().unwrap_or("");
        let caps = amount_re()
            .captures(first_line)
            .ok_or_else(|| AmountError::Format(text.to_string()))?;

        let currency = &caps["currency"];
        if currency != self.currency {
            return Err(AmountError::CurrencyMismatch {
                found: currency.to_string(),
                expected: self.currency.clone(),
            });
        }

        let normalized = caps["amount"].replace(' ', "").replace(',', ".");
        let value: f64 = normalized
            .parse()
            .map_err(|_| AmountError::Format(text.to_string()))?;

        Ok(if &caps["sign"] == "+" { value } else { -value })
    }
}
