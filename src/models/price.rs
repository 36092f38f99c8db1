//! Price range parsing and interval arithmetic

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripCraftError;

/// An inclusive price interval in pounds, parsed from dataset price text
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    /// Lower bound in pounds
    pub low: u32,
    /// Upper bound in pounds
    pub high: u32,
}

impl PriceRange {
    /// Create a new price range
    #[must_use]
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Parse price text into a range.
    ///
    /// Two formats are accepted: `"£50 - £150"` becomes `(50, 150)` and a
    /// single amount like `"£50"` becomes `(50, 50)`. Anything else is a
    /// parse error; there is no fallback value.
    pub fn parse(text: &str) -> Result<Self, TripCraftError> {
        let stripped = text.replace('£', "");
        if stripped.contains('-') {
            let parts: Vec<&str> = stripped.split(" - ").collect();
            if parts.len() != 2 {
                return Err(TripCraftError::parse(format!(
                    "unrecognized price range '{text}'"
                )));
            }
            let low = parse_number(parts[0], text)?;
            let high = parse_number(parts[1], text)?;
            Ok(Self { low, high })
        } else {
            let amount = parse_number(&stripped, text)?;
            Ok(Self {
                low: amount,
                high: amount,
            })
        }
    }

    /// Midpoint of the interval, used as a nightly rate estimate
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.low) + f64::from(self.high)) / 2.0
    }

    /// Whether two inclusive intervals overlap, boundary contact included
    #[must_use]
    pub fn overlaps(&self, other: &PriceRange) -> bool {
        self.low <= other.high && self.high >= other.low
    }
}

impl FromStr for PriceRange {
    type Err = TripCraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a single amount like `"£25"` (the `£` is optional) into pounds
pub fn parse_amount(text: &str) -> Result<u32, TripCraftError> {
    let stripped = text.replace('£', "");
    parse_number(&stripped, text)
}

fn parse_number(part: &str, original: &str) -> Result<u32, TripCraftError> {
    part.trim()
        .parse::<u32>()
        .map_err(|_| TripCraftError::parse(format!("unrecognized amount '{original}'")))
}
