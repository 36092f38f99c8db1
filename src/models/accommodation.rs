//! Accommodation model for lodging rows from the accommodation dataset

use serde::{Deserialize, Serialize};

use crate::error::TripCraftError;
use crate::models::PriceRange;

/// A single accommodation row
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Accommodation {
    /// Accommodation name, unique within the dataset
    #[serde(rename = "Name")]
    pub name: String,
    /// Category such as "Hotel" or "Hostel"
    #[serde(rename = "Type")]
    pub accommodation_type: String,
    /// Nightly price text, `"£N"` or `"£X - £Y"`
    #[serde(rename = "Price Range per Night")]
    pub price_range_per_night: String,
}

impl Accommodation {
    /// Parsed nightly price range
    pub fn nightly_price_range(&self) -> Result<PriceRange, TripCraftError> {
        PriceRange::parse(&self.price_range_per_night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nightly_price_range_parses_dataset_text() {
        let accommodation = Accommodation {
            name: "The Hoxton".to_string(),
            accommodation_type: "Hotel".to_string(),
            price_range_per_night: "£120 - £200".to_string(),
        };
        assert_eq!(
            accommodation.nightly_price_range().unwrap(),
            PriceRange::new(120, 200)
        );
    }
}
