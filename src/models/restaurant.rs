//! Restaurant model for dining rows from the restaurant dataset

use serde::{Deserialize, Serialize};

/// A single restaurant row
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Restaurant {
    /// Restaurant name, unique within the dataset
    #[serde(rename = "Name")]
    pub name: String,
    /// Cuisine such as "Italian" or "Indian"
    #[serde(rename = "Cuisine")]
    pub cuisine: String,
    /// Price tier text, one or more `£` repetitions
    #[serde(rename = "Price Range")]
    pub price_range: String,
    /// `"Yes"` or `"No"`
    #[serde(rename = "Vegetarian-Friendly")]
    pub vegetarian_friendly: String,
}

impl Restaurant {
    /// Price tier, the number of `£` symbols in the price text
    #[must_use]
    pub fn price_tier(&self) -> u32 {
        self.price_range.matches('£').count() as u32
    }

    /// Whether the row is flagged vegetarian-friendly
    #[must_use]
    pub fn is_vegetarian_friendly(&self) -> bool {
        self.vegetarian_friendly == "Yes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_restaurant(name: &str, price_range: &str, vegetarian: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            cuisine: "Italian".to_string(),
            price_range: price_range.to_string(),
            vegetarian_friendly: vegetarian.to_string(),
        }
    }

    #[test]
    fn test_price_tier_counts_pound_symbols() {
        assert_eq!(create_test_restaurant("Da Mario", "£", "Yes").price_tier(), 1);
        assert_eq!(create_test_restaurant("Padella", "££", "Yes").price_tier(), 2);
        assert_eq!(create_test_restaurant("The Ritz", "££££", "No").price_tier(), 4);
    }

    #[test]
    fn test_vegetarian_flag_requires_exact_yes() {
        assert!(create_test_restaurant("Mildreds", "££", "Yes").is_vegetarian_friendly());
        assert!(!create_test_restaurant("Hawksmoor", "£££", "No").is_vegetarian_friendly());
        assert!(!create_test_restaurant("Unknown", "£", "yes").is_vegetarian_friendly());
    }
}
