//! Attraction model for sightseeing rows from the tourism dataset

use serde::{Deserialize, Serialize};

use crate::error::TripCraftError;
use crate::models::price;

/// A single attraction row
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    /// Attraction name, unique within the dataset
    #[serde(rename = "Name")]
    pub name: String,
    /// Category such as "Museum" or "Park"
    #[serde(rename = "Type")]
    pub attraction_type: String,
    /// Neighbourhood or district
    #[serde(rename = "Location")]
    pub location: String,
    /// Short free-text description
    #[serde(rename = "Description")]
    pub description: String,
    /// Entrance fee text, either the literal `"Free"` or `"£N"`
    #[serde(rename = "Entrance Fee")]
    pub entrance_fee: String,
}

impl Attraction {
    /// Entrance fee in pounds. `"Free"` costs nothing, `"£N"` costs N,
    /// anything else is a parse error.
    pub fn entrance_fee_pounds(&self) -> Result<u32, TripCraftError> {
        if self.entrance_fee == "Free" {
            Ok(0)
        } else {
            price::parse_amount(&self.entrance_fee)
        }
    }
}
