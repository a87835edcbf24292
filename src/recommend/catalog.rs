//! Fixed survey code mappings.
//!
//! The survey encodes products and skin concerns as small integers. These
//! enumerations are the closed code → display-name mappings, constructed
//! once and never mutated.

use serde::{Deserialize, Serialize};

/// Skincare product catalog, one variant per survey product code.
///
/// # Examples
///
/// ```
/// use dermaguide::recommend::Product;
///
/// let product = Product::from_code(2).expect("2 is a valid product code");
/// assert_eq!(product, Product::Moisturizer);
/// assert_eq!(product.name(), "Moisturizer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Product {
    /// Code 0
    Cleanser,
    /// Code 1
    Exfoliant,
    /// Code 2
    Moisturizer,
    /// Code 3
    Serum,
    /// Code 4
    Sunscreen,
    /// Code 5
    Toner,
}

impl Product {
    /// Maps a survey code to a product, if the code is in the catalog.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Product::Cleanser),
            1 => Some(Product::Exfoliant),
            2 => Some(Product::Moisturizer),
            3 => Some(Product::Serum),
            4 => Some(Product::Sunscreen),
            5 => Some(Product::Toner),
            _ => None,
        }
    }

    /// Returns the survey code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Product::Cleanser => 0,
            Product::Exfoliant => 1,
            Product::Moisturizer => 2,
            Product::Serum => 3,
            Product::Sunscreen => 4,
            Product::Toner => 5,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Product::Cleanser => "Cleanser",
            Product::Exfoliant => "Exfoliant",
            Product::Moisturizer => "Moisturizer",
            Product::Serum => "Serum",
            Product::Sunscreen => "Sunscreen",
            Product::Toner => "Toner",
        }
    }
}

/// Skin concern catalog, one variant per survey concern code.
///
/// # Examples
///
/// ```
/// use dermaguide::recommend::SkinConcern;
///
/// assert_eq!(SkinConcern::from_code(0), Some(SkinConcern::Acne));
/// assert_eq!(SkinConcern::label_for(1), "Dark circle");
/// assert_eq!(SkinConcern::label_for(99), "Unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinConcern {
    /// Code 0
    Acne,
    /// Code 1
    DarkCircle,
    /// Code 2
    DarkSpots,
    /// Code 3
    FineLines,
    /// Code 4
    Redness,
    /// Code 5
    Wrinkles,
}

impl SkinConcern {
    /// Maps a survey code to a concern, if the code is in the catalog.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SkinConcern::Acne),
            1 => Some(SkinConcern::DarkCircle),
            2 => Some(SkinConcern::DarkSpots),
            3 => Some(SkinConcern::FineLines),
            4 => Some(SkinConcern::Redness),
            5 => Some(SkinConcern::Wrinkles),
            _ => None,
        }
    }

    /// Returns the survey code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            SkinConcern::Acne => 0,
            SkinConcern::DarkCircle => 1,
            SkinConcern::DarkSpots => 2,
            SkinConcern::FineLines => 3,
            SkinConcern::Redness => 4,
            SkinConcern::Wrinkles => 5,
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SkinConcern::Acne => "Acne",
            SkinConcern::DarkCircle => "Dark circle",
            SkinConcern::DarkSpots => "Dark spots",
            SkinConcern::FineLines => "Fine lines",
            SkinConcern::Redness => "Redness",
            SkinConcern::Wrinkles => "Wrinkles",
        }
    }

    /// Display label for any code, falling back to "Unknown" for codes
    /// outside the catalog.
    #[must_use]
    pub fn label_for(code: u8) -> &'static str {
        Self::from_code(code).map_or("Unknown", Self::name)
    }
}
