//! # Housing Dataset
//!
//! Typed rows of a King-County-style housing CSV plus the query surface
//! over them. Pure data and selection logic; loading lives in the adapters.
//!
//! ## Shape
//!
//! ```text
//! HouseRecord
//! ├── id: u64            (listing id, not analyzed)
//! ├── date: String       (sale date, not analyzed)
//! ├── price, bedrooms, bathrooms, sqft_living, sqft_lot, floors,
//! │   waterfront, condition, grade, yr_built, yr_renovated, zipcode
//! └── (the numeric columns above are what statistics run over)
//! ```
//!
//! `yr_renovated == 0` means the house was never renovated.

use serde::Deserialize;

use crate::core::convert::sqft_to_m2;
use crate::core::stats::mean;

/// One row of the housing dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HouseRecord {
    /// Listing id
    pub id: u64,

    /// Sale date, kept verbatim
    pub date: String,

    /// Sale price in dollars
    pub price: f64,

    /// Bedroom count
    pub bedrooms: u32,

    /// Bathroom count (quarter-bath resolution, hence fractional)
    pub bathrooms: f64,

    /// Living area in square feet
    pub sqft_living: f64,

    /// Lot area in square feet
    pub sqft_lot: f64,

    /// Floor count (half floors occur)
    pub floors: f64,

    /// 1 if the property fronts water
    pub waterfront: u8,

    /// Condition rating, 1..=5
    pub condition: u32,

    /// Construction grade, 1..=13
    pub grade: u32,

    /// Year built
    pub yr_built: u32,

    /// Year of last renovation, 0 if never renovated
    pub yr_renovated: u32,

    /// Postal code
    pub zipcode: u32,
}

impl HouseRecord {
    /// Living area in square metres.
    pub fn living_m2(&self) -> f64 {
        sqft_to_m2(self.sqft_living)
    }

    /// Lot area in square metres.
    pub fn lot_m2(&self) -> f64 {
        sqft_to_m2(self.sqft_lot)
    }

    /// Whether the house has ever been renovated.
    pub fn is_renovated(&self) -> bool {
        self.yr_renovated > 0
    }
}

/// The numeric columns statistics run over.
///
/// `id` and `date` are identifiers, not measurements, and are excluded --
/// the same split pandas makes with `numeric_only=True` once ids are set
/// aside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Price,
    Bedrooms,
    Bathrooms,
    SqftLiving,
    SqftLot,
    Floors,
    Waterfront,
    Condition,
    Grade,
    YrBuilt,
    YrRenovated,
    Zipcode,
}

impl Column {
    /// Every numeric column, in CSV order.
    pub const ALL: [Column; 12] = [
        Column::Price,
        Column::Bedrooms,
        Column::Bathrooms,
        Column::SqftLiving,
        Column::SqftLot,
        Column::Floors,
        Column::Waterfront,
        Column::Condition,
        Column::Grade,
        Column::YrBuilt,
        Column::YrRenovated,
        Column::Zipcode,
    ];

    /// The CSV header name.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Price => "price",
            Column::Bedrooms => "bedrooms",
            Column::Bathrooms => "bathrooms",
            Column::SqftLiving => "sqft_living",
            Column::SqftLot => "sqft_lot",
            Column::Floors => "floors",
            Column::Waterfront => "waterfront",
            Column::Condition => "condition",
            Column::Grade => "grade",
            Column::YrBuilt => "yr_built",
            Column::YrRenovated => "yr_renovated",
            Column::Zipcode => "zipcode",
        }
    }

    /// Extract this column's value from a record, widened to f64.
    pub fn value(&self, r: &HouseRecord) -> f64 {
        match self {
            Column::Price => r.price,
            Column::Bedrooms => r.bedrooms as f64,
            Column::Bathrooms => r.bathrooms,
            Column::SqftLiving => r.sqft_living,
            Column::SqftLot => r.sqft_lot,
            Column::Floors => r.floors,
            Column::Waterfront => r.waterfront as f64,
            Column::Condition => r.condition as f64,
            Column::Grade => r.grade as f64,
            Column::YrBuilt => r.yr_built as f64,
            Column::YrRenovated => r.yr_renovated as f64,
            Column::Zipcode => r.zipcode as f64,
        }
    }
}

/// An in-memory housing dataset.
pub struct Dataset {
    /// The rows, in file order
    records: Vec<HouseRecord>,
}

impl Dataset {
    /// Wrap a set of records. Emptiness is the loader's concern.
    pub fn new(records: Vec<HouseRecord>) -> Self {
        Self { records }
    }

    /// Row count.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows, in file order.
    pub fn records(&self) -> &[HouseRecord] {
        &self.records
    }

    /// (rows, columns) -- columns counts id and date alongside the numerics.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), 2 + Column::ALL.len())
    }

    /// Attribute names in file order, identifiers first.
    pub fn attributes(&self) -> Vec<&'static str> {
        let mut names = vec!["id", "date"];
        names.extend(Column::ALL.iter().map(|c| c.name()));
        names
    }

    /// One numeric column as a contiguous series.
    pub fn column(&self, col: Column) -> Vec<f64> {
        self.records.iter().map(|r| col.value(r)).collect()
    }

    /// Every numeric column, named, in file order.
    pub fn numeric_columns(&self) -> Vec<(String, Vec<f64>)> {
        Column::ALL
            .iter()
            .map(|c| (c.name().to_string(), self.column(*c)))
            .collect()
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// The house with the largest living area.
    pub fn largest_living_area(&self) -> Option<&HouseRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.sqft_living.total_cmp(&b.sqft_living))
    }

    /// Houses built in the inclusive year range.
    pub fn built_between(&self, from: u32, to: u32) -> Vec<&HouseRecord> {
        self.records
            .iter()
            .filter(|r| r.yr_built >= from && r.yr_built <= to)
            .collect()
    }

    /// Among renovated houses, the one with the smallest lot.
    pub fn renovated_smallest_lot(&self) -> Option<&HouseRecord> {
        self.records
            .iter()
            .filter(|r| r.is_renovated())
            .min_by(|a, b| a.sqft_lot.total_cmp(&b.sqft_lot))
    }

    /// Houses whose living area exceeds the given size in square metres.
    pub fn living_area_over_m2(&self, min_m2: f64) -> Vec<&HouseRecord> {
        self.records
            .iter()
            .filter(|r| r.living_m2() > min_m2)
            .collect()
    }

    /// The cheapest house with exactly the given floor count.
    pub fn cheapest_with_floors(&self, floors: f64) -> Option<&HouseRecord> {
        self.records
            .iter()
            .filter(|r| r.floors == floors)
            .min_by(|a, b| a.price.total_cmp(&b.price))
    }

    /// Three-floor houses priced above the dataset mean whose bedroom and
    /// bathroom counts are both below their respective means.
    pub fn upscale_compact(&self) -> Vec<&HouseRecord> {
        let mean_price = mean(&self.column(Column::Price));
        let mean_bedrooms = mean(&self.column(Column::Bedrooms));
        let mean_bathrooms = mean(&self.column(Column::Bathrooms));

        self.records
            .iter()
            .filter(|r| {
                r.floors == 3.0
                    && r.price > mean_price
                    && (r.bedrooms as f64) < mean_bedrooms
                    && r.bathrooms < mean_bathrooms
            })
            .collect()
    }
}
