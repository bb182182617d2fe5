use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized tax figures for one regime, rounded to two decimal places.
/// `total_tax` includes the cess and is rounded from the full-precision
/// sum, not from the rounded parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponents {
    pub slab_tax: Decimal,
    pub investment_tax: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
}
