use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, RegimeResult};

/// One row of the side-by-side comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub old_regime: Decimal,
    pub new_regime: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub old: RegimeResult,
    pub new: RegimeResult,
    /// The regime with the strictly lower total tax; ties go to Old.
    pub recommended: Regime,
    /// Absolute difference between the two reported totals.
    pub savings: Decimal,
    pub comparison_chart: Vec<ComparisonRow>,
}
