use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, TaxComponents};

/// One bar/segment of a regime's chart payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

/// Regime-specific reporting block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegimeDetails {
    /// What the Old regime sheltered from slab income.
    Old {
        deductions_claimed: Decimal,
        property_loss_benefit: Decimal,
    },
    /// What the New regime actually taxed.
    New {
        taxable_income: Decimal,
        standard_deduction: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeResult {
    pub regime: Regime,
    pub components: TaxComponents,
    pub chart_data: Vec<ChartPoint>,
    pub details: RegimeDetails,
}
