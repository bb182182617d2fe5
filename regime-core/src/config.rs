//! Per-regime statutory configuration, FY 2025-26 values.
//!
//! Every threshold and rate the calculators apply lives here as a named
//! field, looked up by regime identifier. A future-year bracket change is
//! an edit to these constructors, never to calculation logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::capital_gains::{CapitalGainsConfig, CapitalGainsConfigError};
use crate::calculations::deductions::DeductionLimits;
use crate::calculations::property::{PropertyConfig, PropertyConfigError};
use crate::calculations::slab::{SlabError, SlabSchedule, TaxSlab};
use crate::models::Regime;

/// Errors for an invalid regime configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegimeConfigError {
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeStandardDeduction(Decimal),

    #[error("cess rate must be between 0 and 1, got {0}")]
    InvalidCessRate(Decimal),

    #[error(transparent)]
    Slab(#[from] SlabError),

    #[error(transparent)]
    Property(#[from] PropertyConfigError),

    #[error(transparent)]
    CapitalGains(#[from] CapitalGainsConfigError),
}

/// Everything one regime pipeline needs to compute a liability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    pub regime: Regime,

    /// Flat deduction against gross salary.
    pub standard_deduction: Decimal,

    pub slab_schedule: SlabSchedule,
    pub property: PropertyConfig,
    pub capital_gains: CapitalGainsConfig,

    /// Health-and-education cess on the combined slab and investment tax.
    pub cess_rate: Decimal,
}

impl RegimeConfig {
    /// Looks up the FY 2025-26 configuration for a regime.
    pub fn for_regime(regime: Regime) -> Self {
        match regime {
            Regime::Old => Self::old_regime(),
            Regime::New => Self::new_regime(),
        }
    }

    /// Old regime: 50,000 standard deduction, rebate up to 500,000,
    /// three slabs topping out at 30% above 1,000,000.
    pub fn old_regime() -> Self {
        Self {
            regime: Regime::Old,
            standard_deduction: rupees(50_000),
            slab_schedule: SlabSchedule {
                rebate_limit: rupees(500_000),
                slabs: vec![
                    slab(1_000_000, 30),
                    slab(500_000, 20),
                    slab(250_000, 5),
                ],
            },
            property: property_config(),
            capital_gains: capital_gains_config(),
            cess_rate: Decimal::new(4, 2),
        }
    }

    /// New regime: 75,000 standard deduction, rebate up to 1,200,000,
    /// the granular six-slab ladder topping out at 30% above 2,400,000.
    pub fn new_regime() -> Self {
        Self {
            regime: Regime::New,
            standard_deduction: rupees(75_000),
            slab_schedule: SlabSchedule {
                rebate_limit: rupees(1_200_000),
                slabs: vec![
                    slab(2_400_000, 30),
                    slab(2_000_000, 25),
                    slab(1_600_000, 20),
                    slab(1_200_000, 15),
                    slab(800_000, 10),
                    slab(400_000, 5),
                ],
            },
            property: property_config(),
            capital_gains: capital_gains_config(),
            cess_rate: Decimal::new(4, 2),
        }
    }

    pub fn validate(&self) -> Result<(), RegimeConfigError> {
        if self.standard_deduction < Decimal::ZERO {
            return Err(RegimeConfigError::NegativeStandardDeduction(
                self.standard_deduction,
            ));
        }
        if self.cess_rate < Decimal::ZERO || self.cess_rate > Decimal::ONE {
            return Err(RegimeConfigError::InvalidCessRate(self.cess_rate));
        }
        self.slab_schedule.validate()?;
        self.property.validate()?;
        self.capital_gains.validate()?;
        Ok(())
    }
}

/// Old-regime Chapter VI-A ceilings: 150,000 (80C), 25,000 (80D),
/// 50,000 (80CCD(1B)).
pub fn old_regime_deduction_limits() -> DeductionLimits {
    DeductionLimits {
        section_80c: rupees(150_000),
        health_insurance: rupees(25_000),
        nps_voluntary: rupees(50_000),
    }
}

fn property_config() -> PropertyConfig {
    PropertyConfig {
        nav_taxable_share: Decimal::new(70, 2),
        self_occupied_interest_cap: rupees(200_000),
        loss_set_off_cap: rupees(200_000),
    }
}

// Post-July-2024 rates; identical for both regimes until the law diverges.
fn capital_gains_config() -> CapitalGainsConfig {
    CapitalGainsConfig {
        equity_ltcg_exemption: rupees(125_000),
        equity_ltcg_rate: Decimal::new(125, 3),
        equity_stcg_rate: Decimal::new(20, 2),
        other_ltcg_rate: Decimal::new(125, 3),
    }
}

fn rupees(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

fn slab(
    threshold: i64,
    rate_percent: i64,
) -> TaxSlab {
    TaxSlab {
        threshold: rupees(threshold),
        rate: Decimal::new(rate_percent, 2),
    }
}
