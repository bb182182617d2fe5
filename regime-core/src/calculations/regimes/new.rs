//! New-regime pipeline.
//!
//! Slab income is salary after the 75,000 standard deduction plus the
//! non-negative property contribution. There is no deduction stage:
//! Chapter VI-A claims in the profile are simply ignored here. Capital
//! gains and cess follow the same pattern as the Old pipeline.

use crate::calculations::capital_gains::CapitalGains;
use crate::calculations::common::round_half_up;
use crate::calculations::property::PropertyIncome;
use crate::calculations::regimes::{ComputationError, assemble_result};
use crate::calculations::salary::taxable_salary;
use crate::config::{RegimeConfig, RegimeConfigError};
use crate::models::{FinancialProfile, Regime, RegimeDetails, RegimeResult};

/// Calculator for the complete New-regime liability.
#[derive(Debug, Clone)]
pub struct NewRegimeComputation {
    config: RegimeConfig,
}

impl NewRegimeComputation {
    pub fn new(config: RegimeConfig) -> Self {
        Self { config }
    }

    /// Runs the pipeline over a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ComputationError`] on a negative monetary field in the
    /// profile or an out-of-range configuration value.
    pub fn calculate(
        &self,
        profile: &FinancialProfile,
    ) -> Result<RegimeResult, ComputationError> {
        self.config.validate()?;
        profile.validate()?;

        let salary = taxable_salary(profile.gross_salary, self.config.standard_deduction);
        let property = PropertyIncome::new(&self.config.property).new_regime(&profile.properties);

        // Both terms are non-negative; no floor is needed here.
        let taxable_slab = salary + property;
        let slab_tax = self.config.slab_schedule.tax_on(taxable_slab);

        let gains = CapitalGains::new(&self.config.capital_gains)
            .calculate(&profile.investments)
            .map_err(RegimeConfigError::from)?;

        let details = RegimeDetails::New {
            taxable_income: round_half_up(taxable_slab),
            standard_deduction: self.config.standard_deduction,
        };
        Ok(assemble_result(
            Regime::New,
            slab_tax,
            gains.total_tax,
            self.config.cess_rate,
            details,
        ))
    }
}
