//! Old-regime pipeline.
//!
//! Slab income is salary after the 50,000 standard deduction, plus the
//! (possibly negative, capped) property contribution, minus Chapter VI-A
//! deductions, floored at zero. Capital gains are taxed on the side and
//! the 4% cess applies to the combined figure.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::capital_gains::CapitalGains;
use crate::calculations::common::{floor_at_zero, round_half_up};
use crate::calculations::deductions::DeductionLimits;
use crate::calculations::property::PropertyIncome;
use crate::calculations::regimes::{ComputationError, assemble_result};
use crate::calculations::salary::taxable_salary;
use crate::config::{RegimeConfig, RegimeConfigError};
use crate::models::{FinancialProfile, Regime, RegimeDetails, RegimeResult};

/// Calculator for the complete Old-regime liability.
#[derive(Debug, Clone)]
pub struct OldRegimeComputation {
    config: RegimeConfig,
    deduction_limits: DeductionLimits,
}

impl OldRegimeComputation {
    pub fn new(
        config: RegimeConfig,
        deduction_limits: DeductionLimits,
    ) -> Self {
        Self {
            config,
            deduction_limits,
        }
    }

    /// Runs the pipeline over a profile.
    ///
    /// Validates the configuration and the profile first and fails fast
    /// on domain-invalid input; no partial results are produced.
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
        self.deduction_limits.validate()?;
        profile.validate()?;

        let salary = taxable_salary(profile.gross_salary, self.config.standard_deduction);
        let property = PropertyIncome::new(&self.config.property).old_regime(&profile.properties);
        let deductions = self.deduction_limits.claimable(&profile.deductions);

        let slab_income = salary + property - deductions;
        if slab_income < Decimal::ZERO {
            warn!(
                slab_income = %slab_income,
                "deductions and property loss exceed income; slab income floored at zero"
            );
        }
        let taxable_slab = floor_at_zero(slab_income);
        let slab_tax = self.config.slab_schedule.tax_on(taxable_slab);

        let gains = CapitalGains::new(&self.config.capital_gains)
            .calculate(&profile.investments)
            .map_err(RegimeConfigError::from)?;

        let details = RegimeDetails::Old {
            deductions_claimed: round_half_up(deductions),
            property_loss_benefit: round_half_up(floor_at_zero(-property)),
        };
        Ok(assemble_result(
            Regime::Old,
            slab_tax,
            gains.total_tax,
            self.config.cess_rate,
            details,
        ))
    }
}
