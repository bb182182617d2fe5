//! Old-regime Chapter VI-A deductions.
//!
//! Three independently capped claims reduce Old-regime slab income:
//! section 80C investments, section 80D health-insurance premium, and the
//! additional 80CCD(1B) voluntary NPS contribution. The New regime has no
//! equivalent stage and must never invoke this one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DeductionClaims;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionLimitsError {
    #[error("{field} cap must be non-negative, got {value}")]
    NegativeCap { field: &'static str, value: Decimal },
}

/// Statutory ceilings on the three deduction channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLimits {
    /// Section 80C (PPF, ELSS, life insurance, ...).
    pub section_80c: Decimal,

    /// Section 80D health-insurance premium, self (non-senior).
    pub health_insurance: Decimal,

    /// Section 80CCD(1B) voluntary NPS, over and above 80C.
    pub nps_voluntary: Decimal,
}

impl DeductionLimits {
    pub fn validate(&self) -> Result<(), DeductionLimitsError> {
        for (field, value) in [
            ("section_80c", self.section_80c),
            ("health_insurance", self.health_insurance),
            ("nps_voluntary", self.nps_voluntary),
        ] {
            if value < Decimal::ZERO {
                return Err(DeductionLimitsError::NegativeCap { field, value });
            }
        }
        Ok(())
    }

    /// Total claimable deduction: each claim capped at its own ceiling,
    /// then summed. Claims do not spill over between channels.
    pub fn claimable(
        &self,
        claims: &DeductionClaims,
    ) -> Decimal {
        claims.section_80c.min(self.section_80c)
            + claims.health_insurance.min(self.health_insurance)
            + claims.nps_voluntary.min(self.nps_voluntary)
    }
}
