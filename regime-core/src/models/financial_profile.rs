use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{InvestmentTransaction, PropertyHolding};

/// Domain-invalid input. The engine fails fast on the first offending field
/// and returns no partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("property {index}: {field} must be non-negative, got {value}")]
    NegativePropertyAmount {
        index: usize,
        field: &'static str,
        value: Decimal,
    },

    #[error("investment {index}: {field} must be non-negative, got {value}")]
    NegativeInvestmentAmount {
        index: usize,
        field: &'static str,
        value: Decimal,
    },
}

/// Old-regime statutory deduction claims. The New regime pipeline ignores
/// these entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionClaims {
    pub section_80c: Decimal,
    pub health_insurance: Decimal,
    pub nps_voluntary: Decimal,
}

/// Complete financial input for one computation. Constructed fresh per
/// request and shared read-only by both regime pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub gross_salary: Decimal,
    pub properties: Vec<PropertyHolding>,
    pub investments: Vec<InvestmentTransaction>,
    pub deductions: DeductionClaims,
}

impl FinancialProfile {
    /// Checks the domain invariants: every monetary field must be
    /// non-negative. Structural validity (types, enum values) is the
    /// caller's concern at deserialization time.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.gross_salary < Decimal::ZERO {
            return Err(ProfileError::NegativeAmount {
                field: "gross_salary",
                value: self.gross_salary,
            });
        }
        for (index, property) in self.properties.iter().enumerate() {
            validate_property(index, property)?;
        }
        validate_investments(&self.investments)?;
        self.deductions.validate()
    }
}

impl DeductionClaims {
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (field, value) in [
            ("section_80c", self.section_80c),
            ("health_insurance", self.health_insurance),
            ("nps_voluntary", self.nps_voluntary),
        ] {
            if value < Decimal::ZERO {
                return Err(ProfileError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }
}

fn validate_property(
    index: usize,
    property: &PropertyHolding,
) -> Result<(), ProfileError> {
    for (field, value) in [
        ("rental_income", property.rental_income),
        ("municipal_taxes", property.municipal_taxes),
        ("loan_interest", property.loan_interest),
    ] {
        if value < Decimal::ZERO {
            return Err(ProfileError::NegativePropertyAmount {
                index,
                field,
                value,
            });
        }
    }
    Ok(())
}

pub(crate) fn validate_investments(
    investments: &[InvestmentTransaction],
) -> Result<(), ProfileError> {
    for (index, investment) in investments.iter().enumerate() {
        for (field, value) in [
            ("buy_price", investment.buy_price),
            ("sell_price", investment.sell_price),
        ] {
            if value < Decimal::ZERO {
                return Err(ProfileError::NegativeInvestmentAmount {
                    index,
                    field,
                    value,
                });
            }
        }
    }
    Ok(())
}
