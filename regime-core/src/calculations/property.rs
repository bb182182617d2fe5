//! House-property income, Old and New regime variants.
//!
//! Both variants share the let-out arithmetic: net annual value (rental
//! income minus municipal taxes), of which a fixed share is taxable after
//! the statutory 30% standard deduction on NAV, less the full loan
//! interest. Everything else differs by regime:
//!
//! | Holding        | Old regime                          | New regime |
//! |----------------|-------------------------------------|------------|
//! | Self-occupied  | −min(loan interest, 200,000)        | 0          |
//! | Let-out        | uncapped, may be negative           | floored at 0 per holding |
//! | Aggregate      | floored at −200,000 across holdings | always ≥ 0 |
//!
//! The Old-regime floor applies to the total, not per property: one deep
//! let-out loss can absorb the whole set-off allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::floor_at_zero;
use crate::models::{Occupancy, PropertyHolding};

/// Errors for invalid property configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyConfigError {
    #[error("NAV taxable share must be between 0 and 1, got {0}")]
    InvalidNavTaxableShare(Decimal),

    #[error("self-occupied interest cap must be non-negative, got {0}")]
    NegativeInterestCap(Decimal),

    #[error("loss set-off cap must be non-negative, got {0}")]
    NegativeLossCap(Decimal),
}

/// Statutory constants for house-property computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Share of NAV that stays taxable after the 30% standard deduction.
    pub nav_taxable_share: Decimal,

    /// Ceiling on deductible self-occupied loan interest (Old regime).
    pub self_occupied_interest_cap: Decimal,

    /// Ceiling on aggregate property loss set off against other income
    /// in a single year (Old regime).
    pub loss_set_off_cap: Decimal,
}

impl PropertyConfig {
    pub fn validate(&self) -> Result<(), PropertyConfigError> {
        if self.nav_taxable_share < Decimal::ZERO || self.nav_taxable_share > Decimal::ONE {
            return Err(PropertyConfigError::InvalidNavTaxableShare(
                self.nav_taxable_share,
            ));
        }
        if self.self_occupied_interest_cap < Decimal::ZERO {
            return Err(PropertyConfigError::NegativeInterestCap(
                self.self_occupied_interest_cap,
            ));
        }
        if self.loss_set_off_cap < Decimal::ZERO {
            return Err(PropertyConfigError::NegativeLossCap(self.loss_set_off_cap));
        }
        Ok(())
    }
}

/// Calculator for the property contribution to slab income.
#[derive(Debug, Clone)]
pub struct PropertyIncome<'a> {
    config: &'a PropertyConfig,
}

impl<'a> PropertyIncome<'a> {
    pub fn new(config: &'a PropertyConfig) -> Self {
        Self { config }
    }

    /// Old-regime contribution: self-occupied interest is a capped loss,
    /// let-out income is uncapped in both directions, and the aggregate
    /// is floored at `−loss_set_off_cap`.
    pub fn old_regime(
        &self,
        holdings: &[PropertyHolding],
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        for holding in holdings {
            total += match holding.occupancy {
                Occupancy::SelfOccupied => {
                    -holding
                        .loan_interest
                        .min(self.config.self_occupied_interest_cap)
                }
                Occupancy::LetOut => self.let_out_income(holding),
            };
        }

        let floor = -self.config.loss_set_off_cap;
        if total < floor {
            warn!(
                aggregate_loss = %total,
                cap = %self.config.loss_set_off_cap,
                "property loss exceeds the set-off cap; excess carries no benefit"
            );
            return floor;
        }
        total
    }

    /// New-regime contribution: self-occupied holdings contribute nothing
    /// (interest is not deductible), and a let-out loss cannot offset
    /// salary income, so each holding is floored at zero.
    pub fn new_regime(
        &self,
        holdings: &[PropertyHolding],
    ) -> Decimal {
        let mut total = Decimal::ZERO;
        for holding in holdings {
            match holding.occupancy {
                Occupancy::SelfOccupied => {}
                Occupancy::LetOut => {
                    let income = self.let_out_income(holding);
                    if income < Decimal::ZERO {
                        warn!(
                            loss = %income,
                            "let-out loss cannot offset salary income; floored at zero"
                        );
                    }
                    total += floor_at_zero(income);
                }
            }
        }
        total
    }

    /// Taxable let-out income: `share × (rent − municipal taxes) − interest`.
    fn let_out_income(
        &self,
        holding: &PropertyHolding,
    ) -> Decimal {
        let nav = holding.rental_income - holding.municipal_taxes;
        self.config.nav_taxable_share * nav - holding.loan_interest
    }
}
