//! Progressive slab tax with a rebate cliff.
//!
//! A [`SlabSchedule`] is a list of marginal-rate slabs ordered by
//! descending threshold, plus a rebate limit. Income at or below the
//! rebate limit owes nothing at all (a cliff, not a phase-out: one rupee
//! above the limit is taxed by the full ladder from the bottom slab up).
//! Above the cliff, tax is computed top-down by peeling: the amount above
//! each threshold is taxed at that slab's rate, then the remaining income
//! is reduced to the threshold before the next lower slab is evaluated.
//! Income below the lowest threshold is untaxed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::slab::{SlabSchedule, TaxSlab};
//!
//! let schedule = SlabSchedule {
//!     rebate_limit: dec!(500000),
//!     slabs: vec![
//!         TaxSlab { threshold: dec!(1000000), rate: dec!(0.30) },
//!         TaxSlab { threshold: dec!(500000), rate: dec!(0.20) },
//!         TaxSlab { threshold: dec!(250000), rate: dec!(0.05) },
//!     ],
//! };
//! schedule.validate().unwrap();
//!
//! // At the cliff: nothing owed.
//! assert_eq!(schedule.tax_on(dec!(500000)), dec!(0));
//! // Above it, the whole ladder applies.
//! assert_eq!(schedule.tax_on(dec!(1450000)), dec!(247500));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for a malformed slab schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabError {
    #[error("rebate limit must be non-negative, got {0}")]
    NegativeRebateLimit(Decimal),

    #[error("slab {index}: threshold must be non-negative, got {value}")]
    NegativeThreshold { index: usize, value: Decimal },

    #[error("slab {index}: rate must be between 0 and 1, got {value}")]
    RateOutOfRange { index: usize, value: Decimal },

    #[error("slab {index}: threshold {value} must be below the previous slab's")]
    ThresholdOutOfOrder { index: usize, value: Decimal },
}

/// One marginal-rate slab: `rate` applies to income above `threshold`,
/// up to the next higher slab's threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub threshold: Decimal,
    pub rate: Decimal,
}

/// A regime's full slab ladder plus its rebate limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabSchedule {
    pub rebate_limit: Decimal,
    /// Slabs ordered by strictly descending threshold.
    pub slabs: Vec<TaxSlab>,
}

impl SlabSchedule {
    /// Rejects schedules the peeling loop cannot evaluate sensibly:
    /// out-of-order thresholds, rates outside [0, 1], negative amounts.
    pub fn validate(&self) -> Result<(), SlabError> {
        if self.rebate_limit < Decimal::ZERO {
            return Err(SlabError::NegativeRebateLimit(self.rebate_limit));
        }
        let mut previous: Option<Decimal> = None;
        for (index, slab) in self.slabs.iter().enumerate() {
            if slab.threshold < Decimal::ZERO {
                return Err(SlabError::NegativeThreshold {
                    index,
                    value: slab.threshold,
                });
            }
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(SlabError::RateOutOfRange {
                    index,
                    value: slab.rate,
                });
            }
            if let Some(previous) = previous {
                if slab.threshold >= previous {
                    return Err(SlabError::ThresholdOutOfOrder {
                        index,
                        value: slab.threshold,
                    });
                }
            }
            previous = Some(slab.threshold);
        }
        Ok(())
    }

    /// Slab tax on `taxable_income`, at full precision.
    ///
    /// Zero at or below the rebate limit; otherwise the peeling ladder.
    /// The result is continuous and non-decreasing in income everywhere
    /// above the cliff.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= self.rebate_limit {
            return Decimal::ZERO;
        }

        let mut remaining = taxable_income;
        let mut tax = Decimal::ZERO;
        for slab in &self.slabs {
            if remaining > slab.threshold {
                tax += (remaining - slab.threshold) * slab.rate;
                remaining = slab.threshold;
            }
        }
        tax
    }
}
