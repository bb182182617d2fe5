//! Capital-gains tax on investment transactions.
//!
//! Transactions are classified by asset class and holding term into
//! aggregate buckets, skipping non-positive gains entirely (losses are
//! never offset against gains here):
//!
//! | Bucket            | Treatment                                        |
//! |-------------------|--------------------------------------------------|
//! | equity, long-term | 12.5% on the aggregate above a 125,000 exemption |
//! | equity, short-term| 20% flat                                         |
//! | other, long-term  | 12.5% flat                                       |
//! | other, short-term | excluded from this tax (reported, not taxed)     |
//!
//! The equity exemption applies once to the aggregate long-term gain, not
//! per transaction. Short-term gains on non-equity assets belong to slab
//! income in principle; neither pipeline routes them there today, so the
//! calculator surfaces the excluded aggregate in its result and logs it
//! instead of dropping it silently.
//!
//! The rules are regime-agnostic: each regime owns a [`CapitalGainsConfig`]
//! instance, so a future divergence between the regimes is a config edit,
//! not a code change.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::capital_gains::{CapitalGains, CapitalGainsConfig};
//! use regime_core::models::{AssetClass, InvestmentTransaction};
//!
//! let config = CapitalGainsConfig {
//!     equity_ltcg_exemption: dec!(125000),
//!     equity_ltcg_rate: dec!(0.125),
//!     equity_stcg_rate: dec!(0.20),
//!     other_ltcg_rate: dec!(0.125),
//! };
//!
//! let transactions = vec![InvestmentTransaction {
//!     asset_class: AssetClass::Equity,
//!     buy_price: dec!(100000),
//!     sell_price: dec!(400000),
//!     is_long_term: true,
//! }];
//!
//! let result = CapitalGains::new(&config).calculate(&transactions).unwrap();
//!
//! // (300,000 − 125,000) × 12.5%
//! assert_eq!(result.equity_ltcg_tax, dec!(21875.000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::floor_at_zero;
use crate::models::{AssetClass, InvestmentTransaction};

/// Errors for invalid capital-gains configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapitalGainsConfigError {
    #[error("{field} must be between 0 and 1, got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },

    #[error("equity LTCG exemption must be non-negative, got {0}")]
    NegativeExemption(Decimal),
}

/// Rates and the annual equity exemption for capital-gains tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalGainsConfig {
    /// Annual exemption on aggregate long-term equity gains.
    pub equity_ltcg_exemption: Decimal,

    pub equity_ltcg_rate: Decimal,
    pub equity_stcg_rate: Decimal,
    pub other_ltcg_rate: Decimal,
}

impl CapitalGainsConfig {
    pub fn validate(&self) -> Result<(), CapitalGainsConfigError> {
        if self.equity_ltcg_exemption < Decimal::ZERO {
            return Err(CapitalGainsConfigError::NegativeExemption(
                self.equity_ltcg_exemption,
            ));
        }
        for (field, value) in [
            ("equity_ltcg_rate", self.equity_ltcg_rate),
            ("equity_stcg_rate", self.equity_stcg_rate),
            ("other_ltcg_rate", self.other_ltcg_rate),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(CapitalGainsConfigError::RateOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

/// Result of the capital-gains computation, carrying the aggregate gain
/// buckets alongside the tax on each so callers can itemize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalGainsResult {
    /// Aggregate long-term equity gain, before the exemption.
    pub equity_ltcg: Decimal,

    /// Aggregate short-term equity gain.
    pub equity_stcg: Decimal,

    /// Aggregate long-term gain on non-equity assets.
    pub other_ltcg: Decimal,

    /// Aggregate short-term non-equity gain. Taxed nowhere today; carried
    /// here so the dropped liability stays visible.
    pub excluded_other_stcg: Decimal,

    pub equity_ltcg_tax: Decimal,
    pub equity_stcg_tax: Decimal,
    pub other_ltcg_tax: Decimal,

    /// Sum of the three taxed buckets.
    pub total_tax: Decimal,
}

/// Calculator for capital-gains tax over a set of transactions.
#[derive(Debug, Clone)]
pub struct CapitalGains<'a> {
    config: &'a CapitalGainsConfig,
}

impl<'a> CapitalGains<'a> {
    pub fn new(config: &'a CapitalGainsConfig) -> Self {
        Self { config }
    }

    /// Classifies every transaction, applies the bucket rates, and
    /// returns the itemized result at full precision.
    ///
    /// # Errors
    ///
    /// Returns [`CapitalGainsConfigError`] if the configuration is
    /// invalid.
    pub fn calculate(
        &self,
        transactions: &[InvestmentTransaction],
    ) -> Result<CapitalGainsResult, CapitalGainsConfigError> {
        self.config.validate()?;

        let mut equity_ltcg = Decimal::ZERO;
        let mut equity_stcg = Decimal::ZERO;
        let mut other_ltcg = Decimal::ZERO;
        let mut excluded_other_stcg = Decimal::ZERO;

        for transaction in transactions {
            let gain = transaction.gain();
            if gain <= Decimal::ZERO {
                continue;
            }
            match (transaction.asset_class, transaction.is_long_term) {
                (AssetClass::Equity, true) => equity_ltcg += gain,
                (AssetClass::Equity, false) => equity_stcg += gain,
                (AssetClass::Other, true) => other_ltcg += gain,
                (AssetClass::Other, false) => excluded_other_stcg += gain,
            }
        }

        if excluded_other_stcg > Decimal::ZERO {
            warn!(
                excluded_gain = %excluded_other_stcg,
                "short-term non-equity gains are not taxed by this computation"
            );
        }

        let equity_ltcg_tax = floor_at_zero(equity_ltcg - self.config.equity_ltcg_exemption)
            * self.config.equity_ltcg_rate;
        let equity_stcg_tax = equity_stcg * self.config.equity_stcg_rate;
        let other_ltcg_tax = other_ltcg * self.config.other_ltcg_rate;

        Ok(CapitalGainsResult {
            equity_ltcg,
            equity_stcg,
            other_ltcg,
            excluded_other_stcg,
            equity_ltcg_tax,
            equity_stcg_tax,
            other_ltcg_tax,
            total_tax: equity_ltcg_tax + equity_stcg_tax + other_ltcg_tax,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_config() -> CapitalGainsConfig {
        CapitalGainsConfig {
            equity_ltcg_exemption: dec!(125000),
            equity_ltcg_rate: dec!(0.125),
            equity_stcg_rate: dec!(0.20),
            other_ltcg_rate: dec!(0.125),
        }
    }

    fn transaction(
        asset_class: AssetClass,
        buy: Decimal,
        sell: Decimal,
        long_term: bool,
    ) -> InvestmentTransaction {
        InvestmentTransaction {
            asset_class,
            buy_price: buy,
            sell_price: sell,
            is_long_term: long_term,
        }
    }

    // =========================================================================
    // CapitalGainsConfig::validate tests
    // =========================================================================

    #[test]
    fn validate_accepts_current_rates() {
        assert_eq!(test_config().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_exemption() {
        let config = CapitalGainsConfig {
            equity_ltcg_exemption: dec!(-1),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(CapitalGainsConfigError::NegativeExemption(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let config = CapitalGainsConfig {
            equity_stcg_rate: dec!(1.2),
            ..test_config()
        };

        assert_eq!(
            config.validate(),
            Err(CapitalGainsConfigError::RateOutOfRange {
                field: "equity_stcg_rate",
                value: dec!(1.2),
            })
        );
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn equity_ltcg_above_the_exemption_is_taxed() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[transaction(
                AssetClass::Equity,
                dec!(100000),
                dec!(400000),
                true,
            )])
            .unwrap();

        assert_eq!(result.equity_ltcg, dec!(300000));
        assert_eq!(result.equity_ltcg_tax, dec!(21875.000));
        assert_eq!(result.total_tax, dec!(21875.000));
    }

    #[test]
    fn equity_ltcg_at_or_below_the_exemption_is_tax_free() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[transaction(
                AssetClass::Equity,
                dec!(0),
                dec!(125000),
                true,
            )])
            .unwrap();

        assert_eq!(result.equity_ltcg, dec!(125000));
        assert_eq!(result.equity_ltcg_tax, dec!(0));
    }

    #[test]
    fn the_exemption_applies_to_the_aggregate_not_per_transaction() {
        let config = test_config();

        // Two 100,000 gains: individually under the exemption, jointly over
        let result = CapitalGains::new(&config)
            .calculate(&[
                transaction(AssetClass::Equity, dec!(0), dec!(100000), true),
                transaction(AssetClass::Equity, dec!(0), dec!(100000), true),
            ])
            .unwrap();

        assert_eq!(result.equity_ltcg, dec!(200000));
        assert_eq!(result.equity_ltcg_tax, dec!(9375.000));
    }

    #[test]
    fn equity_stcg_is_taxed_flat_with_no_exemption() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[transaction(
                AssetClass::Equity,
                dec!(50000),
                dec!(90000),
                false,
            )])
            .unwrap();

        assert_eq!(result.equity_stcg, dec!(40000));
        assert_eq!(result.equity_stcg_tax, dec!(8000.00));
    }

    #[test]
    fn other_ltcg_is_taxed_flat() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[transaction(
                AssetClass::Other,
                dec!(200000),
                dec!(260000),
                true,
            )])
            .unwrap();

        assert_eq!(result.other_ltcg, dec!(60000));
        assert_eq!(result.other_ltcg_tax, dec!(7500.000));
    }

    #[test]
    fn other_stcg_is_excluded_but_reported() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[transaction(
                AssetClass::Other,
                dec!(10000),
                dec!(50000),
                false,
            )])
            .unwrap();

        assert_eq!(result.excluded_other_stcg, dec!(40000));
        assert_eq!(result.total_tax, dec!(0));
    }

    #[test]
    fn losses_are_skipped_not_offset() {
        let config = test_config();

        // The 20,000 loss does not reduce the 300,000 gain
        let result = CapitalGains::new(&config)
            .calculate(&[
                transaction(AssetClass::Equity, dec!(100000), dec!(400000), true),
                transaction(AssetClass::Equity, dec!(100000), dec!(80000), true),
            ])
            .unwrap();

        assert_eq!(result.equity_ltcg, dec!(300000));
        assert_eq!(result.equity_ltcg_tax, dec!(21875.000));
    }

    #[test]
    fn break_even_transactions_contribute_nothing() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[transaction(
                AssetClass::Equity,
                dec!(100000),
                dec!(100000),
                false,
            )])
            .unwrap();

        assert_eq!(result.equity_stcg, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }

    #[test]
    fn all_losses_produce_zero_tax() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[
                transaction(AssetClass::Equity, dec!(100000), dec!(90000), true),
                transaction(AssetClass::Other, dec!(50000), dec!(10000), false),
            ])
            .unwrap();

        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.excluded_other_stcg, dec!(0));
    }

    #[test]
    fn mixed_portfolio_sums_the_three_taxed_buckets() {
        let config = test_config();

        let result = CapitalGains::new(&config)
            .calculate(&[
                transaction(AssetClass::Equity, dec!(100000), dec!(400000), true),
                transaction(AssetClass::Equity, dec!(50000), dec!(90000), false),
                transaction(AssetClass::Other, dec!(200000), dec!(260000), true),
                transaction(AssetClass::Other, dec!(10000), dec!(50000), false),
            ])
            .unwrap();

        // 21,875 + 8,000 + 7,500
        assert_eq!(result.total_tax, dec!(37375.000));
        assert_eq!(result.excluded_other_stcg, dec!(40000));
    }

    #[test]
    fn no_transactions_produce_a_zeroed_result() {
        let config = test_config();

        let result = CapitalGains::new(&config).calculate(&[]).unwrap();

        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.equity_ltcg, dec!(0));
    }

    #[test]
    fn calculate_fails_fast_on_invalid_config() {
        let config = CapitalGainsConfig {
            other_ltcg_rate: dec!(2),
            ..test_config()
        };

        let result = CapitalGains::new(&config).calculate(&[]);

        assert_eq!(
            result,
            Err(CapitalGainsConfigError::RateOutOfRange {
                field: "other_ltcg_rate",
                value: dec!(2),
            })
        );
    }
}
