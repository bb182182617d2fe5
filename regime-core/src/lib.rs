//! Dual-regime income-tax computation engine.
//!
//! Takes a validated [`FinancialProfile`] (salary, property holdings,
//! investment transactions, Old-regime deduction claims) and computes the
//! liability under the Old and New tax regimes, side by side, so a caller
//! can recommend the cheaper one. The engine is pure and synchronous: no
//! I/O, no shared state, nothing retained across invocations. Transport,
//! schema binding, and serialization belong to the caller.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::models::{DeductionClaims, FinancialProfile, Regime};
//!
//! let profile = FinancialProfile {
//!     gross_salary: dec!(1500000),
//!     properties: vec![],
//!     investments: vec![],
//!     deductions: DeductionClaims {
//!         section_80c: dec!(0),
//!         health_insurance: dec!(0),
//!         nps_voluntary: dec!(0),
//!     },
//! };
//!
//! let comparison = regime_core::compare(&profile).unwrap();
//!
//! assert_eq!(comparison.recommended, Regime::New);
//! assert_eq!(comparison.new.components.total_tax, dec!(97500.00));
//! assert_eq!(comparison.old.components.total_tax, dec!(257400.00));
//! assert_eq!(comparison.savings, dec!(159900.00));
//! ```

pub mod calculations;
pub mod config;
pub mod models;

pub use calculations::{
    CapitalGains, CapitalGainsConfig, CapitalGainsConfigError, CapitalGainsResult,
    ComputationError, DeductionLimits, DeductionLimitsError, NewRegimeComputation,
    OldRegimeComputation, PropertyConfig, PropertyConfigError, PropertyIncome, SlabError,
    SlabSchedule, TaxSlab,
};
pub use config::{RegimeConfig, RegimeConfigError, old_regime_deduction_limits};
pub use models::{
    AssetClass, ChartPoint, ComparisonResult, ComparisonRow, DeductionClaims, FinancialProfile,
    InvestmentTransaction, Occupancy, ProfileError, PropertyHolding, Regime, RegimeDetails,
    RegimeResult, TaxComponents,
};

/// Old-regime liability for a profile, under the current statutory
/// configuration.
pub fn compute_old_regime(
    profile: &FinancialProfile,
) -> Result<RegimeResult, ComputationError> {
    OldRegimeComputation::new(RegimeConfig::old_regime(), old_regime_deduction_limits())
        .calculate(profile)
}

/// New-regime liability for a profile, under the current statutory
/// configuration.
pub fn compute_new_regime(
    profile: &FinancialProfile,
) -> Result<RegimeResult, ComputationError> {
    NewRegimeComputation::new(RegimeConfig::new_regime()).calculate(profile)
}

/// Runs both pipelines over the same profile and recommends the cheaper
/// regime. Ties go to Old.
pub fn compare(profile: &FinancialProfile) -> Result<ComparisonResult, ComputationError> {
    let old = compute_old_regime(profile)?;
    let new = compute_new_regime(profile)?;
    Ok(calculations::compare_results(old, new))
}

/// Standalone capital-gains computation over a set of transactions,
/// using the same rules the regime pipelines apply.
pub fn compute_capital_gains(
    transactions: &[InvestmentTransaction],
) -> Result<CapitalGainsResult, ComputationError> {
    models::validate_investments(transactions)?;

    let config = RegimeConfig::new_regime().capital_gains;
    let result = CapitalGains::new(&config)
        .calculate(transactions)
        .map_err(RegimeConfigError::from)?;
    Ok(result)
}
