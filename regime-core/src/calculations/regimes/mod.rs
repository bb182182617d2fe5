//! The two regime pipelines and the comparator.
//!
//! Each pipeline composes the salary, property, deduction (Old only),
//! slab, and capital-gains stages into a total liability with cess, and
//! reports it as a [`RegimeResult`]. The comparator runs both over the
//! same profile and recommends the cheaper one.

pub mod new;
pub mod old;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::calculations::deductions::DeductionLimitsError;
use crate::config::RegimeConfigError;
use crate::models::{
    ChartPoint, ComparisonResult, ComparisonRow, ProfileError, Regime, RegimeDetails,
    RegimeResult, TaxComponents,
};

pub use new::NewRegimeComputation;
pub use old::OldRegimeComputation;

/// Errors a regime computation can fail with. Every failure is detected
/// before any figure is produced; there are no partial results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComputationError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Config(#[from] RegimeConfigError),

    #[error(transparent)]
    DeductionLimits(#[from] DeductionLimitsError),
}

/// Builds the reported result from full-precision stage outputs. This is
/// the rounding boundary: components and chart values are rounded here,
/// and the total is rounded from the full-precision sum.
pub(crate) fn assemble_result(
    regime: Regime,
    slab_tax: Decimal,
    investment_tax: Decimal,
    cess_rate: Decimal,
    details: RegimeDetails,
) -> RegimeResult {
    let pre_cess = slab_tax + investment_tax;
    let cess = pre_cess * cess_rate;

    let components = TaxComponents {
        slab_tax: round_half_up(slab_tax),
        investment_tax: round_half_up(investment_tax),
        cess: round_half_up(cess),
        total_tax: round_half_up(pre_cess + cess),
    };
    let chart_data = vec![
        ChartPoint {
            label: "Slab Tax".to_string(),
            value: components.slab_tax,
        },
        ChartPoint {
            label: "Investment Tax".to_string(),
            value: components.investment_tax,
        },
        ChartPoint {
            label: "Cess (4%)".to_string(),
            value: components.cess,
        },
    ];

    RegimeResult {
        regime,
        components,
        chart_data,
        details,
    }
}

/// Combines two regime results into the comparison report.
///
/// The recommendation goes to New only on strictly lower total tax;
/// equal totals resolve to Old. Savings is the absolute difference of
/// the reported totals.
pub fn compare_results(
    old: RegimeResult,
    new: RegimeResult,
) -> ComparisonResult {
    let recommended = if new.components.total_tax < old.components.total_tax {
        Regime::New
    } else {
        Regime::Old
    };
    let savings = round_half_up((old.components.total_tax - new.components.total_tax).abs());
    let comparison_chart = vec![
        ComparisonRow {
            label: "Total Tax".to_string(),
            old_regime: old.components.total_tax,
            new_regime: new.components.total_tax,
        },
        ComparisonRow {
            label: "Income Tax (Slab)".to_string(),
            old_regime: old.components.slab_tax,
            new_regime: new.components.slab_tax,
        },
    ];

    ComparisonResult {
        old,
        new,
        recommended,
        savings,
        comparison_chart,
    }
}
