//! Property-based tests for the statutory invariants: rebate cliffs,
//! slab-tax continuity and monotonicity, property-loss bounds, the
//! equity LTCG exemption, and comparator consistency.

use proptest::collection::vec;
use proptest::prelude::{any, prop_assert, prop_assert_eq, prop_assume, proptest};
use regime_core::models::{
    AssetClass, DeductionClaims, FinancialProfile, InvestmentTransaction, Occupancy,
    PropertyHolding, Regime,
};
use regime_core::{CapitalGains, PropertyIncome, RegimeConfig, compare};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn money(amount: u32) -> Decimal {
    Decimal::from(amount)
}

fn holding(
    occupancy: Occupancy,
    rent: u32,
    municipal: u32,
    interest: u32,
) -> PropertyHolding {
    PropertyHolding {
        occupancy,
        rental_income: money(rent),
        municipal_taxes: money(municipal),
        loan_interest: money(interest),
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_new_slab_tax_is_zero_at_or_below_the_cliff(income in 0u32..=1_200_000) {
        let schedule = RegimeConfig::new_regime().slab_schedule;

        prop_assert_eq!(schedule.tax_on(money(income)), Decimal::ZERO);
    }

    #[test]
    fn prop_old_slab_tax_is_zero_at_or_below_the_cliff(income in 0u32..=500_000) {
        let schedule = RegimeConfig::old_regime().slab_schedule;

        prop_assert_eq!(schedule.tax_on(money(income)), Decimal::ZERO);
    }

    #[test]
    fn prop_slab_tax_is_non_decreasing(
        income in 0u32..5_000_000,
        step in 0u32..500_000
    ) {
        for config in [RegimeConfig::old_regime(), RegimeConfig::new_regime()] {
            let lower = config.slab_schedule.tax_on(money(income));
            let higher = config.slab_schedule.tax_on(money(income + step));

            prop_assert!(higher >= lower);
        }
    }

    #[test]
    fn prop_slab_tax_is_continuous_above_the_cliff(income in 1_200_001u32..5_000_000) {
        // A one-rupee step above the cliff changes the tax by at most the
        // top marginal rate; the only discontinuity sits at the cliff.
        for config in [RegimeConfig::old_regime(), RegimeConfig::new_regime()] {
            let at = config.slab_schedule.tax_on(money(income));
            let next = config.slab_schedule.tax_on(money(income + 1));

            prop_assert!(next - at >= Decimal::ZERO);
            prop_assert!(next - at <= dec!(0.30));
        }
    }

    #[test]
    fn prop_old_self_occupied_contribution_is_a_bounded_loss(interest in 0u32..2_000_000) {
        let config = RegimeConfig::old_regime().property;
        let contribution = PropertyIncome::new(&config)
            .old_regime(&[holding(Occupancy::SelfOccupied, 0, 0, interest)]);

        prop_assert!(contribution <= Decimal::ZERO);
        prop_assert!(contribution >= dec!(-200000));
    }

    #[test]
    fn prop_old_aggregate_property_loss_is_floored(
        holdings in vec(
            (any::<bool>(), 0u32..1_000_000, 0u32..100_000, 0u32..1_500_000),
            0..6
        )
    ) {
        let holdings: Vec<PropertyHolding> = holdings
            .into_iter()
            .map(|(self_occupied, rent, municipal, interest)| {
                let occupancy = if self_occupied {
                    Occupancy::SelfOccupied
                } else {
                    Occupancy::LetOut
                };
                holding(occupancy, rent, municipal, interest)
            })
            .collect();

        let config = RegimeConfig::old_regime().property;
        let contribution = PropertyIncome::new(&config).old_regime(&holdings);

        prop_assert!(contribution >= dec!(-200000));
    }

    #[test]
    fn prop_new_property_contribution_is_never_negative(
        holdings in vec(
            (any::<bool>(), 0u32..1_000_000, 0u32..100_000, 0u32..1_500_000),
            0..6
        )
    ) {
        let holdings: Vec<PropertyHolding> = holdings
            .into_iter()
            .map(|(self_occupied, rent, municipal, interest)| {
                let occupancy = if self_occupied {
                    Occupancy::SelfOccupied
                } else {
                    Occupancy::LetOut
                };
                holding(occupancy, rent, municipal, interest)
            })
            .collect();

        let config = RegimeConfig::new_regime().property;

        prop_assert!(PropertyIncome::new(&config).new_regime(&holdings) >= Decimal::ZERO);
    }

    #[test]
    fn prop_capital_gains_tax_is_zero_without_positive_gains(
        trades in vec((any::<bool>(), any::<bool>(), 0u32..1_000_000, 0u32..1_000_000), 0..8)
    ) {
        // Order each price pair so every sale breaks even or loses.
        let transactions: Vec<InvestmentTransaction> = trades
            .into_iter()
            .map(|(equity, long_term, a, b)| InvestmentTransaction {
                asset_class: if equity { AssetClass::Equity } else { AssetClass::Other },
                buy_price: money(a.max(b)),
                sell_price: money(a.min(b)),
                is_long_term: long_term,
            })
            .collect();

        let config = RegimeConfig::new_regime().capital_gains;
        let result = CapitalGains::new(&config).calculate(&transactions).unwrap();

        prop_assert_eq!(result.total_tax, Decimal::ZERO);
        prop_assert_eq!(result.excluded_other_stcg, Decimal::ZERO);
    }

    #[test]
    fn prop_equity_ltcg_within_the_exemption_is_untaxed(
        first_gain in 0u32..=125_000,
        second_gain in 0u32..=125_000
    ) {
        prop_assume!(first_gain + second_gain <= 125_000);

        let transactions = vec![
            InvestmentTransaction {
                asset_class: AssetClass::Equity,
                buy_price: money(0),
                sell_price: money(first_gain),
                is_long_term: true,
            },
            InvestmentTransaction {
                asset_class: AssetClass::Equity,
                buy_price: money(0),
                sell_price: money(second_gain),
                is_long_term: true,
            },
        ];

        let config = RegimeConfig::old_regime().capital_gains;
        let result = CapitalGains::new(&config).calculate(&transactions).unwrap();

        prop_assert_eq!(result.equity_ltcg_tax, Decimal::ZERO);
    }

    #[test]
    fn prop_comparator_recommends_the_cheaper_regime(
        gross_salary in 0u32..5_000_000,
        section_80c in 0u32..300_000,
        health_insurance in 0u32..60_000,
        nps_voluntary in 0u32..100_000,
        rent in 0u32..1_000_000,
        interest in 0u32..600_000,
        buy in 0u32..500_000,
        sell in 0u32..900_000,
        long_term in any::<bool>()
    ) {
        let profile = FinancialProfile {
            gross_salary: money(gross_salary),
            properties: vec![holding(Occupancy::LetOut, rent, 0, interest)],
            investments: vec![InvestmentTransaction {
                asset_class: AssetClass::Equity,
                buy_price: money(buy),
                sell_price: money(sell),
                is_long_term: long_term,
            }],
            deductions: DeductionClaims {
                section_80c: money(section_80c),
                health_insurance: money(health_insurance),
                nps_voluntary: money(nps_voluntary),
            },
        };

        let comparison = compare(&profile).unwrap();

        let (recommended, other) = match comparison.recommended {
            Regime::Old => (&comparison.old, &comparison.new),
            Regime::New => (&comparison.new, &comparison.old),
        };
        prop_assert!(recommended.components.total_tax <= other.components.total_tax);

        let difference =
            (comparison.old.components.total_tax - comparison.new.components.total_tax).abs();
        prop_assert!((comparison.savings - difference).abs() <= dec!(0.01));
    }
}
