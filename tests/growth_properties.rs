//! End-to-end properties of growth projections

use approx::assert_relative_eq;
use growth_projection::projection::{future_value, Granularity};
use growth_projection::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GrowthEngine, GrowthInput,
    GrowthResult, ProjectionConfig, MAX_HORIZON_YEARS,
};

const COMPOUNDINGS: [CompoundingFrequency; 5] = [
    CompoundingFrequency::Annually,
    CompoundingFrequency::SemiAnnually,
    CompoundingFrequency::Quarterly,
    CompoundingFrequency::Monthly,
    CompoundingFrequency::Daily,
];

fn project(input: &GrowthInput) -> GrowthResult {
    GrowthEngine::default().project(input).expect("valid input")
}

fn saver(
    compounding: CompoundingFrequency,
    frequency: ContributionFrequency,
    timing: ContributionTiming,
    horizon_years: f64,
) -> GrowthInput {
    GrowthInput::lump_sum(5_000.0, 0.065, compounding, horizon_years)
        .with_contributions(250.0, frequency, timing)
}

fn all_savers(horizon_years: f64) -> Vec<GrowthInput> {
    let mut inputs = Vec::new();
    for compounding in COMPOUNDINGS {
        for frequency in [ContributionFrequency::Monthly, ContributionFrequency::Annually] {
            for timing in [ContributionTiming::Beginning, ContributionTiming::End] {
                inputs.push(saver(compounding, frequency, timing, horizon_years));
            }
        }
    }
    inputs
}

#[test]
fn ending_balance_is_principal_plus_interest() {
    for horizon in [0.5, 1.0, 7.25, 30.0] {
        for input in all_savers(horizon) {
            let result = project(&input);
            assert_relative_eq!(
                result.ending_balance,
                result.total_principal + result.total_interest,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                result.total_interest,
                result.interest_from_initial + result.interest_from_contributions,
                epsilon = 1e-6,
                max_relative = 1e-6
            );
        }
    }
}

#[test]
fn zero_rate_earns_no_interest() {
    for mut input in all_savers(12.5) {
        input.annual_rate = 0.0;
        input.contribution_amount = 123.45;
        let result = project(&input);

        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.ending_balance, input.initial_principal + result.total_contributions);
        assert!(result.schedule.yearly.iter().all(|r| r.interest_earned == 0.0));
        assert!(result.schedule.monthly.iter().all(|r| r.interest_earned == 0.0));
    }
}

#[test]
fn no_contributions_is_lump_sum_growth() {
    for compounding in COMPOUNDINGS {
        let input = GrowthInput::lump_sum(1_000.0, 0.05, compounding, 9.75);
        let result = project(&input);

        assert_eq!(result.total_contributions, 0.0);
        assert_eq!(result.interest_from_contributions, 0.0);
        assert_eq!(
            result.ending_balance,
            future_value(1_000.0, 0.05, compounding.periods_per_year(), 9.75)
        );
    }
}

#[test]
fn longer_horizon_never_decreases_balance() {
    for template in all_savers(1.0) {
        let mut prior = 0.0;
        for months in 1..=60 {
            let input = GrowthInput {
                horizon_years: GrowthInput::horizon_from(0, months),
                ..template.clone()
            };
            let balance = project(&input).ending_balance;
            assert!(
                balance >= prior,
                "{:?}: balance fell from {} to {} at {} months",
                template,
                prior,
                balance,
                months
            );
            prior = balance;
        }
    }
}

#[test]
fn beginning_timing_beats_end_timing() {
    for compounding in COMPOUNDINGS {
        for frequency in [ContributionFrequency::Monthly, ContributionFrequency::Annually] {
            for horizon in [1.0, 4.5, 25.0] {
                let begin =
                    project(&saver(compounding, frequency, ContributionTiming::Beginning, horizon));
                let end = project(&saver(compounding, frequency, ContributionTiming::End, horizon));
                assert!(begin.ending_balance >= end.ending_balance);
                assert_eq!(begin.total_contributions, end.total_contributions);
            }
        }
    }
}

#[test]
fn last_yearly_record_matches_result() {
    for years in [1, 5, 40] {
        for input in all_savers(years as f64) {
            let result = project(&input);
            assert_eq!(result.schedule.yearly.len(), years);
            let last = result.schedule.final_record().expect("yearly rows");
            assert_relative_eq!(last.ending_balance, result.ending_balance, max_relative = 1e-9);
        }
    }
}

#[test]
fn schedule_balances_are_non_decreasing() {
    for input in all_savers(6.5) {
        let result = project(&input);
        for rows in [&result.schedule.yearly, &result.schedule.monthly] {
            for pair in rows.windows(2) {
                assert!(pair[1].ending_balance >= pair[0].ending_balance);
                assert!(pair[1].interest_earned >= pair[0].interest_earned);
            }
        }
    }
}

#[test]
fn scenario_lump_sum_eight_percent() {
    let input = GrowthInput::lump_sum(1_000.0, 0.08, CompoundingFrequency::Annually, 10.0);
    let result = project(&input);
    assert_relative_eq!(result.ending_balance, 2158.92, epsilon = 0.01);
    assert_relative_eq!(result.ending_balance, 1_000.0 * 1.08_f64.powi(10), max_relative = 1e-12);
}

#[test]
fn scenario_monthly_deposits_one_year() {
    let input = GrowthInput::lump_sum(0.0, 0.06, CompoundingFrequency::Monthly, 1.0)
        .with_contributions(
            100.0,
            ContributionFrequency::Monthly,
            ContributionTiming::Beginning,
        );
    let result = project(&input);

    assert_relative_eq!(result.total_contributions, 1200.0);
    assert!(result.ending_balance > 1200.0);
    // Annuity-due value: 100 * s(12) at 0.5% * 1.005
    let expected = 100.0 * ((1.005_f64.powi(12) - 1.0) / 0.005) * 1.005;
    assert_relative_eq!(result.ending_balance, expected, max_relative = 1e-9);
}

#[test]
fn closed_form_and_simulation_agree() {
    let simulated = GrowthEngine::new(ProjectionConfig {
        monthly_schedule: true,
        closed_form_when_aligned: false,
    });
    let closed = GrowthEngine::default();

    for input in all_savers(GrowthInput::horizon_from(17, 5)) {
        let a = simulated.project(&input).expect("valid input");
        let b = closed.project(&input).expect("valid input");
        assert_relative_eq!(a.ending_balance, b.ending_balance, max_relative = 1e-9);
        for (x, y) in a.schedule.monthly.iter().zip(&b.schedule.monthly) {
            assert_relative_eq!(x.ending_balance, y.ending_balance, max_relative = 1e-9);
        }
    }
}

#[test]
fn monthly_and_yearly_grains_agree_at_year_ends() {
    let input = saver(
        CompoundingFrequency::Daily,
        ContributionFrequency::Monthly,
        ContributionTiming::End,
        8.0,
    );
    let result = project(&input);

    let year_ends: Vec<_> = result
        .schedule
        .records(Granularity::Monthly)
        .iter()
        .filter(|r| r.is_year_end)
        .collect();
    assert_eq!(year_ends.len(), result.schedule.yearly.len());

    for (monthly, yearly) in year_ends.iter().zip(&result.schedule.yearly) {
        assert_eq!(monthly.year_index, yearly.year_index);
        assert_relative_eq!(monthly.ending_balance, yearly.ending_balance, max_relative = 1e-12);
    }
}

#[test]
fn invalid_inputs_produce_no_result() {
    let engine = GrowthEngine::default();
    let valid = GrowthInput::lump_sum(1_000.0, 0.05, CompoundingFrequency::Monthly, 5.0);

    let cases = [
        GrowthInput { horizon_years: 0.0, ..valid.clone() },
        GrowthInput { horizon_years: -2.0, ..valid.clone() },
        GrowthInput { initial_principal: -1.0, ..valid.clone() },
        GrowthInput { annual_rate: -0.05, ..valid.clone() },
        GrowthInput { contribution_amount: 50.0, ..valid.clone() },
        GrowthInput { horizon_years: MAX_HORIZON_YEARS + 1.0, ..valid.clone() },
        GrowthInput { horizon_years: 1e12, ..valid.clone() },
    ];

    for input in &cases {
        assert!(engine.project(input).is_none(), "{:?} should be rejected", input);
    }
}

#[test]
fn adjusted_result_scales_uniformly() {
    let result = project(&saver(
        CompoundingFrequency::Monthly,
        ContributionFrequency::Monthly,
        ContributionTiming::End,
        10.0,
    ));
    let real = result.adjusted(0.8);

    assert_relative_eq!(real.ending_balance, result.ending_balance * 0.8);
    assert_relative_eq!(
        real.ending_balance,
        real.total_principal + real.total_interest,
        max_relative = 1e-9
    );
    assert_eq!(real.schedule.yearly.len(), result.schedule.yearly.len());
}
