//! Monthly demand curve shared by the synthetic forecast path and the model bridge.
//!
//! [`GrowthPolicy::PerYear`] (the default) restarts the accumulation at month 13
//! using the year-two rate. [`GrowthPolicy::Cumulative`] carries the full year-one
//! rise into year two. Seasonality always uses a twelve month period.

use std::f64::consts::PI;

use super::domain::{round2, MonthlyPoint};

pub const FORECAST_MONTHS: usize = 24;
pub const SEASONAL_PERIOD_MONTHS: f64 = 12.0;
pub const SEASONAL_AMPLITUDE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    #[default]
    PerYear,
    Cumulative,
}

impl GrowthPolicy {
    /// Fractional uplift over the base demand for month `index` (0-based).
    fn progress(self, index: usize, year1_growth: f64, year2_growth: f64) -> f64 {
        let position = (index % 12) as f64;
        if index < 12 {
            return (year1_growth / 12.0) * (position + 1.0) / 100.0;
        }
        match self {
            GrowthPolicy::PerYear => (year2_growth / 12.0) * (position + 1.0) / 100.0,
            GrowthPolicy::Cumulative => {
                (year1_growth + (year2_growth / 12.0) * (position + 1.0)) / 100.0
            }
        }
    }
}

pub fn generate_monthly_series(
    base_demand: f64,
    year1_growth: f64,
    year2_growth: f64,
) -> Vec<MonthlyPoint> {
    generate_monthly_series_with(GrowthPolicy::default(), base_demand, year1_growth, year2_growth)
}

pub fn generate_monthly_series_with(
    policy: GrowthPolicy,
    base_demand: f64,
    year1_growth: f64,
    year2_growth: f64,
) -> Vec<MonthlyPoint> {
    let base_demand = finite_or_zero(base_demand);
    let year1_growth = finite_or_zero(year1_growth);
    let year2_growth = finite_or_zero(year2_growth);

    (0..FORECAST_MONTHS)
        .map(|index| {
            let progress = policy.progress(index, year1_growth, year2_growth);
            let demand = base_demand * (1.0 + progress) * seasonal_multiplier(index);
            MonthlyPoint {
                month: month_label(index),
                demand: clamp_demand(demand),
            }
        })
        .collect()
}

pub fn seasonal_multiplier(index: usize) -> f64 {
    1.0 + SEASONAL_AMPLITUDE * (2.0 * PI * index as f64 / SEASONAL_PERIOD_MONTHS).sin()
}

pub fn month_label(index: usize) -> String {
    format!("Month {}", index + 1)
}

/// Clamps to the 0-100 demand scale and rounds to two decimals. NaN maps to 0.
pub fn clamp_demand(value: f64) -> f64 {
    round2(finite_or_zero(value).clamp(0.0, 100.0))
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_twenty_four_labelled_months() {
        let series = generate_monthly_series(68.0, 14.0, 22.0);
        assert_eq!(series.len(), FORECAST_MONTHS);
        assert_eq!(series[0].month, "Month 1");
        assert_eq!(series[23].month, "Month 24");
    }

    #[test]
    fn applies_growth_and_seasonality() {
        let series = generate_monthly_series(68.0, 14.0, 22.0);
        assert_eq!(series[0].demand, 68.79);
        assert_eq!(series[3].demand, 78.29);
    }

    #[test]
    fn year_two_restarts_from_the_second_rate() {
        let series = generate_monthly_series(50.0, 12.0, 24.0);
        // month 13 sits at the same seasonal phase as month 1
        assert_eq!(series[12].demand, 51.0);
        assert_eq!(series[0].demand, 50.5);
    }

    #[test]
    fn cumulative_policy_carries_year_one_growth() {
        let series = generate_monthly_series_with(GrowthPolicy::Cumulative, 50.0, 12.0, 24.0);
        assert_eq!(series[12].demand, 57.0);
        assert_eq!(series[11].demand, generate_monthly_series(50.0, 12.0, 24.0)[11].demand);
    }

    #[test]
    fn clamps_to_demand_scale() {
        let high = generate_monthly_series(100.0, 60.0, 60.0);
        assert!(high.iter().all(|point| point.demand <= 100.0));
        assert!(high.iter().any(|point| point.demand == 100.0));

        let negative = generate_monthly_series(40.0, -2000.0, -2000.0);
        assert!(negative.iter().all(|point| point.demand >= 0.0));
    }

    #[test]
    fn non_finite_inputs_degrade_to_zero() {
        let series = generate_monthly_series(f64::NAN, f64::INFINITY, 5.0);
        assert!(series.iter().all(|point| point.demand == 0.0));
    }

    #[test]
    fn is_deterministic() {
        let inputs = [(0.0, 0.0, 0.0), (85.0, 12.0, 18.0), (100.0, 35.0, 42.0), (13.5, -4.0, 7.25)];
        for (base, y1, y2) in inputs {
            assert_eq!(
                generate_monthly_series(base, y1, y2),
                generate_monthly_series(base, y1, y2)
            );
        }
    }

    #[test]
    fn stays_in_range_across_input_grid() {
        for base in (0..=100).step_by(5) {
            for y1 in (-30..=60).step_by(15) {
                for y2 in (-30..=60).step_by(15) {
                    let series =
                        generate_monthly_series(f64::from(base), f64::from(y1), f64::from(y2));
                    assert_eq!(series.len(), FORECAST_MONTHS);
                    assert!(series
                        .iter()
                        .all(|point| (0.0..=100.0).contains(&point.demand)));
                }
            }
        }
    }
}
