//! Lump-sum compounding
//!
//! Inputs are assumed pre-validated (non-negative principal and rate,
//! positive period count, non-negative time).

/// Future value of `principal` after `years` with `periods_per_year` compounding periods
///
/// `principal * (1 + rate/n)^(n*years)`; `years == 0` returns `principal` unchanged.
pub fn future_value(principal: f64, annual_rate: f64, periods_per_year: u32, years: f64) -> f64 {
    if years <= 0.0 {
        return principal;
    }

    let n = periods_per_year as f64;
    principal * growth_factor(annual_rate / n, n * years)
}

/// Interest earned on a lump sum: `future_value(..) - principal`
pub fn interest_portion(
    principal: f64,
    annual_rate: f64,
    periods_per_year: u32,
    years: f64,
) -> f64 {
    future_value(principal, annual_rate, periods_per_year, years) - principal
}

/// `(1 + periodic_rate)^periods`, using an integer power when `periods` is whole
pub(crate) fn growth_factor(periodic_rate: f64, periods: f64) -> f64 {
    let base = 1.0 + periodic_rate;
    if periods.fract() == 0.0 && periods.abs() <= i32::MAX as f64 {
        base.powi(periods as i32)
    } else {
        base.powf(periods)
    }
}
