// src/domain/yield_calc.rs

/// Gross rental yield: annual rent as a percentage of the purchase price,
/// rounded to 2 decimals.
///
/// Absent or zero inputs give no yield.
///
/// ```text
/// price = 400000; monthly_rent = 2000  ->  6.0
/// ```
pub fn gross_yield(price: Option<i64>, monthly_rent: Option<i64>) -> Option<f64> {
    let price = price.filter(|p| *p != 0)?;
    let monthly_rent = monthly_rent.filter(|r| *r != 0)?;

    let annual_rent = monthly_rent as f64 * 12.0;
    let yield_pct = annual_rent / price as f64 * 100.0;
    round2(yield_pct)
}

/// Half-to-even on the exact binary value, so 46.125 becomes 46.12.
fn round2(value: f64) -> Option<f64> {
    format!("{value:.2}").parse().ok()
}
