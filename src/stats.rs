//! Per-100,000 rate calculation
//!
//! Pure arithmetic, no I/O. Rates are normalized to a population baseline of
//! 100,000 for cross-country comparability.

use crate::{ReportError, Result};

/// Converts an absolute count into a per-100,000-population rate
///
/// Returns exactly `0.0` when the count is zero, regardless of population;
/// otherwise the rate is rounded to one decimal place, half away from zero.
///
/// # Arguments
///
/// * `population` - The country's population, must be positive
/// * `count` - The absolute statistic (cases or deaths)
///
/// # Returns
///
/// * `Ok(f64)` - The rate, one decimal place
/// * `Err(ReportError::InvalidPopulation)` - `population` is zero
pub fn per_hundred_thousand(population: u64, count: u64) -> Result<f64> {
    if population == 0 {
        return Err(ReportError::InvalidPopulation { population });
    }

    if count == 0 {
        return Ok(0.0);
    }

    let rate = count as f64 / (population as f64 / 100_000.0);
    Ok((rate * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_is_exactly_zero() {
        assert_eq!(per_hundred_thousand(1, 0).unwrap(), 0.0);
        assert_eq!(per_hundred_thousand(7_000_000_000, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_reference_rates() {
        // 100,000 cases over 50,000,000 people
        assert_eq!(per_hundred_thousand(50_000_000, 100_000).unwrap(), 200.0);
        // 1,000 deaths over 50,000,000 people
        assert_eq!(per_hundred_thousand(50_000_000, 1_000).unwrap(), 2.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 1234 / (3,000,000 / 100,000) = 41.1333...
        assert_eq!(per_hundred_thousand(3_000_000, 1_234).unwrap(), 41.1);
        // 5 / (350,000 / 100,000) = 1.4285...
        assert_eq!(per_hundred_thousand(350_000, 5).unwrap(), 1.4);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 9 / (400,000 / 100,000) = 2.25 -> 2.3
        assert_eq!(per_hundred_thousand(400_000, 9).unwrap(), 2.3);
    }

    #[test]
    fn test_zero_population_is_rejected() {
        let err = per_hundred_thousand(0, 10).unwrap_err();
        assert!(matches!(err, ReportError::InvalidPopulation { .. }));
        // Rejected even when the count is zero
        assert!(per_hundred_thousand(0, 0).is_err());
    }
}
