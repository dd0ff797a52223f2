//! Severity tiers: maps a reading to the bar's three-color scale.

use crate::models::Color;

/// Usage fraction above which a percentage metric turns red.
pub const CRITICAL_FRACTION: f64 = 0.90;

/// Usage fraction above which a percentage metric turns orange.
pub const WARNING_FRACTION: f64 = 0.75;

/// Color for a usage fraction (disk, memory, CPU).
///
/// Both breakpoints are exclusive. NaN (nothing to measure) is green.
pub fn color_for_fraction(fraction: f64) -> Color {
    if fraction > CRITICAL_FRACTION {
        Color::Red
    } else if fraction > WARNING_FRACTION {
        Color::Orange
    } else {
        Color::Green
    }
}

/// Color for the 1-minute load average relative to the CPU count.
pub fn color_for_load(lavg1: f64, cpu_count: usize) -> Color {
    let cpus = cpu_count.max(1) as f64;
    if lavg1 > cpus {
        Color::Red
    } else if lavg1 > cpus / 2.0 {
        Color::Orange
    } else {
        Color::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_tiers() {
        assert_eq!(color_for_fraction(0.0), Color::Green);
        assert_eq!(color_for_fraction(0.5), Color::Green);
        assert_eq!(color_for_fraction(0.8), Color::Orange);
        assert_eq!(color_for_fraction(0.95), Color::Red);
        assert_eq!(color_for_fraction(1.0), Color::Red);
    }

    #[test]
    fn test_fraction_breakpoints_are_exclusive() {
        assert_eq!(color_for_fraction(0.75), Color::Green);
        assert_eq!(color_for_fraction(0.9), Color::Orange);
        assert_eq!(color_for_fraction(0.750_001), Color::Orange);
        assert_eq!(color_for_fraction(0.900_001), Color::Red);
    }

    #[test]
    fn test_fraction_tiers_cover_unit_interval() {
        for i in 0..=1000 {
            let p = i as f64 / 1000.0;
            let color = color_for_fraction(p);
            let expected = if p > 0.9 {
                Color::Red
            } else if p > 0.75 {
                Color::Orange
            } else {
                Color::Green
            };
            assert_eq!(color, expected, "p = {}", p);
        }
    }

    #[test]
    fn test_fraction_nan_is_green() {
        assert_eq!(color_for_fraction(f64::NAN), Color::Green);
    }

    #[test]
    fn test_load_tiers_scale_with_cpus() {
        assert_eq!(color_for_load(4.5, 4), Color::Red);
        assert_eq!(color_for_load(2.5, 4), Color::Orange);
        assert_eq!(color_for_load(1.0, 4), Color::Green);
        assert_eq!(color_for_load(4.0, 4), Color::Orange);
        assert_eq!(color_for_load(2.0, 4), Color::Green);
        assert_eq!(color_for_load(4.5, 16), Color::Green);
    }

    #[test]
    fn test_load_zero_cpus_treated_as_one() {
        assert_eq!(color_for_load(1.5, 0), Color::Red);
    }
}
