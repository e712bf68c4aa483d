use std::time::Duration;

/// Running-average frame rate.
///
/// Returns `frames / elapsed_seconds`, computed from whole milliseconds. At
/// startup the denominator is (close to) zero; any result above `ceiling`, or
/// any non-finite result, is reported as `0.0`.
pub fn average_fps(frames: u64, elapsed: Duration, ceiling: f32) -> f32 {
    let secs = elapsed.as_millis() as f32 / 1_000.0;
    let avg = frames as f32 / secs;
    if !avg.is_finite() || avg > ceiling {
        0.0
    } else {
        avg
    }
}

/// Formats `value` with six significant digits and no trailing zeros,
/// e.g. `59.9401`, `60`, `0`.
pub fn format_fps(value: f32) -> String {
    const SIGNIFICANT: i32 = 6;

    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT - 1 - magnitude).max(0) as usize;
    let mut text = format!("{value:.decimals$}");

    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const CEILING: f32 = 500_000.0;

    #[test]
    fn zero_elapsed_yields_zero() {
        assert_eq!(average_fps(0, Duration::ZERO, CEILING), 0.0);
        assert_eq!(average_fps(1, Duration::ZERO, CEILING), 0.0);
    }

    #[test]
    fn sub_millisecond_elapsed_yields_zero() {
        assert_eq!(average_fps(3, Duration::from_micros(900), CEILING), 0.0);
    }

    #[test]
    fn steady_rate() {
        let fps = average_fps(120, Duration::from_secs(2), CEILING);
        assert!((fps - 60.0).abs() < 1e-4);
    }

    #[test]
    fn above_ceiling_is_clamped() {
        assert_eq!(average_fps(1_000, Duration::from_millis(1), CEILING), 0.0);
        assert!(average_fps(1_000, Duration::from_millis(1), 2_000_000.0) > 0.0);
    }

    #[test]
    fn format_trims_trailing_zeros() {
        assert_eq!(format_fps(60.0), "60");
        assert_eq!(format_fps(59.5), "59.5");
        assert_eq!(format_fps(0.0), "0");
    }

    #[test]
    fn format_keeps_six_significant_digits() {
        assert_eq!(format_fps(59.940_12), "59.9401");
        assert_eq!(format_fps(123_456.7), "123457");
        assert_eq!(format_fps(1.5), "1.5");
    }

    #[test]
    fn format_non_finite_is_zero() {
        assert_eq!(format_fps(f32::NAN), "0");
        assert_eq!(format_fps(f32::INFINITY), "0");
    }
}
