/// Whole-percent attendance rate for the day. Zero employees means zero
/// percent, not a division error.
pub fn attendance_rate(present: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as i64
}

/// Width of a department's distribution bar, in percent of the headcount.
pub fn department_width_pct(count: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn rate_tone_class(rate: i64) -> &'static str {
    if rate >= 80 {
        "text-emerald-600"
    } else if rate >= 50 {
        "text-amber-600"
    } else {
        "text-red-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_rounds_to_whole_percent() {
        assert_eq!(attendance_rate(4, 5), 80);
        assert_eq!(attendance_rate(1, 3), 33);
        assert_eq!(attendance_rate(2, 3), 67);
        assert_eq!(attendance_rate(5, 5), 100);
    }

    #[test]
    fn rate_is_zero_without_employees() {
        assert_eq!(attendance_rate(0, 0), 0);
        assert_eq!(attendance_rate(3, 0), 0);
    }

    #[test]
    fn department_widths_cover_the_headcount() {
        assert_eq!(department_width_pct(0, 0), 0.0);
        assert_eq!(department_width_pct(2, 4), 50.0);
        let widths = [department_width_pct(3, 5), department_width_pct(2, 5)];
        assert!((widths.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn rate_tone_thresholds() {
        assert_eq!(rate_tone_class(100), "text-emerald-600");
        assert_eq!(rate_tone_class(80), "text-emerald-600");
        assert_eq!(rate_tone_class(79), "text-amber-600");
        assert_eq!(rate_tone_class(50), "text-amber-600");
        assert_eq!(rate_tone_class(49), "text-red-500");
        assert_eq!(rate_tone_class(0), "text-red-500");
    }
}
