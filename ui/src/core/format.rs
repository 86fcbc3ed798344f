//! Formatting helpers for presenting gauges and counters.

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_celsius(value: f64) -> String {
    format!("{value:.1}°C")
}

/// Inline style for a gauge fill, clamped to the track.
pub fn bar_width(value: f64) -> String {
    let clamped = if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("width: {clamped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_celsius(48.26), "48.3°C");
    }

    #[test]
    fn bars_clamp_to_track() {
        assert_eq!(bar_width(42.5), "width: 42.5%");
        assert_eq!(bar_width(130.0), "width: 100%");
        assert_eq!(bar_width(-3.0), "width: 0%");
        assert_eq!(bar_width(f64::NAN), "width: 0%");
    }
}
