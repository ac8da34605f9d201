use serde::{Deserialize, Serialize};

/// A closed frequency interval in Hz. A point value has `low == high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HzInterval {
    pub low: f64,
    pub high: f64,
}

impl HzInterval {
    /// Build an interval, ordering the bounds.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn point(hz: f64) -> Self {
        Self { low: hz, high: hz }
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_point(&self) -> bool {
        self.low == self.high
    }

    /// Closed-interval intersection: touching endpoints intersect.
    pub fn intersects(&self, other: &HzInterval) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// True when `other` lies entirely inside this interval.
    pub fn contains(&self, other: &HzInterval) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Width equality with a relative tolerance, so that widths computed from
    /// differently-scaled bounds still compare equal.
    pub fn same_width(&self, other: &HzInterval) -> bool {
        let (a, b) = (self.width(), other.width());
        (a - b).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0)
    }
}

impl std::fmt::Display for HzInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_point() {
            f.write_str(&format_hz(self.low))
        } else {
            write!(f, "{}-{}", format_hz(self.low), format_hz(self.high))
        }
    }
}

/// Format a Hz value for display using the largest unit that keeps it >= 1.
pub fn format_hz(hz: f64) -> String {
    let abs = hz.abs();
    if abs >= 1e9 {
        format!("{} GHz", trim_float(hz / 1e9))
    } else if abs >= 1e6 {
        format!("{} MHz", trim_float(hz / 1e6))
    } else if abs >= 1e3 {
        format!("{} kHz", trim_float(hz / 1e3))
    } else {
        format!("{} Hz", trim_float(hz))
    }
}

fn trim_float(v: f64) -> String {
    let s = format!("{:.3}", v);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_bounds() {
        let iv = HzInterval::new(200.0, 1.0);
        assert_eq!(iv.low, 1.0);
        assert_eq!(iv.high, 200.0);
    }

    #[test]
    fn touching_intervals_intersect() {
        let a = HzInterval::new(1.0, 200.0);
        let b = HzInterval::new(200.0, 300.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_intervals_do_not_intersect() {
        let a = HzInterval::new(1.0, 200.0);
        let b = HzInterval::new(201.0, 300.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn point_inside_interval() {
        let range = HzInterval::new(20_000.0, 200_000.0);
        let p = HzInterval::point(40_000.0);
        assert!(range.intersects(&p));
        assert!(range.contains(&p));
        assert!(p.is_point());
        assert_eq!(p.width(), 0.0);
    }

    #[test]
    fn same_width_across_scales() {
        let a = HzInterval::new(0.0, 1_000.0);
        let b = HzInterval::new(1_000_000.0, 1_001_000.0);
        assert!(a.same_width(&b));
        assert!(!a.same_width(&HzInterval::new(0.0, 999.0)));
    }

    #[test]
    fn display_picks_unit() {
        assert_eq!(HzInterval::point(40_000.0).to_string(), "40 kHz");
        assert_eq!(HzInterval::new(1.0, 200.0).to_string(), "1 Hz-200 Hz");
        assert_eq!(format_hz(2_400.0), "2.4 kHz");
        assert_eq!(format_hz(2_450_000_000.0), "2.45 GHz");
        assert_eq!(format_hz(0.4), "0.4 Hz");
    }
}
