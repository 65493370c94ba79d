/// Vertical offset of a parallax banner for the given page scroll.
pub fn offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y.max(0.0) * rate
}

/// CSS `transform` value for the banner.
pub fn transform(scroll_y: f64, rate: f64) -> String {
    format!("translateY({:.2}px)", offset(scroll_y, rate))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_offset_is_proportional() {
        assert_eq!(offset(0.0, 0.3), 0.0);
        assert!((offset(250.0, 0.3) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_overscroll_is_clamped() {
        assert_eq!(offset(-40.0, 0.3), 0.0);
    }

    #[test]
    fn test_transform() {
        assert_eq!(transform(100.0, 0.3), "translateY(30.00px)");
        assert_eq!(transform(0.0, 0.3), "translateY(0.00px)");
        assert_eq!(transform(1.0, 0.3), "translateY(0.30px)");
    }
}
