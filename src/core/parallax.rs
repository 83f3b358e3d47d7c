//! Scroll-linked hero parallax
//!
//! The hero content block drifts upward and fades out as the document scrolls.
//! Both effects are clamped linear ramps over the document scroll progress.

use serde::{Deserialize, Serialize};

/// Fraction of the scrollable height the user has scrolled, in `0.0..=1.0`.
///
/// Returns 0 when the document is not taller than the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Linear map from an input range onto an output range, clamped at both ends
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Ramp {
    pub fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    pub fn at(&self, x: f64) -> f64 {
        let (x0, x1) = self.from;
        let (y0, y1) = self.to;
        if x <= x0 {
            return y0;
        }
        if x >= x1 {
            return y1;
        }
        y0 + (x - x0) / (x1 - x0) * (y1 - y0)
    }
}

/// Hero parallax parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSpec {
    /// Scroll progress at which the upward drift is complete
    pub drift_until: f64,
    /// Total upward drift in pixels
    pub max_drift_px: f64,
    /// Scroll progress at which the block is fully transparent
    pub fade_until: f64,
}

impl Default for ParallaxSpec {
    fn default() -> Self {
        Self {
            drift_until: 0.3,
            max_drift_px: 100.0,
            fade_until: 0.25,
        }
    }
}

impl ParallaxSpec {
    pub fn drift(&self) -> Ramp {
        Ramp::new((0.0, self.drift_until), (0.0, -self.max_drift_px))
    }

    pub fn fade(&self) -> Ramp {
        Ramp::new((0.0, self.fade_until), (1.0, 0.0))
    }

    pub fn at(&self, progress: f64) -> HeroTransform {
        HeroTransform {
            translate_y: self.drift().at(progress),
            opacity: self.fade().at(progress),
        }
    }

    pub fn check(&self) -> Result<(), String> {
        for (name, until) in [("drift", self.drift_until), ("fade", self.fade_until)] {
            if !(until.is_finite() && until > 0.0 && until <= 1.0) {
                return Err(format!("parallax {name} end must be within (0, 1]"));
            }
        }
        if !(self.max_drift_px.is_finite() && self.max_drift_px >= 0.0) {
            return Err("parallax drift must not be negative".to_string());
        }
        Ok(())
    }
}

/// Hero block offset and opacity for one scroll position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub translate_y: f64,
    pub opacity: f64,
}

impl HeroTransform {
    pub fn css(&self) -> String {
        format!(
            "transform: translateY({}px); opacity: {};",
            self.translate_y, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_progress_basic() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_clamps_overscroll() {
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_short_document() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_ramp_clamps_outside_range() {
        let ramp = Ramp::new((0.0, 0.3), (0.0, -100.0));
        assert_eq!(ramp.at(-1.0), 0.0);
        assert_eq!(ramp.at(0.3), -100.0);
        assert_eq!(ramp.at(0.9), -100.0);
    }

    #[test]
    fn test_ramp_interpolates_linearly() {
        let ramp = Ramp::new((0.0, 0.25), (1.0, 0.0));
        assert!((ramp.at(0.125) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hero_at_top_is_neutral() {
        let t = ParallaxSpec::default().at(0.0);
        assert_eq!(t.translate_y, 0.0);
        assert_eq!(t.opacity, 1.0);
    }

    #[test]
    fn test_hero_endpoints() {
        let spec = ParallaxSpec::default();
        assert_eq!(spec.at(0.25).opacity, 0.0);
        assert_eq!(spec.at(0.3).translate_y, -100.0);
        assert_eq!(spec.at(0.6).translate_y, -100.0);
        assert_eq!(spec.at(0.6).opacity, 0.0);
    }

    #[test]
    fn test_hero_is_monotonic() {
        let spec = ParallaxSpec::default();
        let mut last = spec.at(0.0);
        for step in 1..=100 {
            let next = spec.at(step as f64 / 100.0);
            assert!(next.translate_y <= last.translate_y);
            assert!(next.opacity <= last.opacity);
            last = next;
        }
    }

    #[test]
    fn test_check_rejects_zero_range() {
        let spec = ParallaxSpec {
            fade_until: 0.0,
            ..ParallaxSpec::default()
        };
        assert!(spec.check().is_err());
    }

    #[test]
    fn test_css() {
        let css = ParallaxSpec::default().at(0.0).css();
        assert_eq!(css, "transform: translateY(0px); opacity: 1;");
    }
}
