//! Scroll-reveal choreography
//!
//! Provides:
//! - RevealLatch, the one-shot "has this section been seen" state
//! - Motion presets (fade-up and scale-in) with index-based stagger
//! - Inline style generation for the hidden and visible poses

use serde::{Deserialize, Serialize};

/// Easing shared by every entrance transition
pub const REVEAL_EASING: &str = "cubic-bezier(0, 0, 0.2, 1)";

/// One-shot visibility latch owned by a section.
///
/// `Armed` is the initial state. The first intersecting observation moves it to
/// `Revealed`; `Static` is used when the browser cannot observe intersections at all.
/// Neither terminal state ever changes again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealLatch {
    #[default]
    Armed,
    Revealed,
    Static,
}

impl RevealLatch {
    /// Feed one intersection observation. Returns `true` if the latch changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if *self == RevealLatch::Armed && intersecting {
            *self = RevealLatch::Revealed;
            return true;
        }
        false
    }

    /// Give up on observing: show content immediately without animating.
    pub fn degrade(&mut self) -> bool {
        if *self == RevealLatch::Armed {
            *self = RevealLatch::Static;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, RevealLatch::Armed)
    }

    pub fn animates(&self) -> bool {
        !matches!(self, RevealLatch::Static)
    }
}

/// Entrance animation presets used across sections
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Fade in while sliding up
    Fade,
    /// Fade in while growing from a reduced scale
    ScaleIn,
}

/// A visual pose: opacity plus the transform components we animate
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub opacity: f64,
    #[serde(default)]
    pub translate_y: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({});",
            self.opacity, self.translate_y, self.scale
        )
    }
}

/// Constant per-index delay step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub step_secs: f64,
}

impl Stagger {
    pub fn delay(&self, index: usize) -> f64 {
        index as f64 * self.step_secs
    }
}

/// Timing and start pose for one motion preset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionSpec {
    pub hidden: Pose,
    pub stagger: Stagger,
    pub duration_secs: f64,
}

impl MotionSpec {
    pub fn fade() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                translate_y: 40.0,
                scale: 1.0,
            },
            stagger: Stagger { step_secs: 0.12 },
            duration_secs: 0.6,
        }
    }

    pub fn scale_in() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                translate_y: 0.0,
                scale: 0.8,
            },
            stagger: Stagger { step_secs: 0.15 },
            duration_secs: 0.5,
        }
    }

    /// Inline style for the child at `index` given the section latch
    pub fn style(&self, index: usize, latch: RevealLatch) -> String {
        if !latch.is_visible() {
            return self.hidden.css();
        }
        if !latch.animates() {
            return Pose::VISIBLE.css();
        }
        let delay = round_ms(self.stagger.delay(index));
        format!(
            "{} transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
            Pose::VISIBLE.css(),
            d = self.duration_secs,
            e = REVEAL_EASING,
        )
    }
}

// CSS timings are printed with millisecond precision
fn round_ms(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

/// Tunable animation parameters for a page variant
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choreography {
    /// How far inside the viewport a section must be before it reveals
    pub reveal_margin_px: f64,
    pub fade: MotionSpec,
    pub scale_in: MotionSpec,
    pub parallax: crate::core::parallax::ParallaxSpec,
    pub nav_threshold_px: f64,
}

impl Default for Choreography {
    fn default() -> Self {
        Self {
            reveal_margin_px: 100.0,
            fade: MotionSpec::fade(),
            scale_in: MotionSpec::scale_in(),
            parallax: crate::core::parallax::ParallaxSpec::default(),
            nav_threshold_px: crate::core::nav::SCROLL_THRESHOLD_PX,
        }
    }
}

impl Choreography {
    pub fn motion(&self, motion: Motion) -> &MotionSpec {
        match motion {
            Motion::Fade => &self.fade,
            Motion::ScaleIn => &self.scale_in,
        }
    }

    /// IntersectionObserver `rootMargin` shrinking the viewport by the reveal margin
    pub fn root_margin(&self) -> String {
        format!("-{}px", self.reveal_margin_px.max(0.0))
    }

    pub fn check(&self) -> Result<(), String> {
        let specs = [("fade", &self.fade), ("scale_in", &self.scale_in)];
        for (name, spec) in specs {
            if !(spec.stagger.step_secs.is_finite() && spec.stagger.step_secs > 0.0) {
                return Err(format!("{name} stagger step must be positive"));
            }
            if !(spec.duration_secs.is_finite() && spec.duration_secs >= 0.0) {
                return Err(format!("{name} duration must not be negative"));
            }
            if !(0.0..=1.0).contains(&spec.hidden.opacity) {
                return Err(format!("{name} hidden opacity must be within 0..=1"));
            }
        }
        if !(self.reveal_margin_px.is_finite() && self.reveal_margin_px >= 0.0) {
            return Err("reveal margin must not be negative".to_string());
        }
        if !(self.nav_threshold_px.is_finite() && self.nav_threshold_px >= 0.0) {
            return Err("nav threshold must not be negative".to_string());
        }
        self.parallax.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_armed_and_hidden() {
        let latch = RevealLatch::default();
        assert_eq!(latch, RevealLatch::Armed);
        assert!(!latch.is_visible());
    }

    #[test]
    fn test_latch_ignores_non_intersecting_observations() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert_eq!(latch, RevealLatch::Armed);
    }

    #[test]
    fn test_latch_reveals_once_and_stays() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(true));
        assert!(latch.is_visible());

        // scroll out, back in, out again
        for intersecting in [false, true, false, true] {
            assert!(!latch.observe(intersecting));
            assert_eq!(latch, RevealLatch::Revealed);
        }
    }

    #[test]
    fn test_degraded_latch_is_visible_without_animation() {
        let mut latch = RevealLatch::default();
        assert!(latch.degrade());
        assert!(latch.is_visible());
        assert!(!latch.animates());
        assert!(!latch.observe(true));
        assert_eq!(latch, RevealLatch::Static);
    }

    #[test]
    fn test_degrade_after_reveal_keeps_animation() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        assert!(!latch.degrade());
        assert_eq!(latch, RevealLatch::Revealed);
    }

    #[test]
    fn test_stagger_steps_by_constant() {
        let spec = MotionSpec::fade();
        let delays: Vec<f64> = (0..6).map(|i| spec.stagger.delay(i)).collect();
        assert_eq!(delays[0], 0.0);
        for pair in delays.windows(2) {
            let step = pair[1] - pair[0];
            assert!(step > 0.0);
            assert!((step - 0.12).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hidden_style_uses_preset_pose() {
        let fade = MotionSpec::fade().style(3, RevealLatch::Armed);
        assert!(fade.contains("opacity: 0;"));
        assert!(fade.contains("translateY(40px)"));
        assert!(!fade.contains("transition"));

        let scale = MotionSpec::scale_in().style(0, RevealLatch::Armed);
        assert!(scale.contains("scale(0.8)"));
    }

    #[test]
    fn test_revealed_style_carries_index_delay() {
        let style = MotionSpec::scale_in().style(2, RevealLatch::Revealed);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("0.5s"));
        assert!(style.contains(" 0.3s"));
        assert!(style.contains(REVEAL_EASING));
    }

    #[test]
    fn test_revealed_style_prints_clean_delays() {
        // 0.12 * 3 is not exactly 0.36 in floating point
        let style = MotionSpec::fade().style(3, RevealLatch::Revealed);
        assert!(style.contains(" 0.36s"));
    }

    #[test]
    fn test_static_style_has_no_transition() {
        let style = MotionSpec::fade().style(5, RevealLatch::Static);
        assert_eq!(style, Pose::VISIBLE.css());
    }

    #[test]
    fn test_root_margin_from_reveal_margin() {
        let choreography = Choreography::default();
        assert_eq!(choreography.root_margin(), "-100px");
    }

    #[test]
    fn test_default_choreography_passes_check() {
        assert!(Choreography::default().check().is_ok());
    }

    #[test]
    fn test_check_rejects_zero_stagger() {
        let mut choreography = Choreography::default();
        choreography.scale_in.stagger.step_secs = 0.0;
        let err = choreography.check().unwrap_err();
        assert!(err.contains("scale_in"));
    }

    #[test]
    fn test_partial_choreography_json_uses_defaults() {
        let choreography: Choreography =
            serde_json::from_str(r#"{ "reveal_margin_px": 60 }"#).unwrap();
        assert_eq!(choreography.root_margin(), "-60px");
        assert_eq!(choreography.fade, MotionSpec::fade());
        assert_eq!(choreography.nav_threshold_px, 40.0);
    }
}
