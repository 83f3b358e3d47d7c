//! Navigation bar state
//!
//! The bar switches from a transparent to a frosted treatment once the page has
//! scrolled past a small threshold. On narrow viewports a toggle shows a stacked
//! link list which closes again whenever one of its links is followed.

/// Scroll offset, in CSS pixels, above which the bar becomes frosted
pub const SCROLL_THRESHOLD_PX: f64 = 40.0;

/// Visual treatment of the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTreatment {
    Transparent,
    Frosted,
}

impl NavTreatment {
    /// `scroll_y <= threshold` stays transparent
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavTreatment::Frosted
        } else {
            NavTreatment::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavTreatment::Transparent => "bg-transparent",
            NavTreatment::Frosted => "bg-zinc-950/80 backdrop-blur-xl border-b border-zinc-800/50",
        }
    }
}

/// Mobile menu disclosure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A link in the stacked list was activated
    pub fn follow_link(&mut self) {
        self.open = false;
    }
}
