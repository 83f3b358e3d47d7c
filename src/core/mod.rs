//! Page behavior and content, independent of the rendering layer

pub mod choreography;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod disclosure;
pub mod lead;
pub mod nav;
pub mod parallax;
pub mod settings;
#[cfg(test)]
mod tests;

pub use choreography::{Choreography, Motion, MotionSpec, RevealLatch};
pub use content::{PageContent, VariantRegistry, registry};
pub use disclosure::Disclosure;
pub use lead::{LeadOutcome, LeadRequest, LeadSink, NoopLeadSink};
pub use nav::{MobileMenu, NavTreatment};
pub use parallax::{HeroTransform, ParallaxSpec, scroll_progress};
pub use settings::SiteSettings;
