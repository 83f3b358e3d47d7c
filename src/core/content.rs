//! Page content configuration
//!
//! Every landing page variant (A/B copy drafts) is one `PageContent` record.
//! Built-in variants are embedded JSON documents parsed once at first use.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::core::choreography::Choreography;

/// Section anchors the navigation may point at
pub const SECTION_IDS: [&str; 5] = ["features", "how", "pricing", "faq", "contact"];

/// Key of the variant used when nothing else selects one
pub const DEFAULT_VARIANT: &str = "pinky";

const BUILTIN_VARIANTS: [(&str, &str); 2] = [
    ("pinky", include_str!("../../content/pinky.json")),
    ("pinky-direct", include_str!("../../content/pinky-direct.json")),
];

/// Content loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("variant {variant}: invalid JSON: {source}")]
    Parse {
        variant: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("variant {0} is defined more than once")]
    DuplicateVariant(String),

    #[error("variant {variant}: {reason}")]
    Invalid { variant: String, reason: String },

    #[error("no page variants available")]
    NoVariants,
}

/// Heading with a highlighted trailing phrase
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub lead: String,
    #[serde(default)]
    pub accent: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Icon, title and description; used for problems and features
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    /// Shown in the dashboard mockup address bar
    pub domain: String,
    pub company: String,
    pub company_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavContent {
    pub links: Vec<Link>,
    pub cta: Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub tagline: String,
    pub headline: Headline,
    pub subtitle: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemContent {
    pub headline: Headline,
    pub subtitle: String,
    pub cards: Vec<Card>,
    pub closing: Headline,
}

/// Eyebrow line, heading and optional subtitle shared by several sections
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionIntro {
    pub eyebrow: String,
    pub headline: Headline,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub intro: SectionIntro,
    pub items: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsContent {
    pub intro: SectionIntro,
    pub items: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub eyebrow: String,
    pub quote: Headline,
    pub author: String,
    pub role: String,
    pub footnote: String,
}

impl Testimonial {
    /// Avatar letter
    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContent {
    pub intro: SectionIntro,
    /// Printed after each price, e.g. "one-time"
    pub price_suffix: String,
    pub tiers: Vec<PricingTier>,
}

impl PricingContent {
    pub fn highlighted(&self) -> Option<&PricingTier> {
        self.tiers.iter().find(|t| t.highlighted)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqContent {
    pub intro: SectionIntro,
    pub items: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    pub headline: Headline,
    pub body: String,
    pub email_placeholder: String,
    pub submit_label: String,
    pub booking_prefix: String,
    pub booking: Link,
    pub booking_suffix: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub tagline: String,
    pub links: Vec<Link>,
}

/// Complete content configuration for one landing page variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub key: String,
    pub title: String,
    pub brand: Brand,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub problem: ProblemContent,
    pub features: FeaturesContent,
    pub steps: StepsContent,
    pub testimonial: Testimonial,
    pub pricing: PricingContent,
    pub faq: FaqContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
    #[serde(default)]
    pub choreography: Choreography,
}

impl PageContent {
    pub fn from_json(variant: &str, json: &str) -> Result<Self, ContentError> {
        let content: PageContent =
            serde_json::from_str(json).map_err(|source| ContentError::Parse {
                variant: variant.to_string(),
                source,
            })?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let invalid = |reason: String| ContentError::Invalid {
            variant: self.key.clone(),
            reason,
        };

        if self.key.trim().is_empty() {
            return Err(invalid("key must not be empty".to_string()));
        }

        let nav_targets = self.nav.links.iter().chain(std::iter::once(&self.nav.cta));
        for link in nav_targets {
            if !is_section_anchor(&link.href) {
                return Err(invalid(format!(
                    "nav link {:?} must point at a page section, got {:?}",
                    link.label, link.href
                )));
            }
        }

        let lists = [
            ("problem cards", self.problem.cards.len()),
            ("features", self.features.items.len()),
            ("steps", self.steps.items.len()),
            ("pricing tiers", self.pricing.tiers.len()),
            ("faq entries", self.faq.items.len()),
        ];
        for (name, len) in lists {
            if len == 0 {
                return Err(invalid(format!("{name} must not be empty")));
            }
        }

        let highlighted = self.pricing.tiers.iter().filter(|t| t.highlighted).count();
        if highlighted > 1 {
            return Err(invalid(format!(
                "at most one pricing tier may be highlighted, found {highlighted}"
            )));
        }

        if !self.contact.booking.href.starts_with("mailto:") {
            return Err(invalid(format!(
                "booking link must be a mailto: link, got {:?}",
                self.contact.booking.href
            )));
        }

        self.choreography.check().map_err(invalid)
    }
}

fn is_section_anchor(href: &str) -> bool {
    href.strip_prefix('#')
        .is_some_and(|id| SECTION_IDS.contains(&id))
}

/// All page variants known to the site
#[derive(Debug, Default)]
pub struct VariantRegistry {
    variants: Vec<PageContent>,
}

impl VariantRegistry {
    /// Parse and validate `(name, json)` sources, rejecting duplicate keys
    pub fn load(sources: &[(&str, &str)]) -> Result<Self, ContentError> {
        if sources.is_empty() {
            return Err(ContentError::NoVariants);
        }

        let mut seen = HashSet::new();
        let mut variants = Vec::with_capacity(sources.len());
        for (name, json) in sources {
            let content = PageContent::from_json(name, json)?;
            if !seen.insert(content.key.clone()) {
                return Err(ContentError::DuplicateVariant(content.key));
            }
            variants.push(content);
        }
        Ok(Self { variants })
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::load(&BUILTIN_VARIANTS)
    }

    pub fn get(&self, key: &str) -> Option<&PageContent> {
        self.variants.iter().find(|v| v.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Pick a variant: the requested key, then the site default, then the
    /// built-in default, then whatever comes first.
    pub fn resolve(&self, requested: Option<&str>, site_default: &str) -> Option<&PageContent> {
        if let Some(key) = requested {
            match self.get(key) {
                Some(content) => return Some(content),
                None => leptos::logging::warn!("unknown page variant {key:?}, using default"),
            }
        }
        self.get(site_default)
            .or_else(|| self.get(DEFAULT_VARIANT))
            .or_else(|| self.variants.first())
    }
}

static REGISTRY: LazyLock<VariantRegistry> = LazyLock::new(|| {
    VariantRegistry::builtin().unwrap_or_else(|err| {
        leptos::logging::error!("failed to load page content: {err}");
        VariantRegistry::default()
    })
});

/// Built-in variants, parsed on first use
pub fn registry() -> &'static VariantRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_json() -> &'static str {
        BUILTIN_VARIANTS[0].1
    }

    fn edit(f: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value = serde_json::from_str(builtin_json()).unwrap();
        f(&mut value);
        value.to_string()
    }

    #[test]
    fn test_builtin_variants_load() {
        let registry = VariantRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 2);
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, vec!["pinky", "pinky-direct"]);
    }

    #[test]
    fn test_builtin_default_page_shape() {
        let registry = VariantRegistry::builtin().unwrap();
        let page = registry.get(DEFAULT_VARIANT).unwrap();

        assert_eq!(page.nav.links.len(), 5);
        assert_eq!(page.problem.cards.len(), 3);
        assert_eq!(page.features.items.len(), 6);
        assert_eq!(page.steps.items.len(), 3);
        assert_eq!(page.pricing.tiers.len(), 3);
        assert_eq!(page.faq.items.len(), 6);
        assert_eq!(page.pricing.highlighted().map(|t| t.name.as_str()), Some("Pro"));
        assert_eq!(page.choreography, Choreography::default());
    }

    #[test]
    fn test_all_nav_anchors_are_sections() {
        let registry = VariantRegistry::builtin().unwrap();
        let page = registry.get(DEFAULT_VARIANT).unwrap();
        let hrefs: Vec<&str> = page.nav.links.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#features", "#how", "#pricing", "#faq", "#contact"]);
    }

    #[test]
    fn test_invalid_json_reports_variant() {
        let err = PageContent::from_json("broken", "{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref variant, .. } if variant == "broken"));
        assert!(err.to_string().starts_with("variant broken: invalid JSON"));
    }

    #[test]
    fn test_rejects_external_nav_link() {
        let json = edit(|v| v["nav"]["links"][0]["href"] = "https://example.com".into());
        let err = PageContent::from_json("pinky", &json).unwrap_err();
        assert!(matches!(err, ContentError::Invalid { .. }));
        assert!(err.to_string().contains("must point at a page section"));
    }

    #[test]
    fn test_rejects_unknown_anchor() {
        let json = edit(|v| v["nav"]["cta"]["href"] = "#team".into());
        assert!(PageContent::from_json("pinky", &json).is_err());
    }

    #[test]
    fn test_rejects_two_highlighted_tiers() {
        let json = edit(|v| v["pricing"]["tiers"][0]["highlighted"] = true.into());
        let err = PageContent::from_json("pinky", &json).unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_rejects_empty_faq() {
        let json = edit(|v| v["faq"]["items"] = serde_json::json!([]));
        let err = PageContent::from_json("pinky", &json).unwrap_err();
        assert!(err.to_string().contains("faq entries must not be empty"));
    }

    #[test]
    fn test_rejects_non_mailto_booking() {
        let json = edit(|v| v["contact"]["booking"]["href"] = "https://cal.com/x".into());
        assert!(PageContent::from_json("pinky", &json).is_err());
    }

    #[test]
    fn test_rejects_bad_choreography() {
        let json = edit(|v| {
            v["choreography"] = serde_json::json!({ "parallax": { "fade_until": 2.0 } })
        });
        let err = PageContent::from_json("pinky", &json).unwrap_err();
        assert!(err.to_string().contains("parallax fade"));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let json = builtin_json();
        let err = VariantRegistry::load(&[("a", json), ("b", json)]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateVariant(ref k) if k == "pinky"));
    }

    #[test]
    fn test_empty_sources_rejected() {
        assert!(matches!(
            VariantRegistry::load(&[]),
            Err(ContentError::NoVariants)
        ));
    }

    #[test]
    fn test_resolve_order() {
        let registry = VariantRegistry::builtin().unwrap();

        let page = registry.resolve(Some("pinky-direct"), DEFAULT_VARIANT).unwrap();
        assert_eq!(page.key, "pinky-direct");

        let page = registry.resolve(None, "pinky-direct").unwrap();
        assert_eq!(page.key, "pinky-direct");

        let page = registry.resolve(Some("nope"), "also-nope").unwrap();
        assert_eq!(page.key, DEFAULT_VARIANT);
    }

    #[test]
    fn test_resolve_on_empty_registry() {
        let registry = VariantRegistry::default();
        assert!(registry.resolve(None, DEFAULT_VARIANT).is_none());
    }

    #[test]
    fn test_testimonial_initial() {
        let registry = VariantRegistry::builtin().unwrap();
        let page = registry.get(DEFAULT_VARIANT).unwrap();
        assert_eq!(page.testimonial.initial(), "S");
    }
}
