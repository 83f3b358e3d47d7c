#[cfg(test)]
mod tests {
    use crate::core::{
        Choreography, Disclosure, MobileMenu, Motion, NavTreatment, RevealLatch, registry,
        scroll_progress,
    };

    /// A section laid out at `top..top + height` in document coordinates
    struct SectionBox {
        top: f64,
        height: f64,
        latch: RevealLatch,
    }

    const VIEWPORT: f64 = 900.0;
    const DOCUMENT: f64 = 6000.0;

    // What IntersectionObserver reports for a viewport shrunk by `margin` on each side
    fn intersecting(section: &SectionBox, scroll_y: f64, margin: f64) -> bool {
        let view_top = scroll_y + margin;
        let view_bottom = scroll_y + VIEWPORT - margin;
        section.top < view_bottom && section.top + section.height > view_top
    }

    fn page() -> Vec<SectionBox> {
        [900.0, 1700.0, 2900.0, 3700.0, 4500.0, 5300.0]
            .into_iter()
            .map(|top| SectionBox {
                top,
                height: 600.0,
                latch: RevealLatch::default(),
            })
            .collect()
    }

    fn scroll_to(sections: &mut [SectionBox], scroll_y: f64, margin: f64) -> usize {
        let mut changes = 0;
        for section in sections.iter_mut() {
            let hit = intersecting(section, scroll_y, margin);
            if section.latch.observe(hit) {
                changes += 1;
            }
        }
        changes
    }

    #[test]
    fn test_sections_reveal_once_over_a_scroll_session() {
        let margin = Choreography::default().reveal_margin_px;
        let mut sections = page();

        let mut reveals = 0;
        // down, back up to the top, then down again
        let path = (0..=51)
            .map(|i| i as f64 * 100.0)
            .chain((0..=51).rev().map(|i| i as f64 * 100.0))
            .chain((0..=51).map(|i| i as f64 * 100.0));
        for y in path {
            reveals += scroll_to(&mut sections, y, margin);
        }

        assert_eq!(reveals, sections.len());
        assert!(sections.iter().all(|s| s.latch == RevealLatch::Revealed));
    }

    #[test]
    fn test_margin_delays_reveal() {
        let mut sections = page();
        // first section top is 50px above the viewport bottom edge
        let y = sections[0].top + 50.0 - VIEWPORT;

        assert_eq!(scroll_to(&mut sections, y, 100.0), 0);
        assert_eq!(sections[0].latch, RevealLatch::Armed);

        assert_eq!(scroll_to(&mut sections, y + 60.0, 100.0), 1);
        assert_eq!(sections[0].latch, RevealLatch::Revealed);
    }

    #[test]
    fn test_revealed_styles_never_return_to_hidden() {
        let choreography = Choreography::default();
        let spec = choreography.motion(Motion::Fade);
        let mut latch = RevealLatch::default();
        let hidden = spec.style(1, latch);

        latch.observe(true);
        let shown = spec.style(1, latch);
        assert_ne!(hidden, shown);

        for hit in [false, true, false] {
            latch.observe(hit);
            assert_eq!(spec.style(1, latch), shown);
        }
    }

    #[test]
    fn test_nav_and_hero_follow_one_scroll_stream() {
        let choreography = Choreography::default();
        let max_scroll = DOCUMENT - VIEWPORT;

        let at = |y: f64| {
            let progress = scroll_progress(y, DOCUMENT, VIEWPORT);
            (
                NavTreatment::for_scroll(y, choreography.nav_threshold_px),
                choreography.parallax.at(progress),
            )
        };

        let (nav, hero) = at(0.0);
        assert_eq!(nav, NavTreatment::Transparent);
        assert_eq!(hero.opacity, 1.0);

        let (nav, hero) = at(41.0);
        assert_eq!(nav, NavTreatment::Frosted);
        assert!(hero.opacity < 1.0 && hero.opacity > 0.9);

        let (_, hero) = at(max_scroll * 0.26);
        assert_eq!(hero.opacity, 0.0);

        let (_, hero) = at(max_scroll * 0.31);
        assert_eq!(hero.translate_y, -100.0);
    }

    #[test]
    fn test_faq_items_of_builtin_page_toggle_independently() {
        let page = registry().get("pinky").unwrap();
        let mut items = vec![Disclosure::default(); page.faq.items.len()];

        items[0].toggle();
        items[2].toggle();
        items[0].toggle();

        let states: Vec<bool> = items.iter().map(Disclosure::is_expanded).collect();
        assert_eq!(states, vec![false, false, true, false, false, false]);
    }

    #[test]
    fn test_mobile_menu_link_round_trip() {
        let page = registry().get("pinky").unwrap();
        for link in &page.nav.links {
            let mut menu = MobileMenu::default();
            menu.toggle();
            assert!(menu.is_open(), "{} should be reachable", link.label);
            menu.follow_link();
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn test_variants_share_one_template() {
        let registry = registry();
        let a = registry.get("pinky").unwrap();
        let b = registry.get("pinky-direct").unwrap();

        assert_ne!(a.hero.headline, b.hero.headline);
        assert_eq!(a.nav.links, b.nav.links);
        assert_eq!(b.choreography.root_margin(), "-60px");
        assert!((b.choreography.fade.stagger.delay(2) - 0.16).abs() < 1e-9);
    }
}
