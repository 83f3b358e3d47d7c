//! Disclosure (accordion item) state

/// Open/closed state of one disclosure widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        *self = match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        };
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Disclosure::Expanded)
    }

    /// Rotation of the chevron indicator in degrees
    pub fn indicator_rotation(&self) -> u16 {
        match self {
            Disclosure::Collapsed => 0,
            Disclosure::Expanded => 180,
        }
    }

    /// Inline style for the body: zero height and opacity while collapsed
    pub fn body_style(&self) -> &'static str {
        match self {
            Disclosure::Collapsed => "grid-template-rows: 0fr; opacity: 0;",
            Disclosure::Expanded => "grid-template-rows: 1fr; opacity: 1;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let item = Disclosure::default();
        assert!(!item.is_expanded());
        assert_eq!(item.indicator_rotation(), 0);
    }

    #[test]
    fn test_two_step_cycle() {
        let mut item = Disclosure::default();
        item.toggle();
        assert_eq!(item, Disclosure::Expanded);
        assert_eq!(item.indicator_rotation(), 180);
        item.toggle();
        assert_eq!(item, Disclosure::Collapsed);
    }

    #[test]
    fn test_items_are_independent() {
        let mut items = [Disclosure::default(); 6];
        items[1].toggle();
        items[4].toggle();

        let open: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_expanded())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(open, vec![1, 4]);

        items[1].toggle();
        assert!(!items[1].is_expanded());
        assert!(items[4].is_expanded());
    }

    #[test]
    fn test_body_style_follows_state() {
        assert!(Disclosure::Collapsed.body_style().contains("opacity: 0"));
        assert!(Disclosure::Expanded.body_style().contains("1fr"));
    }
}
