/// Independent show/hide flags for the card's content blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityToggles {
    pub(in crate::app) show_ingredients: bool,
    pub(in crate::app) show_steps: bool,
}

impl VisibilityToggles {
    pub(in crate::app) fn toggle_ingredients(&mut self) {
        self.show_ingredients = !self.show_ingredients;
    }

    pub(in crate::app) fn toggle_steps(&mut self) {
        self.show_steps = !self.show_steps;
    }
}

#[cfg(test)]
mod tests {
    use super::VisibilityToggles;

    #[test]
    fn toggling_ingredients_twice_is_identity() {
        let mut toggles = VisibilityToggles::default();
        toggles.toggle_ingredients();
        assert!(toggles.show_ingredients);
        toggles.toggle_ingredients();
        assert_eq!(toggles, VisibilityToggles::default());
    }

    #[test]
    fn toggles_do_not_touch_each_other() {
        let mut toggles = VisibilityToggles::default();
        toggles.toggle_steps();
        assert!(toggles.show_steps);
        assert!(!toggles.show_ingredients);
    }
}
