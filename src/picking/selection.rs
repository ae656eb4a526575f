use super::RaycastHit;

/// What a confirming click did to the focus toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome<E> {
    /// The click did not confirm the preselection (miss, different entity,
    /// or a `button` entity).
    Ignored,
    /// The preselected entity became the focused one.
    Focus(E),
    /// The focused entity was clicked again; focus returns to the default
    /// entity (`None` when no default is configured).
    Unfocus(Option<E>),
}

/// How a completed touch tap resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome<E> {
    /// Nothing was preselected.
    Nothing,
    /// Single tap: select the preselected entity.
    Select(RaycastHit<E>),
    /// Second tap on the same entity within the double-tap window.
    Activate(RaycastHit<E>),
}

/// Preselect / select / activate bookkeeping.
///
/// Entities are host handles; this only remembers which ones were hit.
#[derive(Debug, Clone)]
pub struct SelectionState<E> {
    preselected: Option<RaycastHit<E>>,
    /// Entity the last confirming click focused.
    previous_selected: Option<E>,
    /// Entity the last completed tap resolved to.
    last_tap: Option<E>,
}

impl<E> Default for SelectionState<E> {
    fn default() -> Self {
        Self {
            preselected: None,
            previous_selected: None,
            last_tap: None,
        }
    }
}

impl<E: Copy + PartialEq> SelectionState<E> {
    /// Empty selection state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently preselected entity.
    #[must_use]
    pub fn preselected(&self) -> Option<E> {
        self.preselected.map(|hit| hit.entity)
    }

    /// Raycast hit that produced the preselection.
    #[must_use]
    pub fn preselected_hit(&self) -> Option<&RaycastHit<E>> {
        self.preselected.as_ref()
    }

    /// Entity the last confirming click focused.
    #[must_use]
    pub fn previous_selected(&self) -> Option<E> {
        self.previous_selected
    }

    /// Replace the preselection with the result of a raycast (a miss clears
    /// it).
    pub fn preselect(&mut self, hit: Option<RaycastHit<E>>) {
        self.preselected = hit;
    }

    /// Forget the preselection.
    pub fn clear_preselection(&mut self) {
        self.preselected = None;
    }

    /// Resolve a select-click on `clicked`.
    ///
    /// Only a click on the preselected entity counts. Clicking the focused
    /// entity a second time hands focus back to `default_entity`.
    pub fn confirm_click(
        &mut self,
        clicked: Option<E>,
        is_button: bool,
        default_entity: Option<E>,
    ) -> ClickOutcome<E> {
        let Some(clicked) = clicked else {
            return ClickOutcome::Ignored;
        };
        if self.preselected() != Some(clicked) || is_button {
            return ClickOutcome::Ignored;
        }

        if self.previous_selected == Some(clicked) {
            self.preselected = None;
            self.previous_selected = default_entity;
            ClickOutcome::Unfocus(default_entity)
        } else {
            self.previous_selected = Some(clicked);
            ClickOutcome::Focus(clicked)
        }
    }

    /// Whether an activation raycast landed on the preselected entity.
    #[must_use]
    pub fn is_preselected(&self, entity: Option<E>) -> bool {
        entity.is_some() && entity == self.preselected()
    }

    /// Resolve a completed tap. `double` means the tap followed the previous
    /// one within the double-tap window.
    pub fn resolve_tap(&mut self, double: bool) -> TapOutcome<E> {
        let Some(hit) = self.preselected else {
            self.last_tap = None;
            return TapOutcome::Nothing;
        };
        let repeat = self.last_tap == Some(hit.entity);
        self.last_tap = Some(hit.entity);
        if double && repeat {
            TapOutcome::Activate(hit)
        } else {
            TapOutcome::Select(hit)
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn hit(entity: u32) -> RaycastHit<u32> {
        RaycastHit {
            entity,
            point: Vec3::ZERO,
            normal: Vec3::Y,
            distance: 1.0,
        }
    }

    #[test]
    fn preselect_and_clear() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(3)));
        assert_eq!(s.preselected(), Some(3));
        s.preselect(None);
        assert_eq!(s.preselected(), None);
        s.preselect(Some(hit(4)));
        s.clear_preselection();
        assert!(s.preselected_hit().is_none());
    }

    #[test]
    fn click_on_other_entity_is_ignored() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(1)));
        assert_eq!(s.confirm_click(Some(2), false, None), ClickOutcome::Ignored);
        assert_eq!(s.confirm_click(None, false, None), ClickOutcome::Ignored);
        assert_eq!(s.previous_selected(), None);
    }

    #[test]
    fn buttons_never_take_focus() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(1)));
        assert_eq!(s.confirm_click(Some(1), true, None), ClickOutcome::Ignored);
    }

    #[test]
    fn second_click_returns_focus_to_default() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(7)));
        assert_eq!(s.confirm_click(Some(7), false, Some(0)), ClickOutcome::Focus(7));
        assert_eq!(s.previous_selected(), Some(7));

        s.preselect(Some(hit(7)));
        assert_eq!(
            s.confirm_click(Some(7), false, Some(0)),
            ClickOutcome::Unfocus(Some(0))
        );
        assert_eq!(s.previous_selected(), Some(0));
        assert_eq!(s.preselected(), None);
    }

    #[test]
    fn activation_requires_preselected_match() {
        let mut s = SelectionState::new();
        assert!(!s.is_preselected(None));
        s.preselect(Some(hit(5)));
        assert!(s.is_preselected(Some(5)));
        assert!(!s.is_preselected(Some(6)));
    }

    #[test]
    fn double_tap_on_same_entity_activates() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(9)));
        assert_eq!(s.resolve_tap(false), TapOutcome::Select(hit(9)));
        s.preselect(Some(hit(9)));
        assert_eq!(s.resolve_tap(true), TapOutcome::Activate(hit(9)));
    }

    #[test]
    fn double_tap_on_new_entity_selects() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(1)));
        let _ = s.resolve_tap(false);
        s.preselect(Some(hit(2)));
        assert_eq!(s.resolve_tap(true), TapOutcome::Select(hit(2)));
    }

    #[test]
    fn tap_on_empty_space_resets_tap_memory() {
        let mut s = SelectionState::new();
        s.preselect(Some(hit(1)));
        let _ = s.resolve_tap(false);
        s.preselect(None);
        assert_eq!(s.resolve_tap(true), TapOutcome::Nothing);
        s.preselect(Some(hit(1)));
        assert_eq!(s.resolve_tap(true), TapOutcome::Select(hit(1)));
    }
}
