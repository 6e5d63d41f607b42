use std::rc::Rc;

use yew::prelude::*;

use super::skip::Skip;

/// Single-skip selection with a fade-out phase.
///
/// Leaving the selected state happens in two steps: `visible` drops to false
/// straight away, and the skip itself is cleared by a later
/// [`SelectionAction::Clear`] once the panel's transition has played. Every
/// transition bumps `generation`, and a clear only applies when it carries the
/// current generation, so a timer scheduled for an older deselection can never
/// wipe out a newer selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    skip: Option<Rc<Skip>>,
    visible: bool,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectionAction {
    /// A card's select/deselect button was pressed.
    Toggle(Rc<Skip>),
    /// The panel's remove button was pressed. Same as toggling the
    /// selected skip.
    Remove,
    /// The fade-out timer for `generation` elapsed.
    Clear { generation: u64 },
}

impl Selection {
    /// The selected skip, including one that is fading out.
    pub fn skip(&self) -> Option<&Rc<Skip>> {
        self.skip.as_ref()
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// True if `id` is the selected skip, including while it fades out.
    pub fn is_selected(&self, id: u64) -> bool {
        self.skip.as_ref().is_some_and(|s| s.id == id)
    }

    /// True while a deselected skip waits for its clear.
    pub const fn is_leaving(&self) -> bool {
        self.skip.is_some() && !self.visible
    }

    /// Applies an action and returns the next state.
    pub fn apply(&self, action: SelectionAction) -> Self {
        match action {
            // Already fading out: the pending clear stands
            SelectionAction::Toggle(skip) if self.is_selected(skip.id) && !self.visible => {
                self.clone()
            }
            SelectionAction::Toggle(skip) if self.is_selected(skip.id) => self.begin_deselect(),
            SelectionAction::Toggle(skip) => Self {
                skip: Some(skip),
                visible: true,
                generation: self.generation + 1,
            },
            SelectionAction::Remove => match self.skip.clone() {
                Some(skip) => self.apply(SelectionAction::Toggle(skip)),
                None => self.clone(),
            },
            SelectionAction::Clear { generation }
                if generation == self.generation && self.is_leaving() =>
            {
                Self {
                    skip: None,
                    visible: false,
                    generation: self.generation,
                }
            }
            // stale timer
            SelectionAction::Clear { .. } => self.clone(),
        }
    }

    fn begin_deselect(&self) -> Self {
        Self {
            skip: self.skip.clone(),
            visible: false,
            generation: self.generation + 1,
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(id: u64) -> Rc<Skip> {
        Rc::new(Skip {
            id,
            size: 6,
            hire_period_days: 14,
            transport_cost: None,
            per_tonne_cost: None,
            price_before_vat: 305.0,
            vat: 20.0,
            postcode: Some("NR32".to_string()),
            area: Some("Lowestoft".to_string()),
            forbidden: Some(false),
            created_at: None,
            updated_at: None,
            allowed_on_road: true,
            allows_heavy_waste: Some(true),
        })
    }

    #[test]
    fn test_default_is_empty() {
        let selection = Selection::default();
        assert!(selection.skip().is_none());
        assert!(!selection.is_visible());
        assert!(!selection.is_leaving());
    }

    #[test]
    fn test_toggle_selects_and_shows() {
        let selection = Selection::default().apply(SelectionAction::Toggle(skip(1)));
        assert!(selection.is_selected(1));
        assert!(selection.is_visible());
    }

    #[test]
    fn test_clear_without_deselect_is_ignored() {
        let selection = Selection::default().apply(SelectionAction::Toggle(skip(1)));
        let generation = selection.generation();
        let after = selection.apply(SelectionAction::Clear { generation });
        assert_eq!(after, selection);
    }

    #[test]
    fn test_remove_when_nothing_selected_is_noop() {
        let selection = Selection::default();
        assert_eq!(selection.apply(SelectionAction::Remove), selection);
    }

    #[test]
    fn test_retoggle_while_leaving_keeps_pending_clear() {
        let leaving = Selection::default()
            .apply(SelectionAction::Toggle(skip(1)))
            .apply(SelectionAction::Toggle(skip(1)));
        assert!(leaving.is_leaving());
        // Card still reads "Deselect" until the skip is cleared
        assert!(leaving.is_selected(1));

        let again = leaving.apply(SelectionAction::Toggle(skip(1)));
        assert_eq!(again, leaving);

        let cleared = again.apply(SelectionAction::Clear {
            generation: leaving.generation(),
        });
        assert!(cleared.skip().is_none());
        assert!(!cleared.is_selected(1));
    }

    #[test]
    fn test_remove_while_leaving_matches_toggle() {
        let leaving = Selection::default()
            .apply(SelectionAction::Toggle(skip(1)))
            .apply(SelectionAction::Remove);

        assert_eq!(
            leaving.apply(SelectionAction::Remove),
            leaving.apply(SelectionAction::Toggle(skip(1)))
        );
    }

    #[test]
    fn test_reduce_keeps_rc_on_noop() {
        let state = Rc::new(Selection::default());
        let next = state.clone().reduce(SelectionAction::Remove);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
