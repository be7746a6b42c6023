//! The selected actor.

use vantage_core::ActorId;

/// At most one selected actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ActorId>,
}

impl Selection {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected actor, if any.
    pub fn selected(&self) -> Option<&ActorId> {
        self.selected.as_ref()
    }

    /// Returns `true` if `id` is the selected actor.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s.as_str() == id)
    }

    /// Select `id`. Returns `false` if it was already selected.
    pub fn select(&mut self, id: ActorId) -> bool {
        if self.selected.as_ref() == Some(&id) {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the selection. Returns `false` if nothing was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Apply the outcome of a pick: select the hit, or clear on a miss.
    /// Returns `true` if the selection changed.
    pub fn apply_pick(&mut self, hit: Option<&str>) -> bool {
        match hit {
            Some(id) => self.select(ActorId::from(id)),
            None => self.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_twice_is_a_no_op() {
        let mut selection = Selection::new();
        assert!(selection.select(ActorId::from("Player.1")));
        assert!(!selection.select(ActorId::from("Player.1")));
        assert!(selection.is_selected("Player.1"));
    }

    #[test]
    fn pick_miss_clears() {
        let mut selection = Selection::new();
        selection.apply_pick(Some("Deimos"));
        assert!(selection.apply_pick(None));
        assert_eq!(selection.selected(), None);
        assert!(!selection.apply_pick(None));
    }

    #[test]
    fn pick_hit_replaces() {
        let mut selection = Selection::new();
        selection.apply_pick(Some("Deimos"));
        assert!(selection.apply_pick(Some("Player.2")));
        assert_eq!(selection.selected().map(ActorId::as_str), Some("Player.2"));
    }
}
