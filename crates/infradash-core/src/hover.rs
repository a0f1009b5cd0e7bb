//! Pointer hover state.
//!
//! Tooltip visibility is derived only from [`HoverState::is_hovered`]; there
//! is no other source of truth for which tooltip is showing.

/// Which item (if any) the pointer is over. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverState<K> {
    hovered: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { hovered: None }
    }
}

impl<K: Clone + PartialEq + std::fmt::Debug> HoverState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered item.
    pub fn hovered(&self) -> Option<&K> {
        self.hovered.as_ref()
    }

    /// Pointer entered `id`. Replaces any previous hover.
    pub fn enter(&mut self, id: K) {
        if self.hovered.as_ref() != Some(&id) {
            tracing::trace!(?id, "hover enter");
            self.hovered = Some(id);
        }
    }

    /// Pointer left `id`. A leave for an item that is no longer hovered is
    /// ignored.
    pub fn leave(&mut self, id: &K) {
        if self.hovered.as_ref() == Some(id) {
            tracing::trace!(?id, "hover leave");
            self.hovered = None;
        }
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    /// Whether the tooltip for `id` is visible.
    pub fn is_hovered(&self, id: &K) -> bool {
        self.hovered.as_ref() == Some(id)
    }

    /// Move the hover to `target`, emitting leave/enter as a pointer would.
    pub fn retarget(&mut self, target: Option<K>) {
        match target {
            Some(id) => self.enter(id),
            None => {
                if let Some(current) = self.hovered.clone() {
                    self.leave(&current);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_leave() {
        let mut hover = HoverState::new();
        hover.enter(3u64);
        assert!(hover.is_hovered(&3));

        hover.leave(&3);
        assert!(!hover.is_hovered(&3));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_only_one_item_hovered() {
        let mut hover = HoverState::new();
        hover.enter(1u64);
        hover.enter(2u64);

        assert!(!hover.is_hovered(&1));
        assert!(hover.is_hovered(&2));

        let visible: Vec<u64> = (1..=5).filter(|id| hover.is_hovered(id)).collect();
        assert_eq!(visible, vec![2]);
    }

    #[test]
    fn test_stale_leave_is_ignored() {
        let mut hover = HoverState::new();
        hover.enter(1u64);
        hover.enter(2u64);

        // Leave for the previously hovered item arrives late
        hover.leave(&1);
        assert!(hover.is_hovered(&2));
    }

    #[test]
    fn test_retarget() {
        let mut hover = HoverState::new();
        hover.retarget(Some(4usize));
        assert_eq!(hover.hovered(), Some(&4));

        hover.retarget(None);
        assert_eq!(hover.hovered(), None);
    }
}
