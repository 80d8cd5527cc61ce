use shared::ObjectId;

/// Selection cursor into the scene collection.
///
/// Holds an id only; the object itself is always looked up in the
/// collection so the selection can never go stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ObjectId>,
}

impl SelectionState {
    /// Currently selected object id
    pub fn primary(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Select a single object (replaces previous selection)
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if it points at `id`; returns whether it did
    pub fn forget(&mut self, id: ObjectId) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}
