use crate::catalog::{SkipId, SkipRecord};

/// At most one selected skip. `Unselected -> Selected(r)` on select,
/// `Selected(r) -> Selected(r2)` on another select, back to `Unselected` on
/// clear or when a refresh no longer carries the id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<SkipRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pick wins.
    pub fn select(&mut self, record: &SkipRecord) {
        self.selected = Some(record.clone());
    }

    pub fn current(&self) -> Option<&SkipRecord> {
        self.selected.as_ref()
    }

    pub fn current_id(&self) -> Option<&SkipId> {
        self.selected.as_ref().map(|r| &r.id)
    }

    pub fn is_selected(&self, id: &SkipId) -> bool {
        self.current_id() == Some(id)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Re-point the selection at a freshly fetched catalog: pick up the new
    /// values for the same id, or drop the selection when the id is gone.
    pub fn reconcile(&mut self, items: &[SkipRecord]) {
        let Some(current) = &self.selected else {
            return;
        };
        self.selected = items.iter().find(|r| r.id == current.id).cloned();
    }
}
