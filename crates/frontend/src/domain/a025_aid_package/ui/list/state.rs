use contracts::domain::a025_aid_package::SupplierId;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};

/// Result of a publish / save-draft call
pub type PublishResult = Result<(), String>;

/// Action area of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowActionState {
    #[default]
    Idle,
    /// Waiting for the publish handler; buttons are hidden
    Busy,
}

/// Selection and per-row action state of the aid packages table
#[derive(Clone, Debug, Default)]
pub struct AidPackageTableState {
    pub selected: Option<SupplierId>,
    pub row_actions: HashMap<SupplierId, RowActionState>,
    pub last_error: Option<String>,
}

impl AidPackageTableState {
    pub fn is_selected(&self, supplier_id: SupplierId) -> bool {
        self.selected == Some(supplier_id)
    }

    pub fn row_state(&self, supplier_id: SupplierId) -> RowActionState {
        self.row_actions
            .get(&supplier_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn is_busy(&self, supplier_id: SupplierId) -> bool {
        self.row_state(supplier_id) == RowActionState::Busy
    }

    /// Exclusive selection: whatever was selected before is dropped
    pub fn select_row(&mut self, supplier_id: SupplierId) {
        self.selected = Some(supplier_id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Marks the row busy. Returns false if it already was.
    pub fn begin_action(&mut self, supplier_id: SupplierId) -> bool {
        if self.is_busy(supplier_id) {
            return false;
        }
        self.row_actions.insert(supplier_id, RowActionState::Busy);
        true
    }

    /// Returns the row to idle once the handler settled.
    ///
    /// On success the selection is cleared and `true` is returned so the caller can
    /// notify the parent. On failure the selection is kept and the error is stored.
    pub fn finish_action(&mut self, supplier_id: SupplierId, result: &PublishResult) -> bool {
        self.row_actions.remove(&supplier_id);
        match result {
            Ok(()) => {
                self.last_error = None;
                self.clear_selection();
                true
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                false
            }
        }
    }

    /// Drops state for rows that are no longer shown.
    /// Returns true if the selected row was among them.
    pub fn retain_rows(&mut self, visible: &HashSet<SupplierId>) -> bool {
        self.row_actions.retain(|id, _| visible.contains(id));
        match self.selected {
            Some(id) if !visible.contains(&id) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}

pub fn create_state() -> RwSignal<AidPackageTableState> {
    RwSignal::new(AidPackageTableState::default())
}
