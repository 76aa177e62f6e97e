use crate::range::CellCoord;

/// An in-progress inline edit.
///
/// While a cell is being edited its selection flag is parked here, so the
/// cell is never flagged selected and editing at once. Committing or
/// cancelling hands the flag back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    cell: CellCoord,
    /// Last committed value, restored on cancel
    prior_value: String,
    was_selected: bool,
    /// Anchor of a drag that started with the click that opened this edit
    drag_anchor: Option<CellCoord>,
}

impl EditSession {
    pub fn new(
        cell: CellCoord,
        prior_value: String,
        was_selected: bool,
        drag_anchor: Option<CellCoord>,
    ) -> Self {
        Self {
            cell,
            prior_value,
            was_selected,
            drag_anchor,
        }
    }

    pub fn cell(&self) -> CellCoord {
        self.cell
    }

    pub fn prior_value(&self) -> &str {
        &self.prior_value
    }

    /// A paste into the editing cell becomes its new committed value
    pub fn set_prior_value(&mut self, value: String) {
        self.prior_value = value;
    }

    pub fn was_selected(&self) -> bool {
        self.was_selected
    }

    pub fn set_was_selected(&mut self, selected: bool) {
        self.was_selected = selected;
    }

    pub fn drag_anchor(&self) -> Option<CellCoord> {
        self.drag_anchor
    }

    pub fn set_drag_anchor(&mut self, anchor: Option<CellCoord>) {
        self.drag_anchor = anchor;
    }
}
