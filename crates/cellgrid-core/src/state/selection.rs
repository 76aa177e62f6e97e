use serde::{Deserialize, Serialize};

use crate::range::{CellCoord, CellRange};

/// Summary of what is currently selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionShape {
    /// Nothing selected
    Empty,
    /// Exactly one cell
    Single(CellCoord),
    /// A full rectangle of more than one cell
    Range(CellRange),
    /// Every data cell
    All,
    /// A non-rectangular set built with ctrl/cmd toggles
    Scattered,
}

impl SelectionShape {
    /// Classify a row-major list of selected coordinates in a `rows × cols` grid
    pub fn classify(selected: &[CellCoord], rows: usize, cols: usize) -> Self {
        let (first, last) = match (selected.first(), selected.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return SelectionShape::Empty,
        };

        if selected.len() == 1 {
            return SelectionShape::Single(first);
        }
        if selected.len() == rows * cols {
            return SelectionShape::All;
        }

        let bounds = selected
            .iter()
            .fold(CellRange::new(first, last), |acc, coord| {
                CellRange::new(
                    CellCoord::new(acc.start.row.min(coord.row), acc.start.col.min(coord.col)),
                    CellCoord::new(acc.end.row.max(coord.row), acc.end.col.max(coord.col)),
                )
            });

        if bounds.cell_count() == selected.len() {
            SelectionShape::Range(bounds)
        } else {
            SelectionShape::Scattered
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionShape::Empty)
    }
}
