use serde::{Deserialize, Serialize};

use crate::range::CellCoord;

/// Emitted once per committed edit and once per pasted cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellValueChange {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

impl CellValueChange {
    pub fn new(coord: CellCoord, value: impl Into<String>) -> Self {
        Self {
            row: coord.row,
            col: coord.col,
            value: value.into(),
        }
    }

    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.col)
    }
}
