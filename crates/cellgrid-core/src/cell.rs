use serde::{Deserialize, Serialize};

use crate::range::CellCoord;

/// Where a cell lives in the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellSlot {
    /// The select-all corner above the row numbers
    Corner,
    /// Column header for a data column
    Header { col: usize },
    /// Row number for a data row
    RowNumber { row: usize },
    /// Editable data cell
    Data { row: usize, col: usize },
}

impl CellSlot {
    /// Coordinate of a data cell
    pub fn coord(&self) -> Option<CellCoord> {
        match *self {
            CellSlot::Data { row, col } => Some(CellCoord::new(row, col)),
            _ => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, CellSlot::Corner | CellSlot::Header { .. })
    }

    /// Column track this slot sits on. Track 0 is the row-number column.
    pub fn track(&self) -> usize {
        match *self {
            CellSlot::Corner | CellSlot::RowNumber { .. } => 0,
            CellSlot::Header { col } | CellSlot::Data { col, .. } => col + 1,
        }
    }

    /// Value written to the `data-slot` attribute of the rendered node
    pub fn dataset_kind(&self) -> &'static str {
        match self {
            CellSlot::Corner => "corner",
            CellSlot::Header { .. } => "header",
            CellSlot::RowNumber { .. } => "row",
            CellSlot::Data { .. } => "cell",
        }
    }

    /// Rebuild a slot from the `data-slot`, `data-row` and `data-col` attributes
    pub fn from_dataset(kind: &str, row: Option<&str>, col: Option<&str>) -> Option<Self> {
        let parse = |v: Option<&str>| v.and_then(|s| s.parse::<usize>().ok());
        match kind {
            "corner" => Some(CellSlot::Corner),
            "header" => Some(CellSlot::Header { col: parse(col)? }),
            "row" => Some(CellSlot::RowNumber { row: parse(row)? }),
            "cell" => Some(CellSlot::Data {
                row: parse(row)?,
                col: parse(col)?,
            }),
            _ => None,
        }
    }
}

/// One addressable grid cell paired with its view node.
///
/// The view is created together with the cell and lives exactly as long.
#[derive(Debug)]
pub struct Cell<V> {
    slot: CellSlot,
    value: String,
    selected: bool,
    editing: bool,
    view: V,
}

impl<V> Cell<V> {
    pub(crate) fn new(slot: CellSlot, view: V) -> Self {
        Self {
            slot,
            value: String::new(),
            selected: false,
            editing: false,
            view,
        }
    }

    pub fn slot(&self) -> CellSlot {
        self.slot
    }

    /// Last committed value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub(crate) fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn set_selected_flag(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_editing_flag(&mut self, editing: bool) {
        self.editing = editing;
    }
}
