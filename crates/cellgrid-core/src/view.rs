//! Rendering seam between the grid model and whatever draws it.
//!
//! The model only ever talks to a [`GridSurface`] (the container) and the
//! [`CellView`] handles it hands out. The DOM binding implements both over
//! `web-sys`; [`HeadlessSurface`] implements them in memory.

use std::cell::Cell as SharedSlot;
use std::rc::Rc;

use crate::cell::CellSlot;
use crate::error::Result;

/// Class toggled on selected cells
pub const SELECTED_CLASS: &str = "selected";
/// Class of the drag handle attached to every header cell
pub const RESIZE_HANDLE_CLASS: &str = "resize-handle";

/// Styling markers applied when a cell is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Header,
    RowNumber,
    Data,
    FrozenRow,
    FrozenCol,
}

impl Marker {
    /// Class name in the stylesheet contract
    pub fn class_name(&self) -> &'static str {
        match self {
            Marker::Header => "grid-header-cell",
            Marker::RowNumber => "grid-row-number-cell",
            Marker::Data => "grid-cell",
            Marker::FrozenRow => "frozen-row",
            Marker::FrozenCol => "frozen-col",
        }
    }
}

/// Per-cell view handle
pub trait CellView {
    fn set_text(&mut self, text: &str);

    /// Text currently shown, including uncommitted edits
    fn text(&self) -> String;

    fn set_selected(&mut self, selected: bool);

    fn set_editable(&mut self, editable: bool);

    fn focus(&mut self);
}

/// The grid container
pub trait GridSurface {
    type View: CellView;

    /// Create and attach the view for one cell. Called in document order:
    /// header row first, then each row's number cell followed by its data cells.
    fn create_cell(&mut self, slot: CellSlot, markers: &[Marker]) -> Result<Self::View>;

    /// Rendered column track list, e.g. `"50px 100px 100px"`
    fn column_template(&self) -> String;

    fn set_column_template(&mut self, template: &str);
}

/// In-memory surface used for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    template: String,
    active: Rc<SharedSlot<Option<CellSlot>>>,
    created: Vec<CellSlot>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot holding focus, the headless stand-in for `document.activeElement`
    pub fn active_slot(&self) -> Option<CellSlot> {
        self.active.get()
    }

    /// Slots in creation order
    pub fn created(&self) -> &[CellSlot] {
        &self.created
    }

    /// Overwrite the rendered template, as a stylesheet or devtools would
    pub fn override_template(&mut self, template: &str) {
        self.template = template.to_string();
    }
}

impl GridSurface for HeadlessSurface {
    type View = HeadlessCell;

    fn create_cell(&mut self, slot: CellSlot, markers: &[Marker]) -> Result<HeadlessCell> {
        self.created.push(slot);
        Ok(HeadlessCell {
            slot,
            text: String::new(),
            selected: false,
            editable: false,
            markers: markers.to_vec(),
            active: Rc::clone(&self.active),
        })
    }

    fn column_template(&self) -> String {
        self.template.clone()
    }

    fn set_column_template(&mut self, template: &str) {
        self.template = template.to_string();
    }
}

#[derive(Debug)]
pub struct HeadlessCell {
    slot: CellSlot,
    text: String,
    selected: bool,
    editable: bool,
    markers: Vec<Marker>,
    active: Rc<SharedSlot<Option<CellSlot>>>,
}

impl HeadlessCell {
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_focused(&self) -> bool {
        self.active.get() == Some(self.slot)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// Simulate the user typing into an editable cell. Ignored otherwise.
    pub fn type_text(&mut self, text: &str) {
        if self.editable {
            self.text = text.to_string();
        }
    }
}

impl CellView for HeadlessCell {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    fn focus(&mut self) {
        self.active.set(Some(self.slot));
    }
}
