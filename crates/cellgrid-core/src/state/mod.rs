pub mod clipboard;
pub mod edit;
pub mod input;
pub mod resize;
pub mod selection;

pub use clipboard::{join_values, split_values, ClipboardState, CELL_SEPARATOR};
pub use edit::EditSession;
pub use input::{key_to_action, GridAction, Key, Modifiers};
pub use resize::ResizeDrag;
pub use selection::SelectionShape;

use crate::range::CellCoord;

/// Pointer/edit interaction in progress.
///
/// A plain click both opens an edit and starts a drag, so `Editing` carries
/// its own optional drag anchor. Resizing never coexists with an edit.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Range drag in progress from `anchor`
    Dragging { anchor: CellCoord },
    /// Column resize in progress
    Resizing(ResizeDrag),
    /// Inline edit in progress
    Editing(EditSession),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing(_))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Interaction::Editing(_))
    }

    /// Anchor of the range drag, if one is in progress
    pub fn drag_anchor(&self) -> Option<CellCoord> {
        match self {
            Interaction::Dragging { anchor } => Some(*anchor),
            Interaction::Editing(session) => session.drag_anchor(),
            _ => None,
        }
    }

    /// Cell being edited
    pub fn editing_cell(&self) -> Option<CellCoord> {
        match self {
            Interaction::Editing(session) => Some(session.cell()),
            _ => None,
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match self {
            Interaction::Editing(session) => Some(session),
            _ => None,
        }
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            Interaction::Editing(session) => Some(session),
            _ => None,
        }
    }
}
