pub mod cell;
pub mod change;
pub mod config;
pub mod error;
pub mod grid;
pub mod range;
pub mod state;
pub mod tracks;
pub mod view;

pub use cell::{Cell, CellSlot};
pub use change::CellValueChange;
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use range::{col_to_label, CellCoord, CellRange};
pub use state::{ClipboardState, EditSession, Interaction, Key, Modifiers, SelectionShape};
pub use tracks::ColumnTracks;
pub use view::{CellView, GridSurface, HeadlessCell, HeadlessSurface, Marker};
