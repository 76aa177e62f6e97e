//! The grid component: cell matrix, selection, editing, clipboard and resize.
//!
//! All mutation happens synchronously inside the event handlers below. Value
//! changes are queued in emission order; the host drains them with
//! [`Grid::drain_changes`] and dispatches them however it likes.

use tracing::{debug, info, trace};

use crate::cell::{Cell, CellSlot};
use crate::change::CellValueChange;
use crate::config::GridConfig;
use crate::error::Result;
use crate::range::{col_to_label, CellCoord, CellRange};
use crate::state::{
    join_values, key_to_action, split_values, ClipboardState, EditSession, GridAction,
    Interaction, Key, Modifiers, ResizeDrag, SelectionShape,
};
use crate::tracks::ColumnTracks;
use crate::view::{CellView, GridSurface, Marker};

pub struct Grid<S: GridSurface> {
    config: GridConfig,
    surface: S,
    /// `rows × cols` data cells
    cells: Vec<Vec<Cell<S::View>>>,
    /// Corner first, then one per column
    headers: Vec<Cell<S::View>>,
    row_numbers: Vec<Cell<S::View>>,
    interaction: Interaction,
    /// Origin of shift-click ranges; survives pointer-up
    shift_anchor: Option<CellCoord>,
    focused: Option<CellCoord>,
    clipboard: ClipboardState,
    changes: Vec<CellValueChange>,
}

impl<S: GridSurface> Grid<S> {
    /// Build the header row, then each row's number cell followed by its data cells
    pub fn new(config: GridConfig, mut surface: S) -> Result<Self> {
        config.validate()?;

        surface.set_column_template(&ColumnTracks::for_columns(config.cols).to_string());

        let mut headers = Vec::with_capacity(config.cols + 1);
        let corner = surface.create_cell(CellSlot::Corner, &[Marker::Header])?;
        headers.push(Cell::new(CellSlot::Corner, corner));

        for col in 0..config.cols {
            let slot = CellSlot::Header { col };
            let mut markers = vec![Marker::Header];
            if config.is_frozen_col(col) {
                markers.push(Marker::FrozenCol);
            }
            let mut cell = Cell::new(slot, surface.create_cell(slot, &markers)?);
            let label = col_to_label(col);
            cell.view_mut().set_text(&label);
            cell.set_value(label);
            headers.push(cell);
        }

        let mut cells = Vec::with_capacity(config.rows);
        let mut row_numbers = Vec::with_capacity(config.rows);

        for row in 0..config.rows {
            let slot = CellSlot::RowNumber { row };
            let mut number = Cell::new(slot, surface.create_cell(slot, &[Marker::RowNumber])?);
            let label = (row + 1).to_string();
            number.view_mut().set_text(&label);
            number.set_value(label);
            row_numbers.push(number);

            let mut data_row = Vec::with_capacity(config.cols);
            for col in 0..config.cols {
                let slot = CellSlot::Data { row, col };
                let mut markers = vec![Marker::Data];
                if config.is_frozen_row(row) {
                    markers.push(Marker::FrozenRow);
                }
                if config.is_frozen_col(col) {
                    markers.push(Marker::FrozenCol);
                }
                data_row.push(Cell::new(slot, surface.create_cell(slot, &markers)?));
            }
            cells.push(data_row);
        }

        info!(rows = config.rows, cols = config.cols, "grid initialized");

        Ok(Self {
            config,
            surface,
            cells,
            headers,
            row_numbers,
            interaction: Interaction::Idle,
            shift_anchor: None,
            focused: None,
            clipboard: ClipboardState::new(),
            changes: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.is_valid(self.config.rows, self.config.cols)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell<S::View>> {
        self.cells.get(row)?.get(col)
    }

    fn cell_mut(&mut self, coord: CellCoord) -> Option<&mut Cell<S::View>> {
        self.cells.get_mut(coord.row)?.get_mut(coord.col)
    }

    /// Last committed value of a data cell
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.cell(row, col).map(Cell::value)
    }

    /// Every committed value, row by row
    pub fn values(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.value().to_string()).collect())
            .collect()
    }

    /// The select-all corner cell
    pub fn corner(&self) -> Option<&Cell<S::View>> {
        self.headers.first()
    }

    /// Header cell of data column `col`
    pub fn header(&self, col: usize) -> Option<&Cell<S::View>> {
        self.headers.get(col.checked_add(1)?)
    }

    pub fn header_title(&self, col: usize) -> Option<&str> {
        self.header(col).map(Cell::value)
    }

    pub fn row_number(&self, row: usize) -> Option<&Cell<S::View>> {
        self.row_numbers.get(row)
    }

    /// View handle of a data cell, for backends that need to reach it directly
    pub fn view_mut(&mut self, coord: CellCoord) -> Option<&mut S::View> {
        self.cell_mut(coord).map(Cell::view_mut)
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn focused(&self) -> Option<CellCoord> {
        self.focused
    }

    pub fn shift_anchor(&self) -> Option<CellCoord> {
        self.shift_anchor
    }

    /// Cells captured by the last copy
    pub fn copied(&self) -> &[CellCoord] {
        self.clipboard.copied()
    }

    pub fn editing_cell(&self) -> Option<CellCoord> {
        self.interaction.editing_cell()
    }

    /// Current width of a column track in pixels, read from the rendered list
    pub fn track_width(&self, track: usize) -> Option<f64> {
        ColumnTracks::parse(&self.surface.column_template())
            .ok()?
            .width(track)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn pending_changes(&self) -> &[CellValueChange] {
        &self.changes
    }

    /// Hand over queued value changes in emission order
    pub fn drain_changes(&mut self) -> Vec<CellValueChange> {
        std::mem::take(&mut self.changes)
    }

    fn emit(&mut self, coord: CellCoord, value: String) {
        debug!(cell = %coord, value = %value, "cell value changed");
        self.changes.push(CellValueChange::new(coord, value));
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Whether a data cell is selected. An editing cell reports the selection
    /// state it will return to.
    pub fn is_selected(&self, coord: CellCoord) -> bool {
        match self.interaction.edit_session() {
            Some(session) if session.cell() == coord => session.was_selected(),
            _ => self
                .cell(coord.row, coord.col)
                .is_some_and(Cell::is_selected),
        }
    }

    /// Selected data cells in row-major order
    pub fn selected_coords(&self) -> Vec<CellCoord> {
        let mut selected = Vec::new();
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let coord = CellCoord::new(row, col);
                if self.is_selected(coord) {
                    selected.push(coord);
                }
            }
        }
        selected
    }

    pub fn selection_shape(&self) -> SelectionShape {
        SelectionShape::classify(&self.selected_coords(), self.config.rows, self.config.cols)
    }

    fn mark(&mut self, coord: CellCoord, selected: bool) {
        if let Some(session) = self.interaction.edit_session_mut() {
            if session.cell() == coord {
                session.set_was_selected(selected);
                return;
            }
        }
        if let Some(cell) = self.cell_mut(coord) {
            cell.set_selected_flag(selected);
            cell.view_mut().set_selected(selected);
        }
    }

    /// Deselect every data and row-number cell
    pub fn clear_selection(&mut self) {
        for cell in self.cells.iter_mut().flatten().chain(self.row_numbers.iter_mut()) {
            if cell.is_selected() {
                cell.set_selected_flag(false);
                cell.view_mut().set_selected(false);
            }
        }
        if let Some(session) = self.interaction.edit_session_mut() {
            session.set_was_selected(false);
        }
    }

    /// Add one cell to the selection
    pub fn select_cell(&mut self, coord: CellCoord) {
        if self.contains(coord) {
            self.mark(coord, true);
        }
    }

    /// Flip one cell, leaving the rest of the selection alone
    pub fn toggle_selection(&mut self, coord: CellCoord) {
        if self.contains(coord) {
            let selected = self.is_selected(coord);
            self.mark(coord, !selected);
        }
    }

    /// Select exactly the inclusive rectangle between two corners
    pub fn select_range(&mut self, anchor: CellCoord, target: CellCoord) {
        if !self.contains(anchor) || !self.contains(target) {
            return;
        }
        let range = CellRange::new(anchor, target);
        trace!(range = %range, "range selected");

        self.clear_selection();
        for coord in range {
            self.mark(coord, true);
        }
    }

    /// Select every data cell and every row-number cell
    pub fn select_all(&mut self) {
        self.clear_selection();
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                self.mark(CellCoord::new(row, col), true);
            }
        }
        for cell in &mut self.row_numbers {
            cell.set_selected_flag(true);
            cell.view_mut().set_selected(true);
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    pub fn pointer_down(&mut self, slot: CellSlot, modifiers: Modifiers) {
        match slot {
            CellSlot::Corner => self.select_all(),
            CellSlot::Data { row, col } => {
                let coord = CellCoord::new(row, col);
                if !self.contains(coord) {
                    return;
                }
                if modifiers.shift {
                    let anchor = self.shift_anchor.unwrap_or(coord);
                    self.select_range(anchor, coord);
                    self.start_drag(anchor);
                } else if modifiers.ctrl_or_meta() {
                    self.toggle_selection(coord);
                    self.shift_anchor = Some(coord);
                    self.start_drag(coord);
                } else {
                    self.clear_selection();
                    self.select_cell(coord);
                    self.shift_anchor = Some(coord);
                    self.begin_edit_at(coord, Some(coord));
                }
            }
            CellSlot::Header { .. } | CellSlot::RowNumber { .. } => {}
        }
    }

    fn start_drag(&mut self, anchor: CellCoord) {
        match &mut self.interaction {
            Interaction::Editing(session) => session.set_drag_anchor(Some(anchor)),
            Interaction::Resizing(_) => {}
            other => *other = Interaction::Dragging { anchor },
        }
    }

    /// Extend the dragged range to the data cell under the pointer
    pub fn pointer_move(&mut self, slot: CellSlot) {
        let Some(anchor) = self.interaction.drag_anchor() else {
            return;
        };
        if let Some(target) = slot.coord() {
            self.select_range(anchor, target);
        }
    }

    /// End any drag or resize
    pub fn pointer_up(&mut self) {
        self.interaction = match std::mem::take(&mut self.interaction) {
            Interaction::Dragging { .. } => Interaction::Idle,
            Interaction::Resizing(drag) => {
                debug!(track = drag.track, "column resize finished");
                Interaction::Idle
            }
            Interaction::Editing(mut session) => {
                session.set_drag_anchor(None);
                Interaction::Editing(session)
            }
            Interaction::Idle => Interaction::Idle,
        };
    }

    pub fn double_click(&mut self, slot: CellSlot) {
        if let Some(coord) = slot.coord() {
            self.begin_edit(coord);
        }
    }

    // =========================================================================
    // Focus & keyboard
    // =========================================================================

    fn focus_cell(&mut self, coord: CellCoord) {
        if let Some(editing) = self.interaction.editing_cell() {
            if editing != coord {
                self.commit_edit(editing);
            }
        }
        if let Some(cell) = self.cell_mut(coord) {
            cell.view_mut().focus();
            self.focused = Some(coord);
        }
    }

    /// The view reports a data cell gained focus
    pub fn focus_in(&mut self, coord: CellCoord) {
        if self.contains(coord) {
            self.focused = Some(coord);
        }
    }

    /// The view reports a data cell lost focus; commits its edit if any
    pub fn blur(&mut self, coord: CellCoord) {
        self.commit_edit(coord);
        if self.focused == Some(coord) {
            self.focused = None;
        }
    }

    /// Handle a key on the focused cell. Returns whether the key was consumed.
    pub fn key_down(&mut self, key: Key) -> bool {
        let Some(current) = self.focused else {
            return false;
        };
        let last_row = self.config.rows - 1;
        let last_col = self.config.cols - 1;

        let target = match key_to_action(key) {
            GridAction::MoveUp => CellCoord::new(current.row.saturating_sub(1), current.col),
            GridAction::MoveDown => CellCoord::new((current.row + 1).min(last_row), current.col),
            GridAction::MoveLeft => CellCoord::new(current.row, current.col.saturating_sub(1)),
            GridAction::MoveRight => CellCoord::new(current.row, (current.col + 1).min(last_col)),
            GridAction::NextCell => {
                let col = (current.col + 1) % self.config.cols;
                let row = if col == 0 {
                    (current.row + 1).min(last_row)
                } else {
                    current.row
                };
                CellCoord::new(row, col)
            }
            GridAction::StartEdit => {
                self.begin_edit(current);
                return true;
            }
            GridAction::CancelEdit => {
                self.cancel_edit(current);
                return true;
            }
            GridAction::None => return false,
        };

        trace!(from = %current, to = %target, "keyboard navigation");
        self.clear_selection();
        self.select_cell(target);
        self.focus_cell(target);
        true
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Open inline editing on a data cell. Re-entry on the editing cell is a no-op;
    /// an edit open elsewhere is committed first.
    pub fn begin_edit(&mut self, coord: CellCoord) {
        self.begin_edit_at(coord, None);
    }

    fn begin_edit_at(&mut self, coord: CellCoord, drag_anchor: Option<CellCoord>) {
        if !self.contains(coord) {
            return;
        }
        if let Some(session) = self.interaction.edit_session_mut() {
            if session.cell() == coord {
                // A fresh pointer-down on the editing cell still starts a drag
                if drag_anchor.is_some() {
                    session.set_drag_anchor(drag_anchor);
                }
                return;
            }
        }
        if let Some(editing) = self.interaction.editing_cell() {
            self.commit_edit(editing);
        }

        let drag_anchor = drag_anchor.or_else(|| self.interaction.drag_anchor());
        let Some(cell) = self.cell_mut(coord) else {
            return;
        };
        let was_selected = cell.is_selected();
        let prior_value = cell.value().to_string();
        cell.set_selected_flag(false);
        cell.set_editing_flag(true);
        cell.view_mut().set_selected(false);
        cell.view_mut().set_editable(true);

        debug!(cell = %coord, "edit started");
        self.interaction = Interaction::Editing(EditSession::new(
            coord,
            prior_value,
            was_selected,
            drag_anchor,
        ));
        self.focus_cell(coord);
    }

    fn take_session(&mut self, coord: CellCoord) -> Option<EditSession> {
        match std::mem::take(&mut self.interaction) {
            Interaction::Editing(session) if session.cell() == coord => {
                self.interaction = session
                    .drag_anchor()
                    .map_or(Interaction::Idle, |anchor| Interaction::Dragging { anchor });
                Some(session)
            }
            other => {
                self.interaction = other;
                None
            }
        }
    }

    fn finish_edit(cell: &mut Cell<S::View>, session: &EditSession) {
        cell.set_editing_flag(false);
        cell.view_mut().set_editable(false);
        if session.was_selected() {
            cell.set_selected_flag(true);
            cell.view_mut().set_selected(true);
        }
    }

    /// Store the visible text as the cell's value and end the edit
    pub fn commit_edit(&mut self, coord: CellCoord) {
        let Some(session) = self.take_session(coord) else {
            return;
        };
        let Some(cell) = self.cell_mut(coord) else {
            return;
        };
        let value = cell.view().text();
        cell.set_value(value.clone());
        Self::finish_edit(cell, &session);

        debug!(cell = %coord, "edit committed");
        self.emit(coord, value);
    }

    /// Discard the visible text and restore the last committed value
    pub fn cancel_edit(&mut self, coord: CellCoord) {
        let Some(session) = self.take_session(coord) else {
            return;
        };
        let Some(cell) = self.cell_mut(coord) else {
            return;
        };
        cell.view_mut().set_text(session.prior_value());
        Self::finish_edit(cell, &session);

        debug!(cell = %coord, "edit cancelled");
    }

    // =========================================================================
    // Clipboard
    // =========================================================================

    /// Tab-joined values of the selected cells, or `None` when nothing is
    /// selected and the platform default should run.
    pub fn copy(&mut self) -> Option<String> {
        let selected = self.selected_coords();
        let text = join_values(
            selected
                .iter()
                .filter_map(|coord| self.value(coord.row, coord.col)),
        );
        let copied = selected.len();
        self.clipboard.record(selected);

        if copied == 0 {
            return None;
        }
        debug!(cells = copied, "selection copied");
        Some(text)
    }

    /// Spread tab-separated text over the selected cells in row-major order.
    /// Returns whether the platform default should be suppressed.
    pub fn paste(&mut self, text: Option<&str>) -> bool {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return false;
        };
        let tokens = split_values(text);

        for (i, coord) in self.selected_coords().into_iter().enumerate() {
            let value = tokens.get(i).copied().unwrap_or_default().to_string();

            if let Some(session) = self.interaction.edit_session_mut() {
                if session.cell() == coord {
                    session.set_prior_value(value.clone());
                }
            }
            if let Some(cell) = self.cell_mut(coord) {
                cell.set_value(value.clone());
                cell.view_mut().set_text(&value);
            }
            self.emit(coord, value);
        }
        true
    }

    // =========================================================================
    // Column resize
    // =========================================================================

    /// Pointer-down on the resize handle of a header cell
    pub fn resize_start(&mut self, header: CellSlot, x: f64) {
        if !header.is_header() {
            return;
        }
        let track = header.track();
        let Ok(tracks) = ColumnTracks::parse(&self.surface.column_template()) else {
            debug!(track, "column template unreadable, resize ignored");
            return;
        };
        let Some(start_width) = tracks.width(track) else {
            return;
        };

        if let Some(editing) = self.interaction.editing_cell() {
            self.commit_edit(editing);
        }

        debug!(track, start_width, "column resize started");
        self.interaction = Interaction::Resizing(ResizeDrag::new(track, x, start_width));
    }

    pub fn resize_move(&mut self, x: f64) {
        let Interaction::Resizing(drag) = &self.interaction else {
            return;
        };
        let drag = *drag;
        let Ok(mut tracks) = ColumnTracks::parse(&self.surface.column_template()) else {
            return;
        };
        if tracks.set_width(drag.track, drag.width_at(x)) {
            self.surface.set_column_template(&tracks.to_string());
        }
    }

    pub fn resize_end(&mut self) {
        if self.interaction.is_resizing() {
            self.pointer_up();
        }
    }

    // =========================================================================
    // Headers
    // =========================================================================

    /// Replace the computed letter label of a column header
    pub fn set_column_title(&mut self, col: usize, title: &str) {
        let Some(index) = col.checked_add(1) else {
            return;
        };
        if let Some(header) = self.headers.get_mut(index) {
            header.set_value(title.to_string());
            header.view_mut().set_text(title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HeadlessSurface;

    fn grid(rows: usize, cols: usize) -> Grid<HeadlessSurface> {
        Grid::new(GridConfig::new(rows, cols), HeadlessSurface::new()).unwrap()
    }

    fn data(row: usize, col: usize) -> CellSlot {
        CellSlot::Data { row, col }
    }

    #[test]
    fn test_construction_order() {
        let grid = grid(2, 2);
        let created = grid.surface().created();
        assert_eq!(
            created,
            &[
                CellSlot::Corner,
                CellSlot::Header { col: 0 },
                CellSlot::Header { col: 1 },
                CellSlot::RowNumber { row: 0 },
                data(0, 0),
                data(0, 1),
                CellSlot::RowNumber { row: 1 },
                data(1, 0),
                data(1, 1),
            ]
        );
    }

    #[test]
    fn test_construction_rejects_empty_grid() {
        assert!(Grid::new(GridConfig::new(0, 3), HeadlessSurface::new()).is_err());
    }

    #[test]
    fn test_headers_and_row_numbers() {
        let grid = grid(3, 28);
        assert_eq!(grid.corner().map(|c| c.view().text()), Some(String::new()));
        assert_eq!(grid.header_title(0), Some("A"));
        assert_eq!(grid.header_title(26), Some("AA"));
        assert_eq!(grid.header_title(28), None);
        assert_eq!(grid.row_number(2).map(|c| c.view().text()), Some("3".to_string()));
    }

    #[test]
    fn test_frozen_markers() {
        let grid = Grid::new(
            GridConfig::new(3, 3).with_frozen(1, 2),
            HeadlessSurface::new(),
        )
        .unwrap();

        let cell = grid.cell(0, 0).unwrap().view();
        assert!(cell.has_marker(Marker::FrozenRow));
        assert!(cell.has_marker(Marker::FrozenCol));

        let cell = grid.cell(1, 1).unwrap().view();
        assert!(!cell.has_marker(Marker::FrozenRow));
        assert!(cell.has_marker(Marker::FrozenCol));

        let cell = grid.cell(2, 2).unwrap().view();
        assert_eq!(cell.markers(), &[Marker::Data]);

        assert!(grid.header(1).unwrap().view().has_marker(Marker::FrozenCol));
        assert!(!grid.header(2).unwrap().view().has_marker(Marker::FrozenCol));
    }

    #[test]
    fn test_initial_template() {
        let grid = grid(1, 3);
        assert_eq!(grid.surface().column_template(), "50px 100px 100px 100px");
        assert_eq!(grid.track_width(0), Some(50.0));
        assert_eq!(grid.track_width(3), Some(100.0));
    }

    #[test]
    fn test_plain_click_selects_and_edits() {
        let mut grid = grid(3, 3);
        grid.pointer_down(data(1, 1), Modifiers::new());

        assert_eq!(grid.selection_shape(), SelectionShape::Single(CellCoord::new(1, 1)));
        assert_eq!(grid.editing_cell(), Some(CellCoord::new(1, 1)));
        assert_eq!(grid.focused(), Some(CellCoord::new(1, 1)));

        let cell = grid.cell(1, 1).unwrap();
        assert!(cell.is_editing());
        assert!(!cell.is_selected());
        assert!(cell.view().is_editable());
        assert!(cell.view().is_focused());
    }

    #[test]
    fn test_selected_and_editing_never_both_set() {
        let mut grid = grid(3, 3);
        grid.pointer_down(data(0, 0), Modifiers::new());
        grid.pointer_move(data(2, 2));

        for row in 0..3 {
            for col in 0..3 {
                let cell = grid.cell(row, col).unwrap();
                assert!(!(cell.is_selected() && cell.is_editing()));
            }
        }
        assert_eq!(grid.selected_coords().len(), 9);
    }

    #[test]
    fn test_commit_restores_selection_flag() {
        let mut grid = grid(2, 2);
        grid.pointer_down(data(0, 1), Modifiers::new());
        grid.pointer_up();
        grid.blur(CellCoord::new(0, 1));

        let cell = grid.cell(0, 1).unwrap();
        assert!(!cell.is_editing());
        assert!(cell.is_selected());
        assert!(cell.view().is_selected());
        assert!(grid.interaction().is_idle());
    }

    #[test]
    fn test_header_and_row_number_clicks_ignored() {
        let mut grid = grid(2, 2);
        grid.pointer_down(CellSlot::Header { col: 1 }, Modifiers::new());
        grid.pointer_down(CellSlot::RowNumber { row: 0 }, Modifiers::new());
        assert!(grid.selection_shape().is_empty());
        assert!(grid.interaction().is_idle());
    }

    #[test]
    fn test_out_of_range_slot_ignored() {
        let mut grid = grid(2, 2);
        grid.pointer_down(data(5, 5), Modifiers::new());
        grid.begin_edit(CellCoord::new(9, 0));
        assert!(grid.selection_shape().is_empty());
        assert!(grid.interaction().is_idle());
    }

    #[test]
    fn test_select_all_includes_row_numbers() {
        let mut grid = grid(2, 3);
        grid.pointer_down(CellSlot::Corner, Modifiers::new());

        assert_eq!(grid.selection_shape(), SelectionShape::All);
        assert!(grid.row_number(0).unwrap().is_selected());
        assert!(grid.row_number(1).unwrap().view().is_selected());

        grid.clear_selection();
        assert!(!grid.row_number(0).unwrap().is_selected());
    }

    #[test]
    fn test_set_column_title() {
        let mut grid = grid(1, 2);
        grid.set_column_title(1, "Price");
        assert_eq!(grid.header_title(1), Some("Price"));
        assert_eq!(grid.header(1).unwrap().view().text(), "Price");

        grid.set_column_title(2, "Nope");
        grid.set_column_title(usize::MAX, "Nope");
        assert_eq!(grid.header_title(0), Some("A"));
        assert_eq!(grid.corner().unwrap().value(), "");
    }

    #[test]
    fn test_key_without_focus_is_ignored() {
        let mut grid = grid(2, 2);
        assert!(!grid.key_down(Key::ArrowDown));
        assert!(grid.selection_shape().is_empty());
    }

    #[test]
    fn test_unknown_key_not_consumed() {
        let mut grid = grid(2, 2);
        grid.focus_in(CellCoord::new(0, 0));
        assert!(!grid.key_down(Key::Unknown));
    }

    #[test]
    fn test_navigation_commits_open_edit() {
        let mut grid = grid(2, 2);
        grid.pointer_down(data(0, 0), Modifiers::new());
        grid.pointer_up();
        grid.view_mut(CellCoord::new(0, 0)).unwrap().type_text("hello");
        grid.drain_changes();

        assert!(grid.key_down(Key::ArrowRight));
        assert_eq!(grid.value(0, 0), Some("hello"));
        assert!(!grid.cell(0, 0).unwrap().is_selected());
        assert_eq!(grid.drain_changes().len(), 1);
        assert_eq!(grid.focused(), Some(CellCoord::new(0, 1)));
        assert_eq!(grid.selection_shape(), SelectionShape::Single(CellCoord::new(0, 1)));
    }

    #[test]
    fn test_click_elsewhere_commits_previous_edit() {
        let mut grid = grid(2, 2);
        grid.pointer_down(data(0, 0), Modifiers::new());
        grid.pointer_up();
        grid.view_mut(CellCoord::new(0, 0)).unwrap().type_text("first");

        grid.pointer_down(data(1, 1), Modifiers::new());
        assert_eq!(grid.value(0, 0), Some("first"));
        assert_eq!(grid.editing_cell(), Some(CellCoord::new(1, 1)));

        // The late DOM blur for the old cell is harmless
        grid.blur(CellCoord::new(0, 0));
        assert_eq!(grid.pending_changes().len(), 1);
    }

    #[test]
    fn test_double_click_edits() {
        let mut grid = grid(2, 2);
        grid.double_click(data(1, 0));
        assert_eq!(grid.editing_cell(), Some(CellCoord::new(1, 0)));

        grid.double_click(CellSlot::Header { col: 0 });
        assert_eq!(grid.editing_cell(), Some(CellCoord::new(1, 0)));
    }

    #[test]
    fn test_resize_start_ignores_data_slots() {
        let mut grid = grid(2, 2);
        grid.resize_start(data(0, 0), 10.0);
        assert!(grid.interaction().is_idle());
    }

    #[test]
    fn test_resize_commits_open_edit() {
        let mut grid = grid(2, 2);
        grid.pointer_down(data(0, 0), Modifiers::new());
        grid.pointer_up();
        grid.resize_start(CellSlot::Header { col: 0 }, 100.0);

        assert!(grid.interaction().is_resizing());
        assert!(!grid.cell(0, 0).unwrap().is_editing());
        assert_eq!(grid.pending_changes().len(), 1);
    }

    #[test]
    fn test_corner_handle_resizes_row_number_track() {
        let mut grid = grid(1, 1);
        grid.resize_start(CellSlot::Corner, 0.0);
        grid.resize_move(30.0);
        grid.resize_end();
        assert_eq!(grid.surface().column_template(), "80px 100px");
        assert!(grid.interaction().is_idle());
    }

    #[test]
    fn test_resize_with_unreadable_template_is_noop() {
        let mut grid = grid(1, 2);
        grid.surface_mut().override_template("auto auto auto");
        grid.resize_start(CellSlot::Header { col: 0 }, 0.0);
        assert!(grid.interaction().is_idle());

        grid.resize_move(500.0);
        assert_eq!(grid.surface().column_template(), "auto auto auto");
    }

    #[test]
    fn test_resize_move_without_start_is_noop() {
        let mut grid = grid(1, 2);
        grid.resize_move(500.0);
        grid.resize_end();
        assert_eq!(grid.surface().column_template(), "50px 100px 100px");
    }

    #[test]
    fn test_values_snapshot() {
        let mut grid = grid(2, 2);
        grid.select_range(CellCoord::new(0, 0), CellCoord::new(1, 1));
        grid.paste(Some("a\tb\tc\td"));
        assert_eq!(
            grid.values(),
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string(), "d".to_string()],
            ]
        );
    }
}
