use std::cell::RefCell;
use std::rc::Rc;

use cellgrid_core::{CellCoord, CellValueChange, Grid, GridConfig, GridError, Key, Modifiers};
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Event, HtmlElement, KeyboardEvent, MouseEvent};

use crate::dom::{self, dom_error, DomSurface};

const GRID_SELECTOR: &str = "[data-grid]";
const CLIPBOARD_FORMAT: &str = "text/plain";

struct SharedState {
    grid: Grid<DomSurface>,
    on_change: Option<Function>,
}

type Shared = Rc<RefCell<SharedState>>;
type Listener = Closure<dyn FnMut(Event)>;

/// Spreadsheet grid widget bound to a DOM container
#[wasm_bindgen]
pub struct GridWidget {
    state: Shared,
    container: HtmlElement,
    listeners: Vec<(&'static str, Listener)>,
}

/// Structured error object for JavaScript
#[derive(Serialize)]
pub struct JsGridError {
    code: String,
    message: String,
}

impl From<GridError> for JsGridError {
    fn from(err: GridError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl JsGridError {
    fn from_error<E: std::fmt::Display>(err: E) -> JsValue {
        let error = Self {
            code: "ERROR".to_string(),
            message: err.to_string(),
        };
        serde_wasm_bindgen::to_value(&error).unwrap_or(JsValue::NULL)
    }
}

fn to_js_error(err: GridError) -> JsValue {
    let js_error = JsGridError::from(err);
    serde_wasm_bindgen::to_value(&js_error).unwrap_or(JsValue::NULL)
}

/// Grid contents for JavaScript
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridSnapshot {
    rows: usize,
    cols: usize,
    column_titles: Vec<String>,
    values: Vec<Vec<String>>,
    selected: Vec<CellCoord>,
}

/// Run `f` against the grid, then hand queued value changes to the next tick.
///
/// A programmatic `focus()` inside `f` fires focus events synchronously; those
/// find the state borrowed and are skipped.
fn with_grid<R>(state: &Shared, f: impl FnOnce(&mut Grid<DomSurface>) -> R) -> Option<R> {
    let (result, changes, callback) = {
        let Ok(mut s) = state.try_borrow_mut() else {
            return None;
        };
        let result = f(&mut s.grid);
        let changes = s.grid.drain_changes();
        (result, changes, s.on_change.clone())
    };
    dispatch(changes, callback);
    Some(result)
}

fn dispatch(changes: Vec<CellValueChange>, callback: Option<Function>) {
    for change in changes {
        let callback = callback.clone();
        wasm_bindgen_futures::spawn_local(async move {
            web_sys::console::log_1(
                &format!("[cellgrid] {} = {:?}", change.coord(), change.value).into(),
            );
            if let Some(callback) = callback {
                if let Ok(payload) = serde_wasm_bindgen::to_value(&change) {
                    let _ = callback.call1(&JsValue::NULL, &payload);
                }
            }
        });
    }
}

fn modifiers(event: &MouseEvent) -> Modifiers {
    Modifiers::new()
        .with_shift(event.shift_key())
        .with_ctrl(event.ctrl_key())
        .with_alt(event.alt_key())
        .with_meta(event.meta_key())
}

fn on_mouse_down(state: &Shared, event: &MouseEvent) {
    let target = event.target();
    if dom::is_resize_handle(target.clone()) {
        if let Some(header) = dom::slot_of(target) {
            let x = f64::from(event.client_x());
            with_grid(state, |grid| grid.resize_start(header, x));
            event.prevent_default();
        }
        return;
    }
    if let Some(slot) = dom::slot_of(target) {
        let modifiers = modifiers(event);
        with_grid(state, |grid| grid.pointer_down(slot, modifiers));
    }
}

fn on_mouse_move(state: &Shared, event: &MouseEvent) {
    let x = f64::from(event.client_x());
    let slot = dom::slot_of(event.target());
    with_grid(state, |grid| {
        grid.resize_move(x);
        if let Some(slot) = slot {
            grid.pointer_move(slot);
        }
    });
}

fn on_key_down(state: &Shared, event: &KeyboardEvent) {
    let key = Key::from_dom_key(&event.key());
    if with_grid(state, |grid| grid.key_down(key)).unwrap_or(false) {
        event.prevent_default();
    }
}

fn on_copy(state: &Shared, event: &ClipboardEvent) {
    let Some(text) = with_grid(state, |grid| grid.copy()).flatten() else {
        return;
    };
    if let Some(data) = event.clipboard_data() {
        if data.set_data(CLIPBOARD_FORMAT, &text).is_ok() {
            event.prevent_default();
        }
    }
}

fn on_paste(state: &Shared, event: &ClipboardEvent) {
    let text = event
        .clipboard_data()
        .and_then(|data| data.get_data(CLIPBOARD_FORMAT).ok());
    if with_grid(state, |grid| grid.paste(text.as_deref())).unwrap_or(false) {
        event.prevent_default();
    }
}

impl GridWidget {
    fn build(container: HtmlElement, config: JsValue) -> cellgrid_core::Result<GridWidget> {
        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| GridError::InvalidConfig(e.to_string()))?;
        let grid = Grid::new(config, DomSurface::new(container.clone())?)?;

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            on_change: None,
        }));
        let mut widget = GridWidget {
            state,
            container,
            listeners: Vec::new(),
        };

        widget.listen("mousedown", |state, event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_mouse_down(state, event);
            }
        })?;
        widget.listen("mousemove", |state, event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_mouse_move(state, event);
            }
        })?;
        widget.listen("mouseup", |state, _event| {
            with_grid(state, |grid| grid.pointer_up());
        })?;
        widget.listen("dblclick", |state, event| {
            if let Some(slot) = dom::slot_of(event.target()) {
                with_grid(state, |grid| grid.double_click(slot));
            }
        })?;
        widget.listen("keydown", |state, event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                on_key_down(state, event);
            }
        })?;
        widget.listen("focusin", |state, event| {
            if let Some(coord) = dom::slot_of(event.target()).and_then(|slot| slot.coord()) {
                with_grid(state, |grid| grid.focus_in(coord));
            }
        })?;
        widget.listen("focusout", |state, event| {
            if let Some(coord) = dom::slot_of(event.target()).and_then(|slot| slot.coord()) {
                with_grid(state, |grid| grid.blur(coord));
            }
        })?;
        widget.listen("copy", |state, event| {
            if let Some(event) = event.dyn_ref::<ClipboardEvent>() {
                on_copy(state, event);
            }
        })?;
        widget.listen("paste", |state, event| {
            if let Some(event) = event.dyn_ref::<ClipboardEvent>() {
                on_paste(state, event);
            }
        })?;

        Ok(widget)
    }

    fn listen(
        &mut self,
        name: &'static str,
        handler: impl Fn(&Shared, &Event) + 'static,
    ) -> cellgrid_core::Result<()> {
        let state = self.state.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            handler(&state, &event);
        }) as Box<dyn FnMut(Event)>);
        self.container
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        self.listeners.push((name, closure));
        Ok(())
    }
}

#[wasm_bindgen]
impl GridWidget {
    /// Build the grid inside `container` from a `{ rows, cols, freezeRows, freezeCols }` object
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, config: JsValue) -> Result<GridWidget, JsValue> {
        let widget = Self::build(container, config).map_err(to_js_error)?;
        web_sys::console::log_1(
            &format!("[cellgrid] created {}x{} grid", widget.rows(), widget.cols()).into(),
        );
        Ok(widget)
    }

    /// Build the grid inside the document's first `[data-grid]` element
    pub fn attach(config: JsValue) -> Result<GridWidget, JsValue> {
        let container = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.query_selector(GRID_SELECTOR).ok().flatten())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| to_js_error(GridError::MissingContainer))?;
        Self::new(container, config)
    }

    /// Row count, 0 while the grid is busy handling an event
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> usize {
        self.state.try_borrow().map(|s| s.grid.rows()).unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> usize {
        self.state.try_borrow().map(|s| s.grid.cols()).unwrap_or(0)
    }

    #[wasm_bindgen(js_name = setColumnTitle)]
    pub fn set_column_title(&self, col: usize, title: &str) {
        with_grid(&self.state, |grid| grid.set_column_title(col, title));
    }

    /// Committed value of a data cell, `undefined` when out of range
    #[wasm_bindgen(js_name = cellValue)]
    pub fn cell_value(&self, row: usize, col: usize) -> Option<String> {
        let s = self.state.try_borrow().ok()?;
        s.grid.value(row, col).map(str::to_string)
    }

    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&self) {
        with_grid(&self.state, |grid| grid.select_all());
    }

    /// Register the `({ row, col, value }) => void` change callback. Pass
    /// `undefined` to remove it.
    #[wasm_bindgen(js_name = onCellChange)]
    pub fn on_cell_change(&self, callback: Option<Function>) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.on_change = callback;
        }
    }

    /// JSON snapshot of titles, values and selection
    pub fn snapshot(&self) -> Result<String, JsValue> {
        let s = self.state.try_borrow().map_err(JsGridError::from_error)?;
        let grid = &s.grid;
        let snapshot = GridSnapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            column_titles: (0..grid.cols())
                .filter_map(|col| grid.header_title(col).map(str::to_string))
                .collect(),
            values: grid.values(),
            selected: grid.selected_coords(),
        };
        serde_json::to_string(&snapshot).map_err(JsGridError::from_error)
    }
}

impl Drop for GridWidget {
    fn drop(&mut self) {
        for (name, closure) in &self.listeners {
            let _ = self
                .container
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}
