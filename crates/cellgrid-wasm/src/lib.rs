mod dom;
mod widget;

pub use dom::{DomCell, DomSurface};
pub use widget::GridWidget;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
