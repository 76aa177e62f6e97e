#![cfg(target_arch = "wasm32")]

use cellgrid_core::{CellCoord, CellSlot, CellView, Grid, GridConfig, GridSurface, Modifiers};
use cellgrid_wasm::{DomSurface, GridWidget};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    element.style().set_property("display", "grid").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn count(container: &HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

#[wasm_bindgen_test]
fn builds_cells_in_document_order() {
    let container = container();
    let grid = Grid::new(
        GridConfig::new(3, 2).with_frozen(1, 1),
        DomSurface::new(container.clone()).unwrap(),
    )
    .unwrap();

    assert_eq!(container.child_element_count(), 3 + 3 * 3);
    assert_eq!(count(&container, ".grid-header-cell"), 3);
    assert_eq!(count(&container, ".grid-row-number-cell"), 3);
    assert_eq!(count(&container, ".grid-cell"), 6);
    assert_eq!(count(&container, ".resize-handle"), 3);
    assert_eq!(count(&container, ".grid-cell.frozen-row"), 2);
    assert_eq!(count(&container, ".grid-cell.frozen-col"), 3);
    assert_eq!(count(&container, "[tabindex=\"0\"]"), 6);

    let header = grid.header(1).unwrap().view();
    assert_eq!(header.text(), "B");
    assert_eq!(grid.surface().column_template(), "50px 100px 100px");
}

#[wasm_bindgen_test]
fn click_marks_cell_editable_and_focused() {
    let container = container();
    let mut grid = Grid::new(
        GridConfig::new(2, 2),
        DomSurface::new(container.clone()).unwrap(),
    )
    .unwrap();

    grid.pointer_down(CellSlot::Data { row: 1, col: 0 }, Modifiers::new());
    grid.pointer_up();

    let element = grid.cell(1, 0).unwrap().view().element().clone();
    assert_eq!(element.content_editable(), "true");
    assert!(!element.class_list().contains("selected"));

    element.set_text_content(Some("typed"));
    grid.blur(CellCoord::new(1, 0));
    assert_eq!(element.content_editable(), "false");
    assert!(element.class_list().contains("selected"));
    assert_eq!(grid.value(1, 0), Some("typed"));
}

#[wasm_bindgen_test]
fn column_title_keeps_resize_handle() {
    let container = container();
    let mut grid = Grid::new(
        GridConfig::new(1, 2),
        DomSurface::new(container.clone()).unwrap(),
    )
    .unwrap();

    grid.set_column_title(0, "Name");
    let header = grid.header(0).unwrap().view();
    assert_eq!(header.text(), "Name");
    assert_eq!(header.element().query_selector_all(".resize-handle").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn resize_rewrites_template() {
    let container = container();
    let mut grid = Grid::new(
        GridConfig::new(1, 2),
        DomSurface::new(container.clone()).unwrap(),
    )
    .unwrap();

    grid.resize_start(CellSlot::Header { col: 1 }, 10.0);
    grid.resize_move(-990.0);
    grid.resize_end();
    assert_eq!(
        container.style().get_property_value("grid-template-columns").unwrap(),
        "50px 100px 50px"
    );
}

#[wasm_bindgen_test]
fn widget_rejects_empty_config() {
    let config = serde_wasm_bindgen::to_value(&GridConfig::new(0, 2)).unwrap();
    assert!(GridWidget::new(container(), config).is_err());
}

#[wasm_bindgen_test]
fn widget_exposes_values_and_titles() {
    let config = serde_wasm_bindgen::to_value(&GridConfig::new(2, 3)).unwrap();
    let widget = GridWidget::new(container(), config).unwrap();

    assert_eq!(widget.rows(), 2);
    assert_eq!(widget.cols(), 3);
    assert_eq!(widget.cell_value(1, 2), Some(String::new()));
    assert_eq!(widget.cell_value(2, 0), None);

    widget.set_column_title(2, "Total");
    widget.select_all();
    let snapshot = widget.snapshot().unwrap();
    assert!(snapshot.contains("\"columnTitles\":[\"A\",\"B\",\"Total\"]"));
    assert!(snapshot.contains("\"rows\":2"));
}
