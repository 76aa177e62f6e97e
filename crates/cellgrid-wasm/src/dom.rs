//! `web-sys` implementation of the grid view traits.
//!
//! Every cell is a `div` appended to the container in document order. The
//! container is expected to be a CSS grid; its `grid-template-columns` is the
//! column track list.

use cellgrid_core::view::{RESIZE_HANDLE_CLASS, SELECTED_CLASS};
use cellgrid_core::{CellSlot, CellView, GridError, GridSurface, Marker, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement};

pub const SLOT_ATTR: &str = "data-slot";
pub const ROW_ATTR: &str = "data-row";
pub const COL_ATTR: &str = "data-col";

const LABEL_CLASS: &str = "grid-header-label";
const TEMPLATE_PROPERTY: &str = "grid-template-columns";

pub(crate) fn dom_error(err: JsValue) -> GridError {
    GridError::Dom(format!("{:?}", err))
}

/// Log a failed view update to the console
fn warn_on_err<T>(what: &str, result: std::result::Result<T, JsValue>) {
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[cellgrid] {} failed: {}", what, dom_error(err)).into());
    }
}

pub struct DomSurface {
    document: Document,
    container: HtmlElement,
}

impl DomSurface {
    pub fn new(container: HtmlElement) -> Result<Self> {
        let document = container
            .owner_document()
            .ok_or(GridError::MissingContainer)?;
        Ok(Self {
            document,
            container,
        })
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn create(&self, tag: &str) -> Result<HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(dom_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GridError::Dom(format!("<{}> is not an HTML element", tag)))
    }
}

impl GridSurface for DomSurface {
    type View = DomCell;

    fn create_cell(&mut self, slot: CellSlot, markers: &[Marker]) -> Result<DomCell> {
        let element = self.create("div")?;
        let classes = element.class_list();
        for marker in markers {
            classes.add_1(marker.class_name()).map_err(dom_error)?;
        }

        element
            .set_attribute(SLOT_ATTR, slot.dataset_kind())
            .map_err(dom_error)?;
        match slot {
            CellSlot::Corner => {}
            CellSlot::Header { col } => {
                element.set_attribute(COL_ATTR, &col.to_string()).map_err(dom_error)?;
            }
            CellSlot::RowNumber { row } => {
                element.set_attribute(ROW_ATTR, &row.to_string()).map_err(dom_error)?;
            }
            CellSlot::Data { row, col } => {
                element.set_attribute(ROW_ATTR, &row.to_string()).map_err(dom_error)?;
                element.set_attribute(COL_ATTR, &col.to_string()).map_err(dom_error)?;
                element.set_tab_index(0);
            }
        }

        // Header text lives in its own span so relabelling keeps the handle
        let label = if slot.is_header() {
            let label = self.create("span")?;
            label.set_class_name(LABEL_CLASS);
            element.append_child(&label).map_err(dom_error)?;

            let handle = self.create("div")?;
            handle.set_class_name(RESIZE_HANDLE_CLASS);
            element.append_child(&handle).map_err(dom_error)?;
            Some(label)
        } else {
            None
        };

        self.container.append_child(&element).map_err(dom_error)?;
        Ok(DomCell { element, label })
    }

    fn column_template(&self) -> String {
        let computed = web_sys::window()
            .and_then(|window| window.get_computed_style(&self.container).ok().flatten())
            .and_then(|style| style.get_property_value(TEMPLATE_PROPERTY).ok())
            .filter(|template| !template.is_empty() && template != "none");

        computed.unwrap_or_else(|| {
            self.container
                .style()
                .get_property_value(TEMPLATE_PROPERTY)
                .unwrap_or_default()
        })
    }

    fn set_column_template(&mut self, template: &str) {
        warn_on_err(
            "set column template",
            self.container.style().set_property(TEMPLATE_PROPERTY, template),
        );
    }
}

pub struct DomCell {
    element: HtmlElement,
    label: Option<HtmlElement>,
}

impl DomCell {
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    fn text_node(&self) -> &HtmlElement {
        self.label.as_ref().unwrap_or(&self.element)
    }
}

impl CellView for DomCell {
    fn set_text(&mut self, text: &str) {
        self.text_node().set_text_content(Some(text));
    }

    fn text(&self) -> String {
        self.text_node().text_content().unwrap_or_default()
    }

    fn set_selected(&mut self, selected: bool) {
        warn_on_err(
            "toggle selected class",
            self.element.class_list().toggle_with_force(SELECTED_CLASS, selected),
        );
    }

    fn set_editable(&mut self, editable: bool) {
        self.element
            .set_content_editable(if editable { "true" } else { "false" });
    }

    fn focus(&mut self) {
        warn_on_err("focus cell", self.element.focus());
    }
}

fn element_of(target: Option<EventTarget>) -> Option<Element> {
    target?.dyn_into::<Element>().ok()
}

/// Grid slot of the cell containing an event target
pub fn slot_of(target: Option<EventTarget>) -> Option<CellSlot> {
    let cell = element_of(target)?.closest(&format!("[{}]", SLOT_ATTR)).ok()??;
    CellSlot::from_dataset(
        &cell.get_attribute(SLOT_ATTR)?,
        cell.get_attribute(ROW_ATTR).as_deref(),
        cell.get_attribute(COL_ATTR).as_deref(),
    )
}

pub fn is_resize_handle(target: Option<EventTarget>) -> bool {
    element_of(target).is_some_and(|element| element.class_list().contains(RESIZE_HANDLE_CLASS))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use cellgrid_core::{CellCoord, Grid, GridConfig, Key};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached() -> HtmlElement {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.create_element("div").ok())
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn resize_handle_resolves_to_its_header() {
        let grid = Grid::new(GridConfig::new(1, 3), DomSurface::new(detached()).unwrap()).unwrap();
        let header = grid.header(2).unwrap().view().element().clone();
        let handle = header
            .query_selector(&format!(".{}", RESIZE_HANDLE_CLASS))
            .unwrap()
            .unwrap();

        assert!(!handle.has_attribute("data-track"));
        let target: EventTarget = handle.into();
        assert!(is_resize_handle(Some(target.clone())));
        assert_eq!(slot_of(Some(target)), Some(CellSlot::Header { col: 2 }));
    }

    #[wasm_bindgen_test]
    fn view_updates_on_detached_container() {
        let mut grid =
            Grid::new(GridConfig::new(2, 2), DomSurface::new(detached()).unwrap()).unwrap();

        grid.focus_in(CellCoord::new(0, 0));
        assert!(grid.key_down(Key::ArrowDown));
        assert_eq!(grid.focused(), Some(CellCoord::new(1, 0)));
        let element = grid.cell(1, 0).unwrap().view().element().clone();
        assert!(element.class_list().contains(SELECTED_CLASS));

        grid.surface_mut().set_column_template("50px 80px 80px");
        assert_eq!(
            grid.surface().container().style().get_property_value(TEMPLATE_PROPERTY).unwrap(),
            "50px 80px 80px"
        );
    }
}
