use cellgrid_core::{CellCoord, CellSlot, Grid, GridConfig, GridSurface, HeadlessSurface, Key, Modifiers};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cellgrid_core=debug")),
        )
        .init();

    let config = GridConfig::new(4, 3).with_frozen(1, 1);
    let mut grid = match Grid::new(config, HeadlessSurface::new()) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("failed to build grid: {} ({})", e, e.code());
            return;
        }
    };
    grid.set_column_title(0, "Item");
    grid.set_column_title(1, "Qty");

    // Type into B2, then move right with Tab
    grid.pointer_down(CellSlot::Data { row: 1, col: 1 }, Modifiers::new());
    grid.pointer_up();
    if let Some(view) = grid.view_mut(CellCoord::new(1, 1)) {
        view.type_text("12");
    }
    grid.key_down(Key::Tab);

    // Drag-select B2:C3 and copy it
    grid.pointer_down(CellSlot::Data { row: 1, col: 1 }, Modifiers::new());
    grid.pointer_move(CellSlot::Data { row: 2, col: 2 });
    grid.pointer_up();
    let copied = grid.copy().unwrap_or_default();
    println!("copied {:?} from {:?}", copied, grid.selection_shape());

    // Paste it one row down
    grid.select_range(CellCoord::new(2, 1), CellCoord::new(3, 2));
    grid.paste(Some(&copied));

    // Widen the Qty column
    grid.resize_start(CellSlot::Header { col: 1 }, 0.0);
    grid.resize_move(40.0);
    grid.resize_end();
    println!("columns: {}", grid.surface().column_template());

    for change in grid.drain_changes() {
        println!("changed {} -> {:?}", change.coord(), change.value);
    }
    for (row, values) in grid.values().iter().enumerate() {
        println!("{:>2} | {}", row + 1, values.join(" | "));
    }
}
