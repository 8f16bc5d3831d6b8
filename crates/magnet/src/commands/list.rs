use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use magnet_windows::{Window, WindowInfo};

pub fn execute() {
    super::startup();

    let windows = match magnet_windows::enumerate_windows() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", table(&windows));
    println!("\nFound {} windows.", windows.len());
}

/// Renders the window picker. Rows are numbered from 1 so a session can
/// refer to them by position.
pub fn table(windows: &[WindowInfo]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Process"),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    for (i, info) in windows.iter().enumerate() {
        let (width, height) = Window::from_raw(info.hwnd)
            .rect()
            .map_or((0, 0), |rect| (rect.width, rect.height));

        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(format!("0x{:X}", info.hwnd)),
            Cell::new(&info.title),
            Cell::new(&info.process_name),
            Cell::new(width).set_alignment(CellAlignment::Right),
            Cell::new(height).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
