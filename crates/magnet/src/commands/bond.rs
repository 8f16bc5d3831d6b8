use std::sync::mpsc;

use magnet_core::session;
use magnet_windows::{MagnetService, Window, ctrl_c};

use super::window_label;

/// Bonds `child` to `parent` and keeps them synchronized until Ctrl+C.
pub fn execute(parent: &str, child: &str) {
    let config = super::startup();

    let pair = session::parse_hwnd(parent).and_then(|parent| {
        let child = session::parse_hwnd(child)?;
        session::check_pair(parent, child, &[])?;
        Ok((parent, child))
    });
    let (parent, child) = pair.unwrap_or_else(|e| fail(&e));

    for hwnd in [parent, child] {
        if !Window::from_raw(hwnd).exists() {
            fail(&format!("window 0x{hwnd:X} does not exist"));
        }
    }

    let (tx, rx) = mpsc::channel();
    if let Err(e) = ctrl_c::set_handler(tx) {
        fail(&e.to_string());
    }

    let service = MagnetService::start(config.bond).unwrap_or_else(|e| fail(&e.to_string()));
    if !service.add_bond(parent, child) {
        fail(&format!("could not read the position of 0x{parent:X}"));
    }

    println!(
        "Magnetized: {} -> {}",
        window_label(child),
        window_label(parent)
    );
    println!("Press Ctrl+C to release.");

    let _ = rx.recv();
    drop(service);
    println!("All magnets cleared.");
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
