//! The interactive bonding session.

use std::io::{self, BufRead, Write};
use std::thread;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use magnet_core::session::{self, SessionCommand, WindowRef};
use magnet_windows::{MagnetService, Window, version_check};

use super::{check_update, list, window_label};

/// Runs the session until `quit` or end of input. Every bond is released
/// on the way out.
pub fn execute() {
    let config = super::startup();

    let service = match MagnetService::start(config.bond) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if config.updates.check {
        thread::spawn(|| {
            if let Some(release) = version_check::check_for_update(env!("CARGO_PKG_VERSION")) {
                check_update::print_update(&release);
            }
        });
    }

    println!(
        "WindowMagnet v{}. Type 'help' for commands.\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut session = Session {
        service,
        listed: Vec::new(),
    };
    session.list();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("magnet> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match session::parse_command(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => session.apply(command),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    session.clear();
}

struct Session {
    service: MagnetService,
    /// Handles from the most recent listing, in display order.
    listed: Vec<usize>,
}

impl Session {
    fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::List => self.list(),
            SessionCommand::Bond { parent, child } => self.bond(parent, child),
            SessionCommand::Unbond { parent, child } => self.unbond(parent, child),
            SessionCommand::Bonds => self.show_bonds(),
            SessionCommand::Clear => self.clear(),
            SessionCommand::Help => println!("{}", session::HELP),
            SessionCommand::Quit => {}
        }
    }

    fn list(&mut self) {
        match magnet_windows::enumerate_windows() {
            Ok(windows) => {
                self.listed = windows.iter().map(|w| w.hwnd).collect();
                println!("{}", list::table(&windows));
                println!("Found {} windows.", windows.len());
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    fn bond(&self, parent: WindowRef, child: WindowRef) {
        let checked = self.resolve(parent, child).and_then(|(parent, child)| {
            session::check_pair(parent, child, &self.service.bonds())?;
            Ok((parent, child))
        });
        let (parent, child) = match checked {
            Ok(pair) => pair,
            Err(e) => return eprintln!("Error: {e}"),
        };
        if let Some(gone) = [parent, child]
            .into_iter()
            .find(|hwnd| !Window::from_raw(*hwnd).exists())
        {
            return eprintln!("Error: window 0x{gone:X} no longer exists (run 'list')");
        }

        if self.service.add_bond(parent, child) {
            println!(
                "Magnetized: {} -> {}",
                window_label(child),
                window_label(parent)
            );
        } else {
            eprintln!("Error: could not read the position of 0x{parent:X}");
        }
    }

    fn unbond(&self, parent: WindowRef, child: WindowRef) {
        match self.resolve(parent, child) {
            Ok((parent, child)) => {
                self.service.remove_bond(parent, child);
                println!("Released 0x{child:X} from 0x{parent:X}.");
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    fn show_bonds(&self) {
        let bonds = self.service.bonds();
        if bonds.is_empty() {
            println!("No active magnets.");
            return;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Parent"),
                Cell::new("Child"),
                Cell::new("Offset"),
            ]);
        for (parent, children) in &bonds {
            for bond in children {
                table.add_row(vec![
                    Cell::new(format!("0x{parent:X} {}", window_label(*parent))),
                    Cell::new(format!("0x{:X} {}", bond.child, window_label(bond.child))),
                    Cell::new(format!("({}, {})", bond.offset.x, bond.offset.y)),
                ]);
            }
        }
        println!("{table}");
    }

    fn clear(&self) {
        self.service.clear_all();
        println!("All magnets cleared.");
    }

    fn resolve(&self, parent: WindowRef, child: WindowRef) -> Result<(usize, usize), String> {
        let parent = parent.resolve(&self.listed)?;
        let child = child.resolve(&self.listed)?;
        Ok((parent, child))
    }
}
