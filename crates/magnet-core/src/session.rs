//! Command parsing for the interactive `magnet run` session.

use std::collections::HashSet;

use crate::Bond;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  list                   Refresh and show candidate windows
  bond <parent> <child>  Bond child to parent (alias: magnetize)
  unbond <parent> <child>
                         Remove a bond
  bonds                  Show active bonds
  clear                  Remove every bond
  help                   Show this help
  quit                   Remove all bonds and exit

Windows are given by their number in the last listing (e.g. 3) or by
handle in hex (e.g. 0x1A2B).";

/// A window named on the session command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRef {
    /// 1-based position in the most recent listing.
    Index(usize),
    /// Raw window handle.
    Handle(usize),
}

impl WindowRef {
    /// Resolves to a handle using the most recent listing.
    pub fn resolve(self, listed: &[usize]) -> Result<usize, String> {
        match self {
            Self::Handle(hwnd) => Ok(hwnd),
            Self::Index(i) => listed
                .get(i.wrapping_sub(1))
                .copied()
                .ok_or_else(|| format!("no window #{i} in the last listing (run 'list')")),
        }
    }
}

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    List,
    Bond { parent: WindowRef, child: WindowRef },
    Unbond { parent: WindowRef, child: WindowRef },
    Bonds,
    Clear,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" | "refresh" => no_args(SessionCommand::List, &args)?,
        "bond" | "magnetize" => {
            let (parent, child) = pair(verb, &args)?;
            SessionCommand::Bond { parent, child }
        }
        "unbond" => {
            let (parent, child) = pair(verb, &args)?;
            SessionCommand::Unbond { parent, child }
        }
        "bonds" => no_args(SessionCommand::Bonds, &args)?,
        "clear" => no_args(SessionCommand::Clear, &args)?,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

/// Parses a window reference: `0x`-prefixed hex is a handle, a plain
/// number is a listing index.
pub fn parse_window_ref(s: &str) -> Result<WindowRef, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return usize::from_str_radix(hex, 16)
            .map(WindowRef::Handle)
            .map_err(|_| format!("invalid window handle '{s}'"));
    }
    match s.parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("invalid window number '{s}'")),
        Ok(i) => Ok(WindowRef::Index(i)),
    }
}

/// Parses a window handle given as decimal or `0x` hex.
pub fn parse_hwnd(s: &str) -> Result<usize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse(),
    };
    match parsed {
        Ok(0) | Err(_) => Err(format!("invalid window handle '{s}'")),
        Ok(hwnd) => Ok(hwnd),
    }
}

/// Checks that a parent/child pair can be bonded alongside `bonds`.
///
/// Refuses a window bonded to itself and any bond that would close a
/// cycle (`child` already leads back to `parent`). Location events arrive
/// queued, after the engine has stopped ignoring the windows it moved, so
/// a cycle would keep the windows chasing each other across the screen.
pub fn check_pair(
    parent: usize,
    child: usize,
    bonds: &[(usize, Vec<Bond>)],
) -> Result<(), String> {
    if parent == child {
        return Err("parent and child must be different windows".into());
    }
    if leads_to(bonds, child, parent) {
        return Err(format!(
            "0x{child:X} already drives 0x{parent:X}; bonding them both ways would loop"
        ));
    }
    Ok(())
}

/// Returns whether `to` is reachable from `from` through parent-to-child
/// bonds.
fn leads_to(bonds: &[(usize, Vec<Bond>)], from: usize, to: usize) -> bool {
    let mut pending = vec![from];
    let mut seen = HashSet::new();
    while let Some(hwnd) = pending.pop() {
        if !seen.insert(hwnd) {
            continue;
        }
        let Some((_, children)) = bonds.iter().find(|(parent, _)| *parent == hwnd) else {
            continue;
        };
        for bond in children {
            if bond.child == to {
                return true;
            }
            pending.push(bond.child);
        }
    }
    false
}

fn no_args(command: SessionCommand, args: &[&str]) -> Result<SessionCommand, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(format!("unexpected argument '{}'", args[0]))
    }
}

fn pair(verb: &str, args: &[&str]) -> Result<(WindowRef, WindowRef), String> {
    match args {
        [parent, child] => Ok((parse_window_ref(parent)?, parse_window_ref(child)?)),
        _ => Err(format!("usage: {verb} <parent> <child>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Offset;

    #[test]
    fn blank_line_is_no_command() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   \t"), Ok(None));
    }

    #[test]
    fn bond_with_indices() {
        // Arrange / Act
        let command = parse_command("bond 1 3").unwrap();

        // Assert
        assert_eq!(
            command,
            Some(SessionCommand::Bond {
                parent: WindowRef::Index(1),
                child: WindowRef::Index(3),
            })
        );
    }

    #[test]
    fn magnetize_alias_accepts_handles() {
        let command = parse_command("MAGNETIZE 0x1A2B 0x00ff").unwrap();

        assert_eq!(
            command,
            Some(SessionCommand::Bond {
                parent: WindowRef::Handle(0x1A2B),
                child: WindowRef::Handle(0xFF),
            })
        );
    }

    #[test]
    fn unbond_needs_two_windows() {
        assert!(parse_command("unbond 1").is_err());
        assert!(parse_command("unbond 1 2 3").is_err());
        assert!(parse_command("unbond 2 1").unwrap().is_some());
    }

    #[test]
    fn simple_commands_and_aliases() {
        assert_eq!(parse_command("ls"), Ok(Some(SessionCommand::List)));
        assert_eq!(parse_command("refresh"), Ok(Some(SessionCommand::List)));
        assert_eq!(parse_command("bonds"), Ok(Some(SessionCommand::Bonds)));
        assert_eq!(parse_command("clear"), Ok(Some(SessionCommand::Clear)));
        assert_eq!(parse_command("?"), Ok(Some(SessionCommand::Help)));
        assert_eq!(parse_command("exit"), Ok(Some(SessionCommand::Quit)));
    }

    #[test]
    fn trailing_arguments_are_rejected() {
        assert!(parse_command("clear everything").is_err());
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse_command("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }

    #[test]
    fn zero_and_garbage_refs_are_rejected() {
        assert!(parse_window_ref("0").is_err());
        assert!(parse_window_ref("-2").is_err());
        assert!(parse_window_ref("0xZZ").is_err());
        assert!(parse_window_ref("notepad").is_err());
    }

    #[test]
    fn index_resolves_against_listing() {
        let listed = [0x10, 0x20, 0x30];

        assert_eq!(WindowRef::Index(2).resolve(&listed), Ok(0x20));
        assert!(WindowRef::Index(4).resolve(&listed).is_err());
        assert_eq!(WindowRef::Handle(0x99).resolve(&listed), Ok(0x99));
    }

    #[test]
    fn index_resolution_with_empty_listing_fails() {
        assert!(WindowRef::Index(1).resolve(&[]).is_err());
    }

    #[test]
    fn hwnd_parses_decimal_and_hex() {
        assert_eq!(parse_hwnd("4660"), Ok(0x1234));
        assert_eq!(parse_hwnd("0x1234"), Ok(0x1234));
        assert_eq!(parse_hwnd("0X1234"), Ok(0x1234));
        assert!(parse_hwnd("0").is_err());
        assert!(parse_hwnd("window").is_err());
    }

    fn bonded(pairs: &[(usize, usize)]) -> Vec<(usize, Vec<Bond>)> {
        let mut bonds: Vec<(usize, Vec<Bond>)> = Vec::new();
        for &(parent, child) in pairs {
            let bond = Bond {
                child,
                offset: Offset::default(),
            };
            match bonds.iter_mut().find(|(p, _)| *p == parent) {
                Some((_, list)) => list.push(bond),
                None => bonds.push((parent, vec![bond])),
            }
        }
        bonds
    }

    #[test]
    fn pair_must_differ() {
        assert!(check_pair(0x10, 0x20, &[]).is_ok());
        assert!(check_pair(0x10, 0x10, &[]).is_err());
    }

    #[test]
    fn reverse_bond_is_refused() {
        // Arrange
        let bonds = bonded(&[(0x10, 0x20)]);

        // Act
        let result = check_pair(0x20, 0x10, &bonds);

        // Assert
        assert!(result.unwrap_err().contains("loop"));
    }

    #[test]
    fn longer_cycle_is_refused() {
        let bonds = bonded(&[(0x10, 0x20), (0x20, 0x30)]);

        assert!(check_pair(0x30, 0x10, &bonds).is_err());
    }

    #[test]
    fn chains_and_fan_out_are_allowed() {
        let bonds = bonded(&[(0x10, 0x20), (0x10, 0x30), (0x20, 0x40)]);

        assert!(check_pair(0x40, 0x50, &bonds).is_ok());
        assert!(check_pair(0x10, 0x40, &bonds).is_ok());
        assert!(check_pair(0x30, 0x20, &bonds).is_ok());
    }
}
