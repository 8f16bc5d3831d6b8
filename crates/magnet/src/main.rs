mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "magnet",
    version,
    about = "Bond windows together so they move, minimize and maximize as one"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg_attr(not(windows), allow(dead_code))]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List windows that can be bonded
    List,
    /// Bond one window to another until Ctrl+C
    Bond {
        /// Parent window handle (decimal or 0x hex)
        parent: String,
        /// Child window handle (decimal or 0x hex)
        child: String,
    },
    /// Start an interactive bonding session
    Run,
    /// Check GitHub for a newer release
    CheckUpdate,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        command => platform(command),
    }
}

#[cfg(windows)]
fn platform(command: Commands) {
    match command {
        Commands::Init => commands::init::execute(),
        Commands::List => commands::list::execute(),
        Commands::Bond { parent, child } => commands::bond::execute(&parent, &child),
        Commands::Run => commands::run::execute(),
        Commands::CheckUpdate => commands::check_update::execute(),
    }
}

#[cfg(not(windows))]
fn platform(_command: Commands) {
    eprintln!("Error: this command is only available on Windows.");
    std::process::exit(1);
}
