use magnet_core::version::Release;
use magnet_windows::version_check;

pub fn execute() {
    super::startup();
    let local = env!("CARGO_PKG_VERSION");

    match version_check::check_for_update(local) {
        Some(release) => print_update(&release),
        None => println!("WindowMagnet v{local} is up to date."),
    }
}

/// Prints the update notice, also used by the interactive session.
pub fn print_update(release: &Release) {
    println!(
        "Update available: {} (running v{})",
        release.tag_name,
        env!("CARGO_PKG_VERSION")
    );
    if !release.html_url.is_empty() {
        println!("Download: {}", release.html_url);
    }
}
