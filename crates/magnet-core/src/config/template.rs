/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `magnet init` to write a starter file. Parsing it yields
/// exactly [`Config::default`](super::Config::default).
pub fn generate_config() -> String {
    r##"# WindowMagnet configuration
# Location: ~/.config/window-magnet/config.toml

[bond]
# Gap in pixels between a parent window's right edge and its children.
gap = 10

[bond.shake]
# Briefly wiggle a child window after it has been bonded.
enabled = true
# Horizontal distance of each nudge in pixels.
amplitude = 5
# Number of right/left cycles.
count = 3
# Pause between nudges in milliseconds.
interval_ms = 50

[logging]
# Enable file logging to ~/.config/window-magnet/logs/magnet.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10

[updates]
# Check GitHub for a newer release when an interactive session starts.
check = true
"##
    .to_string()
}
