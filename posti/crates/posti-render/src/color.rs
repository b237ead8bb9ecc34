//! Terminal colour detection.

use std::io::IsTerminal;

/// Whether ANSI colour should be used on stdout.
///
/// `FORCE_COLOR` (any value but `0`) turns colour on, a non-empty
/// `NO_COLOR` turns it off, otherwise colour follows whether stdout is a
/// terminal.
pub fn stdout_supports_color() -> bool {
    let force = std::env::var("FORCE_COLOR").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    let is_tty = std::io::stdout().is_terminal();
    let enabled = decide(force.as_deref(), no_color.as_deref(), is_tty);
    tracing::trace!(?force, ?no_color, is_tty, enabled, "colour detection");
    enabled
}

fn decide(force: Option<&str>, no_color: Option<&str>, is_tty: bool) -> bool {
    if let Some(value) = force {
        return value != "0";
    }
    if no_color.is_some_and(|v| !v.is_empty()) {
        return false;
    }
    is_tty
}
