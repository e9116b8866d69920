//! Terminal glue: navigation hints and interactive prompts.

use std::io::{self, BufRead, Write};

use pea_client::state::navigation::{Navigator, Route};

/// Navigator for a terminal session: there are no views to switch, so a
/// navigation request becomes a hint on stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(route = %route, "navigation requested");
        if let Some(hint) = hint(route) {
            eprintln!("{hint}");
        }
    }
}

/// What the user should run next after a navigation request.
#[must_use]
pub fn hint(route: Route) -> Option<&'static str> {
    match route {
        Route::Login => Some("You are logged out. Run `pea login` to sign in."),
        Route::Register => Some("Run `pea register` to create an account."),
        Route::Dashboard | Route::Transactions => None,
    }
}

/// Return `value`, or ask for it on stdin.
///
/// # Errors
///
/// Fails when stdin cannot be read.
pub fn value_or_prompt(value: Option<String>, label: &str) -> io::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut stderr = io::stderr();
    write!(stderr, "{label}: ")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

#[cfg(test)]
#[path = "terminal_test.rs"]
mod tests;
