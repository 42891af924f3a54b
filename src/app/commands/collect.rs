//! Interactive collection of app names.

use std::io::{self, BufRead, ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, AppName};

/// Entering this value ends collection. Exact, case-sensitive match.
pub const SENTINEL: &str = "exit";

/// Collect app names from the user.
///
/// Uses an interactive prompt when attached to a terminal, otherwise reads
/// lines from stdin. Either way, every entered line other than the sentinel
/// is kept verbatim: empty lines and duplicates included.
pub fn execute() -> Result<Vec<AppName>, AppError> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        collect_interactive()
    } else {
        collect_from_reader(io::stdin().lock())
    }
}

/// Collect names from any line source. Collection ends at the sentinel or at
/// end of input.
pub fn collect_from_reader<R: BufRead>(reader: R) -> Result<Vec<AppName>, AppError> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line == SENTINEL {
            break;
        }
        names.push(AppName::new(line));
    }
    Ok(names)
}

fn collect_interactive() -> Result<Vec<AppName>, AppError> {
    let mut names = Vec::new();
    loop {
        let entry: String = match Input::new()
            .with_prompt("App name ('exit' to finish)")
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => value,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => break,
            Err(err) => {
                return Err(AppError::validation(format!("Failed to read app name: {}", err)));
            }
        };

        if entry == SENTINEL {
            break;
        }
        names.push(AppName::new(entry));
    }
    Ok(names)
}
