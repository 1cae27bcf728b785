//! Admin password hashing.

use std::io::{self, BufRead, IsTerminal, Write};

use hartna_admin::services::hash_password;

use super::CliError;

/// Read one line from stdin and print its argon2 PHC hash.
///
/// The trailing newline is not part of the password.
///
/// # Errors
///
/// Returns an error if stdin is empty or the hash cannot be computed.
#[allow(clippy::print_stderr)]
pub fn hash_from_stdin() -> Result<(), CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let hash = hash_line(&line)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{hash}")?;
    Ok(())
}

fn hash_line(line: &str) -> Result<String, CliError> {
    let password = line.trim_end_matches(['\r', '\n']);
    Ok(hash_password(password)?)
}
