//! Interactive user prompting components
//!
//! Separates CLI prompting logic from business logic. Destructive commands
//! route through [`confirm`] unless `--force` is given; in a non-interactive
//! session the prompt defaults to "no" rather than blocking.

use std::io::{self, Write};

use crate::error::Result;

/// Prompt user for yes/no confirmation
///
/// # Arguments
/// * `prompt` - The prompt message to display (without [y/N] suffix)
///
/// # Returns
/// * `true` if user confirms with 'y' or 'Y'
/// * `false` otherwise
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{}? [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
