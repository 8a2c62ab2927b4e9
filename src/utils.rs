use std::io::{self, BufRead};
use std::path::Path;
use std::process::Command;

use crate::error::{Result, SlateError};

/// Open a file in the user's preferred editor ($EDITOR, defaulting to vi)
///
/// Executes the editor through a shell to support EDITOR values with arguments
/// (e.g., "subl -w", "code --wait"). The file path is passed via shell
/// positional parameters (`$1`) to prevent path-based injection; `$EDITOR`
/// itself is user-controlled configuration, following the same convention as
/// git and mercurial.
pub fn open_in_editor(path: &Path) -> Result<()> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{editor} \"$1\""))
        .arg("--")
        .arg(path)
        .status()?;

    if !status.success() {
        return Err(SlateError::EditorFailed(status.code().unwrap_or(-1)));
    }

    Ok(())
}

/// Read all input from stdin (for piped input)
pub fn read_stdin() -> io::Result<String> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }
    Ok(lines.join("\n").trim().to_string())
}
