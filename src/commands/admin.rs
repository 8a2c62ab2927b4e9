use crate::error::{Result, SlateError};

/// Launch the interactive admin TUI
pub async fn cmd_admin(tab: Option<&str>) -> Result<()> {
    use crate::tui::AdminTui;
    use iocraft::prelude::*;

    element!(AdminTui(
        initial_tab: tab.map(|t| t.to_string()),
    ))
    .fullscreen()
    .await
    .map_err(|e| SlateError::Other(format!("TUI error: {}", e)))
}
