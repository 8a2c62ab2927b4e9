mod admin;
mod config;
mod content;
pub mod interactive;
mod media;
mod project;
mod settings;
mod status;

pub use admin::cmd_admin;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use content::{cmd_content_edit, cmd_content_ls, cmd_content_show};
pub use media::{cmd_media_add, cmd_media_ls, cmd_media_rm};
pub use project::{
    CreateProjectOptions, cmd_project_create, cmd_project_ls, cmd_project_publish,
    cmd_project_rm, cmd_project_set, cmd_project_show, cmd_project_toggle,
};
pub use settings::{cmd_settings_get, cmd_settings_ls, cmd_settings_set};
pub use status::cmd_status;

use crate::backend::RestBackend;
use crate::config::Config;
use crate::error::Result;

/// Build the backend client every command goes through.
///
/// Each command loads config and constructs its own client; nothing is shared
/// between invocations.
pub fn backend_from_config() -> Result<RestBackend> {
    let config = Config::load()?;
    RestBackend::from_config(&config)
}

/// Find a record id from a possibly partial prefix against a loaded list.
///
/// Backend ids are UUIDs; requiring the full 36 characters on the command
/// line would be hostile, so any unambiguous prefix is accepted.
pub fn resolve_id<'a, T>(
    items: &'a [T],
    id_of: impl Fn(&T) -> &str,
    wanted: &str,
    entity: &'static str,
) -> Result<&'a T> {
    let matches: Vec<&T> = items
        .iter()
        .filter(|item| id_of(item).starts_with(wanted))
        .collect();
    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(crate::error::SlateError::NotFound(
            entity,
            wanted.to_string(),
        )),
        _ => Err(crate::error::SlateError::Validation(format!(
            "id prefix '{wanted}' matches {} {entity}s; use more characters",
            matches.len()
        ))),
    }
}

/// Pretty-print a serializable value as JSON (for `--json` output).
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Collapse a remote failure into the one generic message the operator sees.
///
/// The underlying error goes to the debug log only; no distinction is made
/// between not-found, permission, or transport failures, and nothing is
/// retried.
pub fn collapse<T>(result: Result<T>, what: &str) -> Result<T> {
    result.map_err(|e| {
        tracing::debug!(error = %e, "{what}");
        crate::error::SlateError::Other(format!("Failed to {what}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_id_prefix() {
        let ids = vec!["abc-123".to_string(), "abd-456".to_string()];
        let found = resolve_id(&ids, |s| s.as_str(), "abc", "project").unwrap();
        assert_eq!(found, "abc-123");

        assert!(resolve_id(&ids, |s| s.as_str(), "ab", "project").is_err());
        assert!(resolve_id(&ids, |s| s.as_str(), "zzz", "project").is_err());
    }
}
