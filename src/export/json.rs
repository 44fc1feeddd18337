use crate::export::model::PresenceExport;
use std::path::Path;

/// Write the presence rows as pretty JSON.
pub(crate) fn export_json(rows: &[PresenceExport], path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| std::io::Error::other(format!("serialize error: {}", e)))?;
    std::fs::write(path, json)?;

    crate::export::notify_export_success("JSON", path);
    Ok(())
}
