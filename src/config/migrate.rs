use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension};
use serde_yaml::Value;
use std::fs;

/// Fields every modern config file must carry. Used by `config --check`.
pub const EXPECTED_FIELDS: [&str; 4] = [
    "database",
    "default_member",
    "separator_char",
    "show_weekday",
];

/// List config fields missing from the YAML file on disk. An absent file
/// reports every field as missing.
pub fn missing_fields() -> Vec<&'static str> {
    let conf_file = super::Config::config_file();

    let Ok(content) = fs::read_to_string(&conf_file) else {
        return EXPECTED_FIELDS.to_vec();
    };

    let Ok(yaml) = serde_yaml::from_str::<Value>(&content) else {
        return EXPECTED_FIELDS.to_vec();
    };

    let Some(map) = yaml.as_mapping() else {
        return EXPECTED_FIELDS.to_vec();
    };

    EXPECTED_FIELDS
        .iter()
        .filter(|f| !map.contains_key(&Value::String(f.to_string())))
        .copied()
        .collect()
}

/// Migration that adds the `default_member` parameter to the YAML
/// config, if missing, and marks the migration as applied in the `log`
/// table.
pub fn migrate_add_default_member(conn: &Connection) -> Result<(), Error> {
    let version = "20250618_0006_add_default_member";

    // Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let conf_file = super::Config::config_file();

    if conf_file.exists() {
        let content = fs::read_to_string(&conf_file).map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to read config {:?}: {}", conf_file, e)),
            )
        })?;

        if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
            && let Some(map) = yaml.as_mapping_mut()
        {
            let key = Value::String("default_member".to_string());

            if !map.contains_key(&key) {
                map.insert(key.clone(), Value::String(String::new()));

                // Serialize updated YAML
                let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to serialize updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                // Inject documentation comment right after the `default_member` line
                let mut new_content = String::new();

                for line in serialized.lines() {
                    new_content.push_str(line);
                    new_content.push('\n');

                    if line.starts_with("default_member:") {
                        new_content.push_str(
                            "  # default-member parameter:\n\
                             #   member id used by `checkin` when no member\n\
                             #   argument is given (empty → always explicit)\n",
                        );
                    }
                }

                fs::write(&conf_file, new_content).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to write updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;
            }
        }
    }

    // Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added default_member parameter to config')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} — added default_member parameter to config.",
        version
    ));

    Ok(())
}
