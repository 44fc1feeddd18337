pub mod calendar;
pub mod checkin;
pub mod config;
pub mod confirm;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod member;
pub mod stats;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::person::PersonRef;

/// Resolve the member id from the argument or the configured default.
pub(crate) fn resolve_member(arg: &Option<String>, cfg: &Config) -> AppResult<String> {
    match arg {
        Some(id) => Ok(id.clone()),
        None if !cfg.default_member.is_empty() => Ok(cfg.default_member.clone()),
        None => Err(AppError::Config(
            "No member id given and no default_member configured".to_string(),
        )),
    }
}

/// Build the person reference from the member argument and the optional
/// --dependent flag.
pub(crate) fn resolve_person(
    member: &Option<String>,
    dependent: &Option<String>,
    cfg: &Config,
) -> AppResult<PersonRef> {
    let member_id = resolve_member(member, cfg)?;

    Ok(match dependent {
        Some(dep) => PersonRef::dependent(&member_id, dep),
        None => PersonRef::member(&member_id),
    })
}
