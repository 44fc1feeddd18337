// src/export/model.rs

use serde::Serialize;

/// Flat row shape for presence exports: one row per record, dependents
/// flattened next to their parent member.
#[derive(Serialize, Clone, Debug)]
pub struct PresenceExport {
    pub member_id: String,
    pub person: String,
    pub name: String,
    pub date: String,
    pub state: String,
}

/// Header for CSV / JSON
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["member_id", "person", "name", "date", "state"]
}

pub(crate) fn record_to_row(e: &PresenceExport) -> Vec<String> {
    vec![
        e.member_id.clone(),
        e.person.clone(),
        e.name.clone(),
        e.date.clone(),
        e.state.clone(),
    ]
}
