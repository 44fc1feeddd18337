use super::presence::PresenceRecord;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A primary member document.
///
/// The document exclusively owns its own `presence_history` and the
/// `presence_history` of every embedded dependent. Dependents have no
/// independent address in the store: mutating one means rewriting the
/// whole parent document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDoc {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String, // ISO8601, stamped at creation
    #[serde(default)]
    pub presence_history: Vec<PresenceRecord>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

/// A dependent embedded in the parent member document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependent {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub presence_history: Vec<PresenceRecord>,
}

impl MemberDoc {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            created_at: Local::now().to_rfc3339(),
            presence_history: Vec::new(),
            dependents: Vec::new(),
        }
    }

    pub fn dependent(&self, dependent_id: &str) -> Option<&Dependent> {
        self.dependents.iter().find(|d| d.id == dependent_id)
    }

    pub fn dependent_mut(&mut self, dependent_id: &str) -> Option<&mut Dependent> {
        self.dependents.iter_mut().find(|d| d.id == dependent_id)
    }
}

impl Dependent {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            presence_history: Vec::new(),
        }
    }
}
