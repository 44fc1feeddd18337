use chrono::NaiveDate;

/// Names one person: a primary member, or a dependent embedded in a
/// member's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRef {
    pub member_id: String,
    pub dependent_id: Option<String>,
}

impl PersonRef {
    pub fn member(member_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            dependent_id: None,
        }
    }

    pub fn dependent(member_id: &str, dependent_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            dependent_id: Some(dependent_id.to_string()),
        }
    }

    pub fn is_dependent(&self) -> bool {
        self.dependent_id.is_some()
    }

    /// "m001" or "m001/d01", used in messages and audit log targets.
    pub fn label(&self) -> String {
        match &self.dependent_id {
            Some(dep) => format!("{}/{}", self.member_id, dep),
            None => self.member_id.clone(),
        }
    }
}

/// Names a single presence record for the admin confirm flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub person: PersonRef,
    pub date: NaiveDate,
}

impl RecordRef {
    pub fn new(person: PersonRef, date: NaiveDate) -> Self {
        Self { person, date }
    }

    pub fn label(&self) -> String {
        format!("{}@{}", self.person.label(), self.date.format("%Y-%m-%d"))
    }
}
