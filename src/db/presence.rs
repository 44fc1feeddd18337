//! Typed access to a person's presence records inside the owning member
//! document.
//!
//! A dependent's records have no independent address in the store: the
//! embedded list is treated as an in-memory arena. Load the parent, swap
//! the element, write the whole document back. That keeps every mutation
//! on the store's whole-document atomic primitive.

use crate::db::documents::DocStore;
use crate::errors::{AppError, AppResult};
use crate::models::member::MemberDoc;
use crate::models::person::PersonRef;
use crate::models::presence::PresenceRecord;

/// Load the member document or fail with a not-found error.
pub fn load_member(store: &DocStore, member_id: &str) -> AppResult<MemberDoc> {
    store
        .get_member(member_id)?
        .ok_or_else(|| AppError::MemberNotFound(member_id.to_string()))
}

/// The person's history as stored right now.
pub fn load_history(store: &DocStore, person: &PersonRef) -> AppResult<Vec<PresenceRecord>> {
    let doc = load_member(store, &person.member_id)?;

    match &person.dependent_id {
        None => Ok(doc.presence_history),
        Some(dep_id) => {
            let dep = doc
                .dependent(dep_id)
                .ok_or_else(|| AppError::DependentNotFound(person.label()))?;
            Ok(dep.presence_history.clone())
        }
    }
}

/// Borrow the person's history out of an already-loaded document.
/// Returns None when the person does not exist in this document.
pub fn history_in_doc<'a>(doc: &'a MemberDoc, person: &PersonRef) -> Option<&'a [PresenceRecord]> {
    if doc.id != person.member_id {
        return None;
    }

    match &person.dependent_id {
        None => Some(&doc.presence_history),
        Some(dep_id) => doc.dependent(dep_id).map(|d| d.presence_history.as_slice()),
    }
}

/// Replace the person's history and persist the whole parent document.
///
/// The parent is re-read fresh here so the write always starts from the
/// current persisted state of everything else in the document.
pub fn save_history(
    store: &mut DocStore,
    person: &PersonRef,
    history: Vec<PresenceRecord>,
) -> AppResult<()> {
    let mut doc = load_member(store, &person.member_id)?;

    match &person.dependent_id {
        None => doc.presence_history = history,
        Some(dep_id) => {
            let dep = doc
                .dependent_mut(dep_id)
                .ok_or_else(|| AppError::DependentNotFound(person.label()))?;
            dep.presence_history = history;
        }
    }

    store.put_member(&doc)
}

/// Display name of the person ("name" of the member or dependent).
pub fn person_name(store: &DocStore, person: &PersonRef) -> AppResult<String> {
    let doc = load_member(store, &person.member_id)?;

    match &person.dependent_id {
        None => Ok(doc.name),
        Some(dep_id) => {
            let dep = doc
                .dependent(dep_id)
                .ok_or_else(|| AppError::DependentNotFound(person.label()))?;
            Ok(dep.name.clone())
        }
    }
}
