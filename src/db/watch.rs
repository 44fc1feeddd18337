//! Push-based subscriptions on member documents.
//!
//! Every successful store write delivers a fresh parsed snapshot of the
//! changed document to its registered watchers, so derived state (today's
//! check-in flags, stats) is recomputed from pushed snapshots instead of
//! polled reads. Callbacks run on the caller's thread, after the write
//! has committed, and must not re-enter the store.

use crate::models::member::MemberDoc;

pub type WatchCallback = Box<dyn Fn(&MemberDoc)>;

/// Handle returned by `subscribe`; pass back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchId(u64);

struct Watcher {
    id: u64,
    member_id: String,
    callback: WatchCallback,
}

#[derive(Default)]
pub struct WatcherRegistry {
    next_id: u64,
    watchers: Vec<Watcher>,
}

impl WatcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, member_id: &str, callback: WatchCallback) -> WatchId {
        self.next_id += 1;
        self.watchers.push(Watcher {
            id: self.next_id,
            member_id: member_id.to_string(),
            callback,
        });
        WatchId(self.next_id)
    }

    pub fn unsubscribe(&mut self, id: WatchId) {
        self.watchers.retain(|w| w.id != id.0);
    }

    /// Deliver a fresh snapshot to every watcher of this document.
    pub fn notify(&self, doc: &MemberDoc) {
        for w in &self.watchers {
            if w.member_id == doc.id {
                (w.callback)(doc);
            }
        }
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }
}
