//! Company/role directory lookups with in-flight de-duplication.
//!
//! Directories are an autocomplete enhancement, not a requirement for
//! submission: every failure degrades to an empty list and enrichment
//! writes are fire-and-forget.

use std::sync::{Arc, Condvar, Mutex, PoisonError};

use crate::api::{Api, DirectoryKind};

#[derive(Default)]
struct Pending {
    result: Mutex<Option<Vec<String>>>,
    ready: Condvar,
}

#[derive(Default)]
struct InflightSlot(Mutex<Option<Arc<Pending>>>);

/// One in-flight slot per directory, cleared once the request settles.
pub struct Directory {
    api: Api,
    companies: InflightSlot,
    roles: InflightSlot,
}

impl Directory {
    pub fn new(api: Api) -> Directory {
        Directory {
            api,
            companies: InflightSlot::default(),
            roles: InflightSlot::default(),
        }
    }

    pub fn companies(&self) -> Vec<String> {
        self.fetch(DirectoryKind::Companies, &self.companies)
    }

    pub fn roles(&self) -> Vec<String> {
        self.fetch(DirectoryKind::Roles, &self.roles)
    }

    /// Callers that arrive while a request is outstanding wait on the same
    /// result instead of issuing their own request.
    fn fetch(&self, kind: DirectoryKind, slot: &InflightSlot) -> Vec<String> {
        let (pending, leader) = {
            let mut guard = slot.0.lock().unwrap_or_else(PoisonError::into_inner);
            match guard.as_ref() {
                Some(p) => (Arc::clone(p), false),
                None => {
                    let p = Arc::new(Pending::default());
                    *guard = Some(Arc::clone(&p));
                    (p, true)
                }
            }
        };

        if !leader {
            let mut done = pending
                .result
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            while done.is_none() {
                done = pending
                    .ready
                    .wait(done)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            return done.clone().unwrap_or_default();
        }

        let fetched = self.api.directory(kind).unwrap_or_default();
        *pending
            .result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(fetched.clone());
        pending.ready.notify_all();
        *slot.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
        fetched
    }

    pub fn upsert_company(&self, name: &str) {
        let _ = self.api.upsert_name(DirectoryKind::Companies, name);
    }

    pub fn upsert_role(&self, name: &str) {
        let _ = self.api.upsert_name(DirectoryKind::Roles, name);
    }
}
