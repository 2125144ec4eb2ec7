//! In-memory session store: one owned Document per editing session.
//!
//! Sessions exist only for the process lifetime; destruction is an explicit
//! delete or process exit. Edits serialize through the Document's lock, and
//! each asynchronous collaborator (suggestion, export, payment) allows a
//! single in-flight request per session, enforced by compare-and-swap flags
//! with an RAII release guard.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::document::Document;

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub document: RwLock<Document>,
    paid: AtomicBool,
    suggestion_in_flight: AtomicBool,
    export_in_flight: AtomicBool,
    payment_in_flight: AtomicBool,
}

impl Session {
    fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            document: RwLock::new(Document::empty()),
            paid: AtomicBool::new(false),
            suggestion_in_flight: AtomicBool::new(false),
            export_in_flight: AtomicBool::new(false),
            payment_in_flight: AtomicBool::new(false),
        }
    }

    pub fn paid(&self) -> bool {
        self.paid.load(Ordering::Acquire)
    }

    /// Marks the session as paid. Returns true only for the first caller,
    /// so the post-payment export triggers exactly once.
    pub fn mark_paid(&self) -> bool {
        self.paid
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn try_begin_suggestion(&self) -> Option<FlightGuard<'_>> {
        FlightGuard::acquire(&self.suggestion_in_flight)
    }

    pub fn try_begin_export(&self) -> Option<FlightGuard<'_>> {
        FlightGuard::acquire(&self.export_in_flight)
    }

    pub fn try_begin_payment(&self) -> Option<FlightGuard<'_>> {
        FlightGuard::acquire(&self.payment_in_flight)
    }

    /// Clones the current Document; collaborators only ever read snapshots.
    pub async fn snapshot(&self) -> Document {
        self.document.read().await.clone()
    }
}

/// Released on drop, re-enabling the triggering control for its operation.
pub struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.inner
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        info!("Session {} created", session.id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Destroys a session. Returns false when the id is unknown.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} destroyed");
        }
        removed
    }
}
