//! Session registry — the shared map from session identity to live sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::channels::SessionId;
use crate::dialog::Session;

/// Registry of active sessions.
///
/// Lookups go through the outer read lock; all mutation of one session is
/// serialized by that session's own mutex, including from the reminder timer
/// task. Entries are removed only on explicit cancel.
#[derive(Default)]
pub struct SessionRegistry {
    inner: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `id`, creating it on first contact.
    pub async fn get_or_create(&self, id: SessionId) -> Arc<Mutex<Session>> {
        if let Some(session) = self.inner.read().await.get(&id) {
            return Arc::clone(session);
        }
        let mut map = self.inner.write().await;
        Arc::clone(
            map.entry(id)
                .or_insert_with(|| Arc::new(Mutex::new(Session::new(id)))),
        )
    }

    pub async fn get(&self, id: SessionId) -> Option<Arc<Mutex<Session>>> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Drop the session for `id`, returning it if it existed.
    pub async fn remove(&self, id: SessionId) -> Option<Arc<Mutex<Session>>> {
        self.inner.write().await.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_create_is_insert_if_absent() {
        let registry = SessionRegistry::new();
        let a = registry.get_or_create(SessionId(7)).await;
        let b = registry.get_or_create(SessionId(7)).await;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_first_contact_creates_one_session() {
        let registry = Arc::new(SessionRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry.get_or_create(SessionId(42)).await
            }));
        }
        let mut sessions = Vec::new();
        for handle in handles {
            sessions.push(handle.await.unwrap());
        }
        assert_eq!(registry.len().await, 1);
        for session in &sessions[1..] {
            assert!(Arc::ptr_eq(&sessions[0], session));
        }
    }

    #[tokio::test]
    async fn remove_drops_the_entry() {
        let registry = SessionRegistry::new();
        registry.get_or_create(SessionId(1)).await;
        assert!(!registry.is_empty().await);
        assert!(registry.remove(SessionId(1)).await.is_some());
        assert!(registry.get(SessionId(1)).await.is_none());
        assert!(registry.remove(SessionId(1)).await.is_none());
    }
}
