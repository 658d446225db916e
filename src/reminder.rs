//! Progress reminder scheduler — one recurring timer task per completed
//! session.
//!
//! Registration is idempotent by session identity: registering again (a
//! recalculation) aborts and replaces the previous job. The timer task
//! resolves the session fresh from the registry at every fire, so a session
//! cancelled in the meantime simply ends the job.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

use crate::channels::{Outgoing, SessionId};
use crate::config::BotConfig;
use crate::registry::SessionRegistry;
use crate::texts::{self, MessageKey};

/// Tracked reminder job.
struct ReminderJob {
    handle: JoinHandle<()>,
    registered_at: DateTime<Utc>,
}

/// Schedules the recurring progress reminder for each completed session.
pub struct ReminderScheduler {
    registry: Arc<SessionRegistry>,
    outbound: mpsc::Sender<Outgoing>,
    first_fire: Duration,
    interval: Duration,
    jobs: Mutex<HashMap<SessionId, ReminderJob>>,
}

impl ReminderScheduler {
    pub fn new(
        config: &BotConfig,
        registry: Arc<SessionRegistry>,
        outbound: mpsc::Sender<Outgoing>,
    ) -> Self {
        Self {
            registry,
            outbound,
            first_fire: config.reminder_first_fire,
            interval: config.reminder_interval,
            jobs: Mutex::new(HashMap::new()),
        }
    }

    /// Register the recurring reminder for `id`, replacing any prior
    /// registration for the same session.
    pub async fn register(&self, id: SessionId) {
        let mut jobs = self.jobs.lock().await;
        if let Some(previous) = jobs.remove(&id) {
            previous.handle.abort();
            tracing::debug!(session = %id, "Replacing progress reminder");
        }

        let registry = Arc::clone(&self.registry);
        let outbound = self.outbound.clone();
        let (first_fire, interval) = (self.first_fire, self.interval);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(first_fire).await;
            loop {
                let Some(session) = registry.get(id).await else {
                    tracing::debug!(session = %id, "Reminder target is gone, stopping");
                    return;
                };
                let locale = session.lock().await.locale;
                let reminder =
                    Outgoing::text(id, texts::text(locale, MessageKey::ProgressReminder));
                if outbound.send(reminder).await.is_err() {
                    return;
                }
                tokio::time::sleep(interval).await;
            }
        });

        jobs.insert(
            id,
            ReminderJob {
                handle,
                registered_at: Utc::now(),
            },
        );
        tracing::info!(session = %id, "Progress reminder registered");
    }

    /// Cancel the reminder for `id`, if one is registered.
    pub async fn cancel(&self, id: SessionId) {
        if let Some(job) = self.jobs.lock().await.remove(&id) {
            job.handle.abort();
            tracing::info!(session = %id, "Progress reminder cancelled");
        }
    }

    /// Number of registered reminder jobs.
    pub async fn job_count(&self) -> usize {
        self.jobs.lock().await.len()
    }

    /// When the reminder for `id` was (last) registered.
    pub async fn registered_at(&self, id: SessionId) -> Option<DateTime<Utc>> {
        self.jobs.lock().await.get(&id).map(|j| j.registered_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> BotConfig {
        BotConfig {
            reminder_first_fire: Duration::from_millis(20),
            reminder_interval: Duration::from_millis(20),
            ..BotConfig::default()
        }
    }

    #[tokio::test]
    async fn reminder_fires_with_the_session_locale() {
        let registry = Arc::new(SessionRegistry::new());
        let (tx, mut rx) = mpsc::channel(8);
        let scheduler = ReminderScheduler::new(&fast_config(), Arc::clone(&registry), tx);

        let session = registry.get_or_create(SessionId(1)).await;
        session.lock().await.locale = texts::Locale::Ru;

        scheduler.register(SessionId(1)).await;
        let out = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("reminder did not fire")
            .expect("outbound closed");
        assert_eq!(out.session, SessionId(1));
        assert!(out.text.contains("Пора обновить"));
        assert!(out.choices.is_none());
    }

    #[tokio::test]
    async fn reminder_recurs_until_cancelled() {
        let registry = Arc::new(SessionRegistry::new());
        let (tx, mut rx) = mpsc::channel(8);
        let scheduler = ReminderScheduler::new(&fast_config(), Arc::clone(&registry), tx);

        registry.get_or_create(SessionId(2)).await;
        scheduler.register(SessionId(2)).await;

        for _ in 0..3 {
            tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("reminder stopped recurring")
                .expect("outbound closed");
        }

        scheduler.cancel(SessionId(2)).await;
        assert_eq!(scheduler.job_count().await, 0);
    }

    #[tokio::test]
    async fn reregistration_replaces_the_previous_job() {
        let registry = Arc::new(SessionRegistry::new());
        let (tx, mut rx) = mpsc::channel(64);
        let scheduler = ReminderScheduler::new(&fast_config(), Arc::clone(&registry), tx);

        registry.get_or_create(SessionId(3)).await;
        scheduler.register(SessionId(3)).await;
        let first = scheduler.registered_at(SessionId(3)).await.unwrap();

        scheduler.register(SessionId(3)).await;
        assert_eq!(scheduler.job_count().await, 1);
        let second = scheduler.registered_at(SessionId(3)).await.unwrap();
        assert!(second >= first);

        // Exactly one job keeps firing; drain a few to make sure the loop is
        // alive after the replacement.
        for _ in 0..2 {
            tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("replacement job is not firing")
                .expect("outbound closed");
        }
    }

    #[tokio::test]
    async fn firing_for_a_gone_session_is_a_quiet_noop() {
        let registry = Arc::new(SessionRegistry::new());
        let (tx, mut rx) = mpsc::channel(8);
        let scheduler = ReminderScheduler::new(&fast_config(), Arc::clone(&registry), tx);

        registry.get_or_create(SessionId(4)).await;
        scheduler.register(SessionId(4)).await;
        registry.remove(SessionId(4)).await;

        // The task wakes, finds no session, and exits without sending.
        let fired = tokio::time::timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(fired.is_err(), "no reminder should be sent: {fired:?}");
    }
}
