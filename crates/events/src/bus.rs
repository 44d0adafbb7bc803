//! Broadcast event bus backed by `tokio::sync::broadcast`.

use chrono::{DateTime, Utc};
use patchup_core::types::DbId;
use serde::Serialize;
use tokio::sync::broadcast;

/// A domain notification published on the bus.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A user signed in (login or signup) and a session was created.
    SessionStarted { user_id: DbId, at: DateTime<Utc> },
    /// A user signed out; all of their sessions were revoked.
    SessionEnded { user_id: DbId, at: DateTime<Utc> },
    /// A project was created by the given user.
    ProjectCreated {
        project_id: DbId,
        created_by: DbId,
        at: DateTime<Utc>,
    },
    /// A member profile was inserted or updated.
    MemberSaved { member_id: DbId, at: DateTime<Utc> },
}

impl DomainEvent {
    pub fn session_started(user_id: DbId) -> Self {
        Self::SessionStarted {
            user_id,
            at: Utc::now(),
        }
    }

    pub fn session_ended(user_id: DbId) -> Self {
        Self::SessionEnded {
            user_id,
            at: Utc::now(),
        }
    }

    pub fn project_created(project_id: DbId, created_by: DbId) -> Self {
        Self::ProjectCreated {
            project_id,
            created_by,
            at: Utc::now(),
        }
    }

    pub fn member_saved(member_id: DbId) -> Self {
        Self::MemberSaved {
            member_id,
            at: Utc::now(),
        }
    }
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out bus shared via `Arc<EventBus>`.
///
/// Any number of subscribers independently receive every published event.
/// Slow receivers observe `RecvError::Lagged` when the buffer wraps;
/// publishing never blocks.
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// With zero receivers the event is silently dropped; a SendError here
    /// only means nobody is listening.
    pub fn publish(&self, event: DomainEvent) {
        let _ = self.sender.send(event);
    }

    /// Obtain a new independent receiver. Dropping it unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Log every event on the bus until the channel closes.
///
/// Spawned from `main`; exits when the bus (the last sender) is dropped,
/// giving the subscriber a defined teardown point.
pub async fn run_event_log(mut rx: broadcast::Receiver<DomainEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => match &event {
                DomainEvent::SessionStarted { user_id, .. } => {
                    tracing::info!(user_id, "session started");
                }
                DomainEvent::SessionEnded { user_id, .. } => {
                    tracing::info!(user_id, "session ended");
                }
                DomainEvent::ProjectCreated {
                    project_id,
                    created_by,
                    ..
                } => {
                    tracing::info!(project_id, created_by, "project created");
                }
                DomainEvent::MemberSaved { member_id, .. } => {
                    tracing::info!(member_id, "member profile saved");
                }
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event log fell behind, events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscriber_receives_published_events() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(DomainEvent::session_started(7));

        match rx.recv().await.expect("event should arrive") {
            DomainEvent::SessionStarted { user_id, .. } => assert_eq!(user_id, 7),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn each_subscriber_gets_every_event() {
        let bus = EventBus::default();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.publish(DomainEvent::project_created(1, 2));

        assert!(matches!(
            a.recv().await.unwrap(),
            DomainEvent::ProjectCreated { project_id: 1, .. }
        ));
        assert!(matches!(
            b.recv().await.unwrap(),
            DomainEvent::ProjectCreated { project_id: 1, .. }
        ));
    }

    #[tokio::test]
    async fn publish_without_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(DomainEvent::member_saved(3));
    }

    #[tokio::test]
    async fn dropped_receiver_is_unsubscribed() {
        let bus = EventBus::default();
        let rx = bus.subscribe();
        drop(rx);

        // Channel closes for new receivers only when the sender drops; a
        // dropped receiver must simply stop counting.
        bus.publish(DomainEvent::session_ended(1));
        let mut rx2 = bus.subscribe();
        bus.publish(DomainEvent::session_ended(2));
        assert!(matches!(
            rx2.recv().await.unwrap(),
            DomainEvent::SessionEnded { user_id: 2, .. }
        ));
    }
}
