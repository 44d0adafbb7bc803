//! In-process event bus for session and project lifecycle notifications.
//!
//! Session state is not ambient: components that care about the current
//! user's sign-in state subscribe to the bus and receive a push
//! notification whenever a session starts or ends. Subscribers own their
//! receiver and drop it on teardown, which unsubscribes them.

pub mod bus;

pub use bus::{run_event_log, DomainEvent, EventBus};
