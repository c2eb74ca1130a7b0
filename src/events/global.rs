//! Global access to the application event bus.
//!
//! The bus must be initialized once at application startup via
//! `init_event_bus()`; after that any observer block, timer or menu action
//! can publish with `publish()`, and the dispatcher pulls events with
//! `take_event()`.
//!
//! `Sender` lives in a `OnceLock`; `Receiver` sits behind a `Mutex` that only
//! the main thread ever locks.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns `false` if the bus was already initialized; the existing bus is
/// kept in that case.
pub fn init_event_bus() -> bool {
    let (sender, receiver) = mpsc::channel();

    if SENDER.set(sender).is_err() {
        return false;
    }
    RECEIVER.set(Mutex::new(receiver)).is_ok()
}

/// Get a publisher handle for the global event bus, if it is initialized.
pub fn publisher() -> Option<EventPublisher> {
    SENDER.get().cloned().map(EventPublisher::from_sender)
}

/// Publish an event to the global event bus.
///
/// Events published before `init_event_bus()` are dropped with a warning.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            let _ = sender.send(event);
        }
        None => tracing::warn!(?event, "event bus not initialized, dropping event"),
    }
}

/// Take the next pending event, if any.
pub fn take_event() -> Option<AppEvent> {
    let receiver = RECEIVER.get()?;
    let receiver = receiver.lock().ok()?;
    receiver.try_recv().ok()
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    std::iter::from_fn(take_event).collect()
}

#[cfg(test)]
mod tests {
    // The global bus is process-wide and can only be set once, so a single
    // test walks through the whole lifecycle.
    use super::*;

    #[test]
    fn test_global_bus_lifecycle() {
        assert!(init_event_bus());
        assert!(!init_event_bus());

        publish(AppEvent::SpaceChanged);
        publisher()
            .expect("initialized")
            .publish(AppEvent::SwitchToSpace(2));

        assert_eq!(take_event(), Some(AppEvent::SpaceChanged));
        assert_eq!(drain_events(), vec![AppEvent::SwitchToSpace(2)]);
        assert_eq!(take_event(), None);
    }
}
