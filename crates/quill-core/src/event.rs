//! Session event notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! Instead of holding references to observers, the editor sends event
//! values into a `tokio::sync::broadcast` channel. Anyone interested
//! subscribes and receives clones. Sending never blocks and nothing
//! breaks if nobody listens. Receivers can drain synchronously with
//! `try_recv` or await `recv` inside the host's own runtime.

use quill_model::{DocumentId, ElementKind};
use tokio::sync::broadcast;

/// Events published by an editor session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An element was appended at `index`
    ElementAdded {
        document: DocumentId,
        index: usize,
        kind: ElementKind,
    },
    /// The document was rendered into the cache
    Rendered { document: DocumentId, bytes: usize },
    /// The cached text was written to storage; `stale` is set when
    /// elements were appended after the render that produced it
    Saved {
        location: String,
        bytes: usize,
        stale: bool,
    },
    /// Text was read from storage
    Loaded { location: String, bytes: usize },
    /// The session document was rebuilt from stored text
    Restored { document: DocumentId, elements: usize },
    /// The storage backend was swapped
    StorageReplaced { location: String },
}

/// Event bus for broadcasting session events.
pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 64 events in the buffer
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: SessionEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribes to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(SessionEvent::StorageReplaced {
            location: "doc.txt".to_string(),
        });

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::StorageReplaced { .. }));
    }

    #[test]
    fn test_receiver_drains_then_closes() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(SessionEvent::Saved {
            location: "doc.txt".to_string(),
            bytes: 3,
            stale: false,
        });
        drop(bus);

        assert!(matches!(
            rx.try_recv(),
            Ok(SessionEvent::Saved { bytes: 3, .. })
        ));
        assert_eq!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Closed)
        );
    }

    #[test]
    fn test_emit_without_subscribers() {
        let bus = EventBus::new();
        bus.emit(SessionEvent::StorageReplaced {
            location: "nowhere".to_string(),
        });
    }
}
