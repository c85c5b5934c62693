//! Cross-component event queue.
//!
//! The widget publishes notifications into an [`EventQueue`] handed to it at
//! mount; the host drains the queue after each interaction and dispatches
//! whatever it cares about. Commands travel the other way: the host resolves
//! external events into [`Command`] values and feeds them to the widget.
//!
//! The queue is cheap to clone; clones share the same backing storage, so the
//! same queue can sit in the widget (publisher) and the host (consumer).

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

/// Notifications published by an accordion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccordionEvent {
    /// An item's panel was expanded.
    ItemOpened { accordion: String, index: usize },
    /// An item's panel was collapsed.
    ItemClosed { accordion: String, index: usize },
}

/// Commands an accordion consumes from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle the item whose trigger has the given id. With `open` set, the
    /// command is a no-op (with a logged warning) when the item is already in
    /// the desired state.
    ToggleItem { id: String, open: Option<bool> },
    /// Expand every item (multiselectable accordions only).
    OpenAll,
    /// Collapse every item.
    CloseAll,
    /// The viewport changed; cached panel heights must be re-measured.
    ViewportResized,
}

/// A publish/drain queue of [`AccordionEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Arc<RwLock<VecDeque<AccordionEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to the queue.
    pub fn publish(&self, event: AccordionEvent) {
        if let Ok(mut guard) = self.inner.write() {
            guard.push_back(event);
        }
    }

    /// Remove and return all queued events, oldest first.
    pub fn drain(&self) -> Vec<AccordionEvent> {
        self.inner
            .write()
            .map(|mut guard| guard.drain(..).collect())
            .unwrap_or_default()
    }

    /// Whether the queue currently holds no events.
    pub fn is_empty(&self) -> bool {
        self.inner.read().map(|guard| guard.is_empty()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_drain_order() {
        let queue = EventQueue::new();
        queue.publish(AccordionEvent::ItemOpened {
            accordion: "faq".into(),
            index: 1,
        });
        queue.publish(AccordionEvent::ItemClosed {
            accordion: "faq".into(),
            index: 0,
        });

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], AccordionEvent::ItemOpened { index: 1, .. }));
        assert!(matches!(drained[1], AccordionEvent::ItemClosed { index: 0, .. }));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let queue = EventQueue::new();
        let publisher = queue.clone();
        publisher.publish(AccordionEvent::ItemOpened {
            accordion: "faq".into(),
            index: 0,
        });
        assert_eq!(queue.drain().len(), 1);
        assert!(publisher.is_empty());
    }
}
