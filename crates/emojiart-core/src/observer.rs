//! Change notification for hosts that redraw on document changes.

use crate::canvas::EmojiId;
use kurbo::Rect;
use std::fmt;

/// A change made to the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasChange {
    EmojiAdded(EmojiId),
    EmojiUpdated(EmojiId),
    DropAreaChanged(Rect),
    ZoomChanged(f64),
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&CanvasChange)>;

/// List of callbacks invoked on every change, in subscription order.
#[derive(Default)]
pub struct ChangeNotifier {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&CanvasChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn notify(&mut self, change: CanvasChange) {
        log::trace!("Notifying {} subscribers of {:?}", self.subscribers.len(), change);
        for (_, callback) in &mut self.subscribers {
            callback(&change);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
