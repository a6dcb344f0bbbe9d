//! Per-widget signal bus.
//!
//! Handlers are plain values (usually a controller's signal enum). Emitting a
//! signal returns the handlers connected to that widget and signal, in the
//! order they were connected; the owning controller applies them right away,
//! so delivery is synchronous.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocates an id that is unique for the lifetime of the process.
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// A button or list option was activated.
    Click,
    /// The text of an edit field changed.
    Change,
}

/// Token returned by [`SignalBus::connect`], used to disconnect that registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    widget: WidgetId,
    signal: Signal,
}

impl Subscription {
    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }
}

#[derive(Debug)]
struct Connection<H> {
    subscription: Subscription,
    handler: H,
}

#[derive(Debug)]
pub struct SignalBus<H> {
    connections: Vec<Connection<H>>,
    next_id: u64,
}

impl<H> Default for SignalBus<H> {
    fn default() -> Self {
        Self {
            connections: Vec::new(),
            next_id: 0,
        }
    }
}

impl<H: Clone> SignalBus<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, widget: WidgetId, signal: Signal, handler: H) -> Subscription {
        self.next_id += 1;
        let subscription = Subscription {
            id: self.next_id,
            widget,
            signal,
        };
        self.connections.push(Connection {
            subscription,
            handler,
        });
        subscription
    }

    /// Removes one registration. Returns `false` if it was already gone.
    pub fn disconnect(&mut self, subscription: &Subscription) -> bool {
        let before = self.connections.len();
        self.connections
            .retain(|c| c.subscription.id != subscription.id);
        self.connections.len() != before
    }

    /// Removes the earliest registration of `handler` for this widget and signal.
    pub fn disconnect_handler(&mut self, widget: WidgetId, signal: Signal, handler: &H) -> bool
    where
        H: PartialEq,
    {
        let position = self.connections.iter().position(|c| {
            c.subscription.widget == widget
                && c.subscription.signal == signal
                && &c.handler == handler
        });
        match position {
            Some(idx) => {
                self.connections.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn emit(&self, widget: WidgetId, signal: Signal) -> Vec<H> {
        self.connections
            .iter()
            .filter(|c| c.subscription.widget == widget && c.subscription.signal == signal)
            .map(|c| c.handler.clone())
            .collect()
    }

    pub fn is_connected(&self, widget: WidgetId, signal: Signal) -> bool {
        self.connections
            .iter()
            .any(|c| c.subscription.widget == widget && c.subscription.signal == signal)
    }

    pub fn subscription_count(&self) -> usize {
        self.connections.len()
    }
}
