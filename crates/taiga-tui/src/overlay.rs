//! Named slots for transient widgets (popups and forms) on a view.
//!
//! A slot is either empty or holds a fully built widget together with the
//! signal subscriptions wired for it. Detaching always disconnects those
//! subscriptions, so a replaced or closed overlay can never fire again.

use crate::signals::{Signal, SignalBus, Subscription, WidgetId};
use crate::widgets::Widget;

#[derive(Debug)]
struct Attached<W> {
    widget: W,
    subscriptions: Vec<Subscription>,
}

#[derive(Debug)]
pub struct OverlaySlot<W> {
    attached: Option<Attached<W>>,
}

impl<W> Default for OverlaySlot<W> {
    fn default() -> Self {
        Self { attached: None }
    }
}

impl<W> OverlaySlot<W> {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stores `widget` and connects `connections` on `bus`. Whatever occupied
    /// the slot before is detached first.
    pub fn attach<H, I>(&mut self, bus: &mut SignalBus<H>, widget: W, connections: I) -> &mut W
    where
        H: Clone,
        I: IntoIterator<Item = (WidgetId, Signal, H)>,
    {
        self.detach(bus);
        let subscriptions = connections
            .into_iter()
            .map(|(target, signal, handler)| bus.connect(target, signal, handler))
            .collect();
        &mut self
            .attached
            .insert(Attached {
                widget,
                subscriptions,
            })
            .widget
    }

    /// Disconnects the overlay's subscriptions and hands the widget back.
    /// Detaching an empty slot does nothing.
    pub fn detach<H: Clone>(&mut self, bus: &mut SignalBus<H>) -> Option<W> {
        let attached = self.attached.take()?;
        for subscription in &attached.subscriptions {
            bus.disconnect(subscription);
        }
        Some(attached.widget)
    }

    pub fn get(&self) -> Option<&W> {
        self.attached.as_ref().map(|a| &a.widget)
    }

    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.attached.as_mut().map(|a| &mut a.widget)
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        self.attached
            .as_ref()
            .map(|a| a.subscriptions.as_slice())
            .unwrap_or(&[])
    }
}

impl<W: Widget> OverlaySlot<W> {
    /// True when the slot still holds the widget instance with this id.
    pub fn holds(&self, id: WidgetId) -> bool {
        self.get().is_some_and(|w| w.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Button;

    #[derive(Debug, Clone, PartialEq)]
    enum Handler {
        Close,
    }

    #[test]
    fn test_attach_then_detach() {
        let mut bus = SignalBus::new();
        let mut slot = OverlaySlot::empty();
        let button = Button::new("Close");
        let id = button.id();

        slot.attach(&mut bus, button, [(id, Signal::Click, Handler::Close)]);
        assert!(slot.is_attached());
        assert!(slot.holds(id));
        assert_eq!(slot.subscriptions().len(), 1);
        assert_eq!(bus.emit(id, Signal::Click), vec![Handler::Close]);

        let detached = slot.detach(&mut bus).unwrap();
        assert_eq!(detached.id(), id);
        assert!(!slot.is_attached());
        assert!(slot.subscriptions().is_empty());
        assert!(bus.emit(id, Signal::Click).is_empty());
    }

    #[test]
    fn test_reattach_replaces_previous_subscriptions() {
        let mut bus = SignalBus::new();
        let mut slot = OverlaySlot::empty();
        let first = Button::new("Close");
        let first_id = first.id();
        slot.attach(&mut bus, first, [(first_id, Signal::Click, Handler::Close)]);

        let second = Button::new("Close");
        let second_id = second.id();
        slot.attach(&mut bus, second, [(second_id, Signal::Click, Handler::Close)]);

        assert_eq!(bus.subscription_count(), 1);
        assert!(bus.emit(first_id, Signal::Click).is_empty());
        assert_eq!(bus.emit(second_id, Signal::Click), vec![Handler::Close]);
        assert!(!slot.holds(first_id));
    }

    #[test]
    fn test_detach_empty_slot_is_noop() {
        let mut bus: SignalBus<Handler> = SignalBus::new();
        let mut slot: OverlaySlot<Button> = OverlaySlot::empty();
        assert!(slot.detach(&mut bus).is_none());
        assert!(slot.get().is_none());
    }
}
