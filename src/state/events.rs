//! App-wide pointer and wheel listeners
//!
//! Widgets that need to react to input anywhere on screen (closing a dropdown
//! when the user clicks elsewhere, swallowing wheel gestures over number
//! inputs) register here instead of being special-cased by the app. Each
//! registration hands back a [`Subscription`] that removes the listener when
//! dropped, so a widget can never leave a listener behind.

use ratatui::layout::Position;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A left-button press at a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Position,
}

/// What the wheel event landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelTarget {
    /// A numeric input, by field index
    NumberInput(usize),
    /// Any other region of the screen
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelEvent {
    pub position: Position,
    pub direction: WheelDirection,
    pub target: WheelTarget,
}

/// Whether the default action of an event should still run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    PreventDefault,
}

type PointerListener = Rc<dyn Fn(&PointerEvent)>;
type WheelListener = Rc<dyn Fn(&WheelEvent) -> Propagation>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerKind {
    PointerDown,
    WheelCapture,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    pointer_down: Vec<(u64, PointerListener)>,
    wheel_capture: Vec<(u64, WheelListener)>,
}

impl Registry {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn remove(&mut self, kind: ListenerKind, id: u64) -> bool {
        let before = self.len();
        match kind {
            ListenerKind::PointerDown => self.pointer_down.retain(|(i, _)| *i != id),
            ListenerKind::WheelCapture => self.wheel_capture.retain(|(i, _)| *i != id),
        }
        self.len() != before
    }

    fn len(&self) -> usize {
        self.pointer_down.len() + self.wheel_capture.len()
    }
}

/// Shared handle to the listener registry. Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Rc<RefCell<Registry>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every pointer-down on screen
    pub fn on_pointer_down(&self, listener: impl Fn(&PointerEvent) + 'static) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id();
        registry.pointer_down.push((id, Rc::new(listener)));
        self.subscription(ListenerKind::PointerDown, id)
    }

    /// Register a listener that sees wheel events before their default action
    pub fn on_wheel_capture(
        &self,
        listener: impl Fn(&WheelEvent) -> Propagation + 'static,
    ) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id();
        registry.wheel_capture.push((id, Rc::new(listener)));
        self.subscription(ListenerKind::WheelCapture, id)
    }

    fn subscription(&self, kind: ListenerKind, id: u64) -> Subscription {
        Subscription {
            registry: Rc::downgrade(&self.inner),
            kind,
            id,
        }
    }

    pub fn dispatch_pointer_down(&self, event: &PointerEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while we run them
        let listeners: Vec<PointerListener> = self
            .inner
            .borrow()
            .pointer_down
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Run capture listeners. Every listener sees the event; any one of them
    /// can cancel the default action.
    pub fn dispatch_wheel(&self, event: &WheelEvent) -> Propagation {
        let listeners: Vec<WheelListener> = self
            .inner
            .borrow()
            .wheel_capture
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        listeners
            .into_iter()
            .fold(Propagation::Continue, |acc, listener| {
                match (acc, listener(event)) {
                    (Propagation::Continue, Propagation::Continue) => Propagation::Continue,
                    _ => Propagation::PreventDefault,
                }
            })
    }

    /// Total number of registered listeners of any kind
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn pointer_listener_count(&self) -> usize {
        self.inner.borrow().pointer_down.len()
    }

    pub fn wheel_listener_count(&self) -> usize {
        self.inner.borrow().wheel_capture.len()
    }
}

/// Registration handle. Dropping it removes the listener.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    kind: ListenerKind,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.try_borrow_mut() {
                let removed = registry.remove(self.kind, self.id);
                debug_assert!(removed, "listener {} detached twice", self.id);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .finish()
    }
}
