//! Keeps the mouse wheel from changing number inputs

use crate::state::events::{EventHub, Propagation, Subscription, WheelTarget};

/// Capture listener that cancels the default wheel action over number inputs.
/// Lives as long as the form is mounted.
#[derive(Debug)]
pub struct WheelGuard {
    _subscription: Subscription,
}

impl WheelGuard {
    pub fn mount(hub: &EventHub) -> Self {
        let subscription = hub.on_wheel_capture(|event| match event.target {
            WheelTarget::NumberInput(_) => Propagation::PreventDefault,
            WheelTarget::Other => Propagation::Continue,
        });
        Self {
            _subscription: subscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::events::{WheelDirection, WheelEvent};
    use ratatui::layout::Position;

    fn wheel(target: WheelTarget) -> WheelEvent {
        WheelEvent {
            position: Position::new(3, 3),
            direction: WheelDirection::Up,
            target,
        }
    }

    #[test]
    fn test_prevents_default_over_number_input() {
        let hub = EventHub::new();
        let _guard = WheelGuard::mount(&hub);
        assert_eq!(
            hub.dispatch_wheel(&wheel(WheelTarget::NumberInput(4))),
            Propagation::PreventDefault
        );
    }

    #[test]
    fn test_lets_other_targets_scroll() {
        let hub = EventHub::new();
        let _guard = WheelGuard::mount(&hub);
        assert_eq!(
            hub.dispatch_wheel(&wheel(WheelTarget::Other)),
            Propagation::Continue
        );
    }

    #[test]
    fn test_drop_removes_listener() {
        let hub = EventHub::new();
        let guard = WheelGuard::mount(&hub);
        assert_eq!(hub.wheel_listener_count(), 1);
        drop(guard);
        assert_eq!(hub.wheel_listener_count(), 0);
    }
}
