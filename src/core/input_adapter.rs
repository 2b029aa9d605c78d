use serde::{Deserialize, Serialize};

use super::controller::TrackballController;
use crate::traits::Button;

/// Pointer input already mapped into the controller's normalized space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    Press {
        button: Button,
        #[serde(default)]
        modifier: bool,
        x: f32,
        y: f32,
    },
    Release {
        button: Button,
        #[serde(default)]
        modifier: bool,
        x: f32,
        y: f32,
    },
    Move {
        x: f32,
        y: f32,
    },
    /// Focus loss or any other reason to drop the current drag
    Abort,
    Reset,
}

impl TrackballController {
    /// Dispatch a single pointer event
    pub fn handle(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Press { button, modifier, x, y } => self.click(true, button, modifier, x, y),
            PointerEvent::Release { button, modifier, x, y } => self.click(false, button, modifier, x, y),
            PointerEvent::Move { x, y } => self.move_to(x, y),
            PointerEvent::Abort => self.abort(),
            PointerEvent::Reset => self.reset(),
        }
    }
}

/// Feed `events` to `controller` in order, returning how many were applied
pub fn replay<'a>(
    controller: &mut TrackballController,
    events: impl IntoIterator<Item = &'a PointerEvent>,
) -> usize {
    let mut count = 0;
    for event in events {
        controller.handle(event);
        count += 1;
    }
    log::debug!("replayed {} pointer events", count);
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_handle_press_release() {
        let mut controller = TrackballController::new(false);
        controller.handle(&PointerEvent::Press {
            button: Button::Primary,
            modifier: false,
            x: 0.0,
            y: 0.0,
        });
        assert!(controller.is_rotating());

        controller.handle(&PointerEvent::Release {
            button: Button::Primary,
            modifier: false,
            x: 0.0,
            y: 0.0,
        });
        assert!(!controller.active());
    }

    #[test]
    fn test_handle_abort_and_reset() {
        let mut controller = TrackballController::with_default_translation(false, Vec3::Z);
        controller.handle(&PointerEvent::Press {
            button: Button::Secondary,
            modifier: false,
            x: 0.0,
            y: 0.0,
        });
        controller.handle(&PointerEvent::Move { x: 1.0, y: 0.0 });
        controller.handle(&PointerEvent::Abort);
        assert!(!controller.active());
        assert_eq!(controller.translation(), Vec3::new(1.0, 0.0, 1.0));

        controller.handle(&PointerEvent::Reset);
        assert_eq!(controller.translation(), Vec3::Z);
    }

    #[test]
    fn test_event_json_format() {
        let events: Vec<PointerEvent> = serde_json::from_str(
            r#"[
                { "event": "press", "button": 1, "x": 0.1, "y": 0.1 },
                { "event": "move", "x": 0.2, "y": 0.1 },
                { "event": "release", "button": 1, "x": 0.2, "y": 0.1 },
                { "event": "abort" }
            ]"#,
        )
        .unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            PointerEvent::Press {
                button: Button::Primary,
                modifier: false,
                x: 0.1,
                y: 0.1
            }
        );
        assert_eq!(events[3], PointerEvent::Abort);
    }

    #[test]
    fn test_replay_counts_events() {
        let mut controller = TrackballController::new(true);
        let events = [
            PointerEvent::Press {
                button: Button::Primary,
                modifier: true,
                x: 0.0,
                y: 0.0,
            },
            PointerEvent::Move { x: 0.0, y: 0.25 },
            PointerEvent::Release {
                button: Button::Primary,
                modifier: true,
                x: 0.0,
                y: 0.25,
            },
        ];
        assert_eq!(replay(&mut controller, &events), 3);
        assert_eq!(controller.translation(), Vec3::new(0.0, 0.0, -0.25));
    }
}
