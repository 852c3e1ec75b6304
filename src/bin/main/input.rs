use std::{collections::VecDeque, convert::Infallible};

use embedded_graphics_simulator::SimulatorEvent;
use log::trace;
use xi_watch_core::{
    geometry::Point,
    input::{InputEvent, InputProvider},
};

/// Queues window events until the app drains them on its next tick.
#[derive(Debug, Default)]
pub struct SimulatorInput {
    queue: VecDeque<InputEvent>,
    last_pointer: Option<Point>,
}

impl SimulatorInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: SimulatorEvent) {
        let Some(event) = self.convert(event) else {
            return;
        };
        trace!("input: {:?}", event);
        self.queue.push_back(event);
    }

    fn convert(&mut self, event: SimulatorEvent) -> Option<InputEvent> {
        match event {
            SimulatorEvent::Quit => Some(InputEvent::Quit),
            SimulatorEvent::KeyDown { repeat: false, .. } => Some(InputEvent::KeyDown),
            SimulatorEvent::MouseButtonDown { point, .. } => {
                let pos = self.remember(point.x, point.y);
                Some(InputEvent::PointerDown(pos))
            }
            SimulatorEvent::MouseButtonUp { point, .. } => {
                let pos = self.remember(point.x, point.y);
                Some(InputEvent::PointerUp(pos))
            }
            SimulatorEvent::MouseMove { point } => {
                let previous = self.last_pointer;
                let pos = self.remember(point.x, point.y);
                let (dx, dy) = match previous {
                    Some(previous) => (pos.x - previous.x, pos.y - previous.y),
                    None => (0, 0),
                };
                Some(InputEvent::PointerMove { pos, dx, dy })
            }
            _ => None,
        }
    }

    fn remember(&mut self, x: i32, y: i32) -> Point {
        let pos = Point::new(x, y);
        self.last_pointer = Some(pos);
        pos
    }
}

impl InputProvider for SimulatorInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point as GfxPoint;
    use embedded_graphics_simulator::sdl2::MouseButton;

    use super::*;

    fn drain(input: &mut SimulatorInput) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Ok(Some(event)) = input.poll_event() {
            events.push(event);
        }
        events
    }

    #[test]
    fn mouse_motion_reports_deltas_from_previous_position() {
        let mut input = SimulatorInput::new();

        input.push_event(SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            point: GfxPoint::new(100, 100),
        });
        input.push_event(SimulatorEvent::MouseMove {
            point: GfxPoint::new(104, 90),
        });
        input.push_event(SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point: GfxPoint::new(104, 90),
        });

        assert_eq!(
            drain(&mut input),
            vec![
                InputEvent::PointerDown(Point::new(100, 100)),
                InputEvent::PointerMove {
                    pos: Point::new(104, 90),
                    dx: 4,
                    dy: -10,
                },
                InputEvent::PointerUp(Point::new(104, 90)),
            ]
        );
    }

    #[test]
    fn first_motion_has_zero_delta() {
        let mut input = SimulatorInput::new();

        input.push_event(SimulatorEvent::MouseMove {
            point: GfxPoint::new(7, 9),
        });

        assert_eq!(
            drain(&mut input),
            vec![InputEvent::PointerMove {
                pos: Point::new(7, 9),
                dx: 0,
                dy: 0,
            }]
        );
    }

    #[test]
    fn quit_is_forwarded() {
        let mut input = SimulatorInput::new();

        input.push_event(SimulatorEvent::Quit);

        assert_eq!(drain(&mut input), vec![InputEvent::Quit]);
    }
}
