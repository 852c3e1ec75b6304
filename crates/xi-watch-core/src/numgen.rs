//! Number generator: pick an upper bound on a slider, then show a uniformly
//! random number in `[1, bound]`.

use log::debug;
use rand::{Rng, RngCore};

use crate::{
    geometry::Rect,
    input::InputEvent,
    settings::SCREEN_WIDTH,
    slider::{SliderConfig, SliderState},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NumGenLayout {
    pub slider: SliderConfig,
    pub generate_button: Rect,
    pub back_button: Rect,
    /// Distance from the track centerline up to the value label.
    pub label_offset: i32,
}

impl Default for NumGenLayout {
    fn default() -> Self {
        Self {
            slider: SliderConfig::default(),
            generate_button: Rect::new(SCREEN_WIDTH / 2 - 75, 220, 150, 40),
            back_button: Rect::new(SCREEN_WIDTH / 2 - 60, 20, 120, 40),
            label_offset: 40,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumGenPhase {
    Slider(SliderState),
    Result { max: i32, number: i32 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumGenOutcome {
    Unchanged,
    Redraw,
    ExitToMenu,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NumberGenerator {
    phase: NumGenPhase,
}

impl NumberGenerator {
    pub const fn new(layout: &NumGenLayout) -> Self {
        Self {
            phase: NumGenPhase::Slider(SliderState::new(&layout.slider)),
        }
    }

    pub const fn phase(&self) -> &NumGenPhase {
        &self.phase
    }

    pub fn handle<R>(
        &mut self,
        layout: &NumGenLayout,
        event: InputEvent,
        rng: &mut R,
    ) -> NumGenOutcome
    where
        R: RngCore,
    {
        match &mut self.phase {
            NumGenPhase::Slider(slider) => match event {
                InputEvent::PointerDown(pos) => {
                    if slider.press(&layout.slider, pos) {
                        debug!("numgen: knob grabbed at x={}", slider.knob_x());
                    }
                    if layout.generate_button.contains(pos) {
                        let max = slider.value(&layout.slider);
                        let number = draw_number(rng, max);
                        debug!("numgen: generated {} in [1, {}]", number, max);
                        self.phase = NumGenPhase::Result { max, number };
                        return NumGenOutcome::Redraw;
                    }
                    if layout.back_button.contains(pos) {
                        return NumGenOutcome::ExitToMenu;
                    }
                    NumGenOutcome::Unchanged
                }
                InputEvent::PointerUp(_) => {
                    slider.release();
                    NumGenOutcome::Unchanged
                }
                InputEvent::PointerMove { pos, .. } => {
                    if slider.drag_to(&layout.slider, pos.x) {
                        NumGenOutcome::Redraw
                    } else {
                        NumGenOutcome::Unchanged
                    }
                }
                InputEvent::KeyDown | InputEvent::Quit => NumGenOutcome::Unchanged,
            },
            NumGenPhase::Result { .. } => match event {
                InputEvent::PointerDown(pos) if layout.back_button.contains(pos) => {
                    self.phase = NumGenPhase::Slider(SliderState::new(&layout.slider));
                    NumGenOutcome::Redraw
                }
                _ => NumGenOutcome::Unchanged,
            },
        }
    }
}

/// Uniform integer in `[1, max]`; bounds below one collapse to one.
pub fn draw_number<R>(rng: &mut R, max: i32) -> i32
where
    R: RngCore,
{
    rng.gen_range(1..=max.max(1))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::geometry::Point;

    fn slider_knob(generator: &NumberGenerator) -> Option<SliderState> {
        match generator.phase() {
            NumGenPhase::Slider(slider) => Some(*slider),
            NumGenPhase::Result { .. } => None,
        }
    }

    fn drag_knob_to(
        generator: &mut NumberGenerator,
        layout: &NumGenLayout,
        rng: &mut SmallRng,
        x: i32,
    ) {
        let knob = slider_knob(generator).unwrap().knob(&layout.slider);
        generator.handle(layout, InputEvent::PointerDown(knob), rng);
        generator.handle(
            layout,
            InputEvent::PointerMove {
                pos: Point::new(x, knob.y),
                dx: x - knob.x,
                dy: 0,
            },
            rng,
        );
        generator.handle(layout, InputEvent::PointerUp(Point::new(x, knob.y)), rng);
    }

    #[test]
    fn generated_number_is_within_committed_bound() {
        let layout = NumGenLayout::default();
        let mut rng = SmallRng::seed_from_u64(7);

        for target_x in [50, 51, 90, 250, 449, 450] {
            let mut generator = NumberGenerator::new(&layout);
            drag_knob_to(&mut generator, &layout, &mut rng, target_x);
            let expected_max = layout.slider.value_at(target_x);

            let outcome = generator.handle(
                &layout,
                InputEvent::PointerDown(layout.generate_button.center()),
                &mut rng,
            );

            assert_eq!(outcome, NumGenOutcome::Redraw);
            match *generator.phase() {
                NumGenPhase::Result { max, number } => {
                    assert_eq!(max, expected_max);
                    assert!((1..=max).contains(&number));
                }
                NumGenPhase::Slider(_) => panic!("generate did not commit"),
            }
        }
    }

    #[test]
    fn back_from_result_returns_to_fresh_slider() {
        let layout = NumGenLayout::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut generator = NumberGenerator::new(&layout);
        drag_knob_to(&mut generator, &layout, &mut rng, 300);
        generator.handle(
            &layout,
            InputEvent::PointerDown(layout.generate_button.center()),
            &mut rng,
        );

        let outcome = generator.handle(
            &layout,
            InputEvent::PointerDown(layout.back_button.center()),
            &mut rng,
        );

        assert_eq!(outcome, NumGenOutcome::Redraw);
        assert_eq!(
            slider_knob(&generator).map(|slider| slider.knob_x()),
            Some(layout.slider.x)
        );
    }

    #[test]
    fn back_from_slider_exits_flow() {
        let layout = NumGenLayout::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let mut generator = NumberGenerator::new(&layout);

        assert_eq!(
            generator.handle(
                &layout,
                InputEvent::PointerDown(layout.back_button.center()),
                &mut rng,
            ),
            NumGenOutcome::ExitToMenu
        );
    }

    #[test]
    fn result_ignores_presses_outside_back() {
        let layout = NumGenLayout::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut generator = NumberGenerator::new(&layout);
        generator.handle(
            &layout,
            InputEvent::PointerDown(layout.generate_button.center()),
            &mut rng,
        );

        for event in [
            InputEvent::PointerDown(layout.generate_button.center()),
            InputEvent::KeyDown,
            InputEvent::PointerUp(layout.back_button.center()),
        ] {
            assert_eq!(
                generator.handle(&layout, event, &mut rng),
                NumGenOutcome::Unchanged
            );
        }
        assert!(matches!(
            generator.phase(),
            NumGenPhase::Result { max: 1, number: 1 }
        ));
    }

    #[test]
    fn draw_number_collapses_degenerate_bound() {
        let mut rng = SmallRng::seed_from_u64(4);

        assert_eq!(draw_number(&mut rng, 0), 1);
        assert_eq!(draw_number(&mut rng, 1), 1);
    }

    #[test]
    fn buttons_are_centered_on_the_screen() {
        let layout = NumGenLayout::default();

        assert_eq!(layout.generate_button.center().x, SCREEN_WIDTH / 2);
        assert_eq!(layout.back_button.center().x, SCREEN_WIDTH / 2);
    }
}
