//! Top-level screen state machine for the home clock, app menu, and apps.
//!
//! One loop drives everything: each frame drains input, dispatches it to the
//! active screen's handler, and reports whether a redraw is needed. Screens
//! never block; a screen "returns" by requesting a transition.

use heapless::{String, Vec};
use log::{debug, info, warn};
use rand::RngCore;

use crate::{
    calibration::Calibrator,
    clock::{ClockReading, DATE_TEXT_BYTES, TIME_TEXT_BYTES, WallClock, format_date, format_time},
    geometry::{Point, Rect},
    input::{InputEvent, InputProvider},
    menu::{MAX_MENU_ITEMS, MenuOutcome, ScrollMenu},
    numgen::{NumGenOutcome, NumGenPhase, NumberGenerator},
    render::{
        ButtonView, COMPLEX_APP_PLACEHOLDER, MenuItemView, STOPWATCH_PLACEHOLDER, ScreenView,
    },
    settings::WatchConfig,
};

const ENTER_LABEL: &str = "ENTER";
const GENERATE_LABEL: &str = "Generate";
const BACK_LABEL: &str = "Back";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
    /// Quit was requested; the caller should tear down and exit.
    Exit,
}

/// The active top-level screen. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Home,
    AppMenu,
    Stopwatch,
    NumberGenerator,
    ComplexApp,
}

impl Screen {
    /// Destination for a menu item identifier; unknown identifiers go home.
    pub fn route(identifier: &str) -> Self {
        match identifier {
            "stopwatch" => Self::Stopwatch,
            "numbergenerator" => Self::NumberGenerator,
            "complexapp" => Self::ComplexApp,
            _ => Self::Home,
        }
    }
}

/// Blocks a second transition until the destination starts consuming input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransitionGuard {
    armed: bool,
}

impl TransitionGuard {
    pub const fn new() -> Self {
        Self { armed: false }
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Returns `false` when a transition was already in progress.
    pub fn arm(&mut self) -> bool {
        !core::mem::replace(&mut self.armed, true)
    }

    pub fn release(&mut self) {
        self.armed = false;
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UiState {
    Home,
    AppMenu,
    Stopwatch,
    NumberGenerator(NumberGenerator),
    ComplexApp,
}

pub struct WatchApp<IN, CK, RNG>
where
    IN: InputProvider,
    CK: WallClock,
    RNG: RngCore,
{
    input: IN,
    clock: CK,
    rng: RNG,
    config: WatchConfig,
    calibrator: Calibrator,
    ui: UiState,
    menu: ScrollMenu,
    guard: TransitionGuard,
    pointer: Option<Point>,
    clock_reading: Option<ClockReading>,
    pending_redraw: bool,
    exit_requested: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
