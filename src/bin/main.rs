use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use watch_fb::FrameBuffer;
use xi_watch_core::{
    app::{TickResult, WatchApp},
    calibration::CalibrationConfig,
    settings::WatchConfig,
};
use xi_watch_render::render::{FrameRenderer, watch::WatchRenderer};

use clock::LocalClock;
use input::SimulatorInput;
use panel::SimulatorPanel;

#[path = "main/clock.rs"]
mod clock;
#[path = "main/input.rs"]
mod input;
#[path = "main/panel.rs"]
mod panel;

const TITLE: &str = "Xi Smartwatch";
const WINDOW_SCALE: u32 = 1;
// Touch panel orientation relative to the display.
const SWAP_XY: bool = false;
const INVERT_X: bool = false;
const INVERT_Y: bool = false;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = WatchConfig::default().with_calibration(CalibrationConfig::new(
        SWAP_XY, INVERT_X, INVERT_Y,
    ));
    config.validate().context("invalid watch configuration")?;

    info!(
        "boot: {} {}x{} scale={} calibration={:?}",
        TITLE, config.width, config.height, WINDOW_SCALE, config.calibration
    );

    let mut panel = SimulatorPanel::open(TITLE, WINDOW_SCALE);
    let mut app = WatchApp::new(
        SimulatorInput::new(),
        LocalClock,
        StdRng::from_entropy(),
        config,
    );
    let mut renderer = WatchRenderer::default();
    let mut frame = Box::new(FrameBuffer::new());

    loop {
        let frame_start = Instant::now();
        panel.pump_events(app.input_mut());

        match app.tick() {
            TickResult::Exit => {
                info!(
                    "shutdown: window closed after {} frames",
                    renderer.frames_rendered()
                );
                break;
            }
            TickResult::RenderRequested => {
                app.with_screen(|screen| renderer.render(screen, &mut frame));
                panel.flush_frame(&frame);
            }
            TickResult::NoRender => {}
        }

        let budget = Duration::from_millis(app.frame_interval_ms());
        match budget.checked_sub(frame_start.elapsed()) {
            Some(rest) => thread::sleep(rest),
            None => debug!(
                "frame: over budget on {:?} ({}ms)",
                app.screen(),
                frame_start.elapsed().as_millis()
            ),
        }
    }

    Ok(())
}
