use embedded_graphics::{
    pixelcolor::{Rgb565, raw::RawU16},
    prelude::{DrawTarget, Point, Size},
    primitives::Rectangle,
};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use watch_fb::{
    FrameBuffer,
    format::{HEIGHT, WIDTH},
};

use crate::input::SimulatorInput;

/// Desktop window standing in for the watch's LCD and touch panel.
pub struct SimulatorPanel {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    flushes: u32,
}

impl SimulatorPanel {
    pub fn open(title: &str, scale: u32) -> Self {
        let display = SimulatorDisplay::new(Size::new(WIDTH as u32, HEIGHT as u32));
        let settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
        let mut window = Window::new(title, &settings);
        // The SDL window only exists after the first update.
        window.update(&display);

        Self {
            display,
            window,
            flushes: 0,
        }
    }

    /// Copies the framebuffer into the window and presents it.
    pub fn flush_frame(&mut self, frame: &FrameBuffer) {
        let area = Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32));
        let pixels = frame.raw().iter().map(|&raw| Rgb565::from(RawU16::new(raw)));

        if let Err(never) = self.display.fill_contiguous(&area, pixels) {
            match never {}
        }
        self.window.update(&self.display);

        if self.flushes == 0 {
            log::info!("display: first flush ok");
        }
        self.flushes = self.flushes.wrapping_add(1);
    }

    pub fn pump_events(&mut self, input: &mut SimulatorInput) {
        for event in self.window.events() {
            input.push_event(event);
        }
    }
}
