impl<IN, CK, RNG> WatchApp<IN, CK, RNG>
where
    IN: InputProvider,
    CK: WallClock,
    RNG: RngCore,
{
    /// Runs one frame: drain input, advance state, sample the clock.
    pub fn tick(&mut self) -> TickResult {
        // The destination of last frame's transition now owns the input.
        self.guard.release();
        self.process_inputs();

        if self.exit_requested {
            return TickResult::Exit;
        }

        if matches!(self.ui, UiState::Home) {
            self.sample_clock();
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Frame budget for the active screen.
    pub fn frame_interval_ms(&self) -> u64 {
        self.config.frame_interval_ms(self.screen())
    }

    fn sample_clock(&mut self) {
        let reading = self.clock.now();
        if self.clock_reading != Some(reading) {
            self.clock_reading = Some(reading);
            self.pending_redraw = true;
        }
    }
}
