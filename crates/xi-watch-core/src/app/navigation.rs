impl<IN, CK, RNG> WatchApp<IN, CK, RNG>
where
    IN: InputProvider,
    CK: WallClock,
    RNG: RngCore,
{
    fn enter_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Home => self.enter_home(),
            Screen::AppMenu => self.enter_app_menu(),
            Screen::Stopwatch => self.transition(UiState::Stopwatch),
            Screen::NumberGenerator => self.enter_number_generator(),
            Screen::ComplexApp => self.transition(UiState::ComplexApp),
        }
    }

    fn enter_home(&mut self) {
        self.clock_reading = None;
        self.transition(UiState::Home);
    }

    fn enter_app_menu(&mut self) {
        self.menu.reset_drag();
        self.transition(UiState::AppMenu);
    }

    fn enter_number_generator(&mut self) {
        let generator = NumberGenerator::new(&self.config.numgen);
        self.transition(UiState::NumberGenerator(generator));
    }

    fn transition(&mut self, next: UiState) {
        if !self.guard.arm() {
            debug!("ui-nav: transition already in progress, ignoring");
            return;
        }

        let from = self.screen();
        self.ui = next;
        self.pending_redraw = true;
        debug!("ui-nav: {:?} -> {:?}", from, self.screen());
    }
}
