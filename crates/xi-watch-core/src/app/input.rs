impl<IN, CK, RNG> WatchApp<IN, CK, RNG>
where
    IN: InputProvider,
    CK: WallClock,
    RNG: RngCore,
{
    fn process_inputs(&mut self) {
        loop {
            match self.input.poll_event() {
                Ok(Some(InputEvent::Quit)) => {
                    info!("ui: quit requested on {:?}", self.screen());
                    self.exit_requested = true;
                    break;
                }
                Ok(Some(event)) => {
                    let event = self.calibrator.apply(event);
                    self.track_pointer(event);

                    if self.guard.is_armed() {
                        warn!("ui-nav: transition in progress, dropping {:?}", event);
                        continue;
                    }
                    self.apply_input_event(event);
                }
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider error, ending this frame's drain");
                    break;
                }
            }
        }
    }

    fn track_pointer(&mut self, event: InputEvent) {
        let Some(pos) = event.position() else {
            return;
        };
        if self.pointer != Some(pos) {
            self.pointer = Some(pos);
            self.pending_redraw = true;
        }
    }

    fn apply_input_event(&mut self, event: InputEvent) {
        match self.ui {
            UiState::Home => self.apply_home_input(event),
            UiState::AppMenu => self.apply_menu_input(event),
            UiState::NumberGenerator(_) => self.apply_number_generator_input(event),
            UiState::Stopwatch | UiState::ComplexApp => self.apply_placeholder_input(event),
        }
    }

    fn apply_home_input(&mut self, event: InputEvent) {
        if let InputEvent::PointerDown(pos) = event
            && self.config.enter_button.contains(pos)
        {
            self.enter_app_menu();
        }
    }

    fn apply_menu_input(&mut self, event: InputEvent) {
        match self.menu.handle(event) {
            MenuOutcome::Unchanged => {}
            MenuOutcome::Scrolled => self.pending_redraw = true,
            MenuOutcome::Selected(index) => {
                let Some(item) = self.config.menu_items.get(index) else {
                    warn!("menu: selected index {} has no item", index);
                    return;
                };
                let identifier = item.identifier();
                let next = Screen::route(&identifier);
                debug!("menu: '{}' routes to {:?}", identifier, next);
                self.enter_screen(next);
            }
        }
    }

    fn apply_number_generator_input(&mut self, event: InputEvent) {
        let UiState::NumberGenerator(generator) = &mut self.ui else {
            return;
        };

        match generator.handle(&self.config.numgen, event, &mut self.rng) {
            NumGenOutcome::Unchanged => {}
            NumGenOutcome::Redraw => self.pending_redraw = true,
            NumGenOutcome::ExitToMenu => self.enter_app_menu(),
        }
    }

    fn apply_placeholder_input(&mut self, event: InputEvent) {
        if matches!(event, InputEvent::KeyDown | InputEvent::PointerDown(_)) {
            self.enter_app_menu();
        }
    }
}
