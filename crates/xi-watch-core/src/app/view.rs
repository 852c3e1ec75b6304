impl<IN, CK, RNG> WatchApp<IN, CK, RNG>
where
    IN: InputProvider,
    CK: WallClock,
    RNG: RngCore,
{
    pub fn new(input: IN, clock: CK, rng: RNG, config: WatchConfig) -> Self {
        Self {
            input,
            clock,
            rng,
            calibrator: Calibrator::new(config.calibration, config.width, config.height),
            menu: ScrollMenu::new(config.menu, config.menu_items.len()),
            config,
            ui: UiState::Home,
            guard: TransitionGuard::new(),
            pointer: None,
            clock_reading: None,
            pending_redraw: true,
            exit_requested: false,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.ui {
            UiState::Home => Screen::Home,
            UiState::AppMenu => Screen::AppMenu,
            UiState::Stopwatch => Screen::Stopwatch,
            UiState::NumberGenerator(_) => Screen::NumberGenerator,
            UiState::ComplexApp => Screen::ComplexApp,
        }
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn scroll_offset(&self) -> i32 {
        self.menu.scroll().offset()
    }

    pub fn transition_in_progress(&self) -> bool {
        self.guard.is_armed()
    }

    pub fn number_generator_phase(&self) -> Option<NumGenPhase> {
        match &self.ui {
            UiState::NumberGenerator(generator) => Some(*generator.phase()),
            _ => None,
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(ScreenView<'_>),
    {
        match &self.ui {
            UiState::Home => {
                let (time, date): (String<TIME_TEXT_BYTES>, String<DATE_TEXT_BYTES>) =
                    match &self.clock_reading {
                        Some(reading) => (format_time(reading), format_date(reading)),
                        None => (String::new(), String::new()),
                    };

                f(ScreenView::Home {
                    time: &time,
                    date: &date,
                    enter: self.button(ENTER_LABEL, self.config.enter_button),
                });
            }
            UiState::AppMenu => {
                let layout = self.menu.layout();
                let local_pointer = self.pointer.map(|pointer| layout.to_local(pointer));
                let mut items = Vec::<MenuItemView<'_>, MAX_MENU_ITEMS>::new();

                for (index, rect) in self.menu.visible_items() {
                    let Some(item) = self.config.menu_items.get(index) else {
                        continue;
                    };
                    let _ = items.push(MenuItemView {
                        label: item.label,
                        rect,
                        hovered: local_pointer.is_some_and(|pointer| rect.contains(pointer)),
                    });
                }

                f(ScreenView::AppMenu {
                    area: layout.area,
                    items: &items,
                });
            }
            UiState::NumberGenerator(generator) => {
                let layout = &self.config.numgen;
                let back = self.button(BACK_LABEL, layout.back_button);

                match generator.phase() {
                    NumGenPhase::Slider(slider) => f(ScreenView::NumberSlider {
                        track: layout.slider.track(),
                        knob: slider.knob(&layout.slider),
                        knob_radius: layout.slider.knob_radius,
                        value: slider.value(&layout.slider),
                        label_offset: layout.label_offset,
                        generate: self.button(GENERATE_LABEL, layout.generate_button),
                        back,
                    }),
                    NumGenPhase::Result { number, .. } => f(ScreenView::NumberResult {
                        number: *number,
                        back,
                    }),
                }
            }
            UiState::Stopwatch => f(ScreenView::Placeholder {
                message: STOPWATCH_PLACEHOLDER,
            }),
            UiState::ComplexApp => f(ScreenView::Placeholder {
                message: COMPLEX_APP_PLACEHOLDER,
            }),
        }
    }

    fn button<'a>(&self, label: &'a str, rect: Rect) -> ButtonView<'a> {
        ButtonView {
            label,
            rect,
            hovered: self.pointer.is_some_and(|pointer| rect.contains(pointer)),
        }
    }
}
