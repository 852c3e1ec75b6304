//! Startup configuration: panel geometry, touch calibration, layouts, and
//! frame pacing. Built once and never mutated at runtime.

use core::fmt;

use crate::{
    app::Screen,
    calibration::CalibrationConfig,
    geometry::Rect,
    menu::{MAX_MENU_ITEMS, MenuItem, MenuLayout},
    numgen::NumGenLayout,
};

pub const SCREEN_WIDTH: i32 = 480;
pub const SCREEN_HEIGHT: i32 = 320;

pub const DEFAULT_MENU_ITEMS: [MenuItem; 3] = [
    MenuItem::new("Stopwatch"),
    MenuItem::new("Number Generator"),
    MenuItem::new("Fitness Tracker"),
];

/// Target frames per second by screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameRates {
    pub home: u16,
    pub menu: u16,
    pub number_generator: u16,
    pub placeholder: u16,
}

impl Default for FrameRates {
    fn default() -> Self {
        Self {
            home: 30,
            menu: 30,
            number_generator: 60,
            placeholder: 30,
        }
    }
}

impl FrameRates {
    pub const fn for_screen(&self, screen: Screen) -> u16 {
        match screen {
            Screen::Home => self.home,
            Screen::AppMenu => self.menu,
            Screen::NumberGenerator => self.number_generator,
            Screen::Stopwatch | Screen::ComplexApp => self.placeholder,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WatchConfig {
    pub width: i32,
    pub height: i32,
    pub calibration: CalibrationConfig,
    pub enter_button: Rect,
    pub menu: MenuLayout,
    pub menu_items: &'static [MenuItem],
    pub numgen: NumGenLayout,
    pub frame_rates: FrameRates,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            calibration: CalibrationConfig::IDENTITY,
            enter_button: Rect::new((SCREEN_WIDTH - 180) / 2, 200, 180, 70),
            menu: MenuLayout::default(),
            menu_items: &DEFAULT_MENU_ITEMS,
            numgen: NumGenLayout::default(),
            frame_rates: FrameRates::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    ZeroSliderWidth,
    SliderRangeInverted { min_val: i32, max_val: i32 },
    SliderMinBelowOne { min_val: i32 },
    EmptyMenu,
    TooManyMenuItems { count: usize },
    NoVisibleMenuItems,
    ZeroFrameRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSliderWidth => f.write_str("slider track width must be positive"),
            Self::SliderRangeInverted { min_val, max_val } => {
                write!(f, "slider range inverted: min {min_val} > max {max_val}")
            }
            Self::SliderMinBelowOne { min_val } => {
                write!(f, "slider minimum {min_val} is below 1")
            }
            Self::EmptyMenu => f.write_str("menu has no items"),
            Self::TooManyMenuItems { count } => {
                write!(f, "menu has {count} items, at most {MAX_MENU_ITEMS} supported")
            }
            Self::NoVisibleMenuItems => f.write_str("menu must show at least one item"),
            Self::ZeroFrameRate => f.write_str("frame rates must be positive"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl WatchConfig {
    pub const fn with_calibration(mut self, calibration: CalibrationConfig) -> Self {
        self.calibration = calibration;
        self
    }

    pub const fn with_menu_items(mut self, menu_items: &'static [MenuItem]) -> Self {
        self.menu_items = menu_items;
        self
    }

    pub const fn with_numgen(mut self, numgen: NumGenLayout) -> Self {
        self.numgen = numgen;
        self
    }

    /// Checks startup invariants the UI relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slider = &self.numgen.slider;
        if slider.width <= 0 {
            return Err(ConfigError::ZeroSliderWidth);
        }
        if slider.min_val > slider.max_val {
            return Err(ConfigError::SliderRangeInverted {
                min_val: slider.min_val,
                max_val: slider.max_val,
            });
        }
        if slider.min_val < 1 {
            return Err(ConfigError::SliderMinBelowOne {
                min_val: slider.min_val,
            });
        }
        if self.menu_items.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }
        if self.menu_items.len() > MAX_MENU_ITEMS {
            return Err(ConfigError::TooManyMenuItems {
                count: self.menu_items.len(),
            });
        }
        if self.menu.visible_items == 0 {
            return Err(ConfigError::NoVisibleMenuItems);
        }

        let rates = &self.frame_rates;
        if [rates.home, rates.menu, rates.number_generator, rates.placeholder].contains(&0) {
            return Err(ConfigError::ZeroFrameRate);
        }

        Ok(())
    }

    /// Frame budget for `screen` in milliseconds.
    pub fn frame_interval_ms(&self, screen: Screen) -> u64 {
        1_000 / u64::from(self.frame_rates.for_screen(screen).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::SliderConfig;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(WatchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_width_slider_is_rejected() {
        let numgen = NumGenLayout {
            slider: SliderConfig {
                width: 0,
                ..SliderConfig::default()
            },
            ..NumGenLayout::default()
        };

        assert_eq!(
            WatchConfig::default().with_numgen(numgen).validate(),
            Err(ConfigError::ZeroSliderWidth)
        );
    }

    #[test]
    fn oversized_menu_is_rejected() {
        static ITEMS: [MenuItem; MAX_MENU_ITEMS + 1] = [MenuItem::new("x"); MAX_MENU_ITEMS + 1];

        assert_eq!(
            WatchConfig::default().with_menu_items(&ITEMS).validate(),
            Err(ConfigError::TooManyMenuItems {
                count: MAX_MENU_ITEMS + 1
            })
        );
        assert_eq!(
            WatchConfig::default().with_menu_items(&[]).validate(),
            Err(ConfigError::EmptyMenu)
        );
    }

    #[test]
    fn frame_interval_follows_screen() {
        let config = WatchConfig::default();

        assert_eq!(config.frame_interval_ms(Screen::Home), 33);
        assert_eq!(config.frame_interval_ms(Screen::NumberGenerator), 16);
    }

    #[test]
    fn enter_button_is_centered() {
        let config = WatchConfig::default();

        assert_eq!(config.enter_button, Rect::new(150, 200, 180, 70));
    }
}
