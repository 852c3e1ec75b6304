#![cfg_attr(not(test), no_std)]

//! Hardware-independent UI core of the Xi smartwatch: screens, touch handling,
//! and the view models a renderer draws.

pub mod app;
pub mod calibration;
pub mod clock;
pub mod geometry;
pub mod input;
pub mod menu;
pub mod numgen;
pub mod render;
pub mod settings;
pub mod slider;
