#![cfg_attr(not(test), no_std)]

//! Draws Xi watch view models into the RGB565 framebuffer.

pub mod render;
