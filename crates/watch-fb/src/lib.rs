#![cfg_attr(not(test), no_std)]

//! In-memory RGB565 framebuffer for the 480x320 watch panel.

mod framebuffer;
pub mod format;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use framebuffer::FrameBuffer;
