//! Paged monochrome framebuffer with raster drawing primitives.
//!
//! The buffer uses the paged memory layout of SSD1306-class OLED
//! controllers: one byte holds 8 vertically stacked pixels, and page `p`
//! covers pixel rows `8p..8p+8`. Drawing happens entirely in RAM; pushing
//! the bytes to a display is left to the caller, which consumes
//! [`FrameBuffer::raw_buffer`] or [`FrameBuffer::page_slice`] page by page.
//!
//! Drawing operations never fail: coordinates outside the buffer are
//! silently dropped, so shape algorithms can run partially off-screen.
//!
//! ```
//! use pagefb::{Config, FrameBuffer};
//!
//! let mut fb = FrameBuffer::new(Config::default()).unwrap();
//! fb.line(0, 0, 127, 31);
//! fb.circle(64, 16, 10);
//! assert!(fb.get_pixel(0, 0));
//! ```
//!
//! With the `graphics` feature (on by default) the buffer is an
//! embedded-graphics `DrawTarget` over `BinaryColor`, so styled
//! primitives, fonts and images from that ecosystem draw straight into it.

#![no_std]

extern crate alloc;

pub mod config;
pub mod framebuffer;
mod framebuffer_ext;
pub mod plot;
pub mod sprite;

pub use config::{Config, ConfigError};
pub use framebuffer::framebuffer::FrameBuffer;
pub use plot::ScrollPlot;
pub use sprite::{BlitMode, Sprite};
