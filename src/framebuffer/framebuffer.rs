//! Paged 1-bit pixel buffer.

use alloc::vec;
use alloc::vec::Vec;
use log::debug;

use crate::config::{Config, ConfigError, PAGE_HEIGHT};

#[cfg(feature = "graphics")]
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

/// Monochrome framebuffer in the paged SSD1306 memory layout.
///
/// Each instance owns its byte store; create as many as needed, they are
/// fully independent. The buffer starts cleared.
///
/// Mutation goes through `&mut self`, so sharing one buffer across
/// execution contexts requires the caller to serialize access; the buffer
/// itself never locks.
pub struct FrameBuffer {
    buffer: Vec<u8>,
    width: usize,
    height: usize,
    pages: usize,
}

impl FrameBuffer {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            "framebuffer {}x{}: {} pages, {} bytes",
            config.width,
            config.height,
            config.pages(),
            config.buffer_len()
        );
        Ok(FrameBuffer {
            buffer: vec![0x00; config.buffer_len()],
            width: config.width,
            height: config.height,
            pages: config.pages(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buffer.fill(0x00);
    }

    /// Turn every pixel on.
    pub fn fill(&mut self) {
        self.buffer.fill(0xFF);
    }

    /// Write one byte pattern across every column of a page.
    ///
    /// The pattern is a column bit mask, bit 0 topmost, so `0x0F` fills
    /// the upper half of the band. Out-of-range pages are ignored.
    pub fn fill_page(&mut self, page: usize, pattern: u8) {
        if page >= self.pages {
            return;
        }
        let start = page * self.width;
        self.buffer[start..start + self.width].fill(pattern);
    }

    /// Byte index and bit mask for a coordinate, or `None` when it falls
    /// outside the buffer.
    fn address(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let page = y / PAGE_HEIGHT;
        let bit = y % PAGE_HEIGHT;
        Some((page * self.width + x, 1 << bit))
    }

    pub fn set_pixel(&mut self, x: i32, y: i32) {
        if let Some((index, mask)) = self.address(x, y) {
            self.buffer[index] |= mask;
        }
    }

    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        if let Some((index, mask)) = self.address(x, y) {
            self.buffer[index] &= !mask;
        }
    }

    pub fn toggle_pixel(&mut self, x: i32, y: i32) {
        if let Some((index, mask)) = self.address(x, y) {
            self.buffer[index] ^= mask;
        }
    }

    /// Pixel state; unset for out-of-range coordinates.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        match self.address(x, y) {
            Some((index, mask)) => self.buffer[index] & mask != 0,
            None => false,
        }
    }

    /// The whole byte store, page-major: page `p`, column `c` is index
    /// `p * width + c`.
    pub fn raw_buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The `width` bytes of one page, the unit a display flush streams.
    ///
    /// Out-of-range pages yield an empty slice.
    pub fn page_slice(&self, page: usize) -> &[u8] {
        if page >= self.pages {
            return &[];
        }
        let start = page * self.width;
        &self.buffer[start..start + self.width]
    }
}

#[cfg(feature = "graphics")]
impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            match color {
                BinaryColor::On => self.set_pixel(point.x, point.y),
                BinaryColor::Off => self.clear_pixel(point.x, point.y),
            }
        }
        Ok(())
    }
}

#[cfg(feature = "graphics")]
impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
