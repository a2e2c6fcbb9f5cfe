//! Pixel buffer in wire order
//!
//! Holds exactly what goes on the line: three bit-reversed bytes per LED,
//! green first. The length is fixed by `LED_COUNT` and never changes.

use crate::bounds::{PixelRun, clamp_position};
use crate::color::Rgb;
use crate::wire::{BYTES_PER_PIXEL, decode_pixel, encode_pixel};

/// Fixed-size pixel storage for a chain of `LED_COUNT` LEDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const LED_COUNT: usize> {
    pixels: [[u8; BYTES_PER_PIXEL]; LED_COUNT],
}

impl<const LED_COUNT: usize> PixelBuffer<LED_COUNT> {
    /// Create a buffer with every LED off
    pub const fn new() -> Self {
        const { assert!(LED_COUNT > 0, "pixel chain needs at least one LED") };
        Self {
            pixels: [[0; BYTES_PER_PIXEL]; LED_COUNT],
        }
    }

    /// Number of LEDs in the chain
    pub const fn led_count(&self) -> usize {
        LED_COUNT
    }

    /// Number of bytes sent per frame
    pub const fn byte_len(&self) -> usize {
        LED_COUNT * BYTES_PER_PIXEL
    }

    /// Raw transmit bytes, 3 per LED in chain order
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }

    /// Store `color` for every LED in `run`
    pub fn set_run(&mut self, run: PixelRun, color: Rgb) {
        let encoded = encode_pixel(color);
        for pixel in &mut self.pixels[run.indices()] {
            *pixel = encoded;
        }
    }

    /// Set a run addressed the way callers address it
    ///
    /// `pos` is 1-based and clamped into the chain, `count` is cut at the
    /// last LED.
    pub fn set(&mut self, pos: i32, count: u32, color: Rgb) {
        self.set_run(PixelRun::clamped(pos, count, LED_COUNT), color);
    }

    /// Color stored at a 1-based (clamped) position
    pub fn get(&self, pos: i32) -> Rgb {
        let index = clamp_position(pos, LED_COUNT) - 1;
        decode_pixel(self.pixels[index])
    }

    /// Set every LED to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.set_run(PixelRun::full(LED_COUNT), color);
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.pixels = [[0; BYTES_PER_PIXEL]; LED_COUNT];
    }

    /// Store colors from the first LED onward
    ///
    /// Colors past the end of the chain are ignored, LEDs past the end of
    /// the iterator keep their value. Returns the number of LEDs written.
    pub fn write_colors<T, I>(&mut self, colors: T) -> usize
    where
        T: IntoIterator<Item = I>,
        I: Into<Rgb>,
    {
        let mut written = 0;
        for (pixel, color) in self.pixels.iter_mut().zip(colors) {
            *pixel = encode_pixel(color.into());
            written += 1;
        }
        written
    }

    /// Iterate over the stored colors in chain order
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.pixels.iter().map(|bytes| decode_pixel(*bytes))
    }
}

impl<const LED_COUNT: usize> Default for PixelBuffer<LED_COUNT> {
    fn default() -> Self {
        Self::new()
    }
}
