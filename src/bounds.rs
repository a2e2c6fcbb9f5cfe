//! Position clamping for pixel runs
//!
//! Callers address LEDs 1-based and are never rejected for going out of
//! range; positions and run lengths are pulled back inside the chain.

use core::ops::Range;

/// Clamp a 1-based position into `[1, led_count]`
///
/// `led_count` must be at least 1.
pub fn clamp_position(pos: i32, led_count: usize) -> usize {
    usize::try_from(pos).map_or(1, |pos| pos.clamp(1, led_count))
}

/// A run of consecutive LEDs inside the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRun {
    /// 0-based index of the first LED
    start: usize,
    /// Number of LEDs in the run
    count: usize,
}

impl PixelRun {
    /// Build a run from a caller-supplied position and length
    ///
    /// The position is clamped first, then the length is cut so the run
    /// ends at the last LED at the latest.
    pub fn clamped(pos: i32, count: u32, led_count: usize) -> Self {
        let pos = clamp_position(pos, led_count);
        let available = led_count - pos + 1;
        let count = usize::try_from(count).map_or(available, |count| count.min(available));

        Self {
            start: pos - 1,
            count,
        }
    }

    /// Run covering the whole chain
    pub const fn full(led_count: usize) -> Self {
        Self {
            start: 0,
            count: led_count,
        }
    }

    /// 0-based index of the first LED
    pub const fn start(self) -> usize {
        self.start
    }

    /// Number of LEDs in the run
    pub const fn count(self) -> usize {
        self.count
    }

    /// 0-based index one past the last LED
    pub const fn end(self) -> usize {
        self.start + self.count
    }

    pub const fn is_empty(self) -> bool {
        self.count == 0
    }

    /// 0-based LED indices covered by the run
    pub const fn indices(self) -> Range<usize> {
        self.start..self.end()
    }
}
