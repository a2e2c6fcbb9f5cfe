//! Bit timing for the WS2812 family
//!
//! Pulse widths are stored in pulse-generator clock ticks. One tick is the
//! base clock period multiplied by the channel clock divisor, so the same
//! [`TimingSpec`] means different wall-clock widths under different divisors.

use embassy_time::Duration;

/// APB clock feeding the pulse generator on ESP32
pub const BASE_CLOCK_HZ: u32 = 80_000_000;

/// Nominal WS2812 bit period (T0H + T0L, T1H + T1L)
pub const NOMINAL_BIT_PERIOD_NS: u32 = 1_250;

/// Datasheet tolerance around [`NOMINAL_BIT_PERIOD_NS`]
pub const BIT_PERIOD_TOLERANCE_NS: u32 = 600;

/// Widest pulse a single generator item can hold (15-bit duration field)
pub const MAX_PULSE_TICKS: u16 = 0x7FFF;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const PICOS_PER_SECOND: u64 = 1_000_000_000_000;

/// Clock that pulse durations are counted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    base_hz: u32,
    divisor: u8,
}

impl TickClock {
    pub const fn new(base_hz: u32, divisor: u8) -> Self {
        Self { base_hz, divisor }
    }

    pub const fn base_hz(self) -> u32 {
        self.base_hz
    }

    pub const fn divisor(self) -> u8 {
        self.divisor
    }

    /// Length of one tick in picoseconds
    ///
    /// Returns 0 for a degenerate clock (zero base frequency).
    #[allow(clippy::cast_lossless)]
    pub const fn period_ps(self) -> u64 {
        if self.base_hz == 0 {
            return 0;
        }
        PICOS_PER_SECOND * self.divisor as u64 / self.base_hz as u64
    }

    /// Convert a tick count to nanoseconds, rounded to the nearest
    #[allow(clippy::cast_lossless)]
    pub const fn ticks_to_ns(self, ticks: u16) -> u32 {
        self.span_ns(ticks as u32)
    }

    /// Convert nanoseconds to the nearest whole tick count
    ///
    /// Returns 0 for a degenerate clock (zero base frequency or divisor).
    #[allow(clippy::cast_lossless)]
    pub const fn ns_to_ticks(self, nanos: u32) -> u32 {
        let denom = self.divisor as u128 * NANOS_PER_SECOND as u128;
        if denom == 0 || self.base_hz == 0 {
            return 0;
        }
        let ticks = (nanos as u128 * self.base_hz as u128 + denom / 2) / denom;
        saturate_u32(ticks)
    }

    // ticks * divisor * 1e9 / base_hz with a single rounding step
    #[allow(clippy::cast_lossless)]
    const fn span_ns(self, ticks: u32) -> u32 {
        if self.base_hz == 0 {
            return 0;
        }
        let base = self.base_hz as u128;
        let scaled = ticks as u128 * self.divisor as u128 * NANOS_PER_SECOND as u128;
        saturate_u32((scaled + base / 2) / base)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn saturate_u32(value: u128) -> u32 {
    if value > u32::MAX as u128 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Pulse widths for both logical bits plus the latch period
///
/// Fixed once a driver is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSpec {
    /// High time of a `0` bit, in ticks
    pub t0h: u16,
    /// Low time of a `0` bit, in ticks
    pub t0l: u16,
    /// High time of a `1` bit, in ticks
    pub t1h: u16,
    /// Low time of a `1` bit, in ticks
    pub t1l: u16,
    /// Line-low period that latches the chain after a frame
    pub reset: Duration,
}

impl TimingSpec {
    /// WS2812B datasheet values for 100 ns ticks (80 MHz / 8)
    ///
    /// 400/900 ns for `0`, 800/500 ns for `1`.
    pub const WS2812B: Self = Self {
        t0h: 4,
        t0l: 9,
        t1h: 8,
        t1l: 5,
        reset: Duration::from_micros(60),
    };

    /// Build timings from nanosecond `(high, low)` pairs
    ///
    /// Returns `None` if any pulse does not fit a generator item.
    pub fn from_nanos(
        clock: TickClock,
        zero: (u32, u32),
        one: (u32, u32),
        reset: Duration,
    ) -> Option<Self> {
        let ticks = |nanos: u32| u16::try_from(clock.ns_to_ticks(nanos)).ok();
        Some(Self {
            t0h: ticks(zero.0)?,
            t0l: ticks(zero.1)?,
            t1h: ticks(one.0)?,
            t1l: ticks(one.1)?,
            reset,
        })
    }

    /// `(high, low)` ticks for one bit
    pub const fn pulse_ticks(&self, bit: bool) -> (u16, u16) {
        if bit {
            (self.t1h, self.t1l)
        } else {
            (self.t0h, self.t0l)
        }
    }

    /// Full bit period in nanoseconds
    #[allow(clippy::cast_lossless)]
    pub const fn bit_period_ns(&self, clock: TickClock, bit: bool) -> u32 {
        let (high, low) = self.pulse_ticks(bit);
        clock.span_ns(high as u32 + low as u32)
    }

    /// The four pulse widths in nanoseconds: `[t0h, t0l, t1h, t1l]`
    pub const fn as_nanos(&self, clock: TickClock) -> [u32; 4] {
        [
            clock.ticks_to_ns(self.t0h),
            clock.ticks_to_ns(self.t0l),
            clock.ticks_to_ns(self.t1h),
            clock.ticks_to_ns(self.t1l),
        ]
    }

    /// Check pulses are emittable and both bit periods are within tolerance
    pub fn validate(&self, clock: TickClock) -> Result<(), &'static str> {
        let pulses = [self.t0h, self.t0l, self.t1h, self.t1l];
        if pulses.contains(&0) {
            return Err("pulse width of zero ticks");
        }
        if pulses.iter().any(|&ticks| ticks > MAX_PULSE_TICKS) {
            return Err("pulse width exceeds generator item range");
        }
        if self.t0h == self.t1h && self.t0l == self.t1l {
            return Err("bit 0 and bit 1 pulses are identical");
        }
        for bit in [false, true] {
            let period = self.bit_period_ns(clock, bit);
            if period.abs_diff(NOMINAL_BIT_PERIOD_NS) > BIT_PERIOD_TOLERANCE_NS {
                return Err("bit period outside WS2812 tolerance");
            }
        }
        Ok(())
    }
}

impl Default for TimingSpec {
    fn default() -> Self {
        Self::WS2812B
    }
}
