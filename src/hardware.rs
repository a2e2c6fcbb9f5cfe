//! Pulse generator boundary
//!
//! The peripheral that actually toggles the pin (RMT on ESP32) lives behind
//! [`PulseGenerator`]. The driver only configures a channel, hands it a
//! [`Translator`] and feeds it buffers.

use crate::encoder::Translator;
use crate::timing::{BASE_CLOCK_HZ, TickClock, TimingSpec};

/// Pulse generator channel number
pub type ChannelId = u8;

/// Clock divisor giving 100 ns ticks at [`BASE_CLOCK_HZ`]
pub const DEFAULT_CLOCK_DIVISOR: u8 = 8;

/// Level the line rests at between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdleLevel {
    #[default]
    Low,
    High,
}

/// Everything needed to bring up one output channel
///
/// Fixed at construction, there is no runtime reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Generator channel owned by the driver
    pub channel: ChannelId,
    /// GPIO the data line is attached to
    pub pin: u8,
    /// Divisor applied to the base clock to get one tick
    pub clock_divisor: u8,
    /// Memory blocks reserved for the channel's item buffer
    pub mem_blocks: u8,
    /// Line level outside of transmissions
    pub idle_level: IdleLevel,
    /// Pulse widths in ticks of `clock()`
    pub timing: TimingSpec,
    /// Block in `write_buffer` until the frame is out
    pub wait_until_done: bool,
    /// Hold a critical section for the duration of the write
    pub interrupt_free: bool,
}

impl ChannelConfig {
    /// WS2812B preset: 100 ns ticks, one memory block, blocking writes
    pub const fn ws2812(channel: ChannelId, pin: u8) -> Self {
        Self {
            channel,
            pin,
            clock_divisor: DEFAULT_CLOCK_DIVISOR,
            mem_blocks: 1,
            idle_level: IdleLevel::Low,
            timing: TimingSpec::WS2812B,
            wait_until_done: true,
            interrupt_free: false,
        }
    }

    pub const fn with_timing(mut self, timing: TimingSpec) -> Self {
        self.timing = timing;
        self
    }

    pub const fn with_clock_divisor(mut self, clock_divisor: u8) -> Self {
        self.clock_divisor = clock_divisor;
        self
    }

    pub const fn with_mem_blocks(mut self, mem_blocks: u8) -> Self {
        self.mem_blocks = mem_blocks;
        self
    }

    pub const fn with_idle_level(mut self, idle_level: IdleLevel) -> Self {
        self.idle_level = idle_level;
        self
    }

    pub const fn with_wait_until_done(mut self, wait_until_done: bool) -> Self {
        self.wait_until_done = wait_until_done;
        self
    }

    pub const fn with_interrupt_free(mut self, interrupt_free: bool) -> Self {
        self.interrupt_free = interrupt_free;
        self
    }

    /// Tick clock the timing is expressed in
    pub const fn clock(&self) -> TickClock {
        TickClock::new(BASE_CLOCK_HZ, self.clock_divisor)
    }

    /// Check the configuration before any hardware is touched
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.clock_divisor == 0 {
            return Err("clock divisor must be non-zero");
        }
        if self.mem_blocks == 0 {
            return Err("at least one memory block is required");
        }
        self.timing.validate(self.clock())
    }
}

/// Hardware able to emit `(high, low)` pulse sequences at a fixed tick
///
/// A channel must be configured, installed and given a translator before
/// [`write_buffer`](Self::write_buffer) is called. Implementations refuse to
/// install a channel that is already installed.
pub trait PulseGenerator {
    type Error: core::fmt::Debug;

    /// Apply pin, divisor, memory and idle settings to a channel
    fn configure(&mut self, config: &ChannelConfig) -> Result<(), Self::Error>;

    /// Claim the channel
    fn install_driver(&mut self, channel: ChannelId) -> Result<(), Self::Error>;

    /// Release the channel
    fn uninstall_driver(&mut self, channel: ChannelId) -> Result<(), Self::Error>;

    /// Set the byte to pulse hook used while streaming the channel
    fn register_translator<T>(&mut self, channel: ChannelId, translator: T) -> Result<(), Self::Error>
    where
        T: Translator + 'static;

    /// Stream `bytes` out of the channel
    fn write_buffer(
        &mut self,
        channel: ChannelId,
        bytes: &[u8],
        wait_until_done: bool,
    ) -> Result<(), Self::Error>;
}
