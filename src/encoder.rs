//! Bit to pulse encoding
//!
//! The pulse generator does not understand colors, it asks a [`Translator`]
//! to turn raw buffer bytes into `(high, low)` pulse items while it streams.

use crate::timing::TimingSpec;

/// Number of pulse items one byte expands into
pub const PULSES_PER_BYTE: usize = 8;

/// One transmitted bit: line high for `high` ticks, then low for `low` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulsePair {
    pub high: u16,
    pub low: u16,
}

/// Progress of a single translation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translated {
    /// Source bytes consumed
    pub bytes: usize,
    /// Pulse items written to the destination
    pub items: usize,
}

impl Translated {
    /// Nothing was translated, nothing to send
    pub const fn is_empty(self) -> bool {
        self.items == 0
    }
}

/// Byte to pulse translation hook
///
/// Registered with the pulse generator when a channel is set up and called
/// from its refill path, so implementations must be cheap and never block.
pub trait Translator {
    /// Expand `source` into `dest`, writing at most `wanted` items
    ///
    /// Only whole bytes are translated. An empty source or a budget below
    /// one byte's worth of items yields [`Translated::default`].
    fn translate(&self, source: &[u8], dest: &mut [PulsePair], wanted: usize) -> Translated;
}

/// Maps logical bits to the pulse pairs of a [`TimingSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitEncoder {
    zero: PulsePair,
    one: PulsePair,
}

impl BitEncoder {
    pub const fn new(timing: &TimingSpec) -> Self {
        Self {
            zero: PulsePair {
                high: timing.t0h,
                low: timing.t0l,
            },
            one: PulsePair {
                high: timing.t1h,
                low: timing.t1l,
            },
        }
    }

    /// Pulse pair for a single bit
    #[inline]
    pub const fn encode(&self, bit: bool) -> PulsePair {
        if bit { self.one } else { self.zero }
    }

    /// Pulse pairs for a byte, least significant bit first
    ///
    /// Buffer bytes are stored bit-reversed, so LSB-first here puts the
    /// color's MSB on the wire first.
    pub const fn encode_byte(&self, byte: u8) -> [PulsePair; PULSES_PER_BYTE] {
        let mut pulses = [self.zero; PULSES_PER_BYTE];
        let mut bit = 0;
        while bit < PULSES_PER_BYTE {
            pulses[bit] = self.encode(byte & (1 << bit) != 0);
            bit += 1;
        }
        pulses
    }
}

impl Translator for BitEncoder {
    fn translate(&self, source: &[u8], dest: &mut [PulsePair], wanted: usize) -> Translated {
        let budget = wanted.min(dest.len());
        let bytes = source.len().min(budget / PULSES_PER_BYTE);

        for (byte, items) in source[..bytes]
            .iter()
            .zip(dest.chunks_exact_mut(PULSES_PER_BYTE))
        {
            items.copy_from_slice(&self.encode_byte(*byte));
        }

        Translated {
            bytes,
            items: bytes * PULSES_PER_BYTE,
        }
    }
}
