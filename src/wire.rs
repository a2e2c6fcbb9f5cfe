//! Wire format of a single pixel
//!
//! The chain expects green, red, blue, each MSB first. Bytes are kept
//! bit-reversed in memory because the translator walks bits LSB first.

use crate::color::Rgb;

/// Bytes one pixel occupies in the transmit buffer
pub const BYTES_PER_PIXEL: usize = 3;

/// Reverse the bit order of a byte (bit 0 <-> bit 7, bit 1 <-> bit 6, ...)
#[inline]
pub const fn reverse_bit_order(value: u8) -> u8 {
    value.reverse_bits()
}

/// Encode a color into its buffer bytes: `[rev(G), rev(R), rev(B)]`
pub const fn encode_pixel(color: Rgb) -> [u8; BYTES_PER_PIXEL] {
    [
        reverse_bit_order(color.g),
        reverse_bit_order(color.r),
        reverse_bit_order(color.b),
    ]
}

/// Recover the color stored by [`encode_pixel`]
pub const fn decode_pixel(bytes: [u8; BYTES_PER_PIXEL]) -> Rgb {
    Rgb {
        r: reverse_bit_order(bytes[1]),
        g: reverse_bit_order(bytes[0]),
        b: reverse_bit_order(bytes[2]),
    }
}
