//! Hue / saturation / brightness to RGB conversion
//!
//! Floating point on purpose: callers work in degrees and fractions, and
//! channels are truncated (not rounded) to match what scripts already expect.

use crate::color::Rgb;

const FULL_TURN_DEGREES: f32 = 360.0;
const SECTOR_DEGREES: f32 = 60.0;
const CHANNEL_MAX: f32 = 255.0;

/// HSB color, hue in degrees, saturation and brightness in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsb_to_rgb(self.hue, self.saturation, self.brightness)
    }
}

impl From<Hsb> for Rgb {
    fn from(value: Hsb) -> Self {
        value.to_rgb()
    }
}

/// Wrap hue into `[0, 360)`, negative hues included
fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let mut wrapped = libm::fmodf(hue, FULL_TURN_DEGREES);
    if wrapped < 0.0 {
        wrapped += FULL_TURN_DEGREES;
    }
    // -1e-6 + 360.0 rounds up to 360.0
    if wrapped >= FULL_TURN_DEGREES {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a fraction into `[0, 1]`, NaN becomes 0
fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    (value * CHANNEL_MAX) as u8
}

/// Convert HSB to 8-bit RGB
///
/// # Arguments
/// * `hue` - Degrees, wrapped modulo 360 (negative values wrap backwards)
/// * `saturation` - Clamped to `0.0..=1.0`
/// * `brightness` - Clamped to `0.0..=1.0`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Rgb {
    let value = unit(brightness);
    let saturation = unit(saturation);

    if saturation <= 0.0 {
        let level = to_channel(value);
        return Rgb {
            r: level,
            g: level,
            b: level,
        };
    }

    let sector = normalize_hue(hue) / SECTOR_DEGREES;
    let slice = libm::floorf(sector);
    let frac = sector - slice;

    let a = value * (1.0 - saturation);
    let b = value * (1.0 - saturation * frac);
    let c = value * (1.0 - saturation * (1.0 - frac));

    let (red, green, blue) = match slice as u8 {
        0 => (value, c, a),
        1 => (b, value, a),
        2 => (a, value, c),
        3 => (a, b, value),
        4 => (c, a, value),
        5 => (value, a, b),
        _ => (0.0, 0.0, 0.0),
    };

    Rgb {
        r: to_channel(red),
        g: to_channel(green),
        b: to_channel(blue),
    }
}
