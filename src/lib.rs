#![no_std]

pub mod bounds;
pub mod buffer;
pub mod color;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod hardware;
pub mod timing;
pub mod wire;

pub use bounds::{PixelRun, clamp_position};
pub use buffer::PixelBuffer;
pub use driver::{DriverState, NeoPixel};
pub use encoder::{BitEncoder, PulsePair, Translated, Translator};
pub use error::{Error, Result};
pub use hardware::{ChannelConfig, ChannelId, IdleLevel, PulseGenerator};
pub use timing::{TickClock, TimingSpec};
pub use wire::reverse_bit_order;

pub use color::{Hsb, Rgb, hsb_to_rgb};
pub use embassy_time::Duration;
pub use smart_leds::SmartLedsWrite;
