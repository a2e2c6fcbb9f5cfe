//! Pixel chain driver
//!
//! Owns the pixel buffer and one pulse generator channel. Every mutating
//! call runs to completion before returning; with `update` set, the whole
//! chain is re-sent, not just the LEDs that changed.

use core::fmt::{self, Write as _};

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::String;
use smart_leds::SmartLedsWrite;

use crate::buffer::PixelBuffer;
use crate::color::{Rgb, hsb_to_rgb, rgb_from_u32};
use crate::encoder::BitEncoder;
use crate::error::{Error, Result};
use crate::hardware::{ChannelConfig, PulseGenerator};

/// Capacity of the text returned by [`NeoPixel::describe`]
pub const DESCRIPTION_CAPACITY: usize = 160;

/// Lifecycle of a driver instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Channel installed, frames can be sent
    Active,
    /// Channel given back to the generator
    Released,
}

/// WS2812 chain of `LED_COUNT` LEDs on one generator channel
pub struct NeoPixel<G: PulseGenerator, const LED_COUNT: usize> {
    generator: G,
    config: ChannelConfig,
    pixels: PixelBuffer<LED_COUNT>,
    state: DriverState,
}

impl<G: PulseGenerator, const LED_COUNT: usize> NeoPixel<G, LED_COUNT> {
    /// Bring up the channel and return an active driver
    ///
    /// Configures the channel, installs it and registers a [`BitEncoder`]
    /// built from `config.timing`. If any step fails the channel is left
    /// uninstalled and no driver is returned.
    pub fn construct(mut generator: G, config: ChannelConfig) -> Result<Self, G::Error> {
        config.validate().map_err(Error::InvalidConfig)?;

        generator.configure(&config).map_err(Error::Configure)?;
        generator
            .install_driver(config.channel)
            .map_err(Error::Install)?;

        let encoder = BitEncoder::new(&config.timing);
        if let Err(e) = generator.register_translator(config.channel, encoder) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[NeoPixel.construct] translator registration failed on channel {}: {:?}",
                config.channel, e
            );
            // The translator error is the one reported to the caller
            if let Err(_rollback) = generator.uninstall_driver(config.channel) {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[NeoPixel.construct] rollback uninstall failed on channel {}: {:?}",
                    config.channel, _rollback
                );
            }
            return Err(Error::Translator(e));
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[NeoPixel.construct] channel {} pin {} with {} LEDs",
            config.channel, config.pin, LED_COUNT
        );

        Ok(Self {
            generator,
            config,
            pixels: PixelBuffer::new(),
            state: DriverState::Active,
        })
    }

    /// Give the channel back to the generator
    ///
    /// Releasing an already released driver does nothing.
    pub fn release(&mut self) -> Result<(), G::Error> {
        if self.state == DriverState::Released {
            return Ok(());
        }
        self.generator
            .uninstall_driver(self.config.channel)
            .map_err(Error::Uninstall)?;
        self.state = DriverState::Released;

        #[cfg(feature = "esp32-log")]
        println!("[NeoPixel.release] channel {} released", self.config.channel);
        Ok(())
    }

    /// Set `count` LEDs starting at 1-based `pos` to an RGB color
    ///
    /// Out-of-range positions are clamped and the run is cut at the end of
    /// the chain. With `update`, the full buffer is sent before returning.
    pub fn set(
        &mut self,
        pos: i32,
        red: u8,
        green: u8,
        blue: u8,
        count: u32,
        update: bool,
    ) -> Result<(), G::Error> {
        self.set_color(pos, Rgb::new(red, green, blue), count, update)
    }

    /// Same as [`set`](Self::set) with the color given as HSB
    pub fn set_hsb(
        &mut self,
        pos: i32,
        hue: f32,
        saturation: f32,
        brightness: f32,
        count: u32,
        update: bool,
    ) -> Result<(), G::Error> {
        self.set_color(pos, hsb_to_rgb(hue, saturation, brightness), count, update)
    }

    /// Same as [`set`](Self::set) with the color packed as `0xRRGGBB`
    pub fn set_packed(&mut self, pos: i32, color: u32, count: u32, update: bool) -> Result<(), G::Error> {
        self.set_color(pos, rgb_from_u32(color), count, update)
    }

    /// Same as [`set`](Self::set) with an [`Rgb`] color
    pub fn set_color(&mut self, pos: i32, color: Rgb, count: u32, update: bool) -> Result<(), G::Error> {
        self.ensure_active()?;
        self.pixels.set(pos, count, color);
        self.update(update)
    }

    /// Set every LED to `color`
    pub fn fill(&mut self, color: Rgb, update: bool) -> Result<(), G::Error> {
        self.ensure_active()?;
        self.pixels.fill(color);
        self.update(update)
    }

    /// Turn every LED off
    pub fn clear(&mut self, update: bool) -> Result<(), G::Error> {
        self.ensure_active()?;
        self.pixels.clear();
        self.update(update)
    }

    /// Color stored for a 1-based (clamped) position
    pub fn get(&self, pos: i32) -> Rgb {
        self.pixels.get(pos)
    }

    /// Send the whole buffer to the chain
    pub fn show(&mut self) -> Result<(), G::Error> {
        self.ensure_active()?;
        self.transmit()
    }

    /// Human readable summary: pin, LED count and timings in nanoseconds
    pub fn describe(&self) -> String<DESCRIPTION_CAPACITY> {
        let mut text = String::new();
        // The longest possible summary fits the capacity
        let _ = write!(text, "{}", self);
        text
    }

    pub const fn config(&self) -> &ChannelConfig {
        &self.config
    }

    pub const fn buffer(&self) -> &PixelBuffer<LED_COUNT> {
        &self.pixels
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    pub const fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == DriverState::Active
    }

    pub const fn led_count(&self) -> usize {
        LED_COUNT
    }

    fn ensure_active(&self) -> Result<(), G::Error> {
        match self.state {
            DriverState::Active => Ok(()),
            DriverState::Released => Err(Error::Released),
        }
    }

    fn update(&mut self, update: bool) -> Result<(), G::Error> {
        if update { self.transmit() } else { Ok(()) }
    }

    /// Hand the full buffer to the generator
    fn transmit(&mut self) -> Result<(), G::Error> {
        let channel = self.config.channel;
        let wait = self.config.wait_until_done;
        let bytes = self.pixels.as_bytes();

        let result = if self.config.interrupt_free {
            critical_section::with(|_| self.generator.write_buffer(channel, bytes, wait))
        } else {
            self.generator.write_buffer(channel, bytes, wait)
        };

        result.map_err(|e| {
            #[cfg(feature = "esp32-log")]
            println!("[NeoPixel.transmit] channel {} write failed: {:?}", channel, e);
            Error::Transmit(e)
        })
    }
}

impl<G: PulseGenerator, const LED_COUNT: usize> fmt::Display for NeoPixel<G, LED_COUNT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t0h, t0l, t1h, t1l] = self.config.timing.as_nanos(self.config.clock());
        write!(
            f,
            "NeoPixel(pin={}, leds={}, t0h={}ns, t0l={}ns, t1h={}ns, t1l={}ns, reset={}us)",
            self.config.pin,
            LED_COUNT,
            t0h,
            t0l,
            t1h,
            t1l,
            self.config.timing.reset.as_micros()
        )
    }
}

impl<G: PulseGenerator, const LED_COUNT: usize> SmartLedsWrite for NeoPixel<G, LED_COUNT> {
    type Error = Error<G::Error>;
    type Color = Rgb;

    /// Store colors from the first LED onward, then send the frame
    fn write<T, I>(&mut self, iterator: T) -> core::result::Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.ensure_active()?;
        self.pixels.write_colors(iterator);
        self.transmit()
    }
}

impl<G: PulseGenerator, const LED_COUNT: usize> Drop for NeoPixel<G, LED_COUNT> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
