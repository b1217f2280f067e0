//! Indicator outputs
//!
//! Tracks the logical state of each indicator so that the hardware is only
//! written when a channel actually changes.

use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PinIo;
use crate::error::SetupError;
use crate::pin::{Direction, Level, Pin};

mod channel;

pub use channel::{Channel, ChannelSet, Channels};

/// Pin mapping for the indicator channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPins {
    pub red: Pin,
    pub yellow: Pin,
    pub green: Pin,
}

impl OutputPins {
    /// Pin wired to the given channel
    pub const fn pin(&self, channel: Channel) -> Pin {
        match channel {
            Channel::Red => self.red,
            Channel::Yellow => self.yellow,
            Channel::Green => self.green,
        }
    }
}

impl Default for OutputPins {
    fn default() -> Self {
        Self {
            red: Pin(11),
            yellow: Pin(12),
            green: Pin(13),
        }
    }
}

/// Output controller - owns the indicator pins
///
/// The cached state of every channel always equals the last level written
/// to its pin. Pins are released when the controller is dropped.
pub struct OutputController<P: PinIo> {
    io: P,
    pins: OutputPins,
    lit: ChannelSet,
    released: bool,
}

impl<P: PinIo> OutputController<P> {
    /// Claim the indicator pins and drive them all low
    ///
    /// If any pin cannot be claimed, everything claimed so far is released
    /// before the error is returned.
    pub fn new(mut io: P, pins: OutputPins) -> Result<Self, SetupError<P::Error>> {
        for channel in Channel::ALL {
            let pin = pins.pin(channel);
            if let Err(source) = io.claim(pin, Direction::Output) {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[OutputController.new] cannot claim {} for {}: {:?}",
                    pin,
                    channel.as_str(),
                    source
                );
                if let Err(_err) = io.release_all() {
                    #[cfg(feature = "esp32-log")]
                    println!("[OutputController.new] release failed: {:?}", _err);
                }
                return Err(SetupError::Claim { pin, source });
            }
        }

        // Prior hardware state is unknown, so every pin gets an explicit low.
        for channel in Channel::ALL {
            io.write(pins.pin(channel), Level::Low);
        }

        Ok(Self {
            io,
            pins,
            lit: ChannelSet::NONE,
            released: false,
        })
    }

    /// Turn a channel on
    pub fn set(&mut self, channel: Channel) {
        if self.lit.contains(channel) {
            return;
        }
        self.io.write(self.pins.pin(channel), Level::High);
        self.lit.insert(channel);
    }

    /// Turn a channel off
    pub fn clear(&mut self, channel: Channel) {
        if !self.lit.contains(channel) {
            return;
        }
        self.io.write(self.pins.pin(channel), Level::Low);
        self.lit.remove(channel);
    }

    pub fn set_all(&mut self) {
        for channel in Channel::ALL {
            self.set(channel);
        }
    }

    pub fn clear_all(&mut self) {
        for channel in Channel::ALL {
            self.clear(channel);
        }
    }

    /// Turn `on` channels on, then `off` channels off
    ///
    /// A channel present in both sets ends up off.
    pub fn toggle(&mut self, on: impl Into<ChannelSet>, off: impl Into<ChannelSet>) {
        let (on, off): (ChannelSet, ChannelSet) = (on.into(), off.into());
        for channel in on {
            self.set(channel);
        }
        for channel in off {
            self.clear(channel);
        }
    }

    /// Flash channels once, blocking for the whole cycle
    ///
    /// `off` defaults to the `on` duration.
    pub fn blink(&mut self, channels: impl Into<ChannelSet>, on: Duration, off: Option<Duration>) {
        let channels: ChannelSet = channels.into();
        for channel in channels {
            self.set(channel);
        }
        block_for(on);
        for channel in channels {
            self.clear(channel);
        }
        block_for(off.unwrap_or(on));
    }

    pub const fn is_on(&self, channel: Channel) -> bool {
        self.lit.contains(channel)
    }

    /// Channels currently on
    pub const fn lit(&self) -> ChannelSet {
        self.lit
    }

    pub const fn pins(&self) -> &OutputPins {
        &self.pins
    }

    /// Get a reference to the pin provider.
    pub const fn io(&self) -> &P {
        &self.io
    }

    /// Release the pins now and report the outcome
    ///
    /// Dropping the controller does the same but swallows the error.
    pub fn release(mut self) -> Result<(), P::Error> {
        self.released = true;
        self.io.release_all()
    }
}

impl<P: PinIo> Drop for OutputController<P> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(_err) = self.io.release_all() {
            #[cfg(feature = "esp32-log")]
            println!("[OutputController.drop] release failed: {:?}", _err);
        }
    }
}
