//! RC charge-time light sensor
//!
//! The sensing pin is tied to a capacitor that charges through a photodiode.
//! Each sample discharges the capacitor, releases the pin and counts polling
//! iterations until the pin reads high. More light charges the capacitor
//! faster, so higher counts mean darker surroundings.

use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PinIo;
use crate::error::SetupError;
use crate::pin::{Direction, Level, Pin};

mod filter;

pub use filter::{FilterCoefficients, SmoothingFilter};

/// Default bound on polling iterations per sample
pub const DEFAULT_MAX_READING: u32 = 10_000;

/// Default capacitor discharge time
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

/// Configuration for the light sensor
#[derive(Debug, Clone)]
pub struct SensorConfig {
    /// Pin wired to the capacitor and photodiode
    pub pin: Pin,
    /// Upper bound on polling iterations, returned when saturated
    pub max_reading: u32,
    /// Smoothing weights
    pub filter: FilterCoefficients,
    /// Discharge time before each sample
    pub settle: Duration,
    /// Fixed pause per polling iteration.
    ///
    /// `None` polls in a tight loop, so one count is whatever a pin read
    /// costs on the running hardware.
    pub poll_interval: Option<Duration>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            pin: Pin(16),
            max_reading: DEFAULT_MAX_READING,
            filter: FilterCoefficients::default(),
            settle: DEFAULT_SETTLE,
            poll_interval: None,
        }
    }
}

/// Result of one sensing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Unfiltered charge-time count
    pub raw: u32,
    /// Smoothed value, also stored for the next cycle
    pub filtered: u32,
    /// The pin never went high within `max_reading` iterations
    pub saturated: bool,
}

/// Light sensor - owns the sensing pin and the smoothing state
pub struct LightSensor<P: PinIo> {
    io: P,
    pin: Pin,
    max_reading: u32,
    settle: Duration,
    poll_interval: Option<Duration>,
    filter: SmoothingFilter,
    released: bool,
}

impl<P: PinIo> LightSensor<P> {
    /// Claim the sensing pin
    pub fn new(mut io: P, config: &SensorConfig) -> Result<Self, SetupError<P::Error>> {
        if let Err(source) = io.claim(config.pin, Direction::Output) {
            #[cfg(feature = "esp32-log")]
            println!("[LightSensor.new] cannot claim {}: {:?}", config.pin, source);
            if let Err(_err) = io.release_all() {
                #[cfg(feature = "esp32-log")]
                println!("[LightSensor.new] release failed: {:?}", _err);
            }
            return Err(SetupError::Claim {
                pin: config.pin,
                source,
            });
        }

        Ok(Self {
            io,
            pin: config.pin,
            max_reading: config.max_reading,
            settle: config.settle,
            poll_interval: config.poll_interval,
            filter: SmoothingFilter::new(config.filter),
            released: false,
        })
    }

    /// Take one filtered brightness sample
    ///
    /// Higher values mean less light. Never exceeds `max_reading`.
    pub fn sample(&mut self) -> u32 {
        self.measure().filtered
    }

    /// Take one sample and report both the raw and the filtered value
    pub fn measure(&mut self) -> Reading {
        let raw = self.charge_time();
        let saturated = raw >= self.max_reading;
        // Both inputs are bounded, the clamp only absorbs float rounding.
        let filtered = self.filter.apply(raw).min(self.max_reading);

        #[cfg(feature = "esp32-log")]
        if saturated {
            println!("[LightSensor.measure] saturated at {}", raw);
        }
        #[cfg(feature = "esp32-log")]
        println!("[LightSensor.measure] raw {} filtered {}", raw, filtered);

        Reading {
            raw,
            filtered,
            saturated,
        }
    }

    /// Discharge the capacitor and count polls until the pin reads high
    fn charge_time(&mut self) -> u32 {
        self.io.set_direction(self.pin, Direction::Output);
        self.io.write(self.pin, Level::Low);
        block_for(self.settle);

        self.io.set_direction(self.pin, Direction::Input);
        let mut count = 0;
        while count < self.max_reading && self.io.read(self.pin) == Level::Low {
            count += 1;
            if let Some(interval) = self.poll_interval {
                block_for(interval);
            }
        }
        count
    }

    /// Last filtered value
    pub const fn previous_reading(&self) -> Option<u32> {
        self.filter.previous()
    }

    pub const fn max_reading(&self) -> u32 {
        self.max_reading
    }

    pub const fn pin(&self) -> Pin {
        self.pin
    }

    /// Get a reference to the pin provider.
    pub const fn io(&self) -> &P {
        &self.io
    }

    /// Release the sensing pin now and report the outcome
    pub fn release(mut self) -> Result<(), P::Error> {
        self.released = true;
        self.io.release_all()
    }
}

impl<P: PinIo> Drop for LightSensor<P> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(_err) = self.io.release_all() {
            #[cfg(feature = "esp32-log")]
            println!("[LightSensor.drop] release failed: {:?}", _err);
        }
    }
}
