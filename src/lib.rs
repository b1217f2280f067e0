#![no_std]

pub mod driver;
pub mod error;
pub mod output;
pub mod pin;
pub mod policy;
pub mod sensor;
pub mod stop;

pub use driver::{Driver, DriverConfig};
pub use error::{ConfigError, SetupError};
pub use output::{Channel, ChannelSet, OutputController, OutputPins};
pub use pin::{Direction, Level, Pin};
pub use policy::{Band, ThresholdPolicy};
pub use sensor::{FilterCoefficients, LightSensor, Reading, SensorConfig, SmoothingFilter};
pub use stop::StopSignal;

pub use embassy_time::Duration;

/// Abstract digital pin provider
///
/// Implement this trait to support different hardware platforms.
/// Both the output controller and the light sensor are generic over it,
/// and each owns its provider for its whole lifetime.
pub trait PinIo {
    /// Error reported while claiming or releasing pins
    type Error: core::fmt::Debug;

    /// Take ownership of a pin in the given direction
    fn claim(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error>;

    /// Switch a claimed pin between output and input mode
    fn set_direction(&mut self, pin: Pin, direction: Direction);

    /// Drive a pin in output mode
    fn write(&mut self, pin: Pin, level: Level);

    /// Sample a pin in input mode
    fn read(&mut self, pin: Pin) -> Level;

    /// Release every pin claimed through this provider.
    ///
    /// Must be idempotent, and must leave pins claimed through other
    /// provider instances untouched: every component calls this when it is
    /// dropped. On platforms whose cleanup is process-wide, each provider
    /// has to track and release its own claims.
    fn release_all(&mut self) -> Result<(), Self::Error>;
}

impl<T: PinIo + ?Sized> PinIo for &mut T {
    type Error = T::Error;

    fn claim(&mut self, pin: Pin, direction: Direction) -> Result<(), Self::Error> {
        (**self).claim(pin, direction)
    }

    fn set_direction(&mut self, pin: Pin, direction: Direction) {
        (**self).set_direction(pin, direction);
    }

    fn write(&mut self, pin: Pin, level: Level) {
        (**self).write(pin, level);
    }

    fn read(&mut self, pin: Pin) -> Level {
        (**self).read(pin)
    }

    fn release_all(&mut self) -> Result<(), Self::Error> {
        (**self).release_all()
    }
}
