//! Control loop tying the light sensor to the indicators.
//!
//! Each cycle takes one filtered sample and lights the channels the
//! threshold policy picks for it, turning every other channel off.
//! Stop requests are only checked between cycles.

use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PinIo;
use crate::output::OutputController;
use crate::policy::ThresholdPolicy;
use crate::sensor::LightSensor;
use crate::stop::StopSignal;

/// Default lamp-test duration
pub const DEFAULT_STARTUP_HOLD: Duration = Duration::from_secs(1);

/// Configuration for the control loop
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// How long every indicator stays lit on start
    pub startup_hold: Duration,
    pub policy: ThresholdPolicy,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            startup_hold: DEFAULT_STARTUP_HOLD,
            policy: ThresholdPolicy::default(),
        }
    }
}

/// Sensor-to-indicator control loop
///
/// # Usage
///
/// ```ignore
/// static STOP: StopSignal = StopSignal::new();
///
/// // One provider per component: each releases only what it claimed
/// let sensor = LightSensor::new(sensor_gpio, &SensorConfig::default())?;
/// let outputs = OutputController::new(indicator_gpio, OutputPins::default())?;
/// let mut driver = Driver::new(sensor, outputs, DriverConfig::default());
///
/// // Raise STOP from the interrupt handler
/// driver.run(&STOP);
/// ```
pub struct Driver<S: PinIo, O: PinIo> {
    sensor: LightSensor<S>,
    outputs: OutputController<O>,
    startup_hold: Duration,
    policy: ThresholdPolicy,
}

impl<S: PinIo, O: PinIo> Driver<S, O> {
    pub fn new(sensor: LightSensor<S>, outputs: OutputController<O>, config: DriverConfig) -> Self {
        Self {
            sensor,
            outputs,
            startup_hold: config.startup_hold,
            policy: config.policy,
        }
    }

    /// Light every indicator and hold for the startup duration
    pub fn start(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[Driver.start] lamp test for {:?}", self.startup_hold);
        self.outputs.set_all();
        block_for(self.startup_hold);
    }

    /// Run one sample-and-act cycle
    ///
    /// Returns the filtered reading.
    pub fn step(&mut self) -> u32 {
        let reading = self.sensor.sample();
        let on = self.policy.outputs_for(reading);
        #[cfg(feature = "esp32-log")]
        println!("[Driver.step] reading {} lights {:?}", reading, on);
        self.outputs.toggle(on, on.complement());
        reading
    }

    /// Run [`Self::start`], then cycle until `stop` is requested
    ///
    /// Returns the number of cycles run.
    pub fn run(&mut self, stop: &StopSignal) -> usize {
        self.start();
        let mut cycles = 0;
        while !stop.is_requested() {
            self.step();
            cycles += 1;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Driver.run] stopped after {} cycles", cycles);
        cycles
    }

    pub const fn sensor(&self) -> &LightSensor<S> {
        &self.sensor
    }

    pub const fn outputs(&self) -> &OutputController<O> {
        &self.outputs
    }

    pub const fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// Hand the components back
    pub fn into_parts(self) -> (LightSensor<S>, OutputController<O>) {
        (self.sensor, self.outputs)
    }
}
