use heapless::Vec;

use crate::error::ConfigError;
use crate::output::{Channel, ChannelSet};

/// Maximum number of bands a policy can hold
pub const MAX_BANDS: usize = 8;

/// Readings below `below` light the `on` channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub below: u32,
    pub on: ChannelSet,
}

/// Maps a filtered reading to the set of lit indicators
///
/// Bands are checked in ascending order. Readings past the last band light
/// the fallback set. Darker rooms light more indicators by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdPolicy {
    bands: Vec<Band, MAX_BANDS>,
    fallback: ChannelSet,
}

impl ThresholdPolicy {
    /// Empty policy that always lights `fallback`
    pub const fn new(fallback: ChannelSet) -> Self {
        Self {
            bands: Vec::new(),
            fallback,
        }
    }

    /// Append a band above every existing one
    pub fn push_band(&mut self, below: u32, on: impl Into<ChannelSet>) -> Result<(), ConfigError> {
        if let Some(last) = self.bands.last() {
            if below <= last.below {
                return Err(ConfigError::BandsNotAscending {
                    previous: last.below,
                    next: below,
                });
            }
        }
        self.bands
            .push(Band {
                below,
                on: on.into(),
            })
            .map_err(|_| ConfigError::TooManyBands)
    }

    /// Builder form of [`Self::push_band`]
    pub fn with_band(mut self, below: u32, on: impl Into<ChannelSet>) -> Result<Self, ConfigError> {
        self.push_band(below, on)?;
        Ok(self)
    }

    /// Channels to light for a reading
    pub fn outputs_for(&self, reading: u32) -> ChannelSet {
        self.bands
            .iter()
            .find(|band| reading < band.below)
            .map_or(self.fallback, |band| band.on)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub const fn fallback(&self) -> ChannelSet {
        self.fallback
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        let mut bands = Vec::new();
        // Capacity is far above two, the pushes cannot fail.
        let _ = bands.push(Band {
            below: 500,
            on: ChannelSet::from(Channel::Red),
        });
        let _ = bands.push(Band {
            below: 1000,
            on: ChannelSet::from([Channel::Red, Channel::Yellow]),
        });
        Self {
            bands,
            fallback: ChannelSet::ALL,
        }
    }
}
