const CHANNEL_NAME_RED: &str = "red";
const CHANNEL_NAME_YELLOW: &str = "yellow";
const CHANNEL_NAME_GREEN: &str = "green";

/// Named indicator output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Channel {
    Red = 0,
    Yellow = 1,
    Green = 2,
}

impl Channel {
    /// Every channel, in pin order
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Green];

    /// Number of channels
    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => CHANNEL_NAME_RED,
            Self::Yellow => CHANNEL_NAME_YELLOW,
            Self::Green => CHANNEL_NAME_GREEN,
        }
    }

    pub fn parse_from_str(name: &str) -> Option<Self> {
        match name {
            CHANNEL_NAME_RED => Some(Self::Red),
            CHANNEL_NAME_YELLOW => Some(Self::Yellow),
            CHANNEL_NAME_GREEN => Some(Self::Green),
            _ => None,
        }
    }
}

/// Small copyable set of channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ChannelSet(u8);

impl ChannelSet {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(
        Channel::Red.bit() | Channel::Yellow.bit() | Channel::Green.bit(),
    );

    pub const fn new() -> Self {
        Self::NONE
    }

    /// Set with one more channel
    pub const fn with(self, channel: Channel) -> Self {
        Self(self.0 | channel.bit())
    }

    /// Set without the given channel
    pub const fn without(self, channel: Channel) -> Self {
        Self(self.0 & !channel.bit())
    }

    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & channel.bit() != 0
    }

    /// Channels not in this set
    pub const fn complement(self) -> Self {
        Self(Self::ALL.0 & !self.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn insert(&mut self, channel: Channel) {
        *self = self.with(channel);
    }

    pub fn remove(&mut self, channel: Channel) {
        *self = self.without(channel);
    }

    /// Iterate channels in pin order
    pub fn iter(self) -> Channels {
        self.into_iter()
    }
}

impl From<Channel> for ChannelSet {
    fn from(channel: Channel) -> Self {
        Self::NONE.with(channel)
    }
}

impl From<&[Channel]> for ChannelSet {
    fn from(channels: &[Channel]) -> Self {
        channels.iter().copied().collect()
    }
}

impl<const N: usize> From<[Channel; N]> for ChannelSet {
    fn from(channels: [Channel; N]) -> Self {
        channels.into_iter().collect()
    }
}

impl FromIterator<Channel> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl IntoIterator for ChannelSet {
    type Item = Channel;
    type IntoIter = Channels;

    fn into_iter(self) -> Self::IntoIter {
        Channels { set: self, next: 0 }
    }
}

/// Iterator over the channels of a [`ChannelSet`], in pin order
#[derive(Debug, Clone)]
pub struct Channels {
    set: ChannelSet,
    next: usize,
}

impl Iterator for Channels {
    type Item = Channel;

    fn next(&mut self) -> Option<Channel> {
        while let Some(channel) = Channel::ALL.get(self.next).copied() {
            self.next += 1;
            if self.set.contains(channel) {
                return Some(channel);
            }
        }
        None
    }
}
