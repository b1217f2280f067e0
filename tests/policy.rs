mod tests {
    use myrtio_light_sense::{Channel, ChannelSet, ConfigError, ThresholdPolicy};

    fn red() -> ChannelSet {
        ChannelSet::from(Channel::Red)
    }

    fn red_yellow() -> ChannelSet {
        ChannelSet::from([Channel::Red, Channel::Yellow])
    }

    #[test]
    fn test_default_bands() {
        let policy = ThresholdPolicy::default();
        assert_eq!(policy.outputs_for(0), red());
        assert_eq!(policy.outputs_for(499), red());
        assert_eq!(policy.outputs_for(500), red_yellow());
        assert_eq!(policy.outputs_for(999), red_yellow());
        assert_eq!(policy.outputs_for(1000), ChannelSet::ALL);
        assert_eq!(policy.outputs_for(10_000), ChannelSet::ALL);
    }

    #[test]
    fn test_off_set_is_complement() {
        let policy = ThresholdPolicy::default();
        assert_eq!(
            policy.outputs_for(499).complement(),
            ChannelSet::from([Channel::Yellow, Channel::Green])
        );
        assert_eq!(
            policy.outputs_for(500).complement(),
            ChannelSet::from(Channel::Green)
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = ThresholdPolicy::new(ChannelSet::NONE)
            .with_band(100, Channel::Green)
            .unwrap();
        assert_eq!(policy.outputs_for(99), ChannelSet::from(Channel::Green));
        assert_eq!(policy.outputs_for(100), ChannelSet::NONE);
        assert_eq!(policy.bands().len(), 1);
    }

    #[test]
    fn test_bands_must_ascend() {
        let mut policy = ThresholdPolicy::new(ChannelSet::ALL);
        policy.push_band(500, Channel::Red).unwrap();
        assert_eq!(
            policy.push_band(500, Channel::Yellow),
            Err(ConfigError::BandsNotAscending {
                previous: 500,
                next: 500
            })
        );
        assert_eq!(policy.bands().len(), 1);
    }

    #[test]
    fn test_capacity() {
        let mut policy = ThresholdPolicy::new(ChannelSet::ALL);
        for below in 1..=8 {
            policy.push_band(below * 10, Channel::Red).unwrap();
        }
        assert_eq!(
            policy.push_band(1000, Channel::Red),
            Err(ConfigError::TooManyBands)
        );
    }
}
