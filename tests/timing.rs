mod tests {
    use embassy_time::Duration;
    use myrtio_neopixel::timing::{BASE_CLOCK_HZ, MAX_PULSE_TICKS, TickClock};
    use myrtio_neopixel::{ChannelConfig, TimingSpec};

    const CLOCK: TickClock = TickClock::new(BASE_CLOCK_HZ, 8);

    #[test]
    fn test_tick_clock() {
        assert_eq!(CLOCK.period_ps(), 100_000);
        assert_eq!(CLOCK.ticks_to_ns(9), 900);
        assert_eq!(CLOCK.ns_to_ticks(350), 4);
        assert_eq!(CLOCK.ns_to_ticks(340), 3);
        assert_eq!(TickClock::new(0, 8).ns_to_ticks(400), 0);
        assert_eq!(TickClock::new(BASE_CLOCK_HZ, 0).ns_to_ticks(400), 0);
    }

    #[test]
    fn test_fractional_tick_period() {
        // 12.5 ns ticks
        let fast = TickClock::new(BASE_CLOCK_HZ, 1);
        assert_eq!(fast.period_ps(), 12_500);
        assert_eq!(fast.ticks_to_ns(80), 1000);
        assert_eq!(fast.ticks_to_ns(1), 13);
        assert_eq!(fast.ns_to_ticks(400), 32);
        assert_eq!(fast.ns_to_ticks(1000), 80);

        // 37.5 ns ticks
        let odd = TickClock::new(BASE_CLOCK_HZ, 3);
        assert_eq!(odd.ticks_to_ns(2), 75);
        assert_eq!(odd.ticks_to_ns(8), 300);
        assert_eq!(odd.ns_to_ticks(300), 8);

        let timing =
            TimingSpec::from_nanos(fast, (400, 850), (800, 450), Duration::from_micros(60))
                .unwrap();
        assert_eq!(timing.pulse_ticks(false), (32, 68));
        assert_eq!(timing.pulse_ticks(true), (64, 36));
        assert_eq!(timing.as_nanos(fast), [400, 850, 800, 450]);
        assert_eq!(timing.bit_period_ns(fast, false), 1250);
        assert_eq!(timing.validate(fast), Ok(()));
    }

    #[test]
    fn test_ws2812b_timing() {
        let timing = TimingSpec::WS2812B;
        assert_eq!(timing.as_nanos(CLOCK), [400, 900, 800, 500]);
        assert_eq!(timing.bit_period_ns(CLOCK, false), 1300);
        assert_eq!(timing.bit_period_ns(CLOCK, true), 1300);
        assert_eq!(timing.reset, Duration::from_micros(60));
        assert_eq!(timing.validate(CLOCK), Ok(()));
    }

    #[test]
    fn test_from_nanos() {
        // Board timings: T1 = (900, 350), T0 = (350, 900), reset 60 us
        let timing =
            TimingSpec::from_nanos(CLOCK, (350, 900), (900, 350), Duration::from_micros(60))
                .unwrap();
        assert_eq!(timing.pulse_ticks(false), (4, 9));
        assert_eq!(timing.pulse_ticks(true), (9, 4));
        assert_eq!(timing.validate(CLOCK), Ok(()));

        let too_wide = TimingSpec::from_nanos(
            TickClock::new(BASE_CLOCK_HZ, 1),
            (1_000_000, 900),
            (900, 350),
            Duration::from_micros(60),
        );
        assert_eq!(too_wide, None);
    }

    #[test]
    fn test_validate_rejects_bad_timing() {
        let zero = TimingSpec {
            t0h: 0,
            ..TimingSpec::WS2812B
        };
        assert!(zero.validate(CLOCK).is_err());

        let wide = TimingSpec {
            t1l: MAX_PULSE_TICKS + 1,
            ..TimingSpec::WS2812B
        };
        assert!(wide.validate(CLOCK).is_err());

        let same = TimingSpec {
            t1h: 4,
            t1l: 9,
            ..TimingSpec::WS2812B
        };
        assert!(same.validate(CLOCK).is_err());

        // Right ticks, wrong divisor: 4x longer than nominal
        assert!(TimingSpec::WS2812B.validate(TickClock::new(BASE_CLOCK_HZ, 32)).is_err());
    }

    #[test]
    fn test_channel_config_validate() {
        let config = ChannelConfig::ws2812(0, 18);
        assert_eq!(config.validate(), Ok(()));
        assert!(config.with_clock_divisor(0).validate().is_err());
        assert!(config.with_mem_blocks(0).validate().is_err());
        assert!(config.with_clock_divisor(16).validate().is_err());
    }
}
