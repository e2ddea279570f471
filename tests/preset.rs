mod common;

mod tests {
    use embassy_time::Duration;
    use larson_scanner::{
        CLASSIC_SEQUENCE, ConfigError, LarsonScanner, NoDelay, Rgb, RunConfig, RunOutcome,
        ScannerError, SmartLedsOutput, StopSignal, StripDisplay, rgb_from_u32,
    };

    use super::common::{BLACK, FakeStrip, MockDevice, RecordingDelay, StoppingDelay};

    #[test]
    fn test_classic_sequence() {
        let widths: Vec<u8> = CLASSIC_SEQUENCE.iter().map(|run| run.width).collect();
        assert_eq!(widths, [4, 3, 2, 5, 6, 7, 8, 2]);
        assert_eq!(CLASSIC_SEQUENCE[1].color, rgb_from_u32(0xFF_00_FF));
        assert_eq!(CLASSIC_SEQUENCE[7].color, Rgb::new(255, 255, 255));
        for run in CLASSIC_SEQUENCE {
            assert_eq!(run.cycles, 3);
            assert_eq!(run.speed, Duration::from_millis(32));
            assert_eq!(run.validate(), Ok(()));
        }
    }

    #[test]
    fn test_play_classic_sequence() {
        let mut scanner: LarsonScanner<_, _, 8> =
            LarsonScanner::new(MockDevice::new(8), RecordingDelay::default()).unwrap();
        scanner.play(&CLASSIC_SEQUENCE).unwrap();

        let (device, delay) = scanner.into_parts();
        // two clears plus 8 runs of 3 cycles of 14 frames
        assert_eq!(device.show_count(), 2 + 8 * 3 * 14);
        assert_eq!(delay.waits.len(), 8 * 3 * 14);
        assert_eq!(device.frames.first().unwrap(), &vec![BLACK; 8]);
        assert_eq!(device.frames.last().unwrap(), &vec![BLACK; 8]);
    }

    #[test]
    fn test_play_validates_every_run_first() {
        let runs = [
            RunConfig::default(),
            RunConfig::default().with_width(0),
        ];
        let mut scanner: LarsonScanner<_, _, 8> =
            LarsonScanner::new(MockDevice::new(8), NoDelay).unwrap();

        assert_eq!(
            scanner.play(&runs),
            Err(ScannerError::InvalidConfiguration(ConfigError::ZeroWidth))
        );
        assert!(scanner.device().calls.is_empty());
    }

    #[test]
    fn test_play_until_stops() {
        let stop = StopSignal::new();
        let delay = StoppingDelay {
            stop: &stop,
            stop_after: 20,
            waits: 0,
        };
        let mut scanner: LarsonScanner<_, _, 8> =
            LarsonScanner::new(MockDevice::new(8), delay).unwrap();

        assert_eq!(
            scanner.play_until(&CLASSIC_SEQUENCE, &stop),
            Ok(RunOutcome::Stopped { steps: 20 })
        );
        // initial clear plus the frames before the stop
        assert_eq!(scanner.device().show_count(), 21);
    }

    #[test]
    fn test_play_on_smart_leds_strip() {
        let output = SmartLedsOutput::new(FakeStrip::default());
        let display: StripDisplay<_, 8> = StripDisplay::new(output, 8);
        let mut scanner: LarsonScanner<_, _, 8> = LarsonScanner::new(display, NoDelay).unwrap();

        let runs = [RunConfig::new(1, Duration::from_millis(0), 2, Rgb::new(255, 0, 0))];
        assert_eq!(
            scanner.play_until(&runs, &StopSignal::new()),
            Ok(RunOutcome::Completed { steps: 14 })
        );
        assert_eq!(scanner.device().pixels(), [BLACK; 8]);
        assert_eq!(scanner.trail(), [BLACK; 8]);

        let (display, _) = scanner.into_parts();
        let strip = display.into_output().into_inner();
        assert_eq!(strip.writes, 16);
        assert_eq!(strip.written, [BLACK; 8]);
    }
}
