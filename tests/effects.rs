mod tests {
    use embassy_time::Duration;
    use led_strip_animator::effect::pulse_level;
    use led_strip_animator::{
        BufferDescriptor, EffectId, EffectRunner, FrameBufferDriver, PixelSurface, Plan, Rgbw,
        StripDriver, StripEvent, StripEventHandler, TaskId, hue_wheel,
    };

    const RED: Rgbw = Rgbw::new(255, 0, 0, 0);
    const WAIT: Duration = Duration::from_millis(10);

    #[derive(Default)]
    struct DoneCounter {
        done: usize,
    }

    impl<D: StripDriver> StripEventHandler<D> for DoneCounter {
        fn on_event(&mut self, _surface: &mut PixelSurface<D>, event: StripEvent) {
            assert_eq!(event, StripEvent::EffectDone);
            self.done += 1;
        }
    }

    type Runner<const N: usize> = EffectRunner<FrameBufferDriver<N>, DoneCounter>;

    fn strip<const N: usize>(buffer: BufferDescriptor) -> Runner<N> {
        let surface = PixelSurface::new(FrameBufferDriver::<N>::new(), buffer);
        EffectRunner::with_handler(surface, DoneCounter::default())
    }

    fn start<const N: usize>(runner: &mut Runner<N>, id: EffectId, color: Rgbw) -> TaskId {
        runner.start(id.to_slot(color, WAIT))
    }

    fn pixels<const N: usize>(runner: &Runner<N>) -> Vec<Rgbw> {
        runner.surface().driver().committed().to_vec()
    }

    fn lit<const N: usize>(runner: &Runner<N>) -> Vec<usize> {
        pixels(runner)
            .iter()
            .enumerate()
            .filter(|(_, pixel)| !pixel.is_black())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_color_wipe_completes_once() {
        let mut runner = strip::<5>(BufferDescriptor::rgb(5));
        let task = start(&mut runner, EffectId::ColorWipe, RED);

        for frame in 0..4 {
            assert_eq!(runner.run(task), Plan::After(WAIT));
            assert_eq!(lit(&runner), (0..=frame).collect::<Vec<_>>());
            assert_eq!(runner.handler().done, 0);
        }

        assert_eq!(runner.run(task), Plan::Idle);
        assert_eq!(pixels(&runner), [RED; 5]);
        assert_eq!(runner.handler().done, 1);
        assert_eq!(runner.active_task(), None);
        assert_eq!(runner.surface().driver().writes(), 5);

        assert_eq!(runner.run(task), Plan::Idle);
        assert_eq!(runner.handler().done, 1);
        assert_eq!(runner.surface().driver().writes(), 5);
    }

    #[test]
    fn test_theater_chase_cycles_every_three_frames() {
        let mut runner = strip::<9>(BufferDescriptor::rgb(9));
        let task = start(&mut runner, EffectId::TheaterChase, RED);

        runner.run(task);
        assert_eq!(lit(&runner), [0, 3, 6]);
        runner.run(task);
        assert_eq!(lit(&runner), [1, 4, 7]);
        runner.run(task);
        assert_eq!(lit(&runner), [2, 5, 8]);
        runner.run(task);
        assert_eq!(lit(&runner), [0, 3, 6]);
        assert_eq!(pixels(&runner)[3], RED);
        assert_eq!(runner.handler().done, 0);
    }

    #[test]
    fn test_theater_chase_rainbow_colors() {
        let mut runner = strip::<6>(BufferDescriptor::rgb(6));
        let task = start(&mut runner, EffectId::TheaterChaseRainbow, Rgbw::BLACK);

        runner.run(task);
        assert_eq!(pixels(&runner)[3], hue_wheel(3));
        runner.run(task);
        assert_eq!(pixels(&runner)[0], Rgbw::BLACK);
        assert_eq!(pixels(&runner)[4], hue_wheel(5));
    }

    #[test]
    fn test_rainbow_rotates() {
        let mut runner = strip::<3>(BufferDescriptor::rgb(3));
        let task = start(&mut runner, EffectId::Rainbow, Rgbw::BLACK);

        runner.run(task);
        assert_eq!(pixels(&runner), [hue_wheel(0), hue_wheel(1), hue_wheel(2)]);
        runner.run(task);
        assert_eq!(pixels(&runner), [hue_wheel(1), hue_wheel(2), hue_wheel(3)]);

        for _ in 0..300 {
            assert_eq!(runner.run(task), Plan::After(WAIT));
        }
        assert_eq!(runner.handler().done, 0);
    }

    #[test]
    fn test_rainbow_cycle_spreads_wheel() {
        let mut runner = strip::<4>(BufferDescriptor::rgb(4));
        let task = start(&mut runner, EffectId::RainbowCycle, Rgbw::BLACK);

        runner.run(task);
        assert_eq!(
            pixels(&runner),
            [hue_wheel(0), hue_wheel(64), hue_wheel(128), hue_wheel(192)]
        );
        runner.run(task);
        assert_eq!(
            pixels(&runner),
            [hue_wheel(1), hue_wheel(65), hue_wheel(129), hue_wheel(193)]
        );
    }

    #[test]
    fn test_stroboscope_alternates() {
        let mut runner = strip::<3>(BufferDescriptor::rgb(3));
        let task = start(&mut runner, EffectId::Stroboscope, RED);

        runner.run(task);
        assert_eq!(pixels(&runner), [RED; 3]);
        runner.run(task);
        assert_eq!(pixels(&runner), [Rgbw::BLACK; 3]);
        runner.run(task);
        assert_eq!(pixels(&runner), [RED; 3]);
    }

    #[test]
    fn test_test_pattern_sweeps_channels() {
        let mut runner = strip::<4>(BufferDescriptor::rgb(4));
        runner.surface_mut().set_brightness(0);
        let task = start(&mut runner, EffectId::TestPattern, Rgbw::BLACK);

        // 2 seconds spread over 4 pixels, brightness ignored
        assert_eq!(runner.run(task), Plan::After(Duration::from_millis(500)));
        assert_eq!(pixels(&runner)[0], Rgbw::new(51, 0, 0, 0));

        for _ in 0..3 {
            runner.run(task);
        }
        assert_eq!(pixels(&runner)[3], Rgbw::new(204, 0, 0, 0));

        runner.run(task);
        assert_eq!(pixels(&runner)[0], Rgbw::new(0, 51, 0, 0));

        for _ in 0..7 {
            runner.run(task);
        }
        runner.run(task);
        assert_eq!(pixels(&runner)[0], Rgbw::gray(51));

        for _ in 0..6 {
            assert_eq!(runner.run(task), Plan::After(Duration::from_millis(500)));
        }
        assert_eq!(runner.run(task), Plan::Idle);
        assert_eq!(pixels(&runner), [Rgbw::BLACK; 4]);
        assert_eq!(runner.handler().done, 1);
    }

    #[test]
    fn test_test_pattern_uses_white_channel() {
        let mut runner = strip::<2>(BufferDescriptor::rgbw(2));
        let task = start(&mut runner, EffectId::TestPattern, Rgbw::BLACK);

        for _ in 0..7 {
            runner.run(task);
        }
        assert_eq!(pixels(&runner)[0], Rgbw::new(0, 0, 0, 85));
    }

    #[test]
    fn test_icicle_gradient() {
        let color = Rgbw::new(200, 100, 50, 5);
        let step = Rgbw::new(20, 10, 5, 0);
        let mut runner = strip::<20>(BufferDescriptor::rgb(20));
        let task = start(&mut runner, EffectId::Icicle, color);

        runner.run(task);
        assert_eq!(lit(&runner), [0]);
        assert_eq!(pixels(&runner)[0], step);

        runner.run(task);
        assert_eq!(pixels(&runner)[0], step);
        assert_eq!(pixels(&runner)[1], Rgbw::new(40, 20, 10, 0));

        for _ in 0..8 {
            runner.run(task);
        }
        // White below 10 truncates to zero at every step
        assert_eq!(lit(&runner), (0..10).collect::<Vec<_>>());
        assert_eq!(pixels(&runner)[9], Rgbw::new(200, 100, 50, 0));

        runner.run(task);
        assert_eq!(lit(&runner), (1..11).collect::<Vec<_>>());
        assert_eq!(pixels(&runner)[1], step);
    }

    #[test]
    fn test_icicle_wraps_at_strip_end() {
        let mut runner = strip::<20>(BufferDescriptor::rgb(20));
        let task = start(&mut runner, EffectId::Icicle, RED);

        for _ in 0..29 {
            runner.run(task);
        }
        assert_eq!(lit(&runner), [19]);

        runner.run(task);
        assert!(lit(&runner).is_empty());

        runner.run(task);
        assert_eq!(lit(&runner), [0]);
    }

    #[test]
    fn test_pulse_level() {
        assert_eq!(pulse_level(0), 240);
        assert_eq!(pulse_level(19), 12);
        assert_eq!(pulse_level(37), 228);
    }

    #[test]
    fn test_pulse_color_breathes() {
        let color = Rgbw::new(255, 0, 100, 0);
        let mut runner = strip::<2>(BufferDescriptor::rgb(2));
        let task = start(&mut runner, EffectId::PulseColor, color);

        runner.run(task);
        assert_eq!(pixels(&runner), [Rgbw::new(239, 0, 93, 0); 2]);

        for _ in 0..19 {
            runner.run(task);
        }
        assert_eq!(pixels(&runner), [Rgbw::new(11, 0, 4, 0); 2]);

        for _ in 0..19 {
            runner.run(task);
        }
        assert_eq!(pixels(&runner), [Rgbw::new(239, 0, 93, 0); 2]);
    }

    #[test]
    fn test_pulse_color_applies_brightness() {
        let mut runner = strip::<1>(BufferDescriptor::rgb(1));
        runner.surface_mut().set_brightness(128);
        let task = start(&mut runner, EffectId::PulseColor, Rgbw::new(255, 0, 0, 0));

        runner.run(task);
        assert_eq!(pixels(&runner), [Rgbw::new(119, 0, 0, 0)]);
    }
}
