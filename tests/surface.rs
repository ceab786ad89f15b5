mod tests {
    use led_strip_animator::{
        BufferDescriptor, FrameBufferDriver, FramebufferOverflow, PixelSurface, Rgbw,
        StripDriver, StripLayout,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Packed(usize, u32),
        Channels(usize, Rgbw),
    }

    #[derive(Default)]
    struct RecordingDriver {
        initialized: Option<BufferDescriptor>,
        calls: Vec<Call>,
        fail_writes: bool,
    }

    impl StripDriver for RecordingDriver {
        fn init(&mut self, buffer: &BufferDescriptor) {
            self.initialized = Some(*buffer);
        }

        fn set_pixel(&mut self, position: usize, color: u32) {
            self.calls.push(Call::Packed(position, color));
        }

        fn set_pixel_rgbw(&mut self, position: usize, color: Rgbw) {
            self.calls.push(Call::Channels(position, color));
        }

        fn write(&mut self) -> bool {
            !self.fail_writes
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    fn recording(buffer: BufferDescriptor) -> PixelSurface<RecordingDriver> {
        PixelSurface::new(RecordingDriver::default(), buffer)
    }

    #[test]
    fn test_new_initializes_driver() {
        let surface = recording(BufferDescriptor::rgbw(7));
        assert_eq!(surface.driver().initialized, Some(BufferDescriptor::rgbw(7)));
        assert_eq!(surface.brightness(), 255);
        assert_eq!(surface.pixel_count(), 7);
        assert_eq!(surface.layout(), StripLayout::Rgbw);
        assert!(surface.buffer().has_white());
        assert!(!BufferDescriptor::rgb(7).has_white());
    }

    #[test]
    fn test_full_brightness_forwards_packed_color() {
        let mut surface = recording(BufferDescriptor::rgb(4));
        surface.set_pixel(2, Rgbw::new(255, 128, 0, 10));
        assert_eq!(surface.driver().calls, [Call::Packed(2, 0xFF80_000A)]);
    }

    #[test]
    fn test_dimmed_pixel_goes_through_channels() {
        let mut surface = recording(BufferDescriptor::rgb(4));
        surface.set_brightness(128);
        surface.set_pixel(1, Rgbw::new(255, 128, 0, 10));
        assert_eq!(
            surface.driver().calls,
            [Call::Channels(1, Rgbw::new(127, 64, 0, 5))]
        );
    }

    #[test]
    fn test_set_pixel_rgbw_attenuates() {
        let mut surface = recording(BufferDescriptor::rgbw(4));
        surface.set_pixel_rgbw(0, Rgbw::new(200, 100, 50, 255));
        surface.set_brightness(64);
        surface.set_pixel_rgbw(0, Rgbw::new(200, 100, 50, 255));
        assert_eq!(
            surface.driver().calls,
            [
                Call::Channels(0, Rgbw::new(200, 100, 50, 255)),
                Call::Channels(0, Rgbw::new(50, 25, 12, 63)),
            ]
        );
    }

    #[test]
    fn test_fill_sets_every_pixel() {
        let mut surface = recording(BufferDescriptor::rgb(3));
        surface.fill(Rgbw::new(1, 2, 3, 0));
        assert_eq!(
            surface.driver().calls,
            [
                Call::Packed(0, 0x0102_0300),
                Call::Packed(1, 0x0102_0300),
                Call::Packed(2, 0x0102_0300),
            ]
        );
    }

    #[test]
    fn test_load_framebuffer_rgb() {
        let mut surface = recording(BufferDescriptor::rgb(2));
        surface.set_brightness(10);
        assert_eq!(surface.load_framebuffer(&[1, 2, 3, 4, 5, 6]), Ok(()));
        // Brightness is not applied and white is forced to zero
        assert_eq!(
            surface.driver().calls,
            [
                Call::Channels(0, Rgbw::new(1, 2, 3, 0)),
                Call::Channels(1, Rgbw::new(4, 5, 6, 0)),
            ]
        );
    }

    #[test]
    fn test_load_framebuffer_rgbw() {
        let mut surface = recording(BufferDescriptor::rgbw(2));
        assert_eq!(surface.load_framebuffer(&[1, 2, 3, 4, 5, 6, 7, 8]), Ok(()));
        assert_eq!(
            surface.driver().calls,
            [
                Call::Channels(0, Rgbw::new(1, 2, 3, 4)),
                Call::Channels(1, Rgbw::new(5, 6, 7, 8)),
            ]
        );
    }

    #[test]
    fn test_load_framebuffer_partial() {
        let mut surface = recording(BufferDescriptor::rgb(4));
        assert_eq!(surface.load_framebuffer(&[9, 9, 9, 1]), Ok(()));
        assert_eq!(
            surface.driver().calls,
            [Call::Channels(0, Rgbw::new(9, 9, 9, 0))]
        );
    }

    #[test]
    fn test_load_framebuffer_rejects_oversized_payload() {
        let mut surface = recording(BufferDescriptor::rgb(2));
        assert_eq!(
            surface.load_framebuffer(&[0; 7]),
            Err(FramebufferOverflow {
                len: 7,
                capacity: 6
            })
        );

        let mut rgbw = recording(BufferDescriptor::rgbw(2));
        assert_eq!(
            rgbw.load_framebuffer(&[0; 9]),
            Err(FramebufferOverflow {
                len: 9,
                capacity: 8
            })
        );

        assert!(surface.driver().calls.is_empty());
        assert!(rgbw.driver().calls.is_empty());
    }

    #[test]
    fn test_load_framebuffer_sets_every_pixel() {
        let mut surface = PixelSurface::new(FrameBufferDriver::<3>::new(), BufferDescriptor::rgb(3));
        let bytes = [10, 11, 12, 20, 21, 22, 30, 31, 32];
        assert_eq!(surface.load_framebuffer(&bytes), Ok(()));
        assert_eq!(
            surface.driver().staged(),
            [
                Rgbw::new(10, 11, 12, 0),
                Rgbw::new(20, 21, 22, 0),
                Rgbw::new(30, 31, 32, 0),
            ]
        );
    }

    #[test]
    fn test_brightness_is_not_retroactive() {
        let mut surface = PixelSurface::new(FrameBufferDriver::<2>::new(), BufferDescriptor::rgb(2));
        surface.set_pixel(0, Rgbw::new(200, 200, 200, 0));
        surface.set_brightness(0);
        surface.set_pixel(1, Rgbw::new(200, 200, 200, 0));
        assert_eq!(surface.driver().pixel(0), Some(Rgbw::new(200, 200, 200, 0)));
        assert_eq!(surface.driver().pixel(1), Some(Rgbw::BLACK));
    }

    #[test]
    fn test_write_reports_driver_result() {
        let mut surface = recording(BufferDescriptor::rgb(1));
        assert!(surface.write());
        surface.driver_mut().fail_writes = true;
        assert!(!surface.write());
        assert!(surface.is_ready());
    }
}
