use super::Rgbw;

const BAND: u8 = 85;

/// Map a position on the 256-step color wheel to a color
///
/// The wheel is split into three 85-wide bands, each cross-fading two
/// channels in steps of 3. Position 255 lands next to position 0.
pub const fn hue_wheel(position: u8) -> Rgbw {
    if position < BAND {
        let ramp = position * 3;
        Rgbw::new(ramp, 255 - ramp, 0, 0)
    } else if position < BAND * 2 {
        let ramp = (position - BAND) * 3;
        Rgbw::new(255 - ramp, 0, ramp, 0)
    } else {
        let ramp = (position - BAND * 2) * 3;
        Rgbw::new(0, ramp, 255 - ramp, 0)
    }
}
