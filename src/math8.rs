/// Attenuate an 8-bit channel by a brightness factor
///
/// Computes `(value * brightness) >> 8`, so full brightness maps 255 to 254.
/// Callers skip the call entirely when brightness is 255.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn attenuate8(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) >> 8) as u8
}

/// Map `index` of `count` onto `0..max`, using integer math
///
/// Returns 0 for an empty range.
#[inline]
pub const fn proportion(index: usize, count: usize, max: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index * max / count
}
