//! Brightness to character mapping.

use super::charset::STANDARD_RAMP;
use super::grayscale::ramp_luminance;
use crate::buffer::PixelBuffer;

/// Map a luminance value to an index into a ramp of `levels` characters.
///
/// Index = ceil((levels - 1) * luminance / 255), clamped to the last level.
/// [`ramp_luminance`] can exceed 255, so the clamp matters for bright pixels.
///
/// # Example
/// ```ignore
/// assert_eq!(ramp_index(0, 17), 0);
/// assert_eq!(ramp_index(255, 17), 16);
/// assert_eq!(ramp_index(420, 17), 16);
/// ```
#[inline]
pub fn ramp_index(luminance: u32, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    let steps = (levels - 1) as u64;
    let idx = (steps * luminance as u64).div_ceil(255);
    idx.min(steps) as usize
}

/// Render a buffer as ASCII art using the standard ramp.
pub fn to_ascii_art(buffer: &PixelBuffer) -> String {
    to_ascii_art_with(buffer, STANDARD_RAMP)
}

/// Render a buffer as ASCII art using `ramp`, ordered sparse to dense.
///
/// One character per pixel, chosen by [`ramp_luminance`] and [`ramp_index`].
/// Rows are separated by `'\n'` with no trailing newline, so the output has
/// `height` lines of `width` characters.
///
/// Buffers with fewer than 3 channels produce an empty string. An empty
/// ramp renders every pixel as a space.
pub fn to_ascii_art_with(buffer: &PixelBuffer, ramp: &[char]) -> String {
    if buffer.channels() < 3 {
        log::warn!(
            "Image has {} channel(s), assuming it is already grayscale",
            buffer.channels()
        );
        return String::new();
    }

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let mut art = String::with_capacity(width * height + height);

    for (i, px) in buffer.pixels().enumerate() {
        if i != 0 && i % width == 0 {
            art.push('\n');
        }
        let c = if ramp.is_empty() {
            ' '
        } else {
            ramp[ramp_index(ramp_luminance(px[0], px[1], px[2]), ramp.len())]
        };
        art.push(c);
    }

    art
}
