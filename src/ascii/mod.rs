//! Grayscale and ASCII rendering of pixel buffers.
//!
//! The pipeline has three pieces:
//!
//! 1. **Fit scales** - how much to shrink an image that exceeds the grid limits
//! 2. **Grayscale conversion** - destructive luminance rewrite of R, G and B
//! 3. **Character mapping** - luminance to a 17-level density ramp
//!
//! The grayscale raster and the ramp use two different luminance formulas,
//! [`gray_luminance`] and [`ramp_luminance`]. They are not interchangeable.

mod charset;
mod dimensions;
mod grayscale;
mod mapping;

pub use charset::{DENSEST, STANDARD_RAMP, STANDARD_RAMP_STR};
pub use dimensions::{fit_scales, MAX_HEIGHT, MAX_WIDTH};
pub use grayscale::{gray_luminance, grayscale, grayscale_in_place, ramp_luminance};
pub use mapping::{ramp_index, to_ascii_art, to_ascii_art_with};
