//! Owned 8-bit pixel buffer and its resize operation.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};

use crate::ascii;

/// Resampling filter used by [`PixelBuffer::resize`].
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// An interleaved 8-bit raster: `width * height` pixels of `channels` bytes each.
///
/// Supported channel counts are 1 (gray), 2 (gray + alpha), 3 (RGB) and
/// 4 (RGBA). The byte length always equals `width * height * channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    pub fn new(width: u32, height: u32, channels: u8) -> Result<Self, BufferError> {
        let len = checked_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0; len],
        })
    }

    /// Wrap existing interleaved pixel data.
    ///
    /// # Errors
    /// Fails if a dimension is zero, the channel count is not 1-4, or
    /// `data.len()` does not equal `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = checked_len(width, height, channels)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Total number of bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as `channels`-sized byte slices, row-major.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.channels as usize)
    }

    /// Resample to `floor(width * width_scale)` x `floor(height * height_scale)`.
    ///
    /// The scaled dimensions are truncated, not rounded. `self` is left
    /// untouched; the resized pixels come back as a new buffer with the same
    /// channel count. Scales that leave the dimensions unchanged return an
    /// exact copy.
    ///
    /// # Errors
    /// [`ResizeError::DegenerateDimensions`] if either truncated dimension is
    /// zero (or the scale is negative/NaN) or the result would not fit in memory.
    pub fn resize(&self, width_scale: f64, height_scale: f64) -> Result<PixelBuffer, ResizeError> {
        let new_width = scaled_dimension(self.width, width_scale);
        let new_height = scaled_dimension(self.height, height_scale);

        if new_width == 0 || new_height == 0 {
            return Err(ResizeError::DegenerateDimensions {
                width: new_width,
                height: new_height,
            });
        }
        checked_len(new_width, new_height, self.channels).map_err(|_| {
            ResizeError::DegenerateDimensions {
                width: new_width,
                height: new_height,
            }
        })?;

        if new_width == self.width && new_height == self.height {
            return Ok(self.clone());
        }

        log::debug!(
            "Resizing {}x{} -> {}x{} ({} channels)",
            self.width,
            self.height,
            new_width,
            new_height,
            self.channels
        );

        let data = match self.channels {
            1 => resample::<Luma<u8>>(self, new_width, new_height)?,
            2 => resample::<LumaA<u8>>(self, new_width, new_height)?,
            3 => resample::<Rgb<u8>>(self, new_width, new_height)?,
            4 => resample::<Rgba<u8>>(self, new_width, new_height)?,
            other => return Err(ResizeError::UnsupportedChannels(other)),
        };

        Ok(PixelBuffer::from_raw(new_width, new_height, self.channels, data)?)
    }

    /// Grayscale copy of this buffer. See [`ascii::grayscale`].
    pub fn grayscale(&self) -> PixelBuffer {
        ascii::grayscale(self)
    }

    /// Grayscale this buffer in place. See [`ascii::grayscale_in_place`].
    pub fn grayscale_in_place(&mut self) {
        ascii::grayscale_in_place(self);
    }

    /// Render this buffer with the standard ramp. See [`ascii::to_ascii_art`].
    pub fn to_ascii_art(&self) -> String {
        ascii::to_ascii_art(self)
    }
}

/// Truncating `dimension * scale`; negative and NaN products saturate to 0.
fn scaled_dimension(dimension: u32, scale: f64) -> u32 {
    (dimension as f64 * scale) as u32
}

fn checked_len(width: u32, height: u32, channels: u8) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::ZeroDimension { width, height });
    }
    if !(1..=4).contains(&channels) {
        return Err(BufferError::UnsupportedChannels(channels));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels as usize))
        .ok_or(BufferError::TooLarge { width, height })
}

fn resample<P>(buffer: &PixelBuffer, new_width: u32, new_height: u32) -> Result<Vec<u8>, ResizeError>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let src: ImageBuffer<P, &[u8]> =
        ImageBuffer::from_raw(buffer.width, buffer.height, buffer.as_bytes())
            .ok_or(ResizeError::Resample)?;
    Ok(imageops::resize(&src, new_width, new_height, RESIZE_FILTER).into_raw())
}

/// Errors from constructing a [`PixelBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("unsupported channel count {0} (expected 1-4)")]
    UnsupportedChannels(u8),

    #[error("pixel data has {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("image of {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },
}

/// Errors from [`PixelBuffer::resize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResizeError {
    #[error("resize would produce a degenerate {width}x{height} image")]
    DegenerateDimensions { width: u32, height: u32 },

    #[error("cannot resample {0}-channel pixels")]
    UnsupportedChannels(u8),

    #[error("pixel data does not match the buffer dimensions")]
    Resample,

    #[error(transparent)]
    Buffer(#[from] BufferError),
}
