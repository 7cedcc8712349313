//! Reading and writing image files.
//!
//! Container parsing and encoding are delegated to the `image` crate; this
//! module maps between its types and [`PixelBuffer`].

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder};

use crate::buffer::{BufferError, PixelBuffer};

/// JPEG quality used by [`write`].
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Output container format, selected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageType {
    #[default]
    Png,
    Jpg,
    Bmp,
}

impl ImageType {
    /// Pick the format for `path`.
    ///
    /// The suffix is everything from the last `.` of the file name, so a
    /// dotfile such as `.jpg` counts as JPEG. Only the exact, lowercase
    /// suffixes `.png`, `.jpg` and `.bmp` are recognized. Anything else,
    /// including `.JPG` or `.jpeg`, or no suffix at all, falls back to PNG.
    pub fn from_path(path: &Path) -> Self {
        let suffix = path
            .file_name()
            .and_then(OsStr::to_str)
            .and_then(|name| name.rfind('.').map(|i| &name[i..]));
        match suffix {
            Some(".png") => ImageType::Png,
            Some(".jpg") => ImageType::Jpg,
            Some(".bmp") => ImageType::Bmp,
            _ => ImageType::Png,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageType::Png => "png",
            ImageType::Jpg => "jpg",
            ImageType::Bmp => "bmp",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decode the image at `path`.
///
/// The channel count is whatever the file carries (1-4). Samples deeper
/// than 8 bits are narrowed to 8 bits without changing the channel count.
pub fn load(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|e| DecodeError::Format {
        path: path.to_path_buf(),
        source: e,
    })?;

    let buffer = from_dynamic(image)?;
    log::info!(
        "Decoded {}: {}x{}, {} channel(s)",
        path.display(),
        buffer.width(),
        buffer.height(),
        buffer.channels()
    );
    Ok(buffer)
}

fn from_dynamic(image: DynamicImage) -> Result<PixelBuffer, BufferError> {
    let (width, height) = image.dimensions();
    let (channels, data) = match image.color().channel_count() {
        1 => (1, image.into_luma8().into_raw()),
        2 => (2, image.into_luma_alpha8().into_raw()),
        3 => (3, image.into_rgb8().into_raw()),
        _ => (4, image.into_rgba8().into_raw()),
    };
    PixelBuffer::from_raw(width, height, channels, data)
}

/// Encode `buffer` as `kind` into memory.
///
/// JPEG has no alpha channel, so 2- and 4-channel buffers lose their alpha
/// byte when encoded as JPEG.
pub fn encode(buffer: &PixelBuffer, kind: ImageType, jpeg_quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let (width, height) = (buffer.width(), buffer.height());
    let mut bytes = Vec::new();

    match kind {
        ImageType::Png => {
            PngEncoder::new(&mut bytes).write_image(
                buffer.as_bytes(),
                width,
                height,
                color_type(buffer.channels()),
            )?;
        }
        ImageType::Bmp => {
            BmpEncoder::new(&mut bytes).write_image(
                buffer.as_bytes(),
                width,
                height,
                color_type(buffer.channels()),
            )?;
        }
        ImageType::Jpg => {
            let (channels, opaque) = strip_alpha(buffer);
            JpegEncoder::new_with_quality(&mut bytes, jpeg_quality).write_image(
                &opaque,
                width,
                height,
                color_type(channels),
            )?;
        }
    }

    Ok(bytes)
}

/// Write `buffer` to `path`, choosing the format from the extension.
pub fn write(buffer: &PixelBuffer, path: &Path) -> Result<(), EncodeError> {
    write_with_quality(buffer, path, DEFAULT_JPEG_QUALITY)
}

/// Same as [`write`] with an explicit JPEG quality (1-100).
pub fn write_with_quality(buffer: &PixelBuffer, path: &Path, jpeg_quality: u8) -> Result<(), EncodeError> {
    let kind = ImageType::from_path(path);
    let bytes = encode(buffer, kind, jpeg_quality).map_err(|e| EncodeError::Image {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes.is_empty() {
        return Err(EncodeError::Empty {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, &bytes).map_err(|e| EncodeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "Wrote {} ({}, {}x{}, {} bytes)",
        path.display(),
        kind,
        buffer.width(),
        buffer.height(),
        bytes.len()
    );
    Ok(())
}

fn color_type(channels: u8) -> ExtendedColorType {
    match channels {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        _ => ExtendedColorType::Rgba8,
    }
}

/// Drop the trailing alpha byte of every pixel, if there is one.
fn strip_alpha(buffer: &PixelBuffer) -> (u8, Vec<u8>) {
    match buffer.channels() {
        2 | 4 => {
            let kept = buffer.channels() - 1;
            let data = buffer
                .pixels()
                .flat_map(|px| px[..kept as usize].iter().copied())
                .collect();
            (kept, data)
        }
        n => (n, buffer.as_bytes().to_vec()),
    }
}

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Decoded image is invalid: {0}")]
    Buffer(#[from] BufferError),
}

/// Errors that can occur while writing an image.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Failed to encode {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Encoder produced no data for {}", .path.display())]
    Empty { path: PathBuf },
}
