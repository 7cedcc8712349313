//! End-to-end conversion: load, fit, grayscale, write raster, write text.

use std::path::{Path, PathBuf};

use crate::ascii::{fit_scales, to_ascii_art_with};
use crate::buffer::{PixelBuffer, ResizeError};
use crate::config::{Config, ConfigError};
use crate::image_io::{self, DecodeError, EncodeError};

/// Input and output locations for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output_image: PathBuf,
    pub output_text: PathBuf,
}

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Dimensions of the decoded input.
    pub source_size: (u32, u32),
    /// `(width_scale, height_scale)` if the input was resized.
    pub scales: Option<(f64, f64)>,
    /// Dimensions of the written raster.
    pub output_size: (u32, u32),
    pub channels: u8,
    /// The ASCII art written to the text file.
    pub ascii: String,
}

/// Errors that can occur during a conversion.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to resize image: {0}")]
    Resize(#[from] ResizeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Failed to write text file {}: {source}", .path.display())]
    TextIo {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run the whole conversion for `paths`.
///
/// The config is validated before any file is touched.
///
/// Steps, in order:
/// 1. Decode the input. A decode failure stops the run.
/// 2. If the image exceeds `config.max_width`/`config.max_height`, resize it
///    by [`fit_scales`].
/// 3. Grayscale the buffer in place.
/// 4. Write the grayscale raster; the format follows the output extension.
/// 5. Render ASCII art from the grayscaled buffer and write it verbatim to
///    the text path, truncating any existing file.
///
/// A failed raster write does not prevent step 5; the encode error is
/// returned once the text file has been written.
pub fn run(paths: &Paths, config: &Config) -> Result<Conversion, PipelineError> {
    config.validate()?;

    let mut buffer = image_io::load(&paths.input)?;
    println!("Read {}", paths.input.display());

    let source_size = (buffer.width(), buffer.height());
    let scales = fit_scales(
        buffer.width(),
        buffer.height(),
        config.max_width,
        config.max_height,
    );
    if let Some((width_scale, height_scale)) = scales {
        println!("Width scale to height scale = {}:{}", width_scale, height_scale);
        buffer = buffer.resize(width_scale, height_scale)?;
    }

    buffer.grayscale_in_place();

    let raster = image_io::write_with_quality(&buffer, &paths.output_image, config.jpeg_quality);
    if let Err(e) = &raster {
        log::error!("{}", e);
    }

    let ascii = render(&buffer, config);
    std::fs::write(&paths.output_text, &ascii).map_err(|e| PipelineError::TextIo {
        path: paths.output_text.clone(),
        source: e,
    })?;
    log::info!(
        "Wrote {} ({} bytes of ASCII art)",
        paths.output_text.display(),
        ascii.len()
    );

    raster?;

    Ok(Conversion {
        source_size,
        scales,
        output_size: (buffer.width(), buffer.height()),
        channels: buffer.channels(),
        ascii,
    })
}

fn render(buffer: &PixelBuffer, config: &Config) -> String {
    let ramp = config.ramp_chars();
    to_ascii_art_with(buffer, &ramp)
}

/// Convenience wrapper around [`run`] with the default configuration.
pub fn convert(input: &Path, output_image: &Path, output_text: &Path) -> Result<Conversion, PipelineError> {
    let paths = Paths {
        input: input.to_path_buf(),
        output_image: output_image.to_path_buf(),
        output_text: output_text.to_path_buf(),
    };
    run(&paths, &Config::default())
}
