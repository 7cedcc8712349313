//! CLI argument parsing with clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::pipeline::Paths;

/// Number of user-supplied arguments (excluding the program name).
pub const EXPECTED_ARGS: usize = 3;

/// Convert an image to a downsized grayscale raster and ASCII art
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gray-ramp")]
#[command(version, about = "Convert an image to grayscale and ASCII art", long_about = None)]
#[command(after_help = "The output image format follows its extension: .png, .jpg or .bmp (default png).
Images larger than 80x50 are shrunk before conversion.")]
pub struct Args {
    /// Image to convert
    pub input: PathBuf,

    /// Where to write the grayscale image
    pub output_image: PathBuf,

    /// Where to write the ASCII art
    pub output_text: PathBuf,
}

impl Args {
    pub fn into_paths(self) -> Paths {
        Paths {
            input: self.input,
            output_image: self.output_image,
            output_text: self.output_text,
        }
    }
}

/// Errors from command-line parsing.
#[derive(Debug, thiserror::Error)]
pub enum ArgumentError {
    /// Wrong number of positional arguments.
    #[error("expected 3 arguments, got {given}")]
    Arity { given: usize },

    /// clap rejected the arguments.
    #[error(transparent)]
    Parse(#[from] clap::Error),
}

/// Parse a full argv (program name first).
///
/// The argument count is checked before clap sees anything, so a wrong
/// count is always [`ArgumentError::Arity`]. Every user argument is a path,
/// including ones that look like flags (`-x`, `--help`) or a bare `--`.
pub fn parse<I, T>(argv: I) -> Result<Args, ArgumentError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let given = argv.len().saturating_sub(1);
    if given != EXPECTED_ARGS {
        return Err(ArgumentError::Arity { given });
    }
    // Everything after the first `--` is positional to clap
    argv.insert(1, OsString::from("--"));
    Ok(Args::try_parse_from(argv)?)
}
