//! Conversion settings.
//!
//! The command-line tool always runs with [`Config::default`]. Library
//! callers can override the limits, the ramp and the JPEG quality.

use crate::ascii::{MAX_HEIGHT, MAX_WIDTH, STANDARD_RAMP_STR};
use crate::image_io::DEFAULT_JPEG_QUALITY;

/// Settings for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Images wider than this are shrunk before conversion.
    pub max_width: u32,
    /// Images taller than this are shrunk before conversion.
    pub max_height: u32,
    /// Character ramp, sparse to dense.
    pub ramp: String,
    /// Quality for `.jpg` output (1-100).
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            ramp: STANDARD_RAMP_STR.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Config {
    /// Check that the settings can drive a conversion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_width == 0 || self.max_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "size limits must be positive, got {}x{}",
                self.max_width, self.max_height
            )));
        }
        if self.ramp.is_empty() {
            return Err(ConfigError::Invalid("ramp must not be empty".to_string()));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }

    /// The ramp as characters.
    pub fn ramp_chars(&self) -> Vec<char> {
        self.ramp.chars().collect()
    }
}

/// Errors from [`Config::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Invalid(String),
}
