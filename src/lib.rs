//! gray-ramp library crate.
//!
//! Converts a raster image into a downsized grayscale raster and an
//! ASCII-art rendering of its brightness.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let conversion = gray_ramp::pipeline::convert(
//!     Path::new("photo.jpg"),
//!     Path::new("photo-gray.png"),
//!     Path::new("photo.txt"),
//! )?;
//! println!("{}", conversion.ascii);
//! # Ok::<(), gray_ramp::pipeline::PipelineError>(())
//! ```

pub mod ascii;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod image_io;
pub mod pipeline;

pub use buffer::PixelBuffer;
