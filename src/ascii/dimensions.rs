//! Scale factors for fitting an image under the character grid limits.

/// Default maximum output width in pixels (one character per pixel).
pub const MAX_WIDTH: u32 = 80;

/// Default maximum output height in pixels.
pub const MAX_HEIGHT: u32 = 50;

/// Compute `(width_scale, height_scale)` for an image exceeding the limits.
///
/// Returns `None` when `width <= max_width && height <= max_height`.
///
/// The pairing is crossed: an over-wide image gets
/// `width_scale = max_height / height`, and an over-tall image gets
/// `height_scale = max_width / width`. A dimension within its limit keeps a
/// scale of 1.0. Output rasters depend on this exact pairing.
///
/// # Example
/// ```ignore
/// // 100x100 exceeds both limits
/// assert_eq!(fit_scales(100, 100, 80, 50), Some((0.5, 0.8)));
/// ```
pub fn fit_scales(width: u32, height: u32, max_width: u32, max_height: u32) -> Option<(f64, f64)> {
    if width <= max_width && height <= max_height {
        return None;
    }

    let mut width_scale = 1.0;
    let mut height_scale = 1.0;

    if width > max_width {
        width_scale = max_height as f64 / height as f64;
    }
    if height > max_height {
        height_scale = max_width as f64 / width as f64;
    }

    Some((width_scale, height_scale))
}
