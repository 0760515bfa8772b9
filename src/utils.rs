// src/utils.rs

/// Converts a pixel measurement into typographic points for the given DPI.
///
/// `dpi` must be non-zero.
pub fn pixel_to_point(pixel: f32, dpi: f32) -> f32 {
    pixel * 72.0 / dpi
}

/// Inverse of [`pixel_to_point`].
pub fn point_to_pixel(point: f32, dpi: f32) -> f32 {
    point * dpi / 72.0
}
