// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Re-exports the `approx` assertion macro for zoom and pan comparisons,
//! which accumulate floating-point error across repeated steps.

pub use approx::assert_abs_diff_eq;

/// Returns a 1x1 transparent PNG encoded as base64.
pub fn tiny_png_base64() -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(tiny_png_bytes())
}

/// Returns a 1x1 transparent PNG.
pub fn tiny_png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    let image = image_rs::RgbaImage::new(1, 1);
    image
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image_rs::ImageFormat::Png,
        )
        .expect("encode png");
    bytes
}
