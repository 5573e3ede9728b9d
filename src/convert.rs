//! Conversion of tabulated CIE xyY entries to displayable sRGB.

use crate::color::Components;
use crate::math::{transform, transform_3x3, Transform};
use crate::table::Xyy;

/// The CIE-XYZ to linear sRGB matrix, laid out for row-vector
/// multiplication.
#[rustfmt::skip]
const XYZ_TO_SRGB: Transform = transform_3x3(
     3.2406, -0.9689,  0.0557,
    -1.5372,  1.8758, -0.2040,
    -0.4986,  0.0415,  1.0570,
);

/// Convert a tabulated xyY entry to linear-light sRGB.
///
/// The result is not gamma encoded and is not clamped: colors outside
/// the sRGB gamut come out below 0 or above 1.
pub fn xyy_to_linear_srgb(xyy: &Xyy) -> Components {
    // A chromaticity y of zero would divide by zero below; nudge it.
    let y = if xyy.y.abs() < 1e-100 { 1e-100 } else { xyy.y };
    let luminance = xyy.luminance / 100.0;

    let x = luminance * xyy.x / y;
    let z = luminance * (1.0 - xyy.x - xyy.y) / y;

    transform(&XYZ_TO_SRGB, Components(x, luminance, z))
}

/// Gamma encode linear-light sRGB components.
pub fn to_gamma_encoded(rgb: &Components) -> Components {
    rgb.map(|value| {
        if value <= 0.0031308 {
            12.92 * value
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    })
}
