//! The Munsell color value object and its conversion to sRGB.

use std::fmt;

use crate::convert::{to_gamma_encoded, xyy_to_linear_srgb};
use crate::error::Error;
use crate::hue::Hue;
use crate::table::Table;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three channels of an RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color from the Munsell color system.
///
/// It stores three values: the hue, value and chroma. The hue is written
/// `<step><principal>`, e.g. `5R` or `8PB`. The value ranges from 0
/// (black) to 10 (white), and the chroma represents the purity of the
/// color.
///
/// ```
/// use munsell::{MunsellColor, Table, Xyy};
///
/// let table = Table::from_rows([("10GY", 8.0, 16, Xyy::new(0.3043, 0.5578, 59.1))]);
/// let color = MunsellColor::new("10GY", 8.0, 16.0).unwrap();
/// let rgb = color.to_rgb(&table).unwrap();
/// assert!((rgb.0 - 0.2794503352552019).abs() < 1e-9);
/// assert!((rgb.1 - 0.9074706287302171).abs() < 1e-9);
/// assert!((rgb.2 - 0.2523704238358717).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MunsellColor {
    /// The hue of the color.
    pub hue: Hue,
    /// The lightness of the color, 0 (black) to 10 (white).
    pub value: Component,
    /// The purity of the color; 0 is achromatic gray.
    pub chroma: Component,
}

impl MunsellColor {
    /// Create a color from its hue notation, value and chroma.
    ///
    /// Fails with [`Error::InvalidHue`] when the hue does not match the
    /// `<step><principal>` notation.
    pub fn new(hue: &str, value: Component, chroma: Component) -> Result<Self, Error> {
        Ok(Self {
            hue: hue.parse()?,
            value,
            chroma,
        })
    }

    /// Create a color from an already parsed hue.
    pub fn with_hue(hue: Hue, value: Component, chroma: Component) -> Self {
        Self { hue, value, chroma }
    }

    /// Convert this Munsell color to sRGB.
    ///
    /// The conversion is not exact, but comes quite close: coordinates
    /// without a tabulated row are estimated from the rows bracketing
    /// them. Channels are in the 0-1 range and are not clamped, so
    /// colors outside the sRGB gamut come out below 0 or above 1.
    ///
    /// Exception: the achromatic axis (chroma 0) reports its gray level
    /// on the 0-255 scale, a long-standing quirk of the conversion that
    /// is kept for compatibility.
    pub fn to_rgb(&self, table: &Table) -> Result<Components, Error> {
        if self.chroma == 0.0 {
            return Ok(self.gray_rgb());
        }

        if let Some(xyy) = table.get(&self.to_string()) {
            return Ok(to_gamma_encoded(&xyy_to_linear_srgb(xyy)));
        }

        self.interpolated_rgb(table)
    }

    // Gray levels skip the table entirely. Note the 0-255 scale.
    fn gray_rgb(&self) -> Components {
        let v = 255.0 * (self.value / 10.0);
        Components(v, v, v)
    }

    /// Test whether this is a real color, by checking that it can be
    /// represented in sRGB. Only overflow above 1.0 is checked; channels
    /// below 0 do not count as unreal.
    pub fn is_real(&self, table: &Table) -> Result<bool, Error> {
        let rgb = self.to_rgb(table)?;
        Ok(rgb.0 <= 1.0 && rgb.1 <= 1.0 && rgb.2 <= 1.0)
    }
}

impl fmt::Display for MunsellColor {
    /// The canonical table key: `"<hue> <value> <chroma>"` with the
    /// chroma truncated to an integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hue, self.value, self.chroma.trunc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Xyy;

    #[test]
    fn gray_axis_needs_no_table() {
        let table = Table::default();

        for (value, level) in [(0.0, 0.0), (5.0, 127.5), (10.0, 255.0)] {
            let gray = MunsellColor::new("5R", value, 0.0).unwrap();
            assert_eq!(gray.to_rgb(&table), Ok(Components(level, level, level)));
        }
    }

    #[test]
    fn exact_rows_skip_interpolation() {
        // The sole row has an odd chroma, so its interpolation brackets
        // (chromas 6 and 8) are absent and that path would fail. An
        // exact hit must therefore never reach it.
        let table = Table::from_rows([("5R", 4.0, 7, Xyy::new(0.4334, 0.3205, 12.0))]);
        let color = MunsellColor::new("5R", 4.0, 7.0).unwrap();

        let expected = to_gamma_encoded(&xyy_to_linear_srgb(&Xyy::new(0.4334, 0.3205, 12.0)));
        assert_eq!(color.to_rgb(&table), Ok(expected));
    }

    #[test]
    fn canonical_form_truncates_chroma() {
        let color = MunsellColor::new("2.5GY", 6.0, 8.9).unwrap();
        assert_eq!(color.to_string(), "2.5GY 6 8");

        let color = MunsellColor::new("10GY", 8.25, 16.0).unwrap();
        assert_eq!(color.to_string(), "10GY 8.25 16");
    }

    #[test]
    fn real_colors_are_bounded_above_by_one() {
        let table = Table::default();

        // 255 * (value / 10) is exactly 1.0 for this value.
        let on_boundary = MunsellColor::new("5R", 10.0 / 255.0, 0.0).unwrap();
        let rgb = on_boundary.to_rgb(&table).unwrap();
        assert_eq!(rgb.0, 1.0);
        assert_eq!(on_boundary.is_real(&table), Ok(true));

        // The next finer gray level overshoots 1.0 by one ulp.
        let over = MunsellColor::with_hue(Hue::new(5.0, "R"), 0.03921568627450981, 0.0);
        let rgb = over.to_rgb(&table).unwrap();
        assert!(rgb.0 > 1.0);
        assert_eq!(over.is_real(&table), Ok(false));

        // Negative channels do not count as unreal.
        let black = MunsellColor::new("5R", 0.0, 0.0).unwrap();
        assert_eq!(black.is_real(&table), Ok(true));
    }

    #[test]
    fn invalid_hues_are_rejected_at_construction() {
        assert_eq!(
            MunsellColor::new("mauve", 5.0, 2.0),
            Err(Error::InvalidHue("mauve".to_owned()))
        );
    }
}
