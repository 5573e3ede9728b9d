//! Errors surfaced while converting a Munsell color to RGB.

use thiserror::Error;

/// Everything that can go wrong during a conversion.
///
/// Both conversion failures are deterministic functions of their inputs,
/// so retrying the same call cannot succeed. Callers should report the
/// failure or substitute a default color of their choosing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The reference dataset failed to load or contained no entries.
    #[error("reference table unavailable: {0}")]
    TableUnavailable(String),

    /// The value axis was searched over its whole range in both
    /// directions without finding a tabulated row for the given hue and
    /// chroma. The requested coordinate is outside the coverage of the
    /// reference table.
    #[error("no tabulated value for hue {hue} at chroma {chroma}")]
    ValueNotResolvable {
        /// The hue for which the search was performed.
        hue: String,
        /// The chroma for which the search was performed.
        chroma: u32,
    },

    /// A hue string did not match the `<step><principal>` notation.
    #[error("invalid hue notation: {0:?}")]
    InvalidHue(String),
}
