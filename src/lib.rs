//! munsell converts colors from the Munsell color system to sRGB.
//!
//! The Munsell system describes a color by hue, value and chroma and is
//! defined empirically: a sampled reference table maps hue/value/chroma
//! triples to CIE xyY, and there is no closed-form conversion to RGB.
//! Coordinates present in the table convert directly through the xyY to
//! linear sRGB matrix and gamma encoding; any other coordinate is
//! estimated by blending the tabulated rows that bracket it along the
//! hue, value and chroma axes.
//!
//! The reference table is supplied by the caller, loaded once and never
//! mutated:
//!
//! ```
//! use munsell::{MunsellColor, Table, Xyy};
//!
//! let table = Table::parse("10GY 8 16 0.3043 0.5578 59.1").unwrap();
//! let color = MunsellColor::new("10GY", 8.0, 16.0).unwrap();
//!
//! let rgb = color.to_rgb(&table).unwrap();
//! assert!((rgb.0 - 0.2794503352552019).abs() < 1e-9);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hue;
mod interpolate;
mod math;
mod snap;
mod table;
#[cfg(test)]
mod test;

pub use color::{Component, Components, MunsellColor};
pub use error::Error;
pub use hue::Hue;
pub use table::{Table, Xyy};
