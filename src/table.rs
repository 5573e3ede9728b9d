//! Read-only access to the Munsell reference dataset.
//!
//! The dataset maps `"<hue> <value> <chroma>"` keys to CIE xyY entries.
//! It is supplied fully populated, loaded once and never mutated, so a
//! [`Table`] can be shared freely between threads by reference.

use std::collections::HashMap;

use crate::color::Component;
use crate::error::Error;
use crate::hue::Hue;

/// One tabulated entry: CIE chromaticity (x, y) plus luminance Y on a
/// 0-100 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyy {
    /// The x chromaticity coordinate.
    pub x: Component,
    /// The y chromaticity coordinate.
    pub y: Component,
    /// The luminance, 0-100.
    pub luminance: Component,
}

impl Xyy {
    /// Create an entry from its chromaticity coordinates and luminance.
    pub fn new(x: Component, y: Component, luminance: Component) -> Self {
        Self { x, y, luminance }
    }
}

/// Build the canonical `"<hue> <value> <chroma>"` lookup key.
///
/// `Component`'s `Display` prints the shortest round-trip form, so whole
/// values come out without a fractional part (`8`, not `8.0`), matching
/// the dataset's keys.
pub(crate) fn key(hue: &Hue, value: Component, chroma: u32) -> String {
    format!("{} {} {}", hue, value, chroma)
}

/// The reference dataset behind every conversion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    rows: HashMap<String, Xyy>,
}

impl Table {
    /// Build a table from `(hue, value, chroma, entry)` rows.
    pub fn from_rows<H: AsRef<str>>(
        rows: impl IntoIterator<Item = (H, Component, u32, Xyy)>,
    ) -> Self {
        let rows = rows
            .into_iter()
            .map(|(hue, value, chroma, xyy)| {
                (format!("{} {} {}", hue.as_ref(), value, chroma), xyy)
            })
            .collect();
        Self { rows }
    }

    /// Parse a table from whitespace-separated `hue value chroma x y Y`
    /// lines. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut rows = HashMap::new();

        for (number, line) in text.lines().enumerate() {
            let line = match line.find('#') {
                Some(at) => &line[..at],
                None => line,
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            let unavailable =
                |what: &str| Error::TableUnavailable(format!("line {}: {what}", number + 1));

            let &[hue, value, chroma, x, y, luminance] = fields.as_slice() else {
                return Err(unavailable("expected `hue value chroma x y Y`"));
            };

            let hue: Hue = hue.parse().map_err(|_| unavailable("malformed hue"))?;
            let value: Component = value.parse().map_err(|_| unavailable("malformed value"))?;
            let chroma: u32 = chroma.parse().map_err(|_| unavailable("malformed chroma"))?;

            let entry = Xyy::new(
                x.parse().map_err(|_| unavailable("malformed x"))?,
                y.parse().map_err(|_| unavailable("malformed y"))?,
                luminance
                    .parse()
                    .map_err(|_| unavailable("malformed luminance"))?,
            );

            rows.insert(key(&hue, value, chroma), entry);
        }

        if rows.is_empty() {
            return Err(Error::TableUnavailable(
                "the dataset contains no entries".to_owned(),
            ));
        }

        Ok(Self { rows })
    }

    /// Look up the entry stored under the given canonical key.
    pub fn get(&self, key: &str) -> Option<&Xyy> {
        self.rows.get(key)
    }

    /// Test whether a row exists under the given canonical key.
    pub fn contains(&self, key: &str) -> bool {
        self.rows.contains_key(key)
    }

    /// The number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Test whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The largest tabulated chroma for the given hue and value,
    /// probing upward in steps of two. Returns 0 when not even chroma 2
    /// is tabulated.
    pub fn max_chroma(&self, hue: &Hue, value: Component) -> u32 {
        let mut chroma = 2;
        while self.contains(&key(hue, value, chroma)) {
            chroma += 2;
        }
        chroma - 2
    }
}
