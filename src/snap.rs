//! Snapping fractional Munsell values to tabulated rows.
//!
//! The reference table only has rows at certain discrete values for a
//! given hue and chroma, and it is denser near black: below a value of
//! about 2 the rows step by 0.2, above that by whole integers. The
//! search walks outward from the requested value and reverses direction
//! once if it runs off either end of the scale.

use crate::color::Component;
use crate::error::Error;
use crate::hue::Hue;
use crate::table::{key, Table};

/// The direction in which to search the value axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Search toward white, rounding up first.
    Up,
    /// Search toward black, rounding down first.
    Down,
}

impl Direction {
    fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    fn signum(self) -> Component {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }

    /// Round to the nearest multiple of 0.2 toward this direction.
    fn round_to_fifth(self, value: Component) -> Component {
        match self {
            Self::Up => (value * 5.0).ceil() / 5.0,
            Self::Down => (value * 5.0).floor() / 5.0,
        }
    }
}

/// Find the nearest value to `value` for which the table has a row at
/// the given hue and chroma, searching in `direction` first.
pub(crate) fn find_valid_value(
    table: &Table,
    hue: &Hue,
    value: Component,
    chroma: u32,
    mut direction: Direction,
) -> Result<Component, Error> {
    let mut value = direction.round_to_fifth(value);
    let mut reversed = false;

    loop {
        if !(0.0..=10.0).contains(&value) {
            if reversed {
                return Err(Error::ValueNotResolvable {
                    hue: hue.to_string(),
                    chroma,
                });
            }
            direction = direction.reversed();
            reversed = true;
        }

        if table.contains(&key(hue, value, chroma)) {
            return Ok(value);
        }

        // Whole-integer steps over most of the scale, truncating any
        // fractional start; 0.2 steps near black where the table is
        // denser. The thresholds differ per direction: going up, the
        // fine grid is left already above a value of 1.
        if (value > 1.0 && direction == Direction::Up) || value > 2.0 {
            value = (value + direction.signum()).trunc();
        } else {
            value = ((value + 0.2 * direction.signum()) * 10.0).round() / 10.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Xyy;

    fn coverage(hue: &str, values: &[Component], chroma: u32) -> Table {
        Table::from_rows(
            values
                .iter()
                .map(|&value| (hue, value, chroma, Xyy::new(0.31, 0.32, 30.0))),
        )
    }

    #[test]
    fn snaps_to_the_nearest_row_in_the_requested_direction() {
        let table = coverage("5R", &[2.0, 4.0, 6.0, 8.0], 4);
        let hue = Hue::new(5.0, "R");

        assert_eq!(find_valid_value(&table, &hue, 5.0, 4, Direction::Up), Ok(6.0));
        assert_eq!(find_valid_value(&table, &hue, 5.0, 4, Direction::Down), Ok(4.0));
    }

    #[test]
    fn returns_an_exact_row_unchanged() {
        let table = coverage("5R", &[4.0], 4);
        let hue = Hue::new(5.0, "R");

        assert_eq!(find_valid_value(&table, &hue, 4.0, 4, Direction::Up), Ok(4.0));
        assert_eq!(find_valid_value(&table, &hue, 4.0, 4, Direction::Down), Ok(4.0));
    }

    #[test]
    fn fine_steps_near_black() {
        let table = coverage("5R", &[0.4], 2);
        let hue = Hue::new(5.0, "R");

        // Rounding up lands on the row directly.
        assert_eq!(find_valid_value(&table, &hue, 0.3, 2, Direction::Up), Ok(0.4));
        // Searching down walks 0.2, 0, then reverses through -0.2 and
        // climbs back up to 0.4.
        assert_eq!(find_valid_value(&table, &hue, 0.3, 2, Direction::Down), Ok(0.4));
    }

    #[test]
    fn fails_once_both_directions_are_exhausted() {
        let table = coverage("5R", &[2.0], 4);
        let hue = Hue::new(5.0, "G");

        assert_eq!(
            find_valid_value(&table, &hue, 5.0, 4, Direction::Up),
            Err(Error::ValueNotResolvable {
                hue: "5G".to_owned(),
                chroma: 4,
            })
        );
        assert_eq!(
            find_valid_value(&table, &hue, 5.0, 4, Direction::Down),
            Err(Error::ValueNotResolvable {
                hue: "5G".to_owned(),
                chroma: 4,
            })
        );
    }

    #[test]
    fn fractional_values_round_to_fifths_first() {
        let table = coverage("5GY", &[4.0, 6.0], 8);
        let hue = Hue::new(5.0, "GY");

        // 5.3 rounds to 5.4 going up and 5.2 going down, then steps by
        // whole integers with truncation: 5.4 -> 6, 5.2 -> 4.
        assert_eq!(find_valid_value(&table, &hue, 5.3, 8, Direction::Up), Ok(6.0));
        assert_eq!(find_valid_value(&table, &hue, 5.3, 8, Direction::Down), Ok(4.0));
    }
}
