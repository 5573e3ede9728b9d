//! Munsell hue notation: a step along the hue circle plus a principal
//! hue name, written `<step><principal>`, e.g. `5R`, `2.5GY` or `10PB`.

use std::fmt;
use std::str::FromStr;

use crate::color::Component;
use crate::error::Error;

/// A parsed Munsell hue.
#[derive(Clone, Debug, PartialEq)]
pub struct Hue {
    /// Position within the principal hue. Tabulated entries carry
    /// multiples of 2.5, but any non-negative decimal can be written.
    pub step: Component,
    /// The principal hue name, one or more uppercase letters.
    pub principal: String,
}

impl Hue {
    /// Create a hue from a step and a principal hue name.
    pub fn new(step: Component, principal: impl Into<String>) -> Self {
        Self {
            step,
            principal: principal.into(),
        }
    }

    /// Clamp a step to the range the table guarantees bracketing entries
    /// for. Valid steps are 2.5, 5, 7.5 and 10.
    pub(crate) fn valid_step(step: Component) -> Component {
        step.clamp(2.5, 10.0)
    }
}

impl FromStr for Hue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let at = s
            .find(|c: char| !matches!(c, '0'..='9' | '.'))
            .unwrap_or(s.len());
        let (step, principal) = s.split_at(at);

        if step.is_empty()
            || principal.is_empty()
            || !principal.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(Error::InvalidHue(s.to_owned()));
        }

        let step = step.parse().map_err(|_| Error::InvalidHue(s.to_owned()))?;
        Ok(Self {
            step,
            principal: principal.to_owned(),
        })
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Component's Display prints the shortest round-trip form, so
        // whole steps come out without a fractional part: `10GY`, not
        // `10.0GY`.
        write!(f, "{}{}", self.step, self.principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_notations() {
        assert_eq!("5R".parse::<Hue>().unwrap(), Hue::new(5.0, "R"));
        assert_eq!("2.5GY".parse::<Hue>().unwrap(), Hue::new(2.5, "GY"));
        assert_eq!("10PB".parse::<Hue>().unwrap(), Hue::new(10.0, "PB"));
        assert_eq!("0.4Y".parse::<Hue>().unwrap(), Hue::new(0.4, "Y"));
    }

    #[test]
    fn parse_invalid_notations() {
        for s in ["", "R", "5", "5r", "GY5", "5 R", "1..5R"] {
            assert_eq!(
                s.parse::<Hue>(),
                Err(Error::InvalidHue(s.to_owned())),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn display_normalizes_whole_steps() {
        assert_eq!(Hue::new(10.0, "GY").to_string(), "10GY");
        assert_eq!(Hue::new(7.5, "PB").to_string(), "7.5PB");
        assert_eq!("10.0GY".parse::<Hue>().unwrap().to_string(), "10GY");
    }

    #[test]
    fn steps_clamp_to_the_tabulated_range() {
        assert_eq!(Hue::valid_step(0.0), 2.5);
        assert_eq!(Hue::valid_step(2.5), 2.5);
        assert_eq!(Hue::valid_step(7.5), 7.5);
        assert_eq!(Hue::valid_step(12.5), 10.0);
    }
}
