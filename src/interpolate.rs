//! Estimating sRGB values for Munsell coordinates that fall between
//! tabulated rows.
//!
//! A coordinate with no row of its own is approximated from the rows
//! bracketing it along three independent axes: hue step (multiples of
//! 2.5), chroma (even integers) and value (snapped per bracket by
//! [`find_valid_value`]). Each pair of brackets is blended by closeness,
//! and the pairwise results are folded together weighted by how far
//! their brackets sat from the target.

use num_traits::Float;

use crate::color::{Component, Components, MunsellColor};
use crate::error::Error;
use crate::hue::Hue;
use crate::snap::{find_valid_value, Direction};
use crate::table::Table;

/// How close `a` and `b` each sit to `orig` along one axis, inverted so
/// that the nearer endpoint gets the larger weight. `None` when the
/// endpoints coincide and the axis carries no information.
fn closeness_factors<T: Float>(a: T, b: T, orig: T) -> (Option<T>, Option<T>) {
    if a == b {
        (None, None)
    } else {
        let total = (orig - a).abs() + (orig - b).abs();
        (
            Some((orig - b).abs() / total),
            Some((orig - a).abs() / total),
        )
    }
}

/// Average the factors of the axes that carried information, falling
/// back to an even split when none did.
fn average_present(factors: [Option<Component>; 3]) -> Component {
    let mut sum = 0.0;
    let mut count = 0;
    for factor in factors.into_iter().flatten() {
        sum += factor;
        count += 1;
    }

    if count == 0 {
        0.5
    } else {
        sum / count as Component
    }
}

fn blend(
    a: &Components,
    b: &Components,
    a_weight: Component,
    b_weight: Component,
) -> Components {
    Components(
        a.0 * a_weight + b.0 * b_weight,
        a.1 * a_weight + b.1 * b_weight,
        a.2 * a_weight + b.2 * b_weight,
    )
}

/// Blend two already-interpolated colors, weighting each by the share of
/// the *other* color's bracket difference so that the pair whose
/// brackets sat closer to the target takes the larger weight. A zero
/// difference marks an exact result and wins outright.
fn interpolate_rgb(
    a: Components,
    b: Components,
    a_diff: Component,
    b_diff: Component,
) -> (Components, Component) {
    if a_diff + b_diff == 0.0 {
        return (blend(&a, &b, 0.5, 0.5), 0.0);
    }
    if a_diff == 0.0 {
        return (a, 0.0);
    }
    if b_diff == 0.0 {
        return (b, 0.0);
    }

    let total = a_diff + b_diff;
    (blend(&a, &b, b_diff / total, a_diff / total), total)
}

impl MunsellColor {
    /// Approximate the sRGB value of a coordinate with no tabulated row.
    pub(crate) fn interpolated_rgb(&self, table: &Table) -> Result<Components, Error> {
        let step = self.hue.step;

        // The table guarantees hue brackets at steps 2.5, 5, 7.5 and 10
        // and chroma brackets at even integers of at least 2.
        let hue_above = Hue::new(
            Hue::valid_step((step / 2.5).ceil() * 2.5),
            self.hue.principal.clone(),
        );
        let hue_below = Hue::new(
            Hue::valid_step((step / 2.5).floor() * 2.5),
            self.hue.principal.clone(),
        );
        let chroma_above = (((self.chroma / 2.0).ceil() * 2.0) as u32).max(2);
        let chroma_below = (((self.chroma / 2.0).floor() * 2.0) as u32).max(2);

        let bracket = |hue: &Hue, chroma: u32, direction: Direction| {
            let value = find_valid_value(table, hue, self.value, chroma, direction)?;
            Ok::<_, Error>(MunsellColor {
                hue: hue.clone(),
                value,
                chroma: chroma as Component,
            })
        };
        let pair = |chroma: u32, direction: Direction| {
            self.interpolate_munsell(
                table,
                &bracket(&hue_above, chroma, direction)?,
                &bracket(&hue_below, chroma, direction)?,
            )
        };

        let (a, a_diff) = pair(chroma_above, Direction::Up)?;
        let (b, b_diff) = pair(chroma_above, Direction::Down)?;
        let (c, c_diff) = pair(chroma_below, Direction::Up)?;
        let (d, d_diff) = pair(chroma_below, Direction::Down)?;

        let (e, e_diff) = interpolate_rgb(a, b, a_diff, b_diff);
        let (f, f_diff) = interpolate_rgb(c, d, c_diff, d_diff);

        // The pair differences are crossed in the final blend: `f`
        // carries `e`'s difference and vice versa.
        Ok(interpolate_rgb(f, e, e_diff, f_diff).0)
    }

    /// Blend two bracketing colors by how close each sits to `self`
    /// along the hue-step, value and chroma axes. Also returns the total
    /// absolute difference over all three axes and both brackets, which
    /// weighs this result against the other bracket pairs.
    fn interpolate_munsell(
        &self,
        table: &Table,
        a: &MunsellColor,
        b: &MunsellColor,
    ) -> Result<(Components, Component), Error> {
        let step = self.hue.step;

        let (hue_a, hue_b) = closeness_factors(a.hue.step, b.hue.step, step);
        let (value_a, value_b) = closeness_factors(a.value, b.value, self.value);
        let (chroma_a, chroma_b) = closeness_factors(a.chroma, b.chroma, self.chroma);

        let closeness_a = average_present([hue_a, value_a, chroma_a]);
        let closeness_b = average_present([hue_b, value_b, chroma_b]);

        let total_diff = (step - a.hue.step).abs()
            + (step - b.hue.step).abs()
            + (self.value - a.value).abs()
            + (self.value - b.value).abs()
            + (self.chroma - a.chroma).abs()
            + (self.chroma - b.chroma).abs();

        let rgb = blend(
            &a.to_rgb(table)?,
            &b.to_rgb(table)?,
            closeness_a,
            closeness_b,
        );
        Ok((rgb, total_diff))
    }
}
