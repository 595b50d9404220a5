use approx::{assert_abs_diff_eq, AbsDiffEq};
use crate::HslColor;

/// Rounding in the RGB step can move each HSL field by a unit.
pub fn assert_abs_diff_eq_hsl(left: HslColor, right: HslColor, epsilon: f32) {
    assert_abs_diff_eq!(
        AssertableHsl(left),
        AssertableHsl(right),
        epsilon = epsilon
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertableHsl(pub HslColor);

impl AbsDiffEq for AssertableHsl {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&f32::from(self.0.hue()), &f32::from(other.0.hue()), epsilon) &&
        f32::abs_diff_eq(&f32::from(self.0.saturation()), &f32::from(other.0.saturation()), epsilon) &&
        f32::abs_diff_eq(&f32::from(self.0.lightness()), &f32::from(other.0.lightness()), epsilon)
    }
}
