//! Angles and polar accessors.

use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Add, Neg, Sub};
use num::traits::FloatConst;
use num::{Float, Zero};
use std::ops::Mul;

/// Angle measured in radians.
///
/// Angles are not normalized on construction. Arithmetic may leave an angle
/// outside of any canonical range; use [`Angle::normalized`] to recover one.
#[derive(Add, Clone, Copy, Debug, Default, Neg, PartialEq, PartialOrd, Sub)]
pub struct Angle<T>(T);

impl<T> Angle<T>
where
    T: Float + FloatConst,
{
    pub fn from_radians(radians: T) -> Self {
        Angle(radians)
    }

    pub fn from_degrees(degrees: T) -> Self {
        Angle(degrees.to_radians())
    }

    pub fn from_turns(turns: T) -> Self {
        Angle(turns * T::TAU())
    }

    pub fn zero() -> Self {
        Angle(Zero::zero())
    }

    pub fn quarter_turn() -> Self {
        Angle(T::FRAC_PI_2())
    }

    pub fn half_turn() -> Self {
        Angle(T::PI())
    }

    pub fn full_turn() -> Self {
        Angle(T::TAU())
    }

    /// Computes the arc-cosine of a value as an angle in $[0, \pi]$.
    ///
    /// The value is clamped to $[-1, 1]$ first, so small numerical errors in a
    /// computed cosine (e.g., the dot product of two unit vectors) do not
    /// produce `NaN`.
    pub fn acos(cosine: T) -> Self {
        let one = T::one();
        Angle(cosine.max(-one).min(one).acos())
    }

    /// Computes the four-quadrant arc-tangent of `y / x` as an angle in
    /// $(-\pi, \pi]$.
    pub fn atan2(y: T, x: T) -> Self {
        Angle(y.atan2(x))
    }

    pub fn radians(&self) -> T {
        self.0
    }

    pub fn degrees(&self) -> T {
        self.0.to_degrees()
    }

    pub fn turns(&self) -> T {
        self.0 / T::TAU()
    }

    pub fn sin(&self) -> T {
        self.0.sin()
    }

    pub fn cos(&self) -> T {
        self.0.cos()
    }

    pub fn abs(&self) -> Self {
        Angle(self.0.abs())
    }

    /// Gets the equivalent angle in $[0, 2\pi)$.
    pub fn normalized(&self) -> Self {
        let tau = T::TAU();
        let mut radians = self.0 % tau;
        if radians < T::zero() {
            radians = radians + tau;
        }
        // Adding a full turn to a tiny negative remainder rounds up to a full
        // turn.
        if radians >= tau {
            radians = T::zero();
        }
        Angle(radians)
    }
}

impl<T> Mul<T> for Angle<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, factor: T) -> Self::Output {
        Angle(self.0 * factor)
    }
}

impl<T> AbsDiffEq for Angle<T>
where
    T: AbsDiffEq,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T> RelativeEq for Angle<T>
where
    T: RelativeEq,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

/// Planar angle of a vector.
///
/// The angle is measured counter-clockwise from the positive $x$-axis in the
/// $xy$-plane. For three-dimensional vectors this is the azimuth.
pub trait HasTheta {
    type Real: Float;

    fn theta(&self) -> Angle<Self::Real>;
}

/// Elevation of a vector above the $xy$-plane.
///
/// The angle lies in $[-\pi/2, \pi/2]$.
pub trait HasPhi {
    type Real: Float;

    fn phi(&self) -> Angle<Self::Real>;
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use crate::angle::Angle;

    #[test]
    fn convert_units() {
        assert_abs_diff_eq!(FRAC_PI_2, Angle::from_degrees(90.0).radians());
        assert_abs_diff_eq!(PI, Angle::from_turns(0.5).radians());
        assert_abs_diff_eq!(0.25, Angle::from_radians(FRAC_PI_2).turns());
        assert_abs_diff_eq!(180.0, Angle::<f64>::half_turn().degrees(), epsilon = 1e-12);
    }

    #[test]
    fn acos_clamps_out_of_range_cosine() {
        assert_eq!(0.0, Angle::acos(1.0 + 1e-12).radians());
        assert_abs_diff_eq!(PI, Angle::acos(-1.0 - 1e-12).radians());
        assert!(!Angle::acos(2.0f64).radians().is_nan());
    }

    #[test]
    fn atan2_of_pythagorean_triple() {
        assert_abs_diff_eq!(0.9273, Angle::atan2(4.0, 3.0).radians(), epsilon = 1e-4);
    }

    #[test]
    fn normalize_into_single_turn() {
        assert_abs_diff_eq!(
            Angle::from_degrees(270.0),
            Angle::from_degrees(-90.0).normalized(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Angle::from_degrees(10.0),
            Angle::from_degrees(370.0).normalized(),
            epsilon = 1e-12
        );
        assert_eq!(Angle::zero(), Angle::from_radians(TAU).normalized());
        assert_eq!(Angle::zero(), Angle::from_radians(-1e-18).normalized());
    }

    #[test]
    fn arithmetic() {
        let angle = Angle::<f64>::quarter_turn() + Angle::quarter_turn();

        assert_abs_diff_eq!(Angle::<f64>::half_turn(), angle);
        assert_abs_diff_eq!(Angle::<f64>::full_turn(), angle * 2.0);
        assert_abs_diff_eq!(Angle::zero(), angle - Angle::half_turn());
        assert_eq!(Angle::from_radians(-1.0), -Angle::from_radians(1.0));
    }
}
