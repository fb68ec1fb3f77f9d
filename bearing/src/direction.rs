//! Directions in vector spaces.
//!
//! A [`Direction`] is a vector that has forgotten its magnitude. It describes
//! which way something points, but not how far. Directions are constructed
//! from arbitrary vectors and the magnitude of the vector is ignored by every
//! operation except the raw accessors.
//!
//! # Degenerate Directions
//!
//! A direction constructed from the zero vector is well-formed but
//! _degenerate_: it has no unit vector and no angle to any other direction.
//! Operations that require these fail with [`DirectionError::Degenerate`].
//!
//! # Examples
//!
//! Computing the angle between the direction from the origin to a point and
//! the $x$-axis:
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use bearing::direction::{self, Direction};
//! use nalgebra::{Point2, Vector2};
//!
//! let to = direction::direction_between(Point2::new(3.0, 4.0), Point2::origin());
//! let x = Direction::new(Vector2::new(1.0, 0.0));
//!
//! assert_abs_diff_eq!(Vector2::new(0.6, 0.8), to.unit_vector().unwrap());
//! assert_abs_diff_eq!(
//!     0.9273,
//!     to.angle_between(&x).unwrap().radians(),
//!     epsilon = 1e-4
//! );
//! ```

use approx::{AbsDiffEq, RelativeEq};
use num::traits::FloatConst;
use num::Float;
use std::ops::Neg;
use thiserror::Error;
use tracing::trace;

use crate::angle::{Angle, HasPhi, HasTheta};
use crate::space::{EuclideanSpace, InnerSpace, Scalar, VectorSpace};
use crate::transform::{Transform, Transformable};

/// Errors concerning [`Direction`]s.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DirectionError {
    /// The direction wraps a vector with zero magnitude and so has no unit
    /// vector or angle.
    #[error("direction is degenerate")]
    Degenerate,
}

/// Vector with its magnitude erased.
///
/// Equality, ordering, and hashing are structural and follow the wrapped
/// vector. This means that two directions that point the same way but were
/// constructed from vectors with different magnitudes are **not** equal.
/// Compare unit vectors to determine if directions point the same way.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Direction<V>(V);

impl<V> Direction<V>
where
    V: VectorSpace,
{
    pub fn new(vector: V) -> Self {
        Direction(vector)
    }

    /// Determines the direction from the point `from` to the point `to`.
    ///
    /// This is the direction of the vector `to - from`. Note the order of the
    /// arguments: swapping them reverses the direction.
    pub fn between<P>(to: P, from: P) -> Self
    where
        P: EuclideanSpace<Difference = V>,
    {
        Direction(to - from)
    }

    pub fn is_degenerate(&self) -> bool {
        self.0.is_zero()
    }
}

impl<V> Direction<V> {
    /// Wraps a vector without any interpretation.
    ///
    /// **Use with care.** This and the other raw accessors expose the vector
    /// that a direction is implemented with, including the magnitude that a
    /// direction is supposed to have forgotten. Prefer [`Direction::new`] and
    /// [`Direction::unit_vector`].
    pub fn from_raw(vector: V) -> Self {
        Direction(vector)
    }

    /// Unwraps the vector exactly as it was given.
    ///
    /// **Use with care.** See [`Direction::from_raw`].
    pub fn into_raw(self) -> V {
        self.0
    }

    /// **Use with care.** See [`Direction::from_raw`].
    pub fn as_raw(&self) -> &V {
        &self.0
    }
}

impl<V> Direction<V>
where
    V: InnerSpace,
    Scalar<V>: Float,
{
    /// Gets the unit vector pointing in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::Degenerate`] if the direction wraps the zero
    /// vector.
    pub fn unit_vector(&self) -> Result<V, DirectionError> {
        self.0.clone().normalize().ok_or_else(|| {
            trace!("rejected unit vector of degenerate direction");
            DirectionError::Degenerate
        })
    }

    /// Computes the angle between this direction and another.
    ///
    /// The angle is measured in the plane spanned by both directions and lies
    /// in $[0, \pi]$. This operation is commutative.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::Degenerate`] if either direction wraps the
    /// zero vector.
    pub fn angle_between(&self, other: &Self) -> Result<Angle<Scalar<V>>, DirectionError>
    where
        Scalar<V>: FloatConst,
    {
        let u = self.unit_vector()?;
        let v = other.unit_vector()?;
        Ok(Angle::acos(u.dot(v)))
    }
}

impl<V> Neg for Direction<V>
where
    V: VectorSpace,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Direction(-self.0)
    }
}

impl<V> Transformable for Direction<V>
where
    V: VectorSpace,
{
    type Space = V;

    fn transform<T>(self, transform: &T) -> Self
    where
        T: Transform<Self::Space>,
    {
        Direction(transform.apply(self.0))
    }
}

impl<V> HasTheta for Direction<V>
where
    V: HasTheta,
{
    type Real = V::Real;

    fn theta(&self) -> Angle<Self::Real> {
        self.0.theta()
    }
}

impl<V> HasPhi for Direction<V>
where
    V: HasPhi,
{
    type Real = V::Real;

    fn phi(&self) -> Angle<Self::Real> {
        self.0.phi()
    }
}

impl<V> AbsDiffEq for Direction<V>
where
    V: AbsDiffEq,
{
    type Epsilon = V::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        V::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<V> RelativeEq for Direction<V>
where
    V: RelativeEq,
{
    fn default_max_relative() -> Self::Epsilon {
        V::default_max_relative()
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

/// Constructs a direction from a vector.
pub fn direction<V>(vector: V) -> Direction<V>
where
    V: VectorSpace,
{
    Direction::new(vector)
}

/// Determines the direction from the point `from` to the point `to`.
///
/// See [`Direction::between`].
pub fn direction_between<P>(to: P, from: P) -> Direction<P::Difference>
where
    P: EuclideanSpace,
{
    Direction::between(to, from)
}
