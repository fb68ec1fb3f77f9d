//! Movable local origins.
//!
//! Types that implement [`HasOrigin`] have an intrinsic local origin that can
//! be relocated. Relocating the origin of a value changes the coordinates of
//! the value relative to that origin, and so _moving the origin_ and _moving
//! the value_ are dual: moving the origin to a point $p$ is the same as moving
//! the value by $-p$.
//!
//! `HasOrigin` is deliberately distinct from [`Transformable`]. Some types,
//! such as [`Direction`], are transformable but have no origin at all, while
//! other types have an origin but cannot be transformed arbitrarily.
//!
//! Implementations are provided for points (see the [`integration`] module)
//! and structurally for tuples, sequences, sets, and maps of types that
//! implement `HasOrigin`.
//!
//! # Examples
//!
//! Implementing `HasOrigin` for a circle:
//!
//! ```rust
//! use bearing::origin::HasOrigin;
//! use nalgebra::Point2;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! pub struct Circle {
//!     center: Point2<f64>,
//!     radius: f64,
//! }
//!
//! impl HasOrigin for Circle {
//!     type Position = Point2<f64>;
//!
//!     fn move_origin_to(self, origin: Self::Position) -> Self {
//!         Circle {
//!             center: self.center.move_origin_to(origin),
//!             radius: self.radius,
//!         }
//!     }
//! }
//!
//! let circle = Circle {
//!     center: Point2::origin(),
//!     radius: 2.0,
//! };
//! let circle = circle.move_to(Point2::new(4.0, 0.0));
//! assert_eq!(Point2::new(4.0, 0.0), circle.center);
//! ```
//!
//! [`Direction`]: crate::direction::Direction
//! [`integration`]: crate::integration
//! [`Transformable`]: crate::transform::Transformable

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::space::{EuclideanSpace, Vector};

/// Types with an intrinsic local origin that can be moved.
///
/// Only [`HasOrigin::move_origin_to`] must be implemented. All other
/// operations are derived from it.
pub trait HasOrigin: Sized {
    type Position: EuclideanSpace;

    /// Moves the local origin of the value to the given point.
    ///
    /// The point is given in the current coordinates of the value. Note that
    /// this moves the _origin_ and not the value: relative to the new origin,
    /// the value appears to have moved in the opposite direction.
    fn move_origin_to(self, origin: Self::Position) -> Self;

    /// Moves the local origin of the value by the given displacement.
    fn move_origin_by(self, displacement: Vector<Self::Position>) -> Self {
        self.move_origin_to(<Self::Position as EuclideanSpace>::from_coordinates(
            displacement,
        ))
    }

    /// Translates the value such that its local origin lands on the given
    /// point.
    fn move_to(self, position: Self::Position) -> Self {
        let origin = <Self::Position as EuclideanSpace>::origin();
        self.move_origin_by(origin - position)
    }
}

/// Relocates a point relative to a new origin.
///
/// This is the implementation of [`HasOrigin`] for points.
pub fn relocate<P>(point: P, origin: P) -> P
where
    P: EuclideanSpace,
{
    P::from_coordinates(point - origin)
}

/// Moves the local origin of a value to the given point.
///
/// See [`HasOrigin::move_origin_to`].
pub fn move_origin_to<T>(origin: T::Position, value: T) -> T
where
    T: HasOrigin,
{
    value.move_origin_to(origin)
}

/// Moves the local origin of a value by the given displacement.
///
/// See [`HasOrigin::move_origin_by`].
pub fn move_origin_by<T>(displacement: Vector<T::Position>, value: T) -> T
where
    T: HasOrigin,
{
    value.move_origin_by(displacement)
}

/// Translates a value such that its local origin lands on the given point.
///
/// See [`HasOrigin::move_to`].
pub fn move_to<T>(position: T::Position, value: T) -> T
where
    T: HasOrigin,
{
    value.move_to(position)
}

/// Places a value at the given point.
///
/// This is [`move_to`] with its arguments flipped.
pub fn place<T>(value: T, position: T::Position) -> T
where
    T: HasOrigin,
{
    value.move_to(position)
}

impl<S, T> HasOrigin for (S, T)
where
    S: HasOrigin,
    T: HasOrigin<Position = S::Position>,
{
    type Position = S::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        let (s, t) = self;
        (s.move_origin_to(origin.clone()), t.move_origin_to(origin))
    }
}

impl<T> HasOrigin for Option<T>
where
    T: HasOrigin,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.map(|value| value.move_origin_to(origin))
    }
}

impl<T> HasOrigin for Box<T>
where
    T: HasOrigin,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        Box::new((*self).move_origin_to(origin))
    }
}

impl<T, const N: usize> HasOrigin for [T; N]
where
    T: HasOrigin,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.map(|value| value.move_origin_to(origin.clone()))
    }
}

impl<T> HasOrigin for Vec<T>
where
    T: HasOrigin,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.into_iter()
            .map(|value| value.move_origin_to(origin.clone()))
            .collect()
    }
}

impl<T> HasOrigin for VecDeque<T>
where
    T: HasOrigin,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.into_iter()
            .map(|value| value.move_origin_to(origin.clone()))
            .collect()
    }
}

/// Moves the origin of every element.
///
/// Elements are compared again after they are moved. Elements that become
/// equal are merged, so the moved set may have fewer elements than the
/// original.
impl<T> HasOrigin for BTreeSet<T>
where
    T: HasOrigin + Ord,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.into_iter()
            .map(|value| value.move_origin_to(origin.clone()))
            .collect()
    }
}

/// Moves the origin of every element.
///
/// As with `BTreeSet`, elements that become equal are merged.
impl<T, H> HasOrigin for HashSet<T, H>
where
    T: Eq + Hash + HasOrigin,
    H: BuildHasher + Default,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.into_iter()
            .map(|value| value.move_origin_to(origin.clone()))
            .collect()
    }
}

/// Moves the origin of every value. Keys are unchanged.
impl<K, T> HasOrigin for BTreeMap<K, T>
where
    K: Ord,
    T: HasOrigin,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.into_iter()
            .map(|(key, value)| (key, value.move_origin_to(origin.clone())))
            .collect()
    }
}

/// Moves the origin of every value. Keys are unchanged.
impl<K, T, H> HasOrigin for HashMap<K, T, H>
where
    K: Eq + Hash,
    T: HasOrigin,
    H: BuildHasher + Default,
{
    type Position = T::Position;

    fn move_origin_to(self, origin: Self::Position) -> Self {
        self.into_iter()
            .map(|(key, value)| (key, value.move_origin_to(origin.clone())))
            .collect()
    }
}
