//! Affine transformations.
//!
//! A transformation is split into a linear part and a translation. Vectors and
//! directions are origin-free and are only affected by the linear part, while
//! points are affected by both.

use crate::space::{EuclideanSpace, VectorSpace};

pub trait Transform<S>
where
    S: VectorSpace,
{
    /// Applies the linear part of the transformation to a vector.
    fn apply(&self, vector: S) -> S;

    fn translation(&self) -> S;

    /// Applies the complete transformation to a point.
    fn apply_point<P>(&self, point: P) -> P
    where
        P: EuclideanSpace<Difference = S>,
    {
        P::from_coordinates(self.apply(point.coordinates()) + self.translation())
    }
}

pub trait Transformable: Sized {
    type Space: VectorSpace;

    fn transform<T>(self, transform: &T) -> Self
    where
        T: Transform<Self::Space>;
}

/// Pure translation.
///
/// The linear part of a translation is the identity.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Translation<S>(pub S);

impl<S> Transform<S> for Translation<S>
where
    S: VectorSpace,
{
    fn apply(&self, vector: S) -> S {
        vector
    }

    fn translation(&self) -> S {
        self.0.clone()
    }
}
