//! Abstract vector and Euclidean spaces.
//!
//! These traits describe the minimal structure that directions and movable
//! origins require of a linear algebra library. Implementations for foreign
//! types are provided by the [`integration`] module.
//!
//! [`integration`]: crate::integration

use num::{Float, Num, One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// The scalar type of a space.
pub type Scalar<S> = <S as AbstractSpace>::Scalar;

/// The vector (difference) type of a Euclidean space.
pub type Vector<S> = <S as EuclideanSpace>::Difference;

pub trait AbstractSpace: Clone {
    type Scalar: Clone + Neg<Output = Self::Scalar> + Num;
}

pub trait VectorSpace:
    AbstractSpace
    + Add<Output = Self>
    + Mul<<Self as AbstractSpace>::Scalar, Output = Self>
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Zero
{
}

impl<T> VectorSpace for T where
    T: AbstractSpace
        + Add<Output = T>
        + Mul<<T as AbstractSpace>::Scalar, Output = T>
        + Neg<Output = T>
        + Sub<Output = T>
        + Zero
{
}

pub trait Dot<T = Self> {
    type Output;

    fn dot(self, other: T) -> Self::Output;
}

/// Vector space with an inner product.
///
/// The magnitude and normalization of a vector are derived from its dot
/// product with itself. Vectors with very large or very small components are
/// rescaled before their dot product is computed, so neither operation
/// overflows or underflows for finite vectors.
pub trait InnerSpace: Dot<Output = <Self as AbstractSpace>::Scalar> + VectorSpace {
    fn magnitude_squared(&self) -> Scalar<Self> {
        self.clone().dot(self.clone())
    }

    fn magnitude(&self) -> Scalar<Self>
    where
        Scalar<Self>: Float,
    {
        let (vector, factor) = rescale(self.clone());
        vector.magnitude_squared().sqrt() / factor
    }

    /// Scales the vector to unit length.
    ///
    /// Returns `None` if and only if the vector is zero, in which case there
    /// is no well-defined unit vector.
    fn normalize(self) -> Option<Self>
    where
        Scalar<Self>: Float,
    {
        if self.is_zero() {
            None
        }
        else {
            let (vector, _) = rescale(self);
            let magnitude = vector.magnitude_squared().sqrt();
            Some(vector * magnitude.recip())
        }
    }
}

impl<T> InnerSpace for T where T: Dot<Output = <T as AbstractSpace>::Scalar> + VectorSpace {}

// Enough steps of `epsilon` to span the exponent range of `f64`.
const RESCALE_LIMIT: usize = 24;

/// Rescales a vector until its squared magnitude is a normal floating-point
/// value.
///
/// Returns the rescaled vector and the factor that was applied to it. Factors
/// are powers of `epsilon`, which are powers of two, so rescaling is exact.
/// The zero vector is returned as is. Vectors with non-finite components
/// cannot be brought into range.
fn rescale<S>(vector: S) -> (S, Scalar<S>)
where
    S: InnerSpace,
    Scalar<S>: Float,
{
    let mut vector = vector;
    let mut factor = <Scalar<S> as One>::one();
    if vector.is_zero() {
        return (vector, factor);
    }
    for _ in 0..RESCALE_LIMIT {
        let magnitude_squared = vector.magnitude_squared();
        let step = if magnitude_squared.is_infinite() {
            <Scalar<S> as Float>::epsilon()
        }
        else if magnitude_squared.is_normal() || magnitude_squared.is_nan() {
            break;
        }
        else {
            <Scalar<S> as Float>::epsilon().recip()
        };
        vector = vector * step;
        factor = factor * step;
    }
    (vector, factor)
}

/// Affine space of points.
///
/// Points cannot be added to one another. The difference between two points is
/// a vector and a vector may be added to a point to translate it.
pub trait EuclideanSpace:
    Add<<Self as EuclideanSpace>::Difference, Output = Self>
    + Clone
    + Sub<Output = <Self as EuclideanSpace>::Difference>
{
    type Difference: VectorSpace;

    fn origin() -> Self;

    fn from_coordinates(coordinates: Self::Difference) -> Self {
        Self::origin() + coordinates
    }

    fn coordinates(&self) -> Self::Difference {
        self.clone() - Self::origin()
    }
}

#[cfg(all(test, feature = "geometry-nalgebra"))]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{Point2, Vector2, Vector3};
    use num::Zero;

    use crate::space::{EuclideanSpace, InnerSpace};

    #[test]
    fn magnitude_of_pythagorean_triple() {
        let vector = Vector2::new(3.0, 4.0);

        assert_abs_diff_eq!(25.0, InnerSpace::magnitude_squared(&vector));
        assert_abs_diff_eq!(5.0, InnerSpace::magnitude(&vector));
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(None, InnerSpace::normalize(Vector3::<f64>::zero()));
    }

    #[test]
    fn normalize_to_unit_length() {
        let unit = InnerSpace::normalize(Vector3::new(0.0, -2.0, 0.0)).unwrap();

        assert_abs_diff_eq!(Vector3::new(0.0, -1.0, 0.0), unit);
    }

    #[test]
    fn magnitude_of_large_and_small_vectors() {
        assert_relative_eq!(5e200, InnerSpace::magnitude(&Vector2::new(3e200, 4e200)));
        assert_relative_eq!(5e-170, InnerSpace::magnitude(&Vector2::new(3e-170, 4e-170)));
        assert_relative_eq!(5e-324, InnerSpace::magnitude(&Vector2::new(5e-324, 0.0)));
    }

    #[test]
    fn normalize_large_and_small_vectors() {
        for vector in [
            Vector2::new(1e200, 0.0),
            Vector2::new(1e-170, 0.0),
            Vector2::new(5e-324, 0.0),
            Vector2::new(f64::MAX, 0.0),
        ] {
            assert_abs_diff_eq!(
                Vector2::new(1.0, 0.0),
                InnerSpace::normalize(vector).unwrap(),
                epsilon = 1e-12
            );
        }
        assert_abs_diff_eq!(
            Vector2::new(0.6, -0.8),
            InnerSpace::normalize(Vector2::new(3e300f64, -4e300)).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn normalize_vector_with_nan_component() {
        let unit = InnerSpace::normalize(Vector2::new(f64::NAN, 1.0)).unwrap();

        assert!(unit.x.is_nan());
    }

    #[test]
    fn coordinates_round_trip() {
        let point = Point2::new(1.5, -7.0);
        let coordinates = EuclideanSpace::coordinates(&point);

        assert_eq!(Vector2::new(1.5, -7.0), coordinates);
        assert_eq!(point, <Point2<f64> as EuclideanSpace>::from_coordinates(coordinates));
    }
}
