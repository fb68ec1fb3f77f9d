#![cfg(feature = "geometry-nalgebra")]

#[doc(hidden)]
pub use ::nalgebra::*;

use num::traits::FloatConst;
use num::Float;

use crate::angle::{Angle, HasPhi, HasTheta};
use crate::origin::{self, HasOrigin};
use crate::space::{AbstractSpace, Dot, EuclideanSpace};
// `Transform` is named by path, since `nalgebra::Transform` is re-exported here.
use crate::transform::Transformable;

macro_rules! impl_space {
    (vector => $v:ident, point => $p:ident) => {
        impl<T> AbstractSpace for $v<T>
        where
            T: RealField,
        {
            type Scalar = T;
        }

        impl<T> Dot for $v<T>
        where
            T: RealField,
        {
            type Output = T;

            fn dot(self, other: Self) -> Self::Output {
                Matrix::dot(&self, &other)
            }
        }

        impl<T> EuclideanSpace for $p<T>
        where
            T: RealField,
        {
            type Difference = $v<T>;

            fn origin() -> Self {
                $p::origin()
            }

            fn from_coordinates(coordinates: Self::Difference) -> Self {
                $p::from(coordinates)
            }

            fn coordinates(&self) -> Self::Difference {
                self.coords.clone()
            }
        }

        impl<T> HasOrigin for $p<T>
        where
            T: RealField,
        {
            type Position = Self;

            fn move_origin_to(self, origin: Self::Position) -> Self {
                origin::relocate(self, origin)
            }
        }

        impl<T> Transformable for $v<T>
        where
            T: RealField,
        {
            type Space = Self;

            fn transform<F>(self, transform: &F) -> Self
            where
                F: crate::transform::Transform<Self::Space>,
            {
                transform.apply(self)
            }
        }

        impl<T> Transformable for $p<T>
        where
            T: RealField,
        {
            type Space = $v<T>;

            fn transform<F>(self, transform: &F) -> Self
            where
                F: crate::transform::Transform<Self::Space>,
            {
                transform.apply_point(self)
            }
        }
    };
}
impl_space!(vector => Vector2, point => Point2);
impl_space!(vector => Vector3, point => Point3);

macro_rules! impl_transform {
    (vector => $v:ident, linear => $m:ident, rotation => $r:ident, isometry => $i:ident) => {
        impl<T> crate::transform::Transform<$v<T>> for $m<T>
        where
            T: RealField,
        {
            fn apply(&self, vector: $v<T>) -> $v<T> {
                self * vector
            }

            fn translation(&self) -> $v<T> {
                $v::zeros()
            }
        }

        impl<T> crate::transform::Transform<$v<T>> for $r<T>
        where
            T: RealField,
        {
            fn apply(&self, vector: $v<T>) -> $v<T> {
                self.transform_vector(&vector)
            }

            fn translation(&self) -> $v<T> {
                $v::zeros()
            }
        }

        impl<T> crate::transform::Transform<$v<T>> for $i<T>
        where
            T: RealField,
        {
            fn apply(&self, vector: $v<T>) -> $v<T> {
                self.transform_vector(&vector)
            }

            fn translation(&self) -> $v<T> {
                self.translation.vector.clone()
            }
        }
    };
}
impl_transform!(vector => Vector2, linear => Matrix2, rotation => Rotation2, isometry => Isometry2);
impl_transform!(vector => Vector3, linear => Matrix3, rotation => Rotation3, isometry => Isometry3);

impl<T> HasTheta for Vector2<T>
where
    T: Float + FloatConst + RealField,
{
    type Real = T;

    fn theta(&self) -> Angle<Self::Real> {
        Angle::atan2(self.y, self.x)
    }
}

impl<T> HasTheta for Vector3<T>
where
    T: Float + FloatConst + RealField,
{
    type Real = T;

    fn theta(&self) -> Angle<Self::Real> {
        Angle::atan2(self.y, self.x)
    }
}

impl<T> HasPhi for Vector3<T>
where
    T: Float + FloatConst + RealField,
{
    type Real = T;

    fn phi(&self) -> Angle<Self::Real> {
        Angle::atan2(self.z, Float::hypot(self.x, self.y))
    }
}
