//! Space, transform, and polar angle traits for linear algebra crates.
//!
//! Directions and origins are generic over the traits in [`space`] and
//! [`transform`]. Each sub-module of `integration` implements those traits for
//! the vectors, points, and transformations of one linear algebra crate and is
//! compiled only when the matching `geometry-*` Cargo feature is enabled.
//!
//! A sub-module also re-exports its crate in full. Depending on Bearing alone
//! and importing types from here guarantees that they are the same version
//! that the trait implementations target. These re-exports are hidden from the
//! documentation.
//!
//! # Examples
//!
//! Taking points and vectors from the re-exported [`nalgebra`]:
//!
//! ```rust
//! use bearing::integration::nalgebra::{Point2, Vector2};
//! use bearing::prelude::*;
//!
//! let direction = Direction::between(Point2::new(1.0, 1.0), Point2::new(1.0, 0.0));
//! assert_eq!(Vector2::new(0.0, 1.0), direction.unit_vector().unwrap());
//! ```
//!
//! [`nalgebra`]: https://crates.io/crates/nalgebra
//! [`space`]: crate::space
//! [`transform`]: crate::transform

// Feature modules. These are empty unless Cargo features are enabled.
pub mod nalgebra;
