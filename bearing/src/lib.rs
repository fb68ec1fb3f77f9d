//! **Bearing** provides directions and movable origins for diagram geometry.
//!
//! A [`Direction`] is a vector that has forgotten its magnitude. Types that
//! implement [`HasOrigin`] have a local origin that can be moved, which allows
//! values to be positioned and placed.
//!
//! Bearing abstracts over the linear algebra used to represent vectors and
//! points via the traits in the [`space`] module. Implementations for foreign
//! types are provided by the [`integration`] module and are enabled by Cargo
//! features.
//!
//! Please note that versions in the `0.0.*` series are experimental and
//! unstable! Use exact version constraints when specifying a dependency to
//! avoid spurious breakage.
//!
//! [`Direction`]: crate::direction::Direction
//! [`HasOrigin`]: crate::origin::HasOrigin
#![allow(unknown_lints)] // Allow clippy lints.

pub mod angle;
pub mod direction;
pub mod integration;
pub mod origin;
pub mod space;
pub mod transform;

pub mod prelude {
    //! Re-exports commonly used types and traits.
    //!
    //! Importing the contents of this module is recommended when working with
    //! directions and origins, as most operations are expressed through
    //! traits.

    pub use crate::angle::{Angle, HasPhi as _, HasTheta as _};
    pub use crate::direction::Direction;
    pub use crate::origin::HasOrigin as _;
    pub use crate::space::{EuclideanSpace as _, InnerSpace as _};
    pub use crate::transform::Transformable as _;
}
