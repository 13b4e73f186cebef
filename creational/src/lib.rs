//! Creational patterns.
//!
//! - [`builder`]: chainable setters accumulating into an immutable value.
//! - [`singleton`]: one lazily constructed, process-wide instance.
//!
//! The two modules are independent of each other.

pub mod builder;
pub mod singleton;

pub use builder::{User, UserBuilder};
pub use singleton::{instance, Singleton};
