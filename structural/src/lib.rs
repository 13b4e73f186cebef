//! Structural patterns.
//!
//! Holds the user lookup port ([`UserFinder`]), its record type and error
//! definitions. Concrete finders live under [`finders`]; [`proxy`] composes a
//! fast in-memory store with a slow backing source behind the same port.
//! [`adapter`] is unrelated to the rest and only shares the crate.

use serde::{Deserialize, Serialize};

/// A user record as returned by lookups.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lookup port for users by identifier.
///
/// `Ok(None)` means the source has no such record; `Err` means the lookup
/// itself failed.
pub trait UserFinder: Send + Sync {
    fn find(&self, user_id: &str) -> Result<Option<User>, FinderError>;
}

impl<F: UserFinder + ?Sized> UserFinder for std::sync::Arc<F> {
    fn find(&self, user_id: &str) -> Result<Option<User>, FinderError> {
        (**self).find(user_id)
    }
}

/// Errors raised by finders and the caching proxy.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("{0}")]
    Backend(String),
    #[error("lock poisoned")]
    Poisoned,
    #[error("memory lookup error: {0}")]
    CacheLookup(#[source] Box<FinderError>),
    #[error("db lookup error: {0}")]
    BackingLookup(#[source] Box<FinderError>),
    #[error("user {0} not found")]
    NotFound(String),
}

pub mod adapter;
pub mod finders;
pub mod proxy;

pub use finders::db::UserDbFinder;
pub use finders::memory::UserMemoryFinder;
pub use proxy::UserFinderProxy;
