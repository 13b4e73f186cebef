//! Read-through caching proxy over a [`UserFinder`](crate::UserFinder).

use std::sync::Arc;

use tracing::{info, warn};

use crate::finders::memory::UserMemoryFinder;
use crate::{FinderError, User, UserFinder};

/// Read-through cache in front of a slower [`UserFinder`].
///
/// Lookups check the in-memory store first and fall back to the backing
/// source on a miss, caching whatever it returns. The cache is shared via
/// `Arc` so callers can keep a handle to inspect or pre-populate it.
///
/// Concurrent misses for the same id may all reach the backing source; the
/// resulting inserts overwrite each other with identical records.
pub struct UserFinderProxy<B: UserFinder> {
    backing: B,
    cache: Arc<UserMemoryFinder>,
}

impl<B: UserFinder> UserFinderProxy<B> {
    pub fn new(backing: B, cache: Arc<UserMemoryFinder>) -> Self {
        Self { backing, cache }
    }

    pub fn cache(&self) -> &UserMemoryFinder {
        &self.cache
    }

    /// Resolve a user, consulting the cache before the backing source.
    ///
    /// Unlike a plain finder, a user missing from both stores is an error.
    pub fn lookup(&self, user_id: &str) -> Result<User, FinderError> {
        match self.cache.find(user_id) {
            Ok(Some(user)) => {
                info!(user_id, "user found in cache");
                return Ok(user);
            }
            Ok(None) => {}
            Err(e) => return Err(FinderError::CacheLookup(Box::new(e))),
        }

        let user = self
            .backing
            .find(user_id)
            .map_err(|e| FinderError::BackingLookup(Box::new(e)))?
            .ok_or_else(|| FinderError::NotFound(user_id.to_string()))?;

        // A failed insert only leaves the cache cold; the record is still good.
        if let Err(e) = self.cache.add(user.clone()) {
            warn!(user_id, error = %e, "failed to cache user");
        } else {
            info!(user_id, "user fetched from backing store and cached");
        }
        Ok(user)
    }
}

impl<B: UserFinder> UserFinder for UserFinderProxy<B> {
    fn find(&self, user_id: &str) -> Result<Option<User>, FinderError> {
        self.lookup(user_id).map(Some)
    }
}
