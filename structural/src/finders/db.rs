//! Slow, authoritative user source over a fixed dataset.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::{FinderError, User, UserFinder};

/// Stand-in for a slow authoritative user source.
///
/// `new` seeds the fixed demo dataset; `from_users` takes an arbitrary one.
/// An optional latency is slept on every lookup to make cache hits visible.
pub struct UserDbFinder {
    users: HashMap<String, User>,
    latency: Duration,
}

impl UserDbFinder {
    pub fn new() -> Self {
        Self::from_users([
            User::new("1", "John Doe"),
            User::new("2", "Jane Smith"),
            User::new("3", "Bob Johnson"),
        ])
    }

    pub fn from_users<I: IntoIterator<Item = User>>(users: I) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for UserDbFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFinder for UserDbFinder {
    fn find(&self, user_id: &str) -> Result<Option<User>, FinderError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        debug!(user_id, "db: lookup");
        Ok(self.users.get(user_id).cloned())
    }
}
