//! In-memory fast store used as the proxy's cache.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{FinderError, User, UserFinder};

/// In-memory user table guarded by a reader/writer lock.
///
/// Readers proceed concurrently; `add` takes the write lock. Entries are
/// keyed by `User::id` and never evicted.
pub struct UserMemoryFinder {
    users: RwLock<HashMap<String, User>>,
}

impl UserMemoryFinder {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite the record stored under `user.id`.
    pub fn add(&self, user: User) -> Result<(), FinderError> {
        let mut map = self.users.write().map_err(|_| FinderError::Poisoned)?;
        map.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn len(&self) -> Result<usize, FinderError> {
        let map = self.users.read().map_err(|_| FinderError::Poisoned)?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> Result<bool, FinderError> {
        Ok(self.len()? == 0)
    }
}

impl Default for UserMemoryFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFinder for UserMemoryFinder {
    fn find(&self, user_id: &str) -> Result<Option<User>, FinderError> {
        let map = self.users.read().map_err(|_| FinderError::Poisoned)?;
        Ok(map.get(user_id).cloned())
    }
}

#[cfg(test)]
impl UserMemoryFinder {
    /// Panic while holding the write guard so every later access fails.
    pub(crate) fn poison(&self) {
        let _ = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.users.write();
                panic!("poisoning user table");
            })
            .join()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn add_then_find() {
        let finder = UserMemoryFinder::new();
        let user = User::new("1", "Test User");
        finder.add(user.clone()).unwrap();
        let found = finder.find("1").unwrap().expect("present");
        assert_eq!(found, user);
    }

    #[test]
    fn missing_user_is_none_not_error() {
        let finder = UserMemoryFinder::new();
        assert!(finder.find("999").unwrap().is_none());
        assert!(finder.is_empty().unwrap());
    }

    #[test]
    fn add_overwrites_existing_entry() {
        let finder = UserMemoryFinder::new();
        finder.add(User::new("1", "Old")).unwrap();
        finder.add(User::new("1", "New")).unwrap();
        assert_eq!(finder.len().unwrap(), 1);
        assert_eq!(finder.find("1").unwrap().unwrap().name, "New");
    }

    #[test]
    fn concurrent_add_and_find() {
        let finder = UserMemoryFinder::new();
        thread::scope(|s| {
            for i in 0..100 {
                let finder = &finder;
                s.spawn(move || {
                    let id = i.to_string();
                    finder.add(User::new(id.clone(), "User")).unwrap();
                    let found = finder.find(&id).unwrap();
                    assert_eq!(found.map(|u| u.id), Some(id));
                });
            }
        });
        assert_eq!(finder.len().unwrap(), 100);
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let finder = UserMemoryFinder::new();
        finder.poison();
        assert!(matches!(finder.find("1"), Err(FinderError::Poisoned)));
        assert!(matches!(
            finder.add(User::new("1", "x")),
            Err(FinderError::Poisoned)
        ));
    }
}
