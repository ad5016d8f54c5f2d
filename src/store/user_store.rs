use tracing::{debug, instrument};

use super::{Observable, Subscription};
use crate::domain::User;

/// Sole owner of the user collection.
///
/// Handles are cheap to clone and all point at the same list. Insertion
/// order is preserved and duplicates are kept; validation belongs to the
/// caller.
#[derive(Clone)]
pub struct UserStore {
    users: Observable<Vec<User>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Observable::new(Vec::new()),
        }
    }

    #[instrument(fields(user_name = %user.name), skip(self, user))]
    pub fn add_user(&self, user: User) {
        self.users.update(|users| users.push(user));
        debug!(user_count = self.len(), "User added");
    }

    /// Snapshot of the current users in insertion order.
    pub fn users(&self) -> Vec<User> {
        self.users.get()
    }

    pub fn len(&self) -> usize {
        self.users.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.users.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.users.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn users_come_back_in_call_order() {
        let store = UserStore::new();
        for name in ["Carol", "alice", "Bob", "alice"] {
            store.add_user(User::new(name));
        }

        let names: Vec<String> = store.users().into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Carol", "alice", "Bob", "alice"]);
    }

    #[test]
    fn repeated_reads_are_identical() {
        let store = UserStore::new();
        store.add_user(User::new("Dana"));
        assert_eq!(store.users(), store.users());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn clones_share_state_and_notify() {
        let store = UserStore::new();
        let other = store.clone();
        let calls = Rc::new(Cell::new(0));
        let _sub = {
            let calls = Rc::clone(&calls);
            store.subscribe(move || calls.set(calls.get() + 1))
        };

        other.add_user(User::new("Eve"));

        assert_eq!(calls.get(), 1);
        assert_eq!(store.users(), vec![User::new("Eve")]);
    }
}
