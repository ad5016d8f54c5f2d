use tracing::{debug, info, instrument};

use crate::domain::User;
use crate::store::UserStore;

/// Name entry form. Keeps its own uncommitted buffer and writes to the
/// [`UserStore`] only on submit.
pub struct AddUserForm {
    users: UserStore,
    buffer: String,
}

impl AddUserForm {
    pub fn new(users: UserStore) -> Self {
        Self {
            users,
            buffer: String::new(),
        }
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Commit the buffer as a new user.
    ///
    /// A blank buffer is ignored without feedback and left as typed.
    /// Otherwise the trimmed name is added and the buffer cleared.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Option<User> {
        let name = self.buffer.trim();
        if name.is_empty() {
            debug!("Ignoring blank name");
            return None;
        }

        let user = User::new(name);
        self.users.add_user(user.clone());
        self.buffer.clear();

        info!(user_name = %user.name, "User submitted");
        Some(user)
    }
}
