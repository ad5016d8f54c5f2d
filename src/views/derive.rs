//! Derived data for the list views. Pure functions of the store contents,
//! recomputed on every render.

use std::collections::HashMap;

use crate::domain::User;

/// Users sharing one uppercased initial, in the order they were seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    pub initial: String,
    pub members: Vec<User>,
}

/// Users whose name contains `filter`, ignoring case, in their original order.
pub fn visible_users(users: &[User], filter: &str) -> Vec<User> {
    users
        .iter()
        .filter(|user| user.matches(filter))
        .cloned()
        .collect()
}

/// Single pass grouping by [`User::initial`].
///
/// Groups come out in first-seen order, not alphabetically.
pub fn group_by_initial(users: &[User]) -> Vec<UserGroup> {
    let mut groups: Vec<UserGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for user in users {
        let initial = user.initial();
        match index.get(&initial) {
            Some(&slot) => groups[slot].members.push(user.clone()),
            None => {
                index.insert(initial.clone(), groups.len());
                groups.push(UserGroup {
                    initial,
                    members: vec![user.clone()],
                });
            }
        }
    }

    groups
}
