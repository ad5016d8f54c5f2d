//! Read-only views over the stores and the seam they draw through.

pub mod derive;
pub mod flat_list;
pub mod grouped_list;
pub mod terminal;

use std::fmt;

use crate::domain::User;

pub use derive::{group_by_initial, visible_users, UserGroup};
pub use flat_list::FlatListView;
pub use grouped_list::GroupedListView;
pub use terminal::TerminalRenderer;

/// One rendered output of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    UserList(Vec<User>),
    GroupedUserList(Vec<UserGroup>),
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::UserList(users) => {
                writeln!(f, "== User List ==")?;
                for user in users {
                    writeln!(f, "  - {}", user.name)?;
                }
            }
            Frame::GroupedUserList(groups) => {
                writeln!(f, "== Grouped User List ==")?;
                for group in groups {
                    writeln!(f, "  [{}]", group.initial)?;
                    for user in &group.members {
                        writeln!(f, "    - {}", user.name)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Where views put their frames.
pub trait Renderer {
    fn draw(&self, frame: &Frame);

    /// Short feedback line unrelated to any view, e.g. a rejected command.
    fn notice(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_list_renders_one_line_per_user() {
        let frame = Frame::UserList(vec![User::new("Ann"), User::new("Bo")]);
        assert_eq!(frame.to_string(), "== User List ==\n  - Ann\n  - Bo\n");
    }

    #[test]
    fn empty_list_renders_only_the_heading() {
        assert_eq!(Frame::UserList(Vec::new()).to_string(), "== User List ==\n");
    }

    #[test]
    fn grouped_list_renders_initials() {
        let frame = Frame::GroupedUserList(group_by_initial(&[
            User::new("ann"),
            User::new("Bo"),
        ]));
        assert_eq!(
            frame.to_string(),
            "== Grouped User List ==\n  [A]\n    - ann\n  [B]\n    - Bo\n"
        );
    }
}
