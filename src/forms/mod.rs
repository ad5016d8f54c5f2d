pub mod add_user;
pub mod filter;

pub use add_user::AddUserForm;
pub use filter::FilterForm;

/// Which form an input event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    AddUser,
    Filter,
}
