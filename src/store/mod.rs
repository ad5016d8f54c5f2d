//! Application state: one store per piece of state, each a cloneable handle
//! over a shared [`Observable`].

pub mod filter_store;
pub mod observable;
pub mod user_store;

pub use filter_store::FilterStore;
pub use observable::{Observable, Subscription};
pub use user_store::UserStore;
