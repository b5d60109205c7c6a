//! User create / edit form
//!
//! - view_model.rs: form signals, load and save commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::UserDetailsViewModel;
