//! Product create / edit form with image upload
//!
//! - view_model.rs: form signals, category picker, image commands
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::BookDetails;
pub use view_model::BookDetailsViewModel;
