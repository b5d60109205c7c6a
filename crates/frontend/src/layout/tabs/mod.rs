//! Tab management: page wrapper, key → view registry and tab titles.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{edit_tab_key, new_tab_key, tab_label_for_key};
