//! Generic paginated list core shared by every entity list.
//!
//! The pure parts ([`query`], [`state`], [`selection`], [`form`]) carry all
//! decisions and are unit-tested; [`controller`] wires them to Leptos signals,
//! the HTTP client and the notification sink.

pub mod controller;
pub mod form;
pub mod query;
pub mod record;
pub mod selection;
pub mod state;

pub use controller::{use_list_controller, ListController};
pub use form::FormState;
pub use query::ListQuery;
pub use record::{ListRecord, ListResource};
pub use selection::{RowAction, Selection, SelectionStep};
pub use state::{ListState, LoadOutcome, LoadTicket};
