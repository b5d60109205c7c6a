use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;

/// A row of an entity list.
pub trait ListRecord: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Id: Clone + PartialEq + Eq + Hash + Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    /// Human readable name used in confirmations and notifications.
    fn label(&self) -> String;
}

/// Describes one backend collection: where it lives, how its page envelope is
/// keyed and which filter it accepts.
pub trait ListResource: 'static {
    type Record: ListRecord;
    type Filter: Clone + Default + PartialEq + Serialize + Send + Sync + 'static;

    /// Collection path, e.g. `/api/categories`.
    const COLLECTION: &'static str;
    /// Key of the record array in the page envelope.
    const ENVELOPE_KEY: &'static str;
    /// Singular noun for messages, e.g. `"Category"`.
    const NOUN: &'static str;
}
