//! Wire contracts between the bookstore admin frontend and its REST backend.
//!
//! Records and drafts for every managed entity live under [`domain`], the
//! pagination envelope and client-side validation helpers under [`shared`],
//! and login payloads under [`system`].

pub mod domain;
pub mod shared;
pub mod system;
