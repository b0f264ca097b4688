#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # placemap-entities
//!
//! Reusable, agnostic domain entities for the placemap directory.
//!
//! The entities only contain generic functionality that does not reveal any
//! presentation-specific logic.

pub mod category;
pub mod geo;
pub mod id;
pub mod links;
pub mod place;
pub mod rating;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
