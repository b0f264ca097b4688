//! Filtering and presentation of places.
//!
//! Everything in here is independent of the browser. The
//! rendering targets are only known through the traits in
//! [`view`].

pub mod config;
pub mod controller;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod label;
pub mod modal;
pub mod presenter;
pub mod sort;
pub mod store;
pub mod text;
pub mod view;

pub use self::{
    config::Config,
    controller::{Controller, Views},
    criteria::{CriteriaChange, FilterCriteria},
    error::Error,
};
