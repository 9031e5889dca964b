//! Data model shared by every stage of an audit.
//!
//! The types here are plain data: signals scraped from a catalog page, the
//! derived dataset identifier, and the column profile of a downloaded table.
//! Scores and validation outcomes live with the code that produces them
//! ([`crate::quality`], [`crate::validation`]).

mod dataset;
mod profile;
mod signals;

pub use dataset::*;
pub use profile::*;
pub use signals::*;
