//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod audit;
mod vocab;

pub use audit::{audit_urls, exit_code_for, read_url_file, run_audit, UrlSource};
pub use vocab::{run_vocab_refresh, run_vocab_show};
