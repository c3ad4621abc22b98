//! Form submission handlers for the account-linking workflow.
//!
//! Each handler takes the raw input values read from its form at submit time,
//! runs one exchange, and returns the text for the form's result area. The
//! handlers share nothing, so overlapping submissions are independent.

pub mod handlers;

pub use handlers::*;
