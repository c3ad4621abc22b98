//! This crate contains the browser client for the account-linking workflow.

pub mod app;
pub use app::LinkWorkflow;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
