//! User Interface Components
//!
//! - **forms**: the create-link, submit-credentials and fetch-data forms
//! - **display**: result areas
//! - **inputs**: controlled input fields
//!
//! Element ids follow the document contract of the linking page, e.g.
//! `create-link-form`, `create-link-site` and `create-link-result`.

pub mod display;
pub mod forms;
pub mod inputs;
