pub mod link_workflow;

pub use link_workflow::LinkWorkflow;
