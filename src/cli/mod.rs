//! Command-line facing workflow, kept free of argument parsing

pub mod orchestration;

pub use orchestration::{plan_next_tag, run_tag_workflow, NextTagPlan, TagSource, WorkflowResult};
