//! # KPI Dashboard Core Types
//!
//! The input records shared by every other crate in the workspace. A record is
//! plain data passed by value; `validate` is the only gate between raw user
//! input and the calculator.

pub mod error;
pub mod inputs;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use inputs::{CampaignInputs, GrowthInputs};
