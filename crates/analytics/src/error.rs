use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Input validation failed: {0}")]
    InvalidInput(#[from] CoreError),
}
