//! Error types for the queueing simulation

use thiserror::Error;

use super::customer::CustomerState;
use super::types::{CustomerId, SimTime};

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Rejected before any event is scheduled.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Cannot schedule event at {timestamp} before current time {now}")]
    InvalidEvent { timestamp: SimTime, now: SimTime },

    #[error("Customer {customer} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        customer: CustomerId,
        from: CustomerState,
        to: CustomerState,
    },

    #[error("Release called with no busy server")]
    ResourceUnderflow,

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}
