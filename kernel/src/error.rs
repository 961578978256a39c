use std::fmt::Display;

use error_stack::Context;

use crate::validation::ValidationError;

#[derive(Debug)]
pub enum KernelError {
    /// Displays as the canonical validation message.
    Validation(ValidationError),
    NotFound,
    Concurrency,
    Timeout,
    Internal,
}

impl KernelError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            KernelError::Validation(violation) => Some(violation),
            _ => None,
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(violation) => write!(f, "{violation}"),
            KernelError::NotFound => write!(f, "Requested resource not found"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
