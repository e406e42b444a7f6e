use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn allocation_failed(requested: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::AllocationFailed { requested, source }.into())
    }

    pub fn capacity_overflow(capacity: usize, additional: usize) -> Error {
        Error(
            ErrorKind::CapacityOverflow {
                capacity,
                additional,
            }
            .into(),
        )
    }

    /// Returns `true` if the error was caused by the allocator or by a
    /// capacity computation that does not fit in `usize`.
    pub fn is_allocation_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::AllocationFailed { .. } | ErrorKind::CapacityOverflow { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("failed to allocate {requested} bytes")]
    AllocationFailed {
        requested: usize,
        source: TryReserveError,
    },

    #[error("capacity overflow: {capacity} + {additional} bytes")]
    CapacityOverflow { capacity: usize, additional: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(Box::new(kind))
    }
}
