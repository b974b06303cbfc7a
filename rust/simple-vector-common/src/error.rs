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

    pub fn out_of_range(index: usize, size: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, size }.into())
    }

    pub fn allocation(capacity: usize, elem_size: usize) -> Error {
        Error(
            ErrorKind::Allocation {
                capacity,
                elem_size,
            }
            .into(),
        )
    }

    pub fn capacity_overflow(requested: &'static str) -> Error {
        Error(ErrorKind::CapacityOverflow { requested }.into())
    }

    /// Returns `true` for the checked-access failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` if the error was raised while obtaining storage, either
    /// by the allocator itself or by the capacity arithmetic preceding it.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Allocation { .. } | ErrorKind::CapacityOverflow { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for size {size}")]
    OutOfRange { index: usize, size: usize },

    #[error("failed to allocate {capacity} slots of {elem_size} bytes")]
    Allocation { capacity: usize, elem_size: usize },

    #[error("capacity overflow in {requested}")]
    CapacityOverflow { requested: &'static str },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
