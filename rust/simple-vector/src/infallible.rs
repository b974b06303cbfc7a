//! Divergence for trait entry points that cannot return `Result`.

use std::alloc::Layout;

use simple_vector_common::{Error, ErrorKind, Result};

/// Unwraps the result of an allocating operation the way the standard
/// collections do: allocation failure goes through
/// [`std::alloc::handle_alloc_error`], anything else panics.
pub(crate) fn unwrap_alloc<T, R>(result: Result<R>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => alloc_failed::<T>(err),
    }
}

#[cold]
#[inline(never)]
fn alloc_failed<T>(err: Error) -> ! {
    if let ErrorKind::Allocation { capacity, .. } = err.kind() {
        if let Ok(layout) = Layout::array::<T>(*capacity) {
            std::alloc::handle_alloc_error(layout);
        }
    }
    panic!("{err}")
}
