//! A growable, contiguous, indexable sequence with explicit control over
//! capacity versus logical size.
//!
//! `SimpleVector<T>` owns exactly one [`OwnedBuffer`] of `capacity` slots and
//! keeps the first `size` of them live. Slots past `size` always hold valid
//! (default-constructed or moved-from) values, never uninitialized memory.
//!
//! Every operation that needs more storage builds the new buffer completely
//! before adopting it, so a failed allocation leaves the vector exactly as it
//! was before the call.
//!
//! ```
//! use simple_vector::{SimpleVector, reserve_hint};
//!
//! let mut v = SimpleVector::new();
//! v.push_back(1).unwrap();
//! v.push_back(2).unwrap();
//! v.insert(v.begin() + 1, 5).unwrap();
//! assert_eq!(v, [1, 5, 2]);
//!
//! v.erase(v.begin());
//! v.resize(4).unwrap();
//! assert_eq!(v, [5, 2, 0, 0]);
//! assert!(v.at(4).unwrap_err().is_out_of_range());
//!
//! let hinted = SimpleVector::<String>::with_capacity_hint(reserve_hint(16)).unwrap();
//! assert_eq!((hinted.size(), hinted.capacity()), (0, 16));
//! ```

pub mod capacity_hint;
pub mod cursor;
pub mod growth;
mod infallible;
pub mod iter;
mod traits;
pub mod vector;

pub use capacity_hint::{CapacityHint, reserve_hint};
pub use cursor::Cursor;
pub use iter::IntoIter;
pub use simple_vector_buffer::OwnedBuffer;
pub use simple_vector_common::{Error, ErrorKind, Result};
pub use vector::SimpleVector;

/// Creates a [`SimpleVector`] from a literal list of values, in order.
///
/// `simple_vector![a, b, c]` yields size and capacity 3;
/// `simple_vector![value; n]` yields `n` clones of `value`.
///
/// Like `vec!`, allocation failure aborts instead of returning an error; use
/// [`SimpleVector::from_sequence`] for the fallible form.
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
