//! Core definitions (error types and verification helpers), relied upon by all
//! simple-vector-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
