//! symslice core - slice unpacking with symbolic endpoints
//!
//! This is the single source of truth for slice unpacking semantics.
//! The CLI and the Python bindings compile this same core.
//!
//! # Architecture
//!
//! ```text
//! host slice / literal → SliceDescriptor → unpack_slice → UnpackedSlice
//!                                                            ↓
//!                                             adjust_indices (concrete only)
//!                                                            ↓
//!                                                       SliceIndices
//! ```
//!
//! # Guarantees
//!
//! - **Total**: every unpacked field is resolved, none is left absent
//! - **Safe step**: the unpacked step is nonzero and can always be negated
//! - **Symbol preserving**: symbolic start/stop pass through unchanged
//! - **Stateless**: every call is a pure function of its input

pub mod adjust;
pub mod error;
pub mod literal;
pub mod slice;
pub mod symint;

pub use adjust::{adjust_indices, SliceIndices};
pub use error::{Error, ErrorKind, Result, SliceField};
pub use literal::parse_slice;
pub use slice::{unpack_slice, Endpoint, SliceDescriptor, UnpackedSlice};
pub use symint::{ExtInt, SymVar, SymbolicInt};
