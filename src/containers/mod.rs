//! Container types
//!
//! ## Core Containers
//!
//! - **`Array<T>`** - Exact-size sequence container that reallocates on every
//!   size change, with filter, partition sort and concatenation

pub mod array;

pub use array::{Array, FilterOp, SortOrder};
