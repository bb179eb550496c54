//! # exactvec: exact-size sequence container
//!
//! This crate provides `Array<T>`, a generic sequence container with value
//! semantics. It keeps no spare capacity: every operation that changes the
//! size allocates a new buffer of exactly the new size.
//!
//! ## Key Features
//!
//! - **Value semantics**: cloning deep-copies the buffer, arrays never share storage
//! - **Positional mutators**: append, insert and remove at either end or any index
//! - **Search and filter**: linear search and `<`/`>`/`=` filtering against a value
//! - **Partition sort**: recursive three-way quicksort, ascending or descending
//! - **Explicit errors**: recoverable failures are logged and returned as [`ArrayError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use exactvec::{Array, SortOrder};
//!
//! let mut array = Array::new();
//! for value in [5, 3, 1, 4, 2] {
//!     array.append(value);
//! }
//!
//! array.sort(SortOrder::Ascending);
//! assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
//!
//! let big = array.filter('>', &3).unwrap();
//! assert_eq!(big.count(), 2);
//!
//! // Recoverable errors leave the array as it was
//! assert!(array.insert_at(-1, 0).is_err());
//! assert_eq!(array.count(), 5);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use config::{Config, ReportConfig, ReportLevel};
pub use containers::{Array, FilterOp, SortOrder};
pub use error::{ArrayError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() {
    log::debug!("Initializing exactvec v{}", VERSION);
}

/// Install a report configuration, then initialize the library
pub fn init_with_config(config: ReportConfig) -> Result<()> {
    config::set_report_config(config)?;
    init();
    Ok(())
}
