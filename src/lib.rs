//! Fluent Collection - an ordered, chainable list container
//!
//! # Overview
//!
//! [`Collection<T>`] is a thin layer over `Vec<T>` with an expression-oriented
//! API: most operations mutate the collection in place and return `&mut Self`
//! so calls can be chained. Index-based operations report bad indices as
//! [`Error`] values instead of panicking, and never mutate on failure.
//!
//! # Quick Start
//!
//! ```
//! use fluent_collection::{Collection, Error, collection};
//!
//! let mut numbers = Collection::new();
//! numbers
//!     .generate(7, |i| i + 1)
//!     .cull(|n| n % 2 != 0)
//!     .each(|n| n * n);
//! assert_eq!(numbers.to_string(), "[1, 9, 25, 49]");
//!
//! numbers.trim(1, 1)?;
//! assert_eq!(numbers.to_string(), "[9, 25]");
//!
//! assert_eq!(numbers.pop_from(5), Err(Error::IndexOutOfRange { index: 5, len: 2 }));
//!
//! let halves = collection![1, 2, 3, 4].split(0)?;
//! assert_eq!(halves.to_string(), "[[1], [2, 3, 4]]");
//! # Ok::<(), Error>(())
//! ```
//!
//! # In-place mutation
//!
//! Chaining methods return the *same* collection, not a copy. Clone first if a
//! separate value is wanted:
//!
//! ```
//! use fluent_collection::collection;
//!
//! let original = collection![1, 2, 3];
//! let mut doubled = original.clone();
//! doubled.each(|n| n * 2);
//!
//! assert_eq!(original.to_string(), "[1, 2, 3]");
//! assert_eq!(doubled.to_string(), "[2, 4, 6]");
//! ```

pub use fluent_collection_core::collection;
pub use fluent_collection_core::{Collection, Error, Result};
