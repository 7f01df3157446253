//! Collection construction macro.
//!
//! # Example
//!
//! ```
//! use fluent_collection_core::{Collection, collection};
//!
//! let empty: Collection<i32> = collection![];
//! let numbers = collection![1, 2, 3];
//! let filled = collection!["x"; 3];
//!
//! assert!(empty.is_empty());
//! assert_eq!(numbers.to_string(), "[1, 2, 3]");
//! assert_eq!(filled.to_string(), "[x, x, x]");
//! ```

/// Build a [`Collection`](crate::Collection) from a list of elements.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `collection![]` | Empty collection |
/// | `collection![a, b, c]` | Elements in the given order |
/// | `collection![value; n]` | `n` clones of `value`, as [`fill`](crate::Collection::fill) |
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };

    ($value:expr; $count:expr) => {{
        let mut __collection = $crate::Collection::new();
        __collection.fill($count, $value);
        __collection
    }};

    ($($element:expr),+ $(,)?) => {
        $crate::Collection::from([$($element),+])
    };
}
