#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{format, string::String, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod collection;
pub mod error;
mod macros;

pub use collection::Collection;
pub use error::{Error, Result};
