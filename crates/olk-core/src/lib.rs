//! # olk-core
//!
//! Core types shared by the olk color-transform kernels.
//!
//! - [`Error`], [`Result`] - the error taxonomy every kernel reports through
//! - [`BufferView`] - a borrowed `f32` sample buffer with a declared shape
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other olk crates depend on it:
//!
//! ```text
//! olk-core (this crate)
//!    ^
//!    |
//!    +-- olk-transfer (curve evaluators)
//!    +-- olk-math (color matrix)
//!    +-- olk-lut (1D lookup tables)
//!    +-- olk-kernel (parallel kernels)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;

pub use buffer::BufferView;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use olk_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::BufferView;
    pub use crate::error::{Error, Result};
}
