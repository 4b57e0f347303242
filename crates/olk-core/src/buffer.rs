//! Borrowed sample buffers with a declared shape.
//!
//! Kernels operate on flat `f32` data. Hosts often hold images as
//! `height x width x channels` arrays, so a [`BufferView`] carries the shape
//! the caller declared alongside the borrowed samples. Kernels that require
//! flat input check [`BufferView::require_1d`] and refuse anything else
//! instead of guessing a layout.
//!
//! # Example
//!
//! ```rust
//! use olk_core::BufferView;
//!
//! let pixels = vec![0.0f32; 2 * 2 * 3];
//!
//! // A 2x2 RGB image
//! let image = BufferView::new(&pixels, &[2, 2, 3]).unwrap();
//! assert!(image.require_1d().is_err());
//!
//! // Flattened it is accepted
//! assert_eq!(image.flatten().require_1d().unwrap().len(), 12);
//! ```

use crate::{Error, Result};

/// Maximum number of dimensions a view can declare.
pub const MAX_DIMS: usize = 4;

/// A borrowed `f32` buffer together with its declared shape.
///
/// Plain slices, vectors and arrays convert into a 1D view via [`From`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferView<'a> {
    data: &'a [f32],
    dims: [usize; MAX_DIMS],
    ndim: usize,
}

impl<'a> BufferView<'a> {
    /// Creates a view with an explicit shape.
    ///
    /// The product of `shape` must equal `data.len()`, and at most
    /// [`MAX_DIMS`] dimensions are accepted.
    pub fn new(data: &'a [f32], shape: &[usize]) -> Result<Self> {
        if shape.is_empty() || shape.len() > MAX_DIMS {
            return Err(Error::shape_mismatch(
                format!("1 to {MAX_DIMS} dimensions"),
                format!("{} dimensions", shape.len()),
            ));
        }

        let count = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| Error::shape_mismatch("shape within usize", format!("{shape:?}")))?;
        if count != data.len() {
            return Err(Error::shape_mismatch(
                format!("{count} elements for shape {shape:?}"),
                format!("{} elements", data.len()),
            ));
        }

        let mut dims = [0; MAX_DIMS];
        dims[..shape.len()].copy_from_slice(shape);
        Ok(Self {
            data,
            dims,
            ndim: shape.len(),
        })
    }

    /// Creates a one-dimensional view.
    #[inline]
    pub fn flat(data: &'a [f32]) -> Self {
        let mut dims = [0; MAX_DIMS];
        dims[0] = data.len();
        Self { data, dims, ndim: 1 }
    }

    /// Returns the declared shape.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.dims[..self.ndim]
    }

    /// Returns the number of declared dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the samples regardless of shape.
    #[inline]
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// Returns a 1D view over the same samples.
    #[inline]
    pub fn flatten(&self) -> Self {
        Self::flat(self.data)
    }

    /// Returns the samples if the view is one-dimensional.
    pub fn require_1d(&self) -> Result<&'a [f32]> {
        if self.ndim != 1 {
            return Err(Error::shape_mismatch(
                "1-dimensional buffer",
                format!("shape {:?}", self.shape()),
            ));
        }
        Ok(self.data)
    }
}

impl<'a> From<&'a [f32]> for BufferView<'a> {
    fn from(data: &'a [f32]) -> Self {
        Self::flat(data)
    }
}

impl<'a> From<&'a Vec<f32>> for BufferView<'a> {
    fn from(data: &'a Vec<f32>) -> Self {
        Self::flat(data.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f32; N]> for BufferView<'a> {
    fn from(data: &'a [f32; N]) -> Self {
        Self::flat(data.as_slice())
    }
}
