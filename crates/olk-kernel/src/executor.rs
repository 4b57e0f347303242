//! Fork-join executor shared by every kernel.
//!
//! A [`Kernel`] owns a [`KernelConfig`] and, when a worker count above one is
//! requested, a dedicated rayon pool. Kernels hand it an immutable input and
//! a per-element (or per-triplet) function; the executor allocates the
//! output, splits the index range, and joins before returning. Each
//! partition writes a disjoint slice of the output, so no locking is
//! involved and the result is the same for any worker count.
//!
//! # Example
//!
//! ```rust
//! use olk_kernel::Kernel;
//! use olk_transfer::Curve;
//!
//! let kernel = Kernel::builder().threads(4).min_chunk(1024).build().unwrap();
//! let encoded = kernel.pointwise_map(&[0.0f32, 0.18, 1.0], &Curve::Srgb).unwrap();
//! assert_eq!(encoded.len(), 3);
//! ```

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace};

use olk_core::{Error, Result};

use crate::config::KernelConfig;

/// Configured kernel executor.
///
/// [`Kernel::default`] runs on the global rayon pool and never fails to
/// construct. Use [`Kernel::builder`] to pin the worker count.
#[derive(Debug, Default)]
pub struct Kernel {
    config: KernelConfig,
    pool: Option<ThreadPool>,
}

impl Kernel {
    /// Creates a kernel on the global rayon pool with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a kernel from an explicit config.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        config.validate()?;

        let pool = match config.threads {
            Some(n) if n > 1 => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("olk-worker-{i}"))
                    .build()
                    .map_err(|e| Error::thread_pool(e.to_string()))?;
                debug!("Built dedicated pool with {} workers", n);
                Some(pool)
            }
            _ => None,
        };

        Ok(Self { config, pool })
    }

    /// Creates a kernel configured from `OLK_THREADS` / `OLK_MIN_CHUNK`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(KernelConfig::from_env())
    }

    /// Returns a builder for fine-grained configuration.
    pub fn builder() -> KernelBuilder {
        KernelBuilder::new()
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Number of workers a call may fan out to.
    pub fn threads(&self) -> usize {
        if self.config.is_sequential() {
            return 1;
        }
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Runs `op` inside this kernel's pool.
    fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Maps every sample through `f` into a new buffer.
    pub(crate) fn map_samples<F>(&self, input: &[f32], f: F) -> Vec<f32>
    where
        F: Fn(f32) -> f32 + Sync,
    {
        if self.config.is_sequential() {
            return input.iter().map(|&x| f(x)).collect();
        }

        let min_len = self.config.min_chunk;
        trace!(len = input.len(), min_len, "map_samples: parallel dispatch");
        self.install(|| {
            input
                .par_iter()
                .with_min_len(min_len)
                .map(|&x| f(x))
                .collect()
        })
    }

    /// Maps fixed-width groups of input samples to fixed-width groups of
    /// output samples.
    ///
    /// `input.len()` must be a multiple of `in_width`; callers check this
    /// before dispatch.
    pub(crate) fn map_groups<F>(
        &self,
        input: &[f32],
        in_width: usize,
        out_width: usize,
        f: F,
    ) -> Vec<f32>
    where
        F: Fn(&[f32], &mut [f32]) + Sync,
    {
        debug_assert!(in_width > 0 && out_width > 0);
        debug_assert_eq!(input.len() % in_width, 0);

        let groups = input.len() / in_width;
        let mut output = vec![0.0f32; groups * out_width];

        if self.config.is_sequential() {
            output
                .chunks_exact_mut(out_width)
                .zip(input.chunks_exact(in_width))
                .for_each(|(out, inp)| f(inp, out));
            return output;
        }

        let min_len = (self.config.min_chunk / in_width).max(1);
        trace!(groups, in_width, out_width, min_len, "map_groups: parallel dispatch");
        self.install(|| {
            output
                .par_chunks_exact_mut(out_width)
                .zip(input.par_chunks_exact(in_width))
                .with_min_len(min_len)
                .for_each(|(out, inp)| f(inp, out));
        });
        output
    }
}

/// Builder for [`Kernel`].
///
/// # Example
///
/// ```rust
/// use olk_kernel::KernelBuilder;
///
/// let kernel = KernelBuilder::new().sequential().build().unwrap();
/// assert_eq!(kernel.threads(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KernelBuilder {
    config: KernelConfig,
}

impl KernelBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing config.
    pub fn from_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Sets the worker count.
    pub fn threads(mut self, threads: usize) -> Self {
        self.config.threads = Some(threads);
        self
    }

    /// Runs every call on the calling thread.
    pub fn sequential(self) -> Self {
        self.threads(1)
    }

    /// Sets the minimum number of samples per partition.
    pub fn min_chunk(mut self, min_chunk: usize) -> Self {
        self.config.min_chunk = min_chunk;
        self
    }

    /// Validates the settings and builds the kernel.
    pub fn build(self) -> Result<Kernel> {
        Kernel::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kernel() {
        let kernel = Kernel::new();
        assert!(kernel.threads() >= 1);
        assert_eq!(kernel.config(), &KernelConfig::default());
    }

    #[test]
    fn test_dedicated_pool() {
        let kernel = Kernel::builder().threads(3).build().unwrap();
        assert_eq!(kernel.threads(), 3);
    }

    #[test]
    fn test_builder_rejects_zero() {
        assert!(Kernel::builder().threads(0).build().is_err());
        assert!(Kernel::builder().min_chunk(0).build().is_err());
    }

    #[test]
    fn test_map_samples_sequential_and_parallel_agree() {
        let input: Vec<f32> = (0..10_000).map(|i| i as f32 * 0.001).collect();
        let seq = Kernel::builder().sequential().build().unwrap();
        let par = Kernel::builder().threads(4).min_chunk(16).build().unwrap();

        let f = |x: f32| x * x - 0.5;
        assert_eq!(seq.map_samples(&input, f), par.map_samples(&input, f));
    }

    #[test]
    fn test_map_groups_widths() {
        let kernel = Kernel::builder().threads(2).min_chunk(1).build().unwrap();
        let input = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];

        // sum each triplet into one sample
        let sums = kernel.map_groups(&input, 3, 1, |inp, out| out[0] = inp.iter().sum());
        assert_eq!(sums, vec![6.0, 15.0]);

        // empty input stays empty
        let empty = kernel.map_groups(&[], 3, 3, |_, _| unreachable!());
        assert!(empty.is_empty());
    }
}
