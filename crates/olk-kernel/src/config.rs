//! Executor configuration.
//!
//! [`KernelConfig`] decides how many workers a [`Kernel`](crate::Kernel)
//! fans out to and how small a partition may get. It never changes what a
//! kernel computes: every element's arithmetic is independent of the
//! partitioning.
//!
//! # Environment
//!
//! [`KernelConfig::from_env`] reads:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `OLK_THREADS` | [`KernelConfig::threads`] |
//! | `OLK_MIN_CHUNK` | [`KernelConfig::min_chunk`] |

use olk_core::{Error, Result};
use tracing::warn;

/// Default minimum number of samples handed to one worker.
pub const DEFAULT_MIN_CHUNK: usize = 4096;

/// Environment variable overriding the worker count.
pub const ENV_THREADS: &str = "OLK_THREADS";

/// Environment variable overriding the minimum partition length.
pub const ENV_MIN_CHUNK: &str = "OLK_MIN_CHUNK";

/// Kernel executor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelConfig {
    /// Worker count. `None` runs on the global rayon pool, `Some(1)` runs
    /// sequentially on the calling thread, anything larger builds a
    /// dedicated pool.
    pub threads: Option<usize>,
    /// Minimum samples per partition, so small buffers do not fan out.
    pub min_chunk: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            threads: None,
            min_chunk: DEFAULT_MIN_CHUNK,
        }
    }
}

impl KernelConfig {
    /// Default config with overrides from the environment.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(threads) = read_env(ENV_THREADS) {
            config.threads = Some(threads);
        }
        if let Some(min_chunk) = read_env(ENV_MIN_CHUNK) {
            config.min_chunk = min_chunk;
        }
        config
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(Error::invalid_parameter("thread count must be > 0"));
        }
        if self.min_chunk == 0 {
            return Err(Error::invalid_parameter("minimum chunk length must be > 0"));
        }
        Ok(())
    }

    /// Returns true if kernels run on the calling thread only.
    #[inline]
    pub fn is_sequential(&self) -> bool {
        self.threads == Some(1)
    }
}

fn read_env(name: &str) -> Option<usize> {
    let raw = std::env::var(name).ok()?;
    parse_setting(name, &raw)
}

fn parse_setting(name: &str, raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}
