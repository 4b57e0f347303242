//! Channel expander: single channel to interleaved RGB.

use tracing::debug;

use olk_core::{BufferView, Result};

use crate::{Kernel, rejected};

impl Kernel {
    /// Replicates each sample into an RGB triplet.
    ///
    /// `output[3k] = output[3k + 1] = output[3k + 2] = input[k]`
    ///
    /// ```rust
    /// use olk_kernel::Kernel;
    ///
    /// let rgb = Kernel::new().expand_channels(&[0.2f32, 0.5]).unwrap();
    /// assert_eq!(rgb, vec![0.2, 0.2, 0.2, 0.5, 0.5, 0.5]);
    /// ```
    pub fn expand_channels<'a>(&self, input: impl Into<BufferView<'a>>) -> Result<Vec<f32>> {
        let input: BufferView<'a> = input.into();
        let samples = input
            .require_1d()
            .map_err(|e| rejected("expand_channels", e))?;

        debug!(len = samples.len(), threads = self.threads(), "expand_channels");
        Ok(self.map_groups(samples, 1, 3, |inp, out| out.fill(inp[0])))
    }
}
