//! Resource limits for decompression.
//!
//! An LZ4 blob declares its output size up front in a 4-byte prefix, so a
//! short hostile input can ask for up to 4 GiB. [`ResourceLimits`] caps what
//! the [`Unpacker`](crate::Unpacker) is willing to allocate.

use crate::{Error, Result};

/// Limits applied while unpacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum declared size of a decompressed blob, in bytes.
    pub max_output_size: usize,
}

impl Default for ResourceLimits {
    /// Creates resource limits with the following default values:
    ///
    /// | Limit | Default Value | Description |
    /// |-------|---------------|-------------|
    /// | `max_output_size` | 256 MiB | Maximum decompressed blob size |
    fn default() -> Self {
        Self {
            max_output_size: 256 << 20,
        }
    }
}

impl ResourceLimits {
    /// Creates new resource limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates resource limits with no restrictions.
    pub fn unlimited() -> Self {
        Self {
            max_output_size: usize::MAX,
        }
    }

    /// Sets the maximum decompressed blob size.
    pub fn max_output_size(mut self, max: usize) -> Self {
        self.max_output_size = max;
        self
    }

    /// Checks a declared output size against the limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceLimitExceeded`] if `size` is above the limit.
    pub fn check_output_size(&self, size: usize) -> Result<()> {
        if size > self.max_output_size {
            log::warn!(
                "Declared output size {} exceeds limit {}, rejecting",
                size,
                self.max_output_size
            );
            return Err(Error::ResourceLimitExceeded(format!(
                "declared output size {} exceeds limit {}",
                size, self.max_output_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = ResourceLimits::new();
        assert_eq!(limits.max_output_size, 256 * 1024 * 1024);
        assert!(limits.check_output_size(1024).is_ok());
        assert!(limits.check_output_size(usize::MAX).is_err());
    }

    #[test]
    fn test_builder() {
        let limits = ResourceLimits::default().max_output_size(10);
        assert!(limits.check_output_size(10).is_ok());
        assert!(matches!(
            limits.check_output_size(11),
            Err(Error::ResourceLimitExceeded(_))
        ));
    }

    #[test]
    fn test_unlimited() {
        assert!(
            ResourceLimits::unlimited()
                .check_output_size(usize::MAX)
                .is_ok()
        );
    }
}
