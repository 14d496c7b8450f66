//! Capacity policy for [`ArrayList`](crate::ArrayList).

use std::error::Error;
use std::fmt;

/// Growth and shrink parameters for an [`ArrayList`](crate::ArrayList).
///
/// Validated by [`ArrayList::with_policy`](crate::ArrayList::with_policy);
/// immutable for the lifetime of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity of a freshly constructed empty list. Default: 1.
    pub initial_capacity: usize,

    /// Multiplier applied to capacity when the buffer is full. Default: 2.
    ///
    /// Must be at least 2. With the default, capacities run through
    /// powers of two.
    pub growth_factor: usize,

    /// Shrink is evaluated when `size < capacity / shrink_divisor`
    /// after a removal. Default: 4.
    pub shrink_divisor: usize,
}

impl GrowthPolicy {
    /// Default capacity of an empty list.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default shrink divisor (shrink below 25% usage).
    pub const DEFAULT_SHRINK_DIVISOR: usize = 4;

    /// Check that the policy can make progress.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                configured: self.growth_factor,
            });
        }
        if self.shrink_divisor < 2 {
            return Err(ConfigError::ShrinkDivisorTooSmall {
                configured: self.shrink_divisor,
            });
        }
        Ok(())
    }

    /// Capacity after one growth step from `capacity`.
    pub(crate) fn grown(&self, capacity: usize) -> usize {
        capacity.saturating_mul(self.growth_factor)
    }

    /// `true` when `size` is far enough below `capacity` to evaluate a shrink.
    pub(crate) fn should_shrink(&self, size: usize, capacity: usize) -> bool {
        size < capacity / self.shrink_divisor
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            shrink_divisor: Self::DEFAULT_SHRINK_DIVISOR,
        }
    }
}

/// Errors detected during [`GrowthPolicy::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` is zero.
    ZeroInitialCapacity,
    /// `growth_factor` is below 2, so a full buffer would never grow.
    GrowthFactorTooSmall {
        /// The configured factor.
        configured: usize,
    },
    /// `shrink_divisor` is below 2.
    ShrinkDivisorTooSmall {
        /// The configured divisor.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial_capacity must be at least 1"),
            Self::GrowthFactorTooSmall { configured } => {
                write!(f, "growth_factor {configured} is below minimum of 2")
            }
            Self::ShrinkDivisorTooSmall { configured } => {
                write!(f, "shrink_divisor {configured} is below minimum of 2")
            }
        }
    }
}

impl Error for ConfigError {}
