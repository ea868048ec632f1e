//! Load thresholds that drive table resizing

use crate::error::{Error, Result};

/// Load factor at or above which an insertion grows the table first
pub const DEFAULT_GROW_AT: f64 = 0.6;
/// Load factor at or below which a removal shrinks the table first
pub const DEFAULT_SHRINK_AT: f64 = 0.4;
/// Load factor a rebuilt table is sized for
pub const DEFAULT_TARGET: f64 = 0.5;

/// Resize thresholds of a [`DoubleHashTable`](crate::DoubleHashTable).
///
/// Every resize, whether triggered by growth or shrinkage, rebuilds the table with
/// `next_prime(ceil(size / target))` slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePolicy {
    /// Grow threshold, checked before inserting a new key
    grow_at: f64,
    /// Shrink threshold, checked before removing a key
    shrink_at: f64,
    /// Load factor after a rebuild
    target: f64,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self { grow_at: DEFAULT_GROW_AT, shrink_at: DEFAULT_SHRINK_AT, target: DEFAULT_TARGET }
    }
}

impl ResizePolicy {
    /// Creates a policy, checking that `0 < shrink_at < target < grow_at < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the thresholds are not strictly ordered
    /// inside the open unit interval.
    pub fn new(grow_at: f64, shrink_at: f64, target: f64) -> Result<Self> {
        let ordered = 0.0 < shrink_at && shrink_at < target && target < grow_at && grow_at < 1.0;
        if !ordered {
            return Err(Error::InvalidArgument(format!(
                "resize thresholds must satisfy 0 < shrink ({shrink_at}) < target ({target}) < grow ({grow_at}) < 1"
            )));
        }
        Ok(Self { grow_at, shrink_at, target })
    }

    /// Load factor at which insertions trigger a rebuild
    #[must_use]
    pub fn grow_at(&self) -> f64 {
        self.grow_at
    }

    /// Load factor at which removals trigger a rebuild
    #[must_use]
    pub fn shrink_at(&self) -> f64 {
        self.shrink_at
    }

    /// Load factor a rebuilt table is sized for
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Slot count, before prime rounding, that puts `size` entries at the target load.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub(crate) fn target_slots(&self, size: usize) -> usize {
        (size as f64 / self.target).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let policy = ResizePolicy::default();
        assert!((policy.grow_at() - 0.6).abs() < f64::EPSILON);
        assert!((policy.shrink_at() - 0.4).abs() < f64::EPSILON);
        assert!((policy.target() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        assert!(matches!(ResizePolicy::new(0.5, 0.6, 0.55), Err(Error::InvalidArgument(_))));
        assert!(matches!(ResizePolicy::new(1.0, 0.2, 0.5), Err(Error::InvalidArgument(_))));
        assert!(matches!(ResizePolicy::new(0.8, 0.0, 0.5), Err(Error::InvalidArgument(_))));
        assert!(matches!(ResizePolicy::new(0.8, 0.3, 0.3), Err(Error::InvalidArgument(_))));
        assert!(ResizePolicy::new(0.9, 0.1, 0.5).is_ok());
    }

    #[test]
    fn test_target_slots_rounds_up() {
        let policy = ResizePolicy::default();
        assert_eq!(policy.target_slots(0), 0);
        assert_eq!(policy.target_slots(3), 6);

        let policy = ResizePolicy::new(0.9, 0.2, 0.25).unwrap_or_default();
        assert_eq!(policy.target_slots(3), 12);
        assert_eq!(policy.target_slots(5), 20);
    }
}
