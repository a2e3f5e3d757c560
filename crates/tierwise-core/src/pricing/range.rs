//! Ranged rule capability shared by both rule families.

/// A closed numeric range with an optional upper bound.
///
/// `max = None` means unbounded above.
///
/// # Example
///
/// ```
/// use tierwise_core::TierRange;
///
/// let bounded = TierRange::new(109.0, Some(131.0));
/// assert!(bounded.contains(109.0));
/// assert!(bounded.contains(131.0));
/// assert!(!bounded.contains(131.5));
///
/// let open = TierRange::new(132.0, None);
/// assert!(open.contains(1_000_000.0));
/// assert_eq!(open.effective_max(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound, `None` when open-ended.
    pub max: Option<f64>,
}

impl TierRange {
    /// Creates a new range.
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Returns the upper bound with `None` mapped to positive infinity.
    pub fn effective_max(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    /// Returns whether `min <= value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.effective_max()
    }

    /// Returns whether the range has no upper bound.
    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }
}

/// A pricing rule keyed on a numeric range.
///
/// Both renewal rules (keyed on current PPL) and net-new volume rules (keyed
/// on proposed license count) implement this, so resolution and range
/// validation are written once.
pub trait RangedRule {
    /// Inclusive lower bound.
    fn min(&self) -> f64;

    /// Inclusive upper bound, `None` when open-ended.
    fn max(&self) -> Option<f64>;

    /// Returns the rule's bounds as a [`TierRange`].
    fn bounds(&self) -> TierRange {
        TierRange::new(self.min(), self.max())
    }

    /// Returns whether `value` falls inside this rule's range.
    fn contains(&self, value: f64) -> bool {
        self.bounds().contains(value)
    }
}

impl RangedRule for TierRange {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> Option<f64> {
        self.max
    }
}

impl<R: RangedRule + ?Sized> RangedRule for &R {
    fn min(&self) -> f64 {
        (**self).min()
    }

    fn max(&self) -> Option<f64> {
        (**self).max()
    }
}
