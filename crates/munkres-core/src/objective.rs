//! Optimization direction and the cost transform it implies.

use std::fmt;

/// Whether the total value is minimized (costs) or maximized (profits).
///
/// The solver always minimizes internally. Both directions map raw values into
/// non-negative costs relative to an offset taken from the input:
///
/// | Objective  | offset     | internal cost      |
/// |------------|------------|--------------------|
/// | `Minimize` | `min(raw)` | `raw - offset`     |
/// | `Maximize` | `max(raw)` | `offset - raw`     |
///
/// The transform is invertible through [`Objective::to_raw`].
///
/// # Examples
///
/// ```
/// use munkres_core::Objective;
///
/// let offset = 9.0;
/// let cost = Objective::Maximize.to_cost(4.0, offset);
/// assert_eq!(cost, 5.0);
/// assert_eq!(Objective::Maximize.to_raw(cost, offset), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    /// Minimal total cost.
    #[default]
    Minimize,

    /// Maximal total profit.
    Maximize,
}

impl Objective {
    /// Picks the offset for this direction from the raw extrema.
    #[inline]
    pub fn offset(self, min: f64, max: f64) -> f64 {
        match self {
            Objective::Minimize => min,
            Objective::Maximize => max,
        }
    }

    /// Maps a raw value to a non-negative internal cost.
    #[inline]
    pub fn to_cost(self, raw: f64, offset: f64) -> f64 {
        match self {
            Objective::Minimize => raw - offset,
            Objective::Maximize => offset - raw,
        }
    }

    /// Inverse of [`to_cost`](Self::to_cost).
    #[inline]
    pub fn to_raw(self, cost: f64, offset: f64) -> f64 {
        match self {
            Objective::Minimize => cost + offset,
            Objective::Maximize => offset - cost,
        }
    }

    /// Returns true if `a` is strictly better than `b` in this direction.
    #[inline]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Minimize => a < b,
            Objective::Maximize => a > b,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Minimize => write!(f, "minimize"),
            Objective::Maximize => write!(f, "maximize"),
        }
    }
}
