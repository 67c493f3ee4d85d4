use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cost of a route from a fixed source.
///
/// Unreached nodes carry `Infinite` instead of a numeric sentinel, so no arithmetic is ever
/// performed on an "infinite" cost.
///
/// # Examples
///
/// ```
/// use routetab::util::Cost;
///
/// assert_eq!(Cost::Finite(1.5).plus(2.0), Cost::Finite(3.5));
/// assert_eq!(Cost::Infinite.plus(-4.0), Cost::Infinite);
/// // a sum past the range of f64 never reads as a reachable cost
/// assert_eq!(Cost::Finite(f64::MAX).plus(f64::MAX), Cost::Infinite);
///
/// assert!(Cost::Finite(1e9).improves_on(Cost::Infinite));
/// assert!(!Cost::Finite(3.0).improves_on(Cost::Finite(3.0)));
/// assert!(!Cost::Infinite.improves_on(Cost::Infinite));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cost {
    Finite(f64),
    Infinite,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0.0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    /// The numeric cost, or `None` if the node was never reached
    pub fn value(&self) -> Option<f64> {
        match self {
            Cost::Finite(cost) => Some(*cost),
            Cost::Infinite => None,
        }
    }

    /// Extends this cost by one more link of the given weight. A sum that overflows is
    /// `Infinite`.
    pub fn plus(self, weight: f64) -> Cost {
        match self {
            Cost::Finite(cost) if (cost + weight).is_finite() => Cost::Finite(cost + weight),
            _ => Cost::Infinite,
        }
    }

    /// Whether this cost is strictly better than `other`. Equal costs never displace each other.
    pub fn improves_on(self, other: Cost) -> bool {
        self < other
    }

    /// Compares two costs, treating finite values within `tolerance` of each other as equal
    pub fn approx_eq(self, other: Cost, tolerance: f64) -> bool {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0),
            (Cost::Infinite, Cost::Infinite) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            (Cost::Finite(_), Cost::Infinite) => Some(Ordering::Less),
            (Cost::Infinite, Cost::Finite(_)) => Some(Ordering::Greater),
            (Cost::Infinite, Cost::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(cost) => write!(f, "{cost}"),
            Cost::Infinite => write!(f, "∞"),
        }
    }
}
