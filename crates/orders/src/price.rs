use serde::{Deserialize, Serialize};

pub use petcode_core::Price;
use petcode_core::ValueObject;

/// Requested price bounds of an order.
///
/// `upper >= lower` is expected to hold; it is checked where the range is
/// parsed from user input, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    upper: Price,
    lower: Price,
}

impl PriceRange {
    pub fn new(upper: Price, lower: Price) -> Self {
        Self { upper, lower }
    }

    pub fn upper(&self) -> Price {
        self.upper
    }

    pub fn lower(&self) -> Price {
        self.lower
    }

    /// Re-negotiation: replaces both bounds.
    pub fn update(&mut self, upper: Price, lower: Price) {
        self.upper = upper;
        self.lower = lower;
    }

    pub fn contains(&self, price: Price) -> bool {
        self.lower <= price && price <= self.upper
    }

    /// Whether both bounds of `self` fall inside `outer`.
    pub fn is_within(&self, outer: &PriceRange) -> bool {
        outer.contains(self.lower) && outer.contains(self.upper)
    }
}

impl ValueObject for PriceRange {}

impl core::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.lower, self.upper)
    }
}
