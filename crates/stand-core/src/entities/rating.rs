//! Derived rating figures for a stand

/// Average reported for a stand that has no reviews
pub const EMPTY_AVERAGE: f64 = 4.5;

/// Review aggregate persisted on a stand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average: f64,
    pub quantity: i64,
}

impl RatingSummary {
    /// Summary for a stand with no reviews
    pub const EMPTY: Self = Self {
        average: EMPTY_AVERAGE,
        quantity: 0,
    };

    /// Build from `COUNT(*)` and `AVG(rating)` of a stand's reviews
    ///
    /// A zero count always yields the empty summary, whatever the average says.
    pub fn from_aggregate(count: i64, average: Option<f64>) -> Self {
        match average {
            Some(average) if count > 0 => Self {
                average,
                quantity: count,
            },
            _ => Self::EMPTY,
        }
    }
}

impl Default for RatingSummary {
    fn default() -> Self {
        Self::EMPTY
    }
}
