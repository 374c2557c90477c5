use crate::{id::*, time::*};

/// Number of stars given by a visitor.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RatingValue(u8);

impl RatingValue {
    pub fn new<I: Into<u8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    /// All valid values in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::min().0..=Self::max().0).map(Self)
    }
}

impl From<u8> for RatingValue {
    fn from(from: u8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for u8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Arithmetic mean of rating values.
///
/// Zero stands for "not rated yet".
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    /// Rounded to one decimal place for display.
    pub fn rounded(self) -> f64 {
        (self.0 * 10.0).round() / 10.0
    }

    /// Number of filled stars out of five.
    ///
    /// Ties are rounded to the nearest even number.
    pub fn stars(self) -> u8 {
        self.0.round_ties_even().clamp(0.0, f64::from(RatingValue::max().0)) as u8
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: u64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    pub fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += u64::from(val.0);
        self.cnt += 1;
    }

    pub const fn count(&self) -> usize {
        self.cnt
    }

    pub fn build(self) -> AvgRating {
        let value = if self.cnt > 0 {
            AvgRatingValue::from(self.acc as f64 / self.cnt as f64)
        } else {
            Default::default()
        };
        AvgRating {
            value,
            count: self.cnt,
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

/// Average together with the number of ratings it is based on.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AvgRating {
    pub value: AvgRatingValue,
    pub count: usize,
}

impl AvgRating {
    pub const fn is_rated(&self) -> bool {
        self.count > 0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub id         : Id,
    pub listing_id : Id,
    pub value      : RatingValue,
    pub created_at : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub listing_id : Id,
    pub value      : RatingValue,
    pub created_at : Timestamp,
}
