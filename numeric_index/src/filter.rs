/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Numeric range predicates and their textual form.
//!
//! A filter is written as three tokens, `field min max`:
//!
//! - `-inf` as `min` and `+inf` as `max` leave that side unbounded.
//! - A number is an inclusive bound.
//! - A number prefixed with `(` is an exclusive bound.
//!
//! ```
//! use numeric_index::RangeFilter;
//!
//! let filter = RangeFilter::parse(&["price", "(1", "5"]).unwrap();
//! assert_eq!(filter.field, "price");
//! assert!(!filter.range.matches(1.0));
//! assert!(filter.range.matches(5.0));
//! ```

use std::str::FromStr;

/// Errors returned by [`RangeFilter::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterParseError {
    #[error("wrong number of filter arguments: expected {expected}, got {got}")]
    WrongArgCount { expected: usize, got: usize },

    #[error("invalid minimum bound `{0}`")]
    InvalidMin(String),

    #[error("invalid maximum bound `{0}`")]
    InvalidMax(String),
}

/// A predicate over a numeric score with inclusive, exclusive or infinite
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    /// Lower bound, ignored when `min_neg_inf` is set.
    pub min: f64,
    /// Upper bound, ignored when `max_pos_inf` is set.
    pub max: f64,
    pub min_neg_inf: bool,
    pub max_pos_inf: bool,
    pub min_inclusive: bool,
    pub max_inclusive: bool,
}

impl Default for RangeFilter {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A [`RangeFilter`] bound to the field it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    pub field: String,
    pub range: RangeFilter,
}

impl RangeFilter {
    /// Number of tokens in the textual form: field, min, max.
    pub const NUM_ARGS: usize = 3;

    pub const fn new(min: f64, max: f64, min_inclusive: bool, max_inclusive: bool) -> Self {
        Self {
            min,
            max,
            min_neg_inf: false,
            max_pos_inf: false,
            min_inclusive,
            max_inclusive,
        }
    }

    /// The closed interval `[min, max]`.
    pub const fn inclusive(min: f64, max: f64) -> Self {
        Self::new(min, max, true, true)
    }

    /// Matches every score.
    pub const fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            min_neg_inf: true,
            max_pos_inf: true,
            min_inclusive: true,
            max_inclusive: true,
        }
    }

    /// Drop the lower bound.
    pub const fn unbounded_below(mut self) -> Self {
        self.min_neg_inf = true;
        self
    }

    /// Drop the upper bound.
    pub const fn unbounded_above(mut self) -> Self {
        self.max_pos_inf = true;
        self
    }

    /// Whether `score` satisfies both bounds.
    pub fn matches(&self, score: f64) -> bool {
        let above_min = self.min_neg_inf
            || if self.min_inclusive {
                score >= self.min
            } else {
                score > self.min
            };
        let below_max = self.max_pos_inf
            || if self.max_inclusive {
                score <= self.max
            } else {
                score < self.max
            };
        above_min && below_max
    }

    /// The `(min, max)` interval used to select candidate leaves, with
    /// unbounded sides mapped to infinities.
    pub const fn selection_bounds(&self) -> (f64, f64) {
        let min = if self.min_neg_inf { f64::NEG_INFINITY } else { self.min };
        let max = if self.max_pos_inf { f64::INFINITY } else { self.max };
        (min, max)
    }

    /// Parse the three-token form `field min max`.
    ///
    /// Fails without producing any filter when the token count is wrong or
    /// either bound is malformed.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<FieldFilter, FilterParseError> {
        let [field, min, max] = args else {
            return Err(FilterParseError::WrongArgCount {
                expected: Self::NUM_ARGS,
                got: args.len(),
            });
        };

        let mut range = Self::unbounded();
        let min = min.as_ref();
        if min != "-inf" {
            let (value, inclusive) =
                parse_bound(min).ok_or_else(|| FilterParseError::InvalidMin(min.to_owned()))?;
            range.min = value;
            range.min_inclusive = inclusive;
            range.min_neg_inf = false;
        }
        let max = max.as_ref();
        if max != "+inf" {
            let (value, inclusive) =
                parse_bound(max).ok_or_else(|| FilterParseError::InvalidMax(max.to_owned()))?;
            range.max = value;
            range.max_inclusive = inclusive;
            range.max_pos_inf = false;
        }

        Ok(FieldFilter {
            field: field.as_ref().to_owned(),
            range,
        })
    }
}

/// Parse a finite bound, returning it with its inclusiveness.
///
/// Infinity keywords are handled by the caller, so any non-finite value here
/// (`inf`, `-inf` as a maximum, `(+inf`, `nan`...) is malformed.
fn parse_bound(token: &str) -> Option<(f64, bool)> {
    let (number, inclusive) = match token.strip_prefix('(') {
        Some(rest) => (rest, false),
        None => (token, true),
    };
    let value = f64::from_str(number).ok().filter(|value| value.is_finite())?;
    Some((value, inclusive))
}

impl FromStr for FieldFilter {
    type Err = FilterParseError;

    /// Parse whitespace separated `field min max`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args: Vec<&str> = s.split_whitespace().collect();
        RangeFilter::parse(&args)
    }
}
