/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Tests for [`RangeFilter`] parsing and matching.

use numeric_index::{FieldFilter, FilterParseError, RangeFilter};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn unbounded_matches_everything() {
    let filter = RangeFilter::parse(&["score", "-inf", "+inf"]).unwrap();
    assert_eq!(filter.field, "score");
    assert!(filter.range.min_neg_inf && filter.range.max_pos_inf);
    for score in [-1000.0, 0.0, 1000.0] {
        assert!(filter.range.matches(score));
    }
}

#[test]
fn exclusive_min() {
    let filter = RangeFilter::parse(&["score", "(1", "5"]).unwrap().range;
    assert!(filter.matches(5.0));
    assert!(!filter.matches(1.0));
    assert!(!filter.matches(0.999));
}

#[test]
fn inclusive_bounds() {
    let filter = RangeFilter::parse(&["score", "1", "5"]).unwrap().range;
    assert!(filter.matches(1.0));
    assert!(filter.matches(5.0));
    assert!(!filter.matches(5.000_001));
}

#[test]
fn exclusive_max() {
    let filter = RangeFilter::parse(&["score", "-inf", "(5"]).unwrap().range;
    assert!(filter.matches(-1e300));
    assert!(filter.matches(4.999));
    assert!(!filter.matches(5.0));
}

#[rstest]
#[case::two(&["score", "1"], 2)]
#[case::four(&["score", "1", "5", "7"], 4)]
#[case::none(&[], 0)]
fn wrong_arg_count(#[case] args: &[&str], #[case] got: usize) {
    assert_eq!(
        RangeFilter::parse(args),
        Err(FilterParseError::WrongArgCount { expected: 3, got })
    );
}

#[rstest]
#[case::pos_inf_as_min("+inf")]
#[case::bare_paren("(")]
#[case::nan("nan")]
#[case::inf_literal("inf")]
#[case::exclusive_inf("(-inf")]
#[case::double_paren("((1")]
#[case::garbage("abc")]
#[case::empty("")]
#[case::padded(" 1")]
fn malformed_min(#[case] token: &str) {
    assert_eq!(
        RangeFilter::parse(&["score", token, "5"]),
        Err(FilterParseError::InvalidMin(token.to_owned()))
    );
}

#[rstest]
#[case::neg_inf_as_max("-inf")]
#[case::bare_paren("(")]
#[case::exclusive_pos_inf("(+inf")]
#[case::trailing_text("5x")]
fn malformed_max(#[case] token: &str) {
    assert_eq!(
        RangeFilter::parse(&["score", "1", token]),
        Err(FilterParseError::InvalidMax(token.to_owned()))
    );
}

#[test]
fn malformed_min_wins_over_malformed_max() {
    assert_eq!(
        RangeFilter::parse(&["score", "x", "y"]),
        Err(FilterParseError::InvalidMin("x".to_owned()))
    );
}

#[rstest]
#[case::scientific("1e3", 1000.0)]
#[case::signed("+2.5", 2.5)]
#[case::negative("-7", -7.0)]
#[case::leading_dot(".5", 0.5)]
fn number_forms(#[case] token: &str, #[case] expected: f64) {
    let filter = RangeFilter::parse(&["score", token, "+inf"]).unwrap().range;
    assert_eq!(filter.min, expected);
    assert!(filter.min_inclusive);
}

#[test]
fn parse_from_str() {
    let filter: FieldFilter = "price (10 +inf".parse().unwrap();
    assert_eq!(
        filter,
        FieldFilter {
            field: "price".to_owned(),
            range: RangeFilter::new(10.0, 0.0, false, true).unbounded_above(),
        }
    );
    assert_eq!(
        "price 10".parse::<FieldFilter>(),
        Err(FilterParseError::WrongArgCount { expected: 3, got: 2 })
    );
}

#[rstest]
#[case::bounded(RangeFilter::inclusive(1.0, 2.0), (1.0, 2.0))]
#[case::exclusive(RangeFilter::new(1.0, 2.0, false, false), (1.0, 2.0))]
#[case::below(RangeFilter::inclusive(1.0, 2.0).unbounded_below(), (f64::NEG_INFINITY, 2.0))]
#[case::above(RangeFilter::inclusive(1.0, 2.0).unbounded_above(), (1.0, f64::INFINITY))]
#[case::all(RangeFilter::unbounded(), (f64::NEG_INFINITY, f64::INFINITY))]
fn selection_bounds(#[case] filter: RangeFilter, #[case] expected: (f64, f64)) {
    assert_eq!(filter.selection_bounds(), expected);
}

#[test]
fn error_messages() {
    assert_eq!(
        FilterParseError::WrongArgCount {
            expected: 3,
            got: 1
        }
        .to_string(),
        "wrong number of filter arguments: expected 3, got 1"
    );
    assert_eq!(
        FilterParseError::InvalidMax("(".to_owned()).to_string(),
        "invalid maximum bound `(`"
    );
}
