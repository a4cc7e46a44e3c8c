/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Property-based tests for the merge iterator using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use std::collections::BTreeMap;

    use index_iterators::{IndexIterator, SkipToOutcome};
    use numeric_index::{FilterMode, NumericRangeIterator, RangeFilter};
    use proptest::prelude::*;
    use sr_tree::{ScoreTree, TreeConfig};

    use crate::helpers::drain;

    /// Unique document ids with scores, in random insertion order.
    fn entries() -> impl Strategy<Value = Vec<(u64, f64)>> {
        proptest::collection::btree_map(1u64..5_000, -100.0f64..100.0, 0..400)
            .prop_map(|map| map.into_iter().collect::<Vec<_>>())
            .prop_shuffle()
    }

    fn filter() -> impl Strategy<Value = RangeFilter> {
        (
            -120.0f64..120.0,
            -120.0f64..120.0,
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(min, max, min_inclusive, max_inclusive, no_min, no_max)| {
                let mut filter = RangeFilter::new(min, max, min_inclusive, max_inclusive);
                filter.min_neg_inf = no_min;
                filter.max_pos_inf = no_max;
                filter
            })
    }

    fn build(entries: &[(u64, f64)], capacity: usize) -> ScoreTree {
        ScoreTree::from_entries(
            TreeConfig::default().with_leaf_capacity(capacity),
            entries.iter().copied(),
        )
    }

    proptest! {
        #[test]
        fn prop_exact_mode_yields_reference_set(
            entries in entries(),
            filter in filter(),
            capacity in 2usize..48,
        ) {
            let tree = build(&entries, capacity);
            let reference: BTreeMap<_, _> = entries.iter().copied().collect();
            let (min, max) = filter.selection_bounds();
            let expected: Vec<u64> = if min > max {
                Vec::new()
            } else {
                reference
                    .iter()
                    .filter(|(_, score)| filter.matches(**score))
                    .map(|(doc_id, _)| *doc_id)
                    .collect()
            };

            let mut it = NumericRangeIterator::new(&tree, filter, FilterMode::Exact);
            prop_assert_eq!(drain(&mut it), expected);
        }

        #[test]
        fn prop_deferred_mode_count(
            entries in entries(),
            filter in filter(),
            capacity in 2usize..48,
        ) {
            let tree = build(&entries, capacity);
            let (min, max) = filter.selection_bounds();
            let leaves = tree.find_range(min, max);
            let exact: usize = leaves
                .iter()
                .map(|leaf| leaf.iter().filter(|e| filter.matches(e.score)).count())
                .sum();
            let unchecked = leaves
                .iter()
                .filter_map(|leaf| leaf.iter().next())
                .filter(|e| !filter.matches(e.score))
                .count();

            let mut it = NumericRangeIterator::new(&tree, filter, FilterMode::Deferred);
            let ids = drain(&mut it);
            prop_assert_eq!(ids.len(), exact + unchecked);
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_skip_to_is_monotonic(
            entries in entries(),
            filter in filter(),
            mut targets in proptest::collection::vec(0u64..5_200, 1..40),
            mode in prop_oneof![Just(FilterMode::Exact), Just(FilterMode::Deferred)],
        ) {
            targets.sort_unstable();
            let tree = build(&entries, 16);
            let all = drain(&mut NumericRangeIterator::new(&tree, filter, mode));

            let mut it = NumericRangeIterator::new(&tree, filter, mode);
            let mut previous = 0;
            for target in targets {
                // The stream position never moves backwards.
                let position = match it.skip_to(target) {
                    Some(SkipToOutcome::Found(r)) => {
                        prop_assert_eq!(r.doc_id, target);
                        r.doc_id
                    }
                    Some(SkipToOutcome::NotFound(r)) => {
                        prop_assert!(r.doc_id > target);
                        r.doc_id
                    }
                    None => {
                        prop_assert!(all.last().is_none_or(|last| *last < target));
                        prop_assert!(it.at_eof());
                        break;
                    }
                };
                prop_assert!(position >= previous);
                prop_assert!(all.binary_search(&position).is_ok());
                previous = position;
            }
        }
    }
}
