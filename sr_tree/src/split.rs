/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Split point selection.

use crate::Leaf;

/// How the split point of an overflowing [`Leaf`] is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Split at the midpoint of the leaf's observed `[min, max]`.
    #[default]
    Midpoint,
    /// Split at the median of a deterministic strided sample of the leaf's
    /// scores. Skewed distributions produce more even splits than with
    /// [`SplitPolicy::Midpoint`].
    SampledMedian { samples: usize },
}

impl SplitPolicy {
    /// Compute the threshold at which `leaf` should be split.
    ///
    /// Entries with `score < threshold` go to the left leaf.
    pub fn split_point(&self, leaf: &Leaf) -> f64 {
        match *self {
            Self::Midpoint => interval_split_point(leaf),
            Self::SampledMedian { samples } => {
                let median = sampled_median(leaf, samples);
                match median {
                    // A median equal to the minimum would send nothing left.
                    Some(median) if median > leaf.min() => median,
                    _ => interval_split_point(leaf),
                }
            }
        }
    }
}

/// Midpoint of the leaf's interval, or of its finite scores when an infinite
/// bound makes the interval midpoint unable to send anything left.
fn interval_split_point(leaf: &Leaf) -> f64 {
    let mid = midpoint(leaf.min(), leaf.max());
    if mid.is_finite() && mid > leaf.min() {
        return mid;
    }
    finite_split_point(leaf).unwrap_or(mid)
}

/// Halving each bound first keeps the result finite for extreme intervals.
fn midpoint(min: f64, max: f64) -> f64 {
    min / 2.0 + max / 2.0
}

/// A threshold separating the leaf's scores that ignores infinite values when
/// locating the middle. `None` if every score is the same.
fn finite_split_point(leaf: &Leaf) -> Option<f64> {
    let finite = leaf
        .iter()
        .map(|entry| entry.score)
        .filter(|score| score.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, score| match acc {
            None => Some((score, score)),
            Some((lo, hi)) => Some((lo.min(score), hi.max(score))),
        });

    match finite {
        Some((lo, hi)) if lo < hi => Some(midpoint(lo, hi)),
        // Only `-inf` lies below the single finite score.
        Some((lo, _)) if leaf.min() < lo => Some(lo),
        // Everything below `+inf` goes left.
        _ if leaf.max() == f64::INFINITY && leaf.min() < f64::INFINITY => Some(f64::INFINITY),
        _ => None,
    }
}

fn sampled_median(leaf: &Leaf, samples: usize) -> Option<f64> {
    if leaf.is_empty() || samples == 0 {
        return None;
    }
    let stride = (leaf.len() / samples).max(1);
    let mut scores: Vec<f64> = leaf
        .iter()
        .step_by(stride)
        .map(|entry| entry.score)
        .collect();
    let mid = scores.len() / 2;
    let (_, median, _) = scores.select_nth_unstable_by(mid, f64::total_cmp);
    Some(*median)
}
