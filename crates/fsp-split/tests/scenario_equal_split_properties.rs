//! Scenario: equal-split allocation properties
//!
//! # Invariants under test
//!
//! 1. Conservation: the output shares always sum to the total, exactly,
//!    in cents — for any total and any non-empty participant set.
//!
//! 2. Fairness bound: max(share) - min(share) <= 1 cent.
//!
//! 3. Determinism: the per-id result is independent of the order the
//!    caller lists participants in (sorted-id tie-break).
//!
//! 4. Empty participant set: a positive total is an explicit error, never
//!    silently discarded; a zero total yields an empty share set.
//!
//! All tests are pure; no IO, no DB, no network.

use fsp_split::{equal_split, share_sum, shares, SplitError};
use fsp_money::Cents;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// 1. Conservation
// ---------------------------------------------------------------------------

#[test]
fn conservation_over_a_sweep_of_totals_and_group_sizes() {
    let roster = [
        "ana", "ben", "carla", "dmitri", "eve", "farid", "gus", "hana", "ivo",
    ];
    for n in 1..=roster.len() {
        let participants = ids(&roster[..n]);
        for total in [0_i64, 1, 2, 3, 10, 99, 100, 101, 999, 1_000, 123_456] {
            let out = equal_split(Cents::new(total), &participants).unwrap();
            assert_eq!(out.len(), n);
            assert_eq!(
                share_sum(&out).raw(),
                total,
                "conservation failed for total={total} n={n}"
            );
        }
    }
}

#[test]
fn conservation_at_large_magnitudes() {
    // A few hundred billion cents split three ways must not lose a cent.
    let total = 123_456_789_012_i64;
    let out = equal_split(Cents::new(total), &ids(&["a", "b", "c"])).unwrap();
    assert_eq!(share_sum(&out).raw(), total);
}

// ---------------------------------------------------------------------------
// 2. Fairness bound
// ---------------------------------------------------------------------------

#[test]
fn no_two_shares_differ_by_more_than_one_cent() {
    for total in 0..500_i64 {
        let out = equal_split(Cents::new(total), &ids(&["a", "b", "c", "d", "e", "f", "g"]))
            .unwrap();
        let max = out.values().max().unwrap().raw();
        let min = out.values().min().unwrap().raw();
        assert!(max - min <= 1, "total={total}: max={max} min={min}");
    }
}

// ---------------------------------------------------------------------------
// 3. Determinism across caller orderings
// ---------------------------------------------------------------------------

#[test]
fn canonical_scenario_remainder_to_first_sorted_id() {
    let out = equal_split(Cents::new(1_000), &ids(&["b", "a", "c"])).unwrap();
    assert_eq!(out, shares([("a", 334), ("b", 333), ("c", 333)]));
}

#[test]
fn every_permutation_of_the_participants_agrees() {
    let perms: [[&str; 3]; 6] = [
        ["a", "b", "c"],
        ["a", "c", "b"],
        ["b", "a", "c"],
        ["b", "c", "a"],
        ["c", "a", "b"],
        ["c", "b", "a"],
    ];
    let reference = equal_split(Cents::new(1_001), &ids(&perms[0])).unwrap();
    for perm in &perms[1..] {
        let out = equal_split(Cents::new(1_001), &ids(perm)).unwrap();
        assert_eq!(out, reference, "permutation {perm:?} diverged");
    }
}

#[test]
fn zero_total_splits_to_all_zero() {
    let out = equal_split(Cents::ZERO, &ids(&["a", "b"])).unwrap();
    assert_eq!(out, shares([("a", 0), ("b", 0)]));
}

// ---------------------------------------------------------------------------
// 4. Empty participant set policy
// ---------------------------------------------------------------------------

#[test]
fn positive_total_with_no_participants_is_rejected() {
    assert_eq!(
        equal_split(Cents::new(1), &[]),
        Err(SplitError::EmptyParticipantSet)
    );
}

#[test]
fn zero_total_with_no_participants_is_an_empty_set() {
    let out = equal_split(Cents::ZERO, &[]).unwrap();
    assert!(out.is_empty());
}
