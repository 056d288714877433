//! Property tests for the stable-match engine.
//!
//! These tests verify, over seeded random profiles:
//! 1. The matching is stable and complete
//! 2. The matching is proposer-optimal (brute force for small n)
//! 3. Runs are deterministic down to the event sequence and output bytes
//! 4. Malformed input never reaches the engine
//!
//! ```bash
//! cargo test --release --test stability_test -- --nocapture
//! ```

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::engine::{find_blocking_pair, is_valid_matching, EngineConfig, MatchingEngine};
use stable_match::error::{MalformedReason, PreferenceError};
use stable_match::format::write_assignments;
use stable_match::{Group, ParticipantId, PreferenceProfile};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// One random permutation of `1..=n` per participant.
fn random_lists(rng: &mut ChaCha8Rng, n: usize) -> Vec<Vec<ParticipantId>> {
    (0..n)
        .map(|_| {
            let mut list: Vec<ParticipantId> = (1..=n as ParticipantId).collect();
            list.shuffle(rng);
            list
        })
        .collect()
}

/// Generate a deterministic random profile. Same seed = same profile.
fn random_profile(n: usize, seed: u64) -> PreferenceProfile {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposers = random_lists(&mut rng, n);
    let receivers = random_lists(&mut rng, n);
    PreferenceProfile::new(proposers, receivers).expect("random profile is valid")
}

/// Every permutation of `1..=n`.
fn permutations(n: usize) -> Vec<Vec<ParticipantId>> {
    fn extend(prefix: &mut Vec<ParticipantId>, used: &mut [bool], out: &mut Vec<Vec<ParticipantId>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                prefix.push(i as ParticipantId + 1);
                extend(prefix, used, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::with_capacity(n), &mut vec![false; n], &mut out);
    out
}

/// All stable perfect matchings of `profile`, by brute force.
fn all_stable_matchings(profile: &PreferenceProfile) -> Vec<Vec<ParticipantId>> {
    permutations(profile.group_size())
        .into_iter()
        .filter(|m| find_blocking_pair(profile, m).is_none())
        .collect()
}

fn solve(profile: &PreferenceProfile) -> Vec<ParticipantId> {
    MatchingEngine::new()
        .solve(profile)
        .expect("engine run succeeds")
        .assignments
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn three_by_three_scenario() {
    let profile = PreferenceProfile::new(
        vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
        vec![vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
    )
    .unwrap();

    let mut out = Vec::new();
    write_assignments(&mut out, &solve(&profile)).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1 2\n2 1\n3 3\n");
}

#[test]
fn single_pair() {
    let profile = PreferenceProfile::new(vec![vec![1]], vec![vec![1]]).unwrap();
    assert_eq!(solve(&profile), vec![1]);
}

#[test]
fn duplicate_rejected_before_matching() {
    let err = PreferenceProfile::new(
        vec![vec![1, 2, 3], vec![3, 1, 3], vec![1, 2, 3]],
        vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]],
    )
    .unwrap_err();

    assert_eq!(
        err,
        PreferenceError::MalformedPreferenceList {
            group: Group::Proposer,
            participant: 2,
            reason: MalformedReason::Duplicate { id: 3 },
        }
    );
}

// ============================================================================
// PROPERTIES OVER SEEDED PROFILES
// ============================================================================

#[test]
fn random_profiles_are_stable_and_complete() {
    for n in [2, 5, 10, 40, 100] {
        for seed in 0..10 {
            let profile = random_profile(n, seed);
            let result = MatchingEngine::new().solve(&profile).unwrap();

            assert!(result.is_complete(), "n={n} seed={seed}: unmatched proposer");
            assert!(result.dropped.is_empty());
            assert!(is_valid_matching(&result.assignments, n));
            assert_eq!(
                find_blocking_pair(&profile, &result.assignments),
                None,
                "n={n} seed={seed}: blocking pair"
            );
            assert!(result.proposals as usize <= n * n);
        }
    }
}

#[test]
fn proposer_optimal_and_receiver_pessimal() {
    for n in 1..=6 {
        for seed in 0..8 {
            let profile = random_profile(n, 1_000 + seed);
            let result = solve(&profile);
            let proposer_ranks = profile.proposer_ranks();
            let receiver_ranks = profile.receiver_ranks();

            let stable = all_stable_matchings(&profile);
            assert!(stable.contains(&result), "n={n} seed={seed}: result not among stable matchings");

            for other in &stable {
                for p in 1..=n as ParticipantId {
                    let mine = result[p as usize - 1];
                    let theirs = other[p as usize - 1];
                    assert!(
                        proposer_ranks.rank_of(p, mine) <= proposer_ranks.rank_of(p, theirs),
                        "n={n} seed={seed}: proposer {p} could do better"
                    );
                    // Every receiver gets its worst stable partner
                    assert!(
                        receiver_ranks.rank_of(mine, p) >= receiver_ranks.rank_of(mine, inverse(other, mine)),
                        "n={n} seed={seed}: receiver {mine} is not at its worst stable partner"
                    );
                }
            }
        }
    }
}

fn inverse(assignments: &[ParticipantId], receiver: ParticipantId) -> ParticipantId {
    assignments
        .iter()
        .position(|&r| r == receiver)
        .map(|i| i as ParticipantId + 1)
        .expect("perfect matching")
}

#[test]
fn determinism_of_events_and_output() {
    let profile = random_profile(60, 12345);
    let engine = MatchingEngine::with_config(EngineConfig::default().record_events(true));

    let first = engine.solve(&profile).unwrap();
    let second = engine.solve(&profile).unwrap();

    assert_eq!(first.events, second.events);
    assert_eq!(first.events.len() as u64, first.proposals);

    let mut bytes1 = Vec::new();
    let mut bytes2 = Vec::new();
    write_assignments(&mut bytes1, &first.assignments).unwrap();
    write_assignments(&mut bytes2, &second.assignments).unwrap();
    assert_eq!(bytes1, bytes2);

    let root1 = first.receipt().unwrap().matching_root;
    let root2 = second.receipt().unwrap().matching_root;
    assert_eq!(root1, root2, "Matching roots must match for determinism");

    // A different profile should produce a different root
    let other = MatchingEngine::new().solve(&random_profile(60, 12346)).unwrap();
    assert_ne!(root1, other.receipt().unwrap().matching_root);
}

#[test]
fn static_bound_never_overflows() {
    for seed in 0..20 {
        let profile = random_profile(30, seed);
        let bounded = MatchingEngine::with_config(EngineConfig::with_static_bound(30));

        assert_eq!(bounded.solve(&profile).unwrap().assignments, solve(&profile));
    }
}

// ============================================================================
// PROPTEST
// ============================================================================

fn profile_strategy() -> impl Strategy<Value = (Vec<Vec<ParticipantId>>, Vec<Vec<ParticipantId>>)> {
    (1usize..9).prop_flat_map(|n| {
        let permutation = Just((1..=n as ParticipantId).collect::<Vec<_>>()).prop_shuffle();
        (
            prop::collection::vec(permutation.clone(), n),
            prop::collection::vec(permutation, n),
        )
    })
}

proptest! {
    #[test]
    fn prop_matching_is_stable((proposers, receivers) in profile_strategy()) {
        let n = proposers.len();
        let profile = PreferenceProfile::new(proposers, receivers).unwrap();
        let result = MatchingEngine::new().solve(&profile).unwrap();

        prop_assert!(result.is_complete());
        prop_assert!(is_valid_matching(&result.assignments, n));
        prop_assert_eq!(find_blocking_pair(&profile, &result.assignments), None);
    }

    #[test]
    fn prop_each_proposer_list_consumed_at_most_once((proposers, receivers) in profile_strategy()) {
        let n = proposers.len();
        let profile = PreferenceProfile::new(proposers, receivers).unwrap();
        let result = MatchingEngine::with_config(EngineConfig::default().record_events(true))
            .solve(&profile)
            .unwrap();

        prop_assert!(result.proposals as usize <= n * n);
        for pairing in &result.pairings {
            // The final partner was the last receiver this proposer tried
            let tried = result.events.iter().filter(|e| match e {
                stable_match::MatchEvent::Engaged { proposer, .. }
                | stable_match::MatchEvent::Replaced { proposer, .. }
                | stable_match::MatchEvent::Rejected { proposer, .. } => *proposer == pairing.proposer,
                stable_match::MatchEvent::Dropped { .. } => false,
            }).count();
            prop_assert_eq!(tried as u32, pairing.proposer_rank);
        }
    }
}
