//! Deferred-acceptance matching loop.
//!
//! ## Algorithm
//!
//! ```text
//! while free set not empty:
//!     p = dequeue
//!     if p has no receiver left: drop p
//!     r = next receiver on p's list
//!     if r is free:                 engage (p, r)
//!     elif r prefers p to partner:  engage (p, r), requeue displaced partner
//!     else:                         r rejects p, requeue p
//! ```
//!
//! A proposer is only requeued while it still has receivers to try; one
//! that runs out is dropped and logged. With validated input that cannot
//! happen, so every proposer ends matched.

use tracing::{debug, instrument, trace, warn};

use crate::engine::{EngineConfig, FreeSet, MatchingState};
use crate::error::{EngineError, FreeSetError};
use crate::preferences::{PreferenceProfile, PreferenceStore, RankTable};
use crate::types::{MatchReceipt, Pairing, ParticipantId, Satisfaction, UNMATCHED};

/// One step of a run, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchEvent {
    /// `receiver` was free and accepted `proposer`
    Engaged {
        proposer: ParticipantId,
        receiver: ParticipantId,
    },
    /// `receiver` left `displaced` for `proposer`
    Replaced {
        proposer: ParticipantId,
        receiver: ParticipantId,
        displaced: ParticipantId,
    },
    /// `receiver` kept its partner and turned `proposer` down
    Rejected {
        proposer: ParticipantId,
        receiver: ParticipantId,
    },
    /// `proposer` ran out of receivers while unmatched
    Dropped { proposer: ParticipantId },
}

/// Result of a matching run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Receiver of each proposer in identifier order, 0 = unmatched
    pub assignments: Vec<ParticipantId>,

    /// Engaged pairs in proposer order, with both ranks
    pub pairings: Vec<Pairing>,

    /// Total proposals made
    pub proposals: u64,

    /// Proposals rejected outright plus partners displaced
    pub rejections: u64,

    /// Proposers dropped after exhausting their list
    pub dropped: Vec<ParticipantId>,

    /// Event log (empty unless recording is enabled)
    pub events: Vec<MatchEvent>,
}

impl MatchResult {
    /// Group size
    pub fn group_size(&self) -> usize {
        self.assignments.len()
    }

    /// Final partner of `proposer`
    pub fn receiver_of(&self, proposer: ParticipantId) -> Option<ParticipantId> {
        let index = (proposer as usize).checked_sub(1)?;
        match self.assignments.get(index) {
            Some(&UNMATCHED) | None => None,
            Some(&receiver) => Some(receiver),
        }
    }

    /// Number of proposers left without a partner
    pub fn unmatched_count(&self) -> usize {
        self.assignments.iter().filter(|&&r| r == UNMATCHED).count()
    }

    /// Check if every proposer is matched
    pub fn is_complete(&self) -> bool {
        self.unmatched_count() == 0
    }

    /// Rank statistics of the final matching
    pub fn satisfaction(&self) -> Satisfaction {
        Satisfaction::from_pairings(&self.pairings)
    }

    /// Deterministic receipt for this run
    pub fn receipt(&self) -> Result<MatchReceipt, EngineError> {
        MatchReceipt::from_pairings(
            self.group_size() as u64,
            self.proposals,
            self.rejections,
            self.unmatched_count() as u64,
            &self.pairings,
        )
    }
}

/// Proposer-optimal stable matching engine
///
/// The engine holds only configuration; every call to
/// [`solve`](Self::solve) starts from fresh state.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the proposer-optimal stable matching for `profile`
    ///
    /// # Errors
    ///
    /// Any [`EngineError`] signals a broken internal invariant (or a
    /// free-set bound that is too small); the run is aborted.
    #[instrument(skip_all, fields(n = profile.group_size()))]
    pub fn solve(&self, profile: &PreferenceProfile) -> Result<MatchResult, EngineError> {
        let store = PreferenceStore::from_profile(profile);
        let receiver_ranks = profile.receiver_ranks();
        let mut result = self.run(store, &receiver_ranks)?;

        let proposer_ranks = profile.proposer_ranks();
        result.pairings = result
            .assignments
            .iter()
            .enumerate()
            .filter(|(_, receiver)| **receiver != UNMATCHED)
            .map(|(index, &receiver)| {
                let proposer = index as ParticipantId + 1;
                Pairing::new(
                    proposer,
                    receiver,
                    proposer_ranks.rank_of(proposer, receiver),
                    receiver_ranks.rank_of(receiver, proposer),
                )
            })
            .collect();

        Ok(result)
    }

    /// Drive the proposal loop over prebuilt structures
    pub(crate) fn run(
        &self,
        store: PreferenceStore,
        ranks: &RankTable,
    ) -> Result<MatchResult, EngineError> {
        let n = store.proposer_count();
        let mut run = Run {
            free: FreeSet::seeded(n, self.config.free_set_capacity)?,
            state: MatchingState::new(n),
            store,
            ranks,
            record: self.config.record_events,
            proposals: 0,
            rejections: 0,
            dropped: Vec::new(),
            events: Vec::new(),
        };

        while !run.free.is_empty() {
            run.step()?;
        }

        debug_assert!(run.state.is_consistent());
        debug!(
            proposals = run.proposals,
            rejections = run.rejections,
            matched = run.state.matched_count(),
            dropped = run.dropped.len(),
            "matching complete"
        );

        Ok(MatchResult {
            assignments: run.state.into_assignments(),
            pairings: Vec::new(),
            proposals: run.proposals,
            rejections: run.rejections,
            dropped: run.dropped,
            events: run.events,
        })
    }
}

/// Mutable state of a single run.
struct Run<'a> {
    store: PreferenceStore,
    ranks: &'a RankTable,
    state: MatchingState,
    free: FreeSet,
    record: bool,
    proposals: u64,
    rejections: u64,
    dropped: Vec<ParticipantId>,
    events: Vec<MatchEvent>,
}

impl Run<'_> {
    /// Serve the proposer at the front of the free set
    fn step(&mut self) -> Result<(), EngineError> {
        let proposer = self.free.dequeue()?;

        if self.store.is_exhausted(proposer) {
            self.drop_proposer(proposer);
            return Ok(());
        }

        let receiver = self.store.pop_next(proposer)?;
        self.proposals += 1;

        match self.state.proposer_of(receiver) {
            None => {
                self.state.engage(proposer, receiver);
                self.emit(MatchEvent::Engaged { proposer, receiver });
            }
            Some(current) if self.ranks.prefers(receiver, proposer, current) => {
                self.state.engage(proposer, receiver);
                self.rejections += 1;
                self.emit(MatchEvent::Replaced {
                    proposer,
                    receiver,
                    displaced: current,
                });
                self.requeue_or_drop(current)?;
            }
            Some(_) => {
                self.rejections += 1;
                self.emit(MatchEvent::Rejected { proposer, receiver });
                self.requeue_or_drop(proposer)?;
            }
        }

        Ok(())
    }

    fn requeue_or_drop(&mut self, proposer: ParticipantId) -> Result<(), FreeSetError> {
        if self.store.is_exhausted(proposer) {
            self.drop_proposer(proposer);
            Ok(())
        } else {
            self.free.enqueue(proposer)
        }
    }

    fn drop_proposer(&mut self, proposer: ParticipantId) {
        warn!(proposer, "preference list exhausted without a match, dropping proposer");
        self.dropped.push(proposer);
        self.emit(MatchEvent::Dropped { proposer });
    }

    fn emit(&mut self, event: MatchEvent) {
        trace!(?event, "match event");
        if self.record {
            self.events.push(event);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
