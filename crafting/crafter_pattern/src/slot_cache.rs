//! Memoized per-slot verdicts.
//!
//! Asking the recipe oracle whether an item may stand in for a recorded
//! ingredient is expensive, and the crafting UI asks it for every slot and
//! every candidate many times per second. Verdicts are therefore cached per
//! `(slot, item identity)`.
//!
//! # States
//!
//! A key is `Unknown` until its first probe, then `Accepted` or `Declined`
//! for the lifetime of the cache. Both transitions are terminal. A single map
//! from key to [`Verdict`] holds the classified keys, so a key can never be
//! accepted and declined at once.
//!
//! Stacks with instance data are never cached: the data may change how the
//! oracle treats them, so one such stack says nothing about another of the
//! same kind.

use crafter_item::ItemStack;
use rustc_hash::FxHashMap;

use crate::slot_key::SlotKey;

/// Outcome of probing a candidate against a slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Accepted,
    Declined,
}

impl Verdict {
    #[inline]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Declined
        }
    }
}

/// Result of a cache lookup.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlotStatus {
    Accepted,
    Declined,
    /// Not classified yet; the caller has to probe.
    Unknown,
}

impl From<Verdict> for SlotStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accepted => SlotStatus::Accepted,
            Verdict::Declined => SlotStatus::Declined,
        }
    }
}

/// Verdict cache scoped to one pattern.
///
/// Never evicts. It holds at most nine slots times the number of distinct
/// item kinds ever offered, which stays small for a single pattern.
#[derive(Clone, Debug, Default)]
pub struct SlotTestCache {
    verdicts: FxHashMap<SlotKey, Verdict>,
}

impl SlotTestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `candidate` for `slot`, whose recorded requirement is
    /// `required`.
    ///
    /// Empty slots are decided without the cache: an empty candidate fits an
    /// empty requirement and nothing else, and an empty candidate never fits
    /// a present requirement. Tagged candidates are always `Unknown`.
    pub fn classify(
        &self,
        slot: u8,
        required: Option<&ItemStack>,
        candidate: Option<&ItemStack>,
    ) -> SlotStatus {
        let Some(candidate) = candidate else {
            return if required.is_none() {
                SlotStatus::Accepted
            } else {
                SlotStatus::Declined
            };
        };
        if required.is_none() {
            return SlotStatus::Declined;
        }
        if candidate.has_tag() {
            return SlotStatus::Unknown;
        }

        self.verdicts
            .get(&SlotKey::new(slot, candidate.identity()))
            .map_or(SlotStatus::Unknown, |&verdict| verdict.into())
    }

    /// Remember `verdict` for `candidate` in `slot`.
    ///
    /// No-op for tagged candidates. A later verdict replaces an earlier one
    /// for the same key.
    pub fn record(&mut self, slot: u8, candidate: &ItemStack, verdict: Verdict) {
        if candidate.has_tag() {
            return;
        }

        let key = SlotKey::new(slot, candidate.identity());
        if let Some(previous) = self.verdicts.insert(key, verdict) {
            if previous != verdict {
                tracing::warn!(?key, ?previous, ?verdict, "slot verdict flipped");
            }
        }
    }

    /// Number of classified keys.
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}
