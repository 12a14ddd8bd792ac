//! Slot assignment: map the selected players onto a formation's 11 slots.
//!
//! Deterministic two-pass greedy, O(slots x selection). Pass 1 fills slots
//! with role-matched players by weighted score; pass 2 places every leftover
//! player into the remaining slots regardless of role, so no selected player
//! is ever dropped. Exact placements (including sub-optimal ones) are part of
//! the observable contract: the UI renders a compatibility badge per slot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::compat::{CompatibilityMatrix, CompatibilityTier};
use crate::formation::Formation;
use crate::models::player::PositionGroup;
use crate::models::registry::PlayerRegistry;
use crate::selection::SelectionSet;

/// One entry of the derived lineup: a slot and the player occupying it, if
/// any. Ephemeral; recomputed from scratch on every read, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotAssignment {
    pub slot_id: u8,
    pub player_id: Option<String>,
    /// Compatibility of the occupant's position with the slot label
    /// (0 when the slot is empty; may legitimately be 0 for fallback
    /// placements).
    pub compatibility: u8,
}

impl SlotAssignment {
    fn empty(slot_id: u8) -> Self {
        Self { slot_id, player_id: None, compatibility: 0 }
    }

    /// Badge tier for the occupant, or None for an empty slot.
    pub fn tier(&self) -> Option<CompatibilityTier> {
        self.player_id.as_ref().map(|_| CompatibilityTier::from_score(self.compatibility))
    }
}

/// Candidate ranking score for pass 1.
pub fn weighted_score(overall: u8, compatibility: u8) -> f32 {
    0.7 * overall as f32 + 0.3 * compatibility as f32
}

/// Processing order of the pitch lines in pass 1. Fixed policy, not derived
/// from the formation: goalkeeper first, then forwards, defenders,
/// midfielders.
fn role_priority(role: PositionGroup) -> u8 {
    match role {
        PositionGroup::Goalkeeper => 0,
        PositionGroup::Forward => 1,
        PositionGroup::Defender => 2,
        PositionGroup::Midfielder => 3,
    }
}

/// Compute the full lineup for the current selection.
///
/// Pure function of its inputs; selection ids missing from the registry are
/// skipped. Pass 1 assigns each slot (in role-priority order, most
/// specialised labels first) the unassigned same-role player with the
/// highest weighted score, excluding zero-compatibility candidates. Pass 2
/// walks the slots in formation order and drops every remaining selected
/// player into the next empty slot, role and compatibility ignored.
pub fn slot_assignments(
    selection: &SelectionSet,
    formation: &Formation,
    matrix: &CompatibilityMatrix,
    registry: &PlayerRegistry,
) -> Vec<SlotAssignment> {
    let mut result: Vec<SlotAssignment> =
        formation.slots.iter().map(|slot| SlotAssignment::empty(slot.id)).collect();

    // Candidates in raw selection order; that order breaks pass-1 ties and
    // drives pass-2 placement.
    let candidates: Vec<_> =
        selection.ids().iter().filter_map(|id| registry.get(id)).collect();

    let mut assigned: HashSet<&str> = HashSet::new();

    // Pass 1: role-matched greedy fill, most constrained slots first.
    // The sort is stable, so equal keys keep formation order.
    let mut order: Vec<usize> = (0..formation.slots.len()).collect();
    order.sort_by_key(|&i| {
        let slot = &formation.slots[i];
        (role_priority(slot.role), matrix.specificity(&slot.label))
    });

    for &i in &order {
        let slot = &formation.slots[i];
        let mut best: Option<(usize, f32)> = None;
        for (ci, player) in candidates.iter().enumerate() {
            if assigned.contains(player.id.as_str()) || player.position.group() != slot.role {
                continue;
            }
            let compatibility = matrix.score(player.position, &slot.label);
            if compatibility == 0 {
                continue;
            }
            let score = weighted_score(player.overall, compatibility);
            // Strict comparison keeps the earliest-selected candidate on ties
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((ci, score));
            }
        }
        if let Some((ci, _)) = best {
            let player = candidates[ci];
            assigned.insert(player.id.as_str());
            result[i] = SlotAssignment {
                slot_id: slot.id,
                player_id: Some(player.id.clone()),
                compatibility: matrix.score(player.position, &slot.label),
            };
        }
    }

    // Pass 2: fallback. Every leftover player lands in the next empty slot
    // in formation order; compatibility is recomputed for display only.
    let mut leftovers =
        candidates.iter().filter(|player| !assigned.contains(player.id.as_str()));
    for (i, slot) in formation.slots.iter().enumerate() {
        if result[i].player_id.is_some() {
            continue;
        }
        let Some(player) = leftovers.next() else {
            break;
        };
        result[i] = SlotAssignment {
            slot_id: slot.id,
            player_id: Some(player.id.clone()),
            compatibility: matrix.score(player.position, &slot.label),
        };
    }

    result
}
