//! Selection set: the mutable list of players picked for the lineup.
//!
//! The *set* of selected ids is the semantic state; insertion order is kept
//! only for display and for the fallback pass of the assignment algorithm.

use crate::models::player::Player;
use crate::models::registry::PlayerRegistry;

/// Hard cap on selected players. Selecting past it is silently ignored,
/// never an error.
pub const MAX_SELECTED: usize = 11;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Selected ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.ids.iter().any(|id| id == player_id)
    }

    /// Select or deselect a player.
    ///
    /// Unavailable players are ignored. Selecting an 12th player is a no-op;
    /// the cap is enforced silently rather than surfaced as an error.
    pub fn toggle(&mut self, player: &Player) {
        if player.availability.unavailable {
            return;
        }
        if let Some(idx) = self.ids.iter().position(|id| *id == player.id) {
            self.ids.remove(idx);
        } else if self.ids.len() < MAX_SELECTED {
            self.ids.push(player.id.clone());
        }
    }

    /// Replace the whole selection with a server-supplied lineup, discarding
    /// manual edits. The selection must stay a list of distinct ids, so
    /// duplicates keep their first occurrence; lists longer than the cap are
    /// truncated.
    pub fn quick_select(&mut self, lineup: &[String]) {
        self.ids.clear();
        for id in lineup {
            if self.ids.len() == MAX_SELECTED {
                break;
            }
            if !self.ids.contains(id) {
                self.ids.push(id.clone());
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Mean overall rating of the selection, rounded to the nearest integer.
/// Returns 0 for an empty selection. Computed from the raw selection,
/// independent of slot assignment.
pub fn team_average(selection: &SelectionSet, registry: &PlayerRegistry) -> u8 {
    let overalls: Vec<u32> = selection
        .ids()
        .iter()
        .filter_map(|id| registry.get(id))
        .map(|p| p.overall as u32)
        .collect();
    if overalls.is_empty() {
        return 0;
    }
    let sum: u32 = overalls.iter().sum();
    (sum as f32 / overalls.len() as f32).round() as u8
}
