//! Lineup session: the mutable state behind the lineup screen.
//!
//! Holds the active formation, the selection set and the cached auto-lineup
//! list. Every read of the lineup recomputes the full slot assignment from
//! scratch; there is no incremental update path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assignment::{slot_assignments, SlotAssignment};
use crate::compat::default_matrix;
use crate::error::{LineupError, Result};
use crate::formation::Formation;
use crate::models::registry::PlayerRegistry;
use crate::selection::{team_average, SelectionSet};

/// Team mentality posted with the lineup. Consumed by the match engine, not
/// interpreted here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mentality {
    VeryDefensive,
    Defensive,
    #[default]
    Balanced,
    Attacking,
    VeryAttacking,
}

/// Token for an in-flight auto-lineup request, keyed by the formation it was
/// issued for. Requests are fire-and-forget: switching formation does not
/// cancel an outstanding token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAutoLineup {
    pub formation: String,
}

/// Read-only snapshot posted to the persistence collaborator on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupSubmission {
    pub players: Vec<String>,
    pub formation: String,
    pub mentality: Mentality,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct LineupSession {
    registry: PlayerRegistry,
    formation: &'static Formation,
    selection: SelectionSet,
    mentality: Mentality,
    /// Last auto-lineup response that arrived, whichever formation it was
    /// requested for.
    auto_lineup: Vec<String>,
}

impl LineupSession {
    pub fn new(registry: PlayerRegistry, formation_code: &str) -> Result<Self> {
        let formation = Formation::for_code(formation_code)
            .ok_or_else(|| LineupError::InvalidFormation(formation_code.to_string()))?;
        Ok(Self {
            registry,
            formation,
            selection: SelectionSet::new(),
            mentality: Mentality::default(),
            auto_lineup: Vec::new(),
        })
    }

    pub fn formation(&self) -> &'static Formation {
        self.formation
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn set_mentality(&mut self, mentality: Mentality) {
        self.mentality = mentality;
    }

    /// Switch the active formation and issue a token for its auto-lineup
    /// fetch. The caller forwards the token to the server and later hands
    /// the response back via [`resolve_auto_lineup`]. Outstanding tokens for
    /// previous formations are not cancelled.
    ///
    /// [`resolve_auto_lineup`]: LineupSession::resolve_auto_lineup
    pub fn set_formation(&mut self, code: &str) -> Result<PendingAutoLineup> {
        let formation = Formation::for_code(code)
            .ok_or_else(|| LineupError::InvalidFormation(code.to_string()))?;
        self.formation = formation;
        debug!(formation = %formation.code, "formation changed, auto-lineup fetch issued");
        Ok(PendingAutoLineup { formation: formation.code.clone() })
    }

    /// Deliver the result of an auto-lineup fetch.
    ///
    /// A successful response overwrites the cached list even when its token
    /// belongs to a formation that is no longer active, so a slow response
    /// for an earlier formation can clobber the list fetched for the current
    /// one. Known race, kept for compatibility with the shipped behavior.
    ///
    /// A failed fetch is logged and the previously cached list is retained;
    /// there is no retry and no user-facing error.
    pub fn resolve_auto_lineup(
        &mut self,
        pending: &PendingAutoLineup,
        result: Result<Vec<String>>,
    ) {
        match result {
            Ok(lineup) => {
                debug!(
                    formation = %pending.formation,
                    players = lineup.len(),
                    "auto-lineup received"
                );
                self.auto_lineup = lineup;
            }
            Err(err) => {
                warn!(
                    formation = %pending.formation,
                    error = %err,
                    "auto-lineup fetch failed, keeping cached list"
                );
            }
        }
    }

    /// The currently cached auto-lineup list.
    pub fn auto_lineup(&self) -> &[String] {
        &self.auto_lineup
    }

    /// Replace the selection with the cached auto-lineup, discarding manual
    /// edits. Applies whatever list is cached, stale or not.
    pub fn quick_select(&mut self) {
        let lineup = self.auto_lineup.clone();
        self.selection.quick_select(&lineup);
    }

    /// Select or deselect a player by id. Unknown ids and unavailable
    /// players are silently ignored.
    pub fn toggle(&mut self, player_id: &str) {
        match self.registry.get(player_id).cloned() {
            Some(player) => self.selection.toggle(&player),
            None => debug!(player_id, "toggle ignored, player not in registry"),
        }
    }

    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Recompute the full lineup for the current selection and formation.
    pub fn assignments(&self) -> Vec<SlotAssignment> {
        slot_assignments(&self.selection, self.formation, default_matrix(), &self.registry)
    }

    pub fn team_average(&self) -> u8 {
        team_average(&self.selection, &self.registry)
    }

    /// Snapshot for the lineup submission form.
    pub fn submit(&self) -> LineupSubmission {
        LineupSubmission {
            players: self.selection.ids().to_vec(),
            formation: self.formation.code.clone(),
            mentality: self.mentality,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{Player, Position};

    fn squad_registry() -> PlayerRegistry {
        let mut registry = PlayerRegistry::new();
        registry.add(Player::new("gk", "Keeper", Position::GK, 75));
        registry.add(Player::new("cb", "Centre Back", Position::CB, 72));
        registry.add(Player::new("st", "Striker", Position::ST, 80));
        registry.add(Player::new("out", "Injured", Position::CM, 70).with_unavailable("Injury"));
        registry
    }

    #[test]
    fn test_new_rejects_unknown_formation() {
        let err = LineupSession::new(PlayerRegistry::new(), "2-2-7").unwrap_err();
        assert!(matches!(err, LineupError::InvalidFormation(_)));
    }

    #[test]
    fn test_toggle_gates_on_availability() {
        let mut session = LineupSession::new(squad_registry(), "4-4-2").unwrap();

        session.toggle("gk");
        session.toggle("out"); // unavailable, ignored
        session.toggle("ghost"); // unknown, ignored
        assert_eq!(session.selection().ids(), ["gk".to_string()]);
    }

    #[test]
    fn test_quick_select_applies_cached_list() {
        let mut session = LineupSession::new(squad_registry(), "4-4-2").unwrap();
        session.toggle("cb");

        let pending = session.set_formation("4-3-3").unwrap();
        session.resolve_auto_lineup(&pending, Ok(vec!["gk".into(), "st".into()]));
        session.quick_select();

        assert_eq!(session.selection().ids(), ["gk".to_string(), "st".to_string()]);
    }

    #[test]
    fn test_stale_fetch_overwrites_newer_response() {
        // Switch 4-4-2 -> 4-3-3 while the 4-4-2 request is still in flight.
        // The 4-3-3 response arrives first; the late 4-4-2 response then
        // clobbers it, and quick_select applies the stale list. Shipped
        // behavior, intentionally reproduced.
        let mut session = LineupSession::new(squad_registry(), "4-4-2").unwrap();

        let pending_a = session.set_formation("4-4-2").unwrap();
        let pending_b = session.set_formation("4-3-3").unwrap();
        assert_eq!(session.formation().code, "4-3-3");

        session.resolve_auto_lineup(&pending_b, Ok(vec!["gk".into(), "cb".into()]));
        session.resolve_auto_lineup(&pending_a, Ok(vec!["st".into()]));

        assert_eq!(session.auto_lineup(), ["st".to_string()]);
        session.quick_select();
        assert_eq!(session.selection().ids(), ["st".to_string()]);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_list() {
        let mut session = LineupSession::new(squad_registry(), "4-4-2").unwrap();

        let pending = session.set_formation("4-4-2").unwrap();
        session.resolve_auto_lineup(&pending, Ok(vec!["gk".into()]));

        let pending = session.set_formation("4-3-3").unwrap();
        session.resolve_auto_lineup(
            &pending,
            Err(LineupError::FetchFailed("server unreachable".into())),
        );

        assert_eq!(session.auto_lineup(), ["gk".to_string()]);
    }

    #[test]
    fn test_assignments_recompute_after_every_change() {
        let mut session = LineupSession::new(squad_registry(), "4-4-2").unwrap();
        session.toggle("gk");
        assert_eq!(
            session.assignments().iter().filter(|a| a.player_id.is_some()).count(),
            1
        );

        session.toggle("st");
        assert_eq!(
            session.assignments().iter().filter(|a| a.player_id.is_some()).count(),
            2
        );

        session.clear();
        assert!(session.assignments().iter().all(|a| a.player_id.is_none()));
        assert_eq!(session.team_average(), 0);
    }

    #[test]
    fn test_submission_snapshot() {
        let mut session = LineupSession::new(squad_registry(), "4-4-2").unwrap();
        session.toggle("gk");
        session.toggle("st");
        session.set_mentality(Mentality::Attacking);

        let submission = session.submit();
        assert_eq!(submission.players, ["gk".to_string(), "st".to_string()]);
        assert_eq!(submission.formation, "4-4-2");
        assert_eq!(submission.mentality, Mentality::Attacking);

        // Submission is a snapshot; later edits do not affect it
        session.clear();
        assert_eq!(submission.players.len(), 2);
    }
}
