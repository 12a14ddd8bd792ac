//! # lineup_core - Formation Lineup Engine
//!
//! Deterministic slot-assignment engine for matchday lineup selection:
//! given up to 11 selected players and a tactical formation, map every
//! player onto a pitch slot and report per-slot compatibility for the
//! lineup screen.
//!
//! ## Features
//! - Two-pass greedy assignment: role-matched by weighted score, then an
//!   unconstrained fallback so no selected player is dropped
//! - Built-in formation catalog and compatibility matrix (static config)
//! - Compatibility tier badges and team average for display
//! - JSON API for easy integration with game engines

pub mod api;
pub mod assignment;
pub mod compat;
pub mod error;
pub mod formation;
pub mod models;
pub mod selection;
pub mod session;

// Re-export main API functions
pub use api::{compute_lineup_json, list_formations_json, LineupRequest, LineupResponse};

pub use assignment::{slot_assignments, weighted_score, SlotAssignment};
pub use compat::{default_matrix, CompatibilityMatrix, CompatibilityTier};
pub use error::{LineupError, Result};
pub use formation::{Formation, FormationSlot};
pub use models::{Availability, Player, PlayerRegistry, Position, PositionGroup};
pub use selection::{team_average, SelectionSet, MAX_SELECTED};
pub use session::{LineupSession, LineupSubmission, Mentality, PendingAutoLineup};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_squad() -> serde_json::Value {
        json!([
            {"id": "gk", "name": "GK", "position": "GK", "overall": 80},
            {"id": "lb", "name": "LB", "position": "LB", "overall": 70},
            {"id": "cb1", "name": "CB1", "position": "CB", "overall": 72},
            {"id": "cb2", "name": "CB2", "position": "CB", "overall": 68},
            {"id": "rb", "name": "RB", "position": "RB", "overall": 75},
            {"id": "lm", "name": "LM", "position": "LM", "overall": 65},
            {"id": "cm1", "name": "CM1", "position": "CM", "overall": 66},
            {"id": "cm2", "name": "CM2", "position": "CM", "overall": 64},
            {"id": "rm", "name": "RM", "position": "RM", "overall": 67},
            {"id": "st1", "name": "ST1", "position": "ST", "overall": 78},
            {"id": "st2", "name": "ST2", "position": "ST", "overall": 81},
        ])
    }

    #[test]
    fn test_full_lineup_over_json_api() {
        let request = json!({
            "schema_version": 1,
            "formation": "4-4-2",
            "players": full_squad(),
            "selection": ["gk", "lb", "cb1", "cb2", "rb", "lm", "cm1", "cm2", "rm", "st1", "st2"],
        });

        let result = compute_lineup_json(&request.to_string()).unwrap();
        let response: LineupResponse = serde_json::from_str(&result).unwrap();

        assert_eq!(response.team_average, 71);
        assert!(response.assignments.iter().all(|e| e.player.is_some()));
        // Everyone plays in their own line, so no badge is below Good
        for entry in &response.assignments {
            let player = entry.player.as_ref().unwrap();
            assert!(player.compatibility >= 60, "{} in {}", player.id, entry.label);
        }
    }

    #[test]
    fn test_lineup_is_deterministic() {
        let request = json!({
            "schema_version": 1,
            "formation": "3-5-2",
            "players": full_squad(),
            "selection": ["gk", "cb1", "cb2", "rb", "cm1", "cm2", "st1", "st2"],
        })
        .to_string();

        let first = compute_lineup_json(&request).unwrap();
        let second = compute_lineup_json(&request).unwrap();
        assert_eq!(first, second, "same request should produce same lineup");
    }
}
