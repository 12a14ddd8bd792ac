//! JSON API for the lineup screen.
//!
//! String-in / string-out endpoints for game-engine integration: the UI
//! shell sends the roster and selection, and gets back the computed lineup
//! with per-slot compatibility badges.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assignment::slot_assignments;
use crate::compat::{default_matrix, CompatibilityTier};
use crate::error::{LineupError, Result};
use crate::formation::Formation;
use crate::models::player::{Player, Position, PositionGroup};
use crate::models::registry::PlayerRegistry;
use crate::selection::{team_average, SelectionSet};

#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub schema_version: u8,
    /// Formation code, e.g. "4-4-2"
    pub formation: String,
    pub players: Vec<Player>,
    /// Selected player ids in selection order (at most 11 are used)
    #[serde(default)]
    pub selection: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineupResponse {
    pub schema_version: u8,
    pub formation: String,
    pub team_average: u8,
    pub assignments: Vec<SlotEntry>,
}

/// One rendered pitch slot: position on the pitch plus the occupant, if any.
#[derive(Debug, Serialize, Deserialize)]
pub struct SlotEntry {
    pub slot_id: u8,
    pub label: String,
    pub role: PositionGroup,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<AssignedPlayer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignedPlayer {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub overall: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    pub compatibility: u8,
    /// Badge text, e.g. "Very Good"
    pub tier: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormationsResponse {
    pub schema_version: u8,
    pub formations: Vec<Formation>,
}

/// Compute the lineup for a roster, formation and selection.
///
/// Unknown selection ids are rejected at this boundary (inside the engine
/// they would be silently skipped, which is unhelpful for an integration
/// caller debugging its payload).
pub fn compute_lineup_json(request_json: &str) -> Result<String> {
    let request: LineupRequest = serde_json::from_str(request_json)?;
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(LineupError::UnsupportedSchemaVersion(request.schema_version));
    }

    let formation = Formation::for_code(&request.formation)
        .ok_or_else(|| LineupError::InvalidFormation(request.formation.clone()))?;

    let registry = PlayerRegistry::from_players(request.players);
    for id in &request.selection {
        if !registry.contains(id) {
            return Err(LineupError::UnknownPlayer(id.clone()));
        }
    }

    debug!(
        formation = %formation.code,
        roster = registry.len(),
        selected = request.selection.len(),
        "computing lineup"
    );

    let mut selection = SelectionSet::new();
    selection.quick_select(&request.selection);

    let matrix = default_matrix();
    let assignments = slot_assignments(&selection, formation, matrix, &registry);

    let entries: Vec<SlotEntry> = formation
        .slots
        .iter()
        .zip(&assignments)
        .map(|(slot, entry)| {
            let player = entry.player_id.as_ref().and_then(|id| registry.get(id)).map(|p| {
                AssignedPlayer {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    position: p.position,
                    overall: p.overall,
                    number: p.number,
                    compatibility: entry.compatibility,
                    tier: CompatibilityTier::from_score(entry.compatibility)
                        .display_name()
                        .to_string(),
                }
            });
            SlotEntry {
                slot_id: slot.id,
                label: slot.label.clone(),
                role: slot.role,
                x: slot.x,
                y: slot.y,
                player,
            }
        })
        .collect();

    let response = LineupResponse {
        schema_version: crate::SCHEMA_VERSION,
        formation: formation.code.clone(),
        team_average: team_average(&selection, &registry),
        assignments: entries,
    };

    Ok(serde_json::to_string(&response)?)
}

/// The built-in formation catalog, for the formation picker.
pub fn list_formations_json() -> Result<String> {
    let response = FormationsResponse {
        schema_version: crate::SCHEMA_VERSION,
        formations: Formation::all().to_vec(),
    };
    Ok(serde_json::to_string(&response)?)
}
