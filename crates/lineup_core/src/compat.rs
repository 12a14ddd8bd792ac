//! Slot compatibility: how well a specific player position fits a specific
//! slot label, and the tier badge derived from that score.
//!
//! The default matrix is immutable, process-wide static configuration built
//! once from the formation catalog. Missing entries always score 0.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::formation::Formation;
use crate::models::player::Position;

/// Tier shown on the compatibility badge next to each assigned slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompatibilityTier {
    Natural,
    VeryGood,
    Good,
    Okay,
    Poor,
    Unsuitable,
}

impl CompatibilityTier {
    /// Classify a 0-100 score. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u8) -> Self {
        match score {
            100.. => CompatibilityTier::Natural,
            80..=99 => CompatibilityTier::VeryGood,
            60..=79 => CompatibilityTier::Good,
            40..=59 => CompatibilityTier::Okay,
            20..=39 => CompatibilityTier::Poor,
            _ => CompatibilityTier::Unsuitable,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CompatibilityTier::Natural => "Natural",
            CompatibilityTier::VeryGood => "Very Good",
            CompatibilityTier::Good => "Good",
            CompatibilityTier::Okay => "Okay",
            CompatibilityTier::Poor => "Poor",
            CompatibilityTier::Unsuitable => "Unsuitable",
        }
    }
}

/// Compatibility scores keyed by slot label, then player position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatibilityMatrix {
    entries: HashMap<String, HashMap<Position, u8>>,
}

impl CompatibilityMatrix {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn insert(&mut self, label: &str, scores: &[(Position, u8)]) {
        self.entries.insert(label.to_string(), scores.iter().copied().collect());
    }

    /// Score for playing `position` in the slot labelled `label`.
    /// Missing entries imply 0.
    pub fn score(&self, position: Position, label: &str) -> u8 {
        self.entries.get(label).and_then(|scores| scores.get(&position)).copied().unwrap_or(0)
    }

    /// Number of positions listed for a slot label. Fewer compatible
    /// positions means a more specialised slot.
    pub fn specificity(&self, label: &str) -> usize {
        self.entries.get(label).map(|scores| scores.len()).unwrap_or(0)
    }
}

/// Positions playable in a slot whose label derives from `slot_position`,
/// with their 0-100 scores. The natural position always scores 100.
fn position_table(slot_position: Position) -> &'static [(Position, u8)] {
    use Position::*;
    match slot_position {
        GK => &[(GK, 100)],
        LB => &[(LB, 100), (LWB, 90), (LM, 60), (CB, 50), (RB, 40)],
        RB => &[(RB, 100), (RWB, 90), (RM, 60), (CB, 50), (LB, 40)],
        CB => &[(CB, 100), (LB, 60), (RB, 60), (CDM, 40)],
        LWB => &[(LWB, 100), (LB, 90), (LM, 70), (LW, 50)],
        RWB => &[(RWB, 100), (RB, 90), (RM, 70), (RW, 50)],
        CDM => &[(CDM, 100), (CM, 80), (CB, 50), (CAM, 40)],
        CM => &[(CM, 100), (CDM, 80), (CAM, 80), (LM, 60), (RM, 60)],
        CAM => &[(CAM, 100), (CM, 80), (CF, 60), (LW, 40), (RW, 40), (ST, 30)],
        LM => &[(LM, 100), (LW, 80), (LWB, 60), (CM, 60), (LB, 40)],
        RM => &[(RM, 100), (RW, 80), (RWB, 60), (CM, 60), (RB, 40)],
        LW => &[(LW, 100), (LM, 80), (RW, 70), (ST, 50), (CAM, 40)],
        RW => &[(RW, 100), (RM, 80), (LW, 70), (ST, 50), (CAM, 40)],
        CF => &[(CF, 100), (ST, 90), (CAM, 60), (LW, 50), (RW, 50)],
        ST => &[(ST, 100), (CF, 90), (LW, 60), (RW, 60), (CAM, 30)],
    }
}

/// The default matrix, covering every slot label used by the built-in
/// formation catalog. Loaded once per process.
pub fn default_matrix() -> &'static CompatibilityMatrix {
    static MATRIX: OnceLock<CompatibilityMatrix> = OnceLock::new();
    MATRIX.get_or_init(|| {
        let mut matrix = CompatibilityMatrix::new();
        for formation in Formation::all() {
            for slot in &formation.slots {
                let base = slot.label.trim_end_matches(|c: char| c.is_ascii_digit());
                if let Some(position) = Position::from_code(base) {
                    matrix.insert(&slot.label, position_table(position));
                }
            }
        }
        matrix
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (0, CompatibilityTier::Unsuitable),
            (19, CompatibilityTier::Unsuitable),
            (20, CompatibilityTier::Poor),
            (39, CompatibilityTier::Poor),
            (40, CompatibilityTier::Okay),
            (59, CompatibilityTier::Okay),
            (60, CompatibilityTier::Good),
            (79, CompatibilityTier::Good),
            (80, CompatibilityTier::VeryGood),
            (99, CompatibilityTier::VeryGood),
            (100, CompatibilityTier::Natural),
        ];
        for (score, expected) in cases {
            assert_eq!(CompatibilityTier::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn test_missing_entries_score_zero() {
        let matrix = default_matrix();
        // GK slot lists only goalkeepers
        assert_eq!(matrix.score(Position::ST, "GK"), 0);
        assert_eq!(matrix.score(Position::CB, "GK"), 0);
        // Unknown label
        assert_eq!(matrix.score(Position::GK, "SW"), 0);
        assert_eq!(matrix.specificity("SW"), 0);
    }

    #[test]
    fn test_natural_positions_score_100() {
        let matrix = default_matrix();
        assert_eq!(matrix.score(Position::GK, "GK"), 100);
        assert_eq!(matrix.score(Position::CB, "CB1"), 100);
        assert_eq!(matrix.score(Position::CM, "CM2"), 100);
        assert_eq!(matrix.score(Position::ST, "ST2"), 100);
    }

    #[test]
    fn test_default_matrix_covers_catalog() {
        let matrix = default_matrix();
        for formation in Formation::all() {
            for slot in &formation.slots {
                assert!(
                    matrix.specificity(&slot.label) > 0,
                    "formation {} slot {} missing from default matrix",
                    formation.code,
                    slot.label
                );
            }
        }
    }

    #[test]
    fn test_goalkeeper_slot_is_most_specific() {
        let matrix = default_matrix();
        assert_eq!(matrix.specificity("GK"), 1);
        assert!(matrix.specificity("CB1") > matrix.specificity("GK"));
    }
}
