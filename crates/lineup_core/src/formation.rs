//! Formation slot catalog.
//!
//! Each formation is an ordered list of exactly 11 pitch slots with a role
//! and display coordinates. The catalog is immutable, process-wide static
//! configuration; the engine never mutates it.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::models::player::PositionGroup;

/// One fixed pitch position defined by a formation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationSlot {
    /// Unique within the formation, in formation order
    pub id: u8,
    /// Positional code shown on the pitch, e.g. "CB1"
    pub label: String,
    /// Coarse category used for strict matching
    pub role: PositionGroup,
    /// 0 = left touchline, 100 = right touchline
    pub x: f32,
    /// 0 = own goal line, 100 = opponent goal line
    pub y: f32,
}

impl FormationSlot {
    fn new(id: u8, label: &str, role: PositionGroup, x: f32, y: f32) -> Self {
        Self { id, label: label.to_string(), role, x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }
}

/// Immutable catalog entry: a formation code with its 11 ordered slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    /// Formation code, e.g. "4-4-2"
    pub code: String,
    pub name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    fn new(code: &str, name: &str, slots: Vec<FormationSlot>) -> Self {
        debug_assert_eq!(slots.len(), 11, "formation {code} must define 11 slots");
        Self { code: code.to_string(), name: name.to_string(), slots }
    }

    /// All built-in formations, loaded once per process.
    pub fn all() -> &'static [Formation] {
        static CATALOG: OnceLock<Vec<Formation>> = OnceLock::new();
        CATALOG.get_or_init(|| {
            vec![
                Self::create_442(),
                Self::create_433(),
                Self::create_451(),
                Self::create_4231(),
                Self::create_352(),
                Self::create_343(),
            ]
        })
    }

    /// Look up a formation by its code, e.g. "4-4-2".
    pub fn for_code(code: &str) -> Option<&'static Formation> {
        Self::all().iter().find(|f| f.code == code)
    }

    // ========================================================================
    // Formation definitions
    // ========================================================================

    /// 4-4-2 (Balanced)
    fn create_442() -> Formation {
        use PositionGroup::*;
        Formation::new(
            "4-4-2",
            "4-4-2 Flat",
            vec![
                FormationSlot::new(0, "GK", Goalkeeper, 50.0, 5.0),
                FormationSlot::new(1, "LB", Defender, 20.0, 20.0),
                FormationSlot::new(2, "CB1", Defender, 40.0, 20.0),
                FormationSlot::new(3, "CB2", Defender, 60.0, 20.0),
                FormationSlot::new(4, "RB", Defender, 80.0, 20.0),
                FormationSlot::new(5, "LM", Midfielder, 15.0, 50.0),
                FormationSlot::new(6, "CM1", Midfielder, 40.0, 50.0),
                FormationSlot::new(7, "CM2", Midfielder, 60.0, 50.0),
                FormationSlot::new(8, "RM", Midfielder, 85.0, 50.0),
                FormationSlot::new(9, "ST1", Forward, 35.0, 80.0),
                FormationSlot::new(10, "ST2", Forward, 65.0, 80.0),
            ],
        )
    }

    /// 4-3-3 (Attacking)
    fn create_433() -> Formation {
        use PositionGroup::*;
        Formation::new(
            "4-3-3",
            "4-3-3 Attack",
            vec![
                FormationSlot::new(0, "GK", Goalkeeper, 50.0, 5.0),
                FormationSlot::new(1, "LB", Defender, 20.0, 20.0),
                FormationSlot::new(2, "CB1", Defender, 40.0, 20.0),
                FormationSlot::new(3, "CB2", Defender, 60.0, 20.0),
                FormationSlot::new(4, "RB", Defender, 80.0, 20.0),
                FormationSlot::new(5, "CM1", Midfielder, 35.0, 45.0),
                FormationSlot::new(6, "CM2", Midfielder, 50.0, 45.0),
                FormationSlot::new(7, "CM3", Midfielder, 65.0, 45.0),
                FormationSlot::new(8, "LW", Forward, 15.0, 80.0),
                FormationSlot::new(9, "ST", Forward, 50.0, 85.0),
                FormationSlot::new(10, "RW", Forward, 85.0, 80.0),
            ],
        )
    }

    /// 4-5-1 (Defensive)
    fn create_451() -> Formation {
        use PositionGroup::*;
        Formation::new(
            "4-5-1",
            "4-5-1 Defensive",
            vec![
                FormationSlot::new(0, "GK", Goalkeeper, 50.0, 5.0),
                FormationSlot::new(1, "LB", Defender, 20.0, 20.0),
                FormationSlot::new(2, "CB1", Defender, 40.0, 20.0),
                FormationSlot::new(3, "CB2", Defender, 60.0, 20.0),
                FormationSlot::new(4, "RB", Defender, 80.0, 20.0),
                FormationSlot::new(5, "LM", Midfielder, 15.0, 50.0),
                FormationSlot::new(6, "CM1", Midfielder, 35.0, 50.0),
                FormationSlot::new(7, "CM2", Midfielder, 50.0, 50.0),
                FormationSlot::new(8, "CM3", Midfielder, 65.0, 50.0),
                FormationSlot::new(9, "RM", Midfielder, 85.0, 50.0),
                FormationSlot::new(10, "ST", Forward, 50.0, 80.0),
            ],
        )
    }

    /// 4-2-3-1 (Possession)
    fn create_4231() -> Formation {
        use PositionGroup::*;
        Formation::new(
            "4-2-3-1",
            "4-2-3-1 Wide",
            vec![
                FormationSlot::new(0, "GK", Goalkeeper, 50.0, 5.0),
                FormationSlot::new(1, "LB", Defender, 20.0, 20.0),
                FormationSlot::new(2, "CB1", Defender, 40.0, 20.0),
                FormationSlot::new(3, "CB2", Defender, 60.0, 20.0),
                FormationSlot::new(4, "RB", Defender, 80.0, 20.0),
                FormationSlot::new(5, "CDM1", Midfielder, 40.0, 35.0),
                FormationSlot::new(6, "CDM2", Midfielder, 60.0, 35.0),
                FormationSlot::new(7, "LM", Midfielder, 20.0, 60.0),
                FormationSlot::new(8, "CAM", Midfielder, 50.0, 60.0),
                FormationSlot::new(9, "RM", Midfielder, 80.0, 60.0),
                FormationSlot::new(10, "ST", Forward, 50.0, 85.0),
            ],
        )
    }

    /// 3-5-2 (Wing play)
    fn create_352() -> Formation {
        use PositionGroup::*;
        Formation::new(
            "3-5-2",
            "3-5-2 Wing Back",
            vec![
                FormationSlot::new(0, "GK", Goalkeeper, 50.0, 5.0),
                FormationSlot::new(1, "CB1", Defender, 35.0, 20.0),
                FormationSlot::new(2, "CB2", Defender, 50.0, 20.0),
                FormationSlot::new(3, "CB3", Defender, 65.0, 20.0),
                FormationSlot::new(4, "LWB", Defender, 10.0, 45.0),
                FormationSlot::new(5, "CM1", Midfielder, 35.0, 50.0),
                FormationSlot::new(6, "CM2", Midfielder, 65.0, 50.0),
                FormationSlot::new(7, "RWB", Defender, 90.0, 45.0),
                FormationSlot::new(8, "CAM", Midfielder, 50.0, 65.0),
                FormationSlot::new(9, "ST1", Forward, 40.0, 80.0),
                FormationSlot::new(10, "ST2", Forward, 60.0, 80.0),
            ],
        )
    }

    /// 3-4-3 (Very attacking)
    fn create_343() -> Formation {
        use PositionGroup::*;
        Formation::new(
            "3-4-3",
            "3-4-3 Attack",
            vec![
                FormationSlot::new(0, "GK", Goalkeeper, 50.0, 5.0),
                FormationSlot::new(1, "CB1", Defender, 35.0, 20.0),
                FormationSlot::new(2, "CB2", Defender, 50.0, 20.0),
                FormationSlot::new(3, "CB3", Defender, 65.0, 20.0),
                FormationSlot::new(4, "LM", Midfielder, 15.0, 50.0),
                FormationSlot::new(5, "CM1", Midfielder, 40.0, 50.0),
                FormationSlot::new(6, "CM2", Midfielder, 60.0, 50.0),
                FormationSlot::new(7, "RM", Midfielder, 85.0, 50.0),
                FormationSlot::new(8, "LW", Forward, 20.0, 80.0),
                FormationSlot::new(9, "ST", Forward, 50.0, 85.0),
                FormationSlot::new(10, "RW", Forward, 80.0, 80.0),
            ],
        )
    }
}
