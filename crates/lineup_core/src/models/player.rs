use serde::{Deserialize, Serialize};

/// Specific on-pitch position codes used by the lineup UI.
///
/// # Boundary Contract
/// - Serialized as uppercase codes ("GK", "CB", ...) in all JSON payloads
/// - The coarse category used for slot matching comes from [`Position::group`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
}

impl Position {
    /// Decode from the uppercase string codes used in slot labels and JSON.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GK" => Some(Position::GK),
            "LB" => Some(Position::LB),
            "CB" => Some(Position::CB),
            "RB" => Some(Position::RB),
            "LWB" => Some(Position::LWB),
            "RWB" => Some(Position::RWB),
            "CDM" => Some(Position::CDM),
            "CM" => Some(Position::CM),
            "CAM" => Some(Position::CAM),
            "LM" => Some(Position::LM),
            "RM" => Some(Position::RM),
            "LW" => Some(Position::LW),
            "RW" => Some(Position::RW),
            "CF" => Some(Position::CF),
            "ST" => Some(Position::ST),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::LWB => "LWB",
            Position::RWB => "RWB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::CF => "CF",
            Position::ST => "ST",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            Position::LB | Position::CB | Position::RB | Position::LWB | Position::RWB
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            Position::CDM | Position::CM | Position::CAM | Position::LM | Position::RM
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::LW | Position::RW | Position::CF | Position::ST)
    }

    /// Coarse position category used for strict role matching.
    pub fn group(&self) -> PositionGroup {
        match self {
            Position::GK => PositionGroup::Goalkeeper,
            Position::LB | Position::CB | Position::RB | Position::LWB | Position::RWB => {
                PositionGroup::Defender
            }
            Position::CDM | Position::CM | Position::CAM | Position::LM | Position::RM => {
                PositionGroup::Midfielder
            }
            Position::LW | Position::RW | Position::CF | Position::ST => PositionGroup::Forward,
        }
    }
}

/// Coarse position category (pitch line).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionGroup {
    pub fn short_name(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defender => "DF",
            PositionGroup::Midfielder => "MF",
            PositionGroup::Forward => "FW",
        }
    }
}

/// Matchday availability, supplied by an external eligibility check
/// (injury / suspension / registration). The lineup engine consults it
/// but never recomputes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Availability {
    #[serde(default)]
    pub unavailable: bool,
    /// Optional display reason, e.g. "Hamstring injury"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Player data for lineup selection. Immutable for the duration of one
/// lineup session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Overall rating, 0-100
    pub overall: u8,
    /// Shirt number (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u8>,
    #[serde(default)]
    pub availability: Availability,
}

impl Player {
    pub fn new(id: &str, name: &str, position: Position, overall: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            position,
            overall,
            number: None,
            availability: Availability::default(),
        }
    }

    /// Mark the player unavailable with a display reason.
    pub fn with_unavailable(mut self, reason: &str) -> Self {
        self.availability =
            Availability { unavailable: true, reason: Some(reason.to_string()) };
        self
    }
}
