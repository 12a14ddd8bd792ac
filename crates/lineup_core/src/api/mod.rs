pub mod lineup_json;

pub use lineup_json::{
    compute_lineup_json, list_formations_json, AssignedPlayer, FormationsResponse, LineupRequest,
    LineupResponse, SlotEntry,
};
