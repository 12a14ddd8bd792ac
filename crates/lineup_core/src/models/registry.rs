//! Player registry: the roster a lineup session selects from.

use super::player::Player;

/// Read-only player lookup by id.
///
/// The roster is small (a club squad), so lookups scan the backing vector
/// and iteration order is the roster order supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self { players: Vec::new() }
    }

    pub fn from_players(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.get(player_id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::Position;

    #[test]
    fn test_registry_lookup() {
        let mut registry = PlayerRegistry::new();
        registry.add(Player::new("p1", "Keeper", Position::GK, 75));
        registry.add(Player::new("p2", "Centre Back", Position::CB, 72));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("p1").map(|p| p.overall), Some(75));
        assert!(registry.contains("p2"));
        assert!(registry.get("p3").is_none());
    }
}
