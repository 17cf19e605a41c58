use rand::Rng;

use super::Player;

/// How the roster is ordered before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOrder {
    /// Seed 0: players stay in the order given.
    Keep,
    /// Seed 1: the two players trade places.
    Swap,
}

impl StartOrder {
    /// Map a numeric seed (0 or 1) to an order.
    pub fn from_seed(seed: u8) -> Option<StartOrder> {
        match seed {
            0 => Some(StartOrder::Keep),
            1 => Some(StartOrder::Swap),
            _ => None,
        }
    }
}

/// Exactly two players. Index 0 is always the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    pub fn new(first: Player, second: Player) -> Self {
        Roster {
            players: [first, second],
        }
    }

    /// Build a roster, optionally reordered once. Without an explicit order
    /// the choice is a fair coin flip drawn from `rng`.
    pub fn initial_order<R: Rng>(
        players: [Player; 2],
        order: Option<StartOrder>,
        rng: &mut R,
    ) -> Self {
        let order = order.unwrap_or_else(|| {
            if rng.random_bool(0.5) {
                StartOrder::Swap
            } else {
                StartOrder::Keep
            }
        });

        let mut roster = Roster { players };
        if order == StartOrder::Swap {
            roster.rotate();
        }
        roster
    }

    /// Hand the turn to the other player
    pub fn rotate(&mut self) {
        self.players.swap(0, 1);
    }

    /// Player to move
    pub fn active(&self) -> &Player {
        &self.players[0]
    }

    /// Player waiting for their turn
    pub fn waiting(&self) -> &Player {
        &self.players[1]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
}
