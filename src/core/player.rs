//! Player identities.
//!
//! The game always has exactly two players. Turn order alternates
//! strictly between them, so the only operation most callers need
//! is `opponent()`.

use serde::{Deserialize, Serialize};

/// One of the two player identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first identity (numbered 1).
    PlayerOne,
    /// The second identity (numbered 2).
    PlayerTwo,
}

impl Player {
    /// Both identities, in numbering order.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// The other identity.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// 1-based player number.
    ///
    /// ```
    /// use grid_tictactoe::Player;
    ///
    /// assert_eq!(Player::PlayerOne.number(), 1);
    /// assert_eq!(Player::PlayerTwo.number(), 2);
    /// ```
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::PlayerOne => 1,
            Player::PlayerTwo => 2,
        }
    }

    /// Single-character mark used in text rendering.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::PlayerOne => 'X',
            Player::PlayerTwo => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerOne => write!(f, "Player One"),
            Player::PlayerTwo => write!(f, "Player Two"),
        }
    }
}
