//! Starting-player randomness.
//!
//! The engine samples a random source exactly once per game to pick who
//! moves first. The source is injected through `StartingPlayerSource`
//! so tests can make that choice deterministic.
//!
//! ## Sources
//!
//! - `GameRng`: seeded ChaCha8, uniform pick over both players
//! - `FixedStart`: always the same player
//! - `Alternating`: flips the starting player every game
//!
//! ```
//! use grid_tictactoe::core::{GameRng, StartingPlayerSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same sequence of starting players
//! for _ in 0..10 {
//!     assert_eq!(rng1.pick_starting_player(), rng2.pick_starting_player());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::player::Player;

/// Source of the starting player for each new game.
///
/// Called once when the engine is constructed and once per `reset()`.
pub trait StartingPlayerSource {
    /// Pick who moves first in the next game.
    fn pick_starting_player(&mut self) -> Player;
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while keeping a reproducible sequence per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the process-level random source.
    ///
    /// The drawn seed is kept, so `seed()` can still reproduce the run.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl StartingPlayerSource for GameRng {
    fn pick_starting_player(&mut self) -> Player {
        Player::ALL[self.gen_range_usize(0..Player::ALL.len())]
    }
}

/// Always starts the same player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStart(pub Player);

impl StartingPlayerSource for FixedStart {
    fn pick_starting_player(&mut self) -> Player {
        self.0
    }
}

/// Alternates the starting player between games.
///
/// The first pick returns the player given to `new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alternating {
    next: Player,
}

impl Alternating {
    #[must_use]
    pub const fn new(first: Player) -> Self {
        Self { next: first }
    }
}

impl StartingPlayerSource for Alternating {
    fn pick_starting_player(&mut self) -> Player {
        let picked = self.next;
        self.next = picked.opponent();
        picked
    }
}

impl<S: StartingPlayerSource + ?Sized> StartingPlayerSource for &mut S {
    fn pick_starting_player(&mut self) -> Player {
        (**self).pick_starting_player()
    }
}

impl<S: StartingPlayerSource + ?Sized> StartingPlayerSource for Box<S> {
    fn pick_starting_player(&mut self) -> Player {
        (**self).pick_starting_player()
    }
}
