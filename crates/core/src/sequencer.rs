//! Sequencer - 7-bag piece generation plus the time-gated brick injector
//!
//! The bag guarantees each of the seven tetrominoes appears exactly once per
//! cycle, in random order; a new bag is shuffled only when the current one is
//! exhausted. The brick obstacle lives outside the bag: once enough session
//! time has elapsed its injection chance ramps up, and a successful draw sets
//! a pending flag that the next spawn consumes (subject to the on-field cap).
//!
//! Time and randomness are both injected: the RNG is a seeded LCG and the
//! session clock only advances through [`Sequencer::advance`], so a given
//! seed and tick schedule reproduce a session exactly.

use brickfall_types::{
    PieceKind, BRICK_CHANCE_RAMP_MS, BRICK_GRACE_PERIOD_MS, BRICK_MAX_CHANCE, BRICK_MAX_ON_FIELD,
};

use crate::piece::Piece;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate a uniform value in [0, 1)
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Piece sequencer: bag queue, session clock and pending-brick flag
#[derive(Debug, Clone)]
pub struct Sequencer {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling and brick draws
    rng: SimpleRng,
    /// Session time in ms, advanced by the loop (paused time never counts)
    session_ms: u64,
    /// A brick draw succeeded; the next spawn emits it (cap permitting)
    pending_brick: bool,
}

impl Sequencer {
    /// Create a new sequencer with the given seed
    pub fn new(seed: u32) -> Self {
        let mut seq = Self {
            bag: PieceKind::BAG,
            bag_index: 0,
            rng: SimpleRng::new(seed),
            session_ms: 0,
            pending_brick: false,
        };
        seq.refill_bag();
        seq
    }

    /// Shuffle a fresh bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::BAG;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Produce the next piece at its spawn position.
    ///
    /// A pending brick takes priority over the bag as long as fewer than
    /// [`BRICK_MAX_ON_FIELD`] bricks sit on the field; the flag is consumed
    /// either way it fires. Otherwise the bag head is popped, refilling the
    /// moment the bag empties so [`Sequencer::peek`] always has an answer.
    pub fn next(&mut self, brick_count_on_field: usize) -> Piece {
        if self.pending_brick && brick_count_on_field < BRICK_MAX_ON_FIELD {
            self.pending_brick = false;
            return Piece::spawn(PieceKind::Brick);
        }

        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        Piece::spawn(kind)
    }

    /// What `next` would currently produce, without consuming it.
    ///
    /// Mirrors `next`'s precedence: the pending brick wins over the bag head.
    pub fn peek(&self) -> PieceKind {
        if self.pending_brick {
            PieceKind::Brick
        } else {
            self.bag[self.bag_index]
        }
    }

    /// Current brick injection chance for this session.
    ///
    /// 0 during the grace period, then a linear ramp to the ceiling over the
    /// ramp duration, holding there for the rest of the session.
    pub fn brick_chance(&self) -> f64 {
        if self.session_ms < BRICK_GRACE_PERIOD_MS {
            return 0.0;
        }
        let ramp = (self.session_ms - BRICK_GRACE_PERIOD_MS) as f64;
        (ramp / BRICK_CHANCE_RAMP_MS as f64 * BRICK_MAX_CHANCE).min(BRICK_MAX_CHANCE)
    }

    /// Roll for a brick; on success the next spawn emits one.
    ///
    /// No-op while the field already holds the maximum number of bricks.
    /// Invoked once per landing drop-step, not per rendered frame.
    pub fn try_schedule_brick(&mut self, brick_count_on_field: usize) {
        if brick_count_on_field >= BRICK_MAX_ON_FIELD {
            return;
        }
        let chance = self.brick_chance();
        if self.rng.next_unit() < chance {
            self.pending_brick = true;
        }
    }

    /// Advance the session clock (only called while the game runs)
    pub fn advance(&mut self, delta_ms: u32) {
        self.session_ms += u64::from(delta_ms);
    }

    /// Restart the session clock and drop any pending brick; used on reset
    pub fn reset_session(&mut self) {
        self.session_ms = 0;
        self.pending_brick = false;
    }

    /// Elapsed session time in ms
    pub fn session_ms(&self) -> u64 {
        self.session_ms
    }

    /// Remaining pieces in the current bag (for testing/debugging)
    #[cfg(test)]
    fn current_bag(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}
