//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, clocks, or I/O, making it:
//!
//! - **Deterministic**: Same seed and tick schedule produce identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`playfield`]: 10x20 grid with collision checking and two-phase line
//!   clearing (burning markers, deferred removal)
//! - [`matrix`]: square occupancy matrices and runtime 90° rotation
//! - [`piece`]: shape definitions and the active falling piece
//! - [`sequencer`]: 7-bag generation plus the time-gated brick injector
//! - [`game`]: the loop scheduler - gravity timing, scoring, phases
//! - [`snapshot`]: the published per-tick view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: each tetromino appears exactly once per bag
//! - **Brick obstacle**: a 1x1 piece injected outside the bag after two
//!   minutes of play, capped at three on the field, immune to line clears
//! - **No wall kicks**: a rotation that would collide is discarded whole
//! - **Burning rows**: cleared rows stay on the field (and collide) for
//!   300ms before removal
//! - **Scoring**: `100 × n²` for clearing n rows at once
//! - **Speed-up**: gravity interval shrinks by 20ms per clear event, with an
//!   80ms floor
//!
//! # Example
//!
//! ```
//! use brickfall_core::Game;
//! use brickfall_types::{GameAction, Phase};
//!
//! // Create and start a game
//! let mut game = Game::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! // Apply move intents, then let gravity land the piece
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::HardDrop);
//! game.tick(600);
//!
//! // The piece merged and the next one is falling
//! assert!(game.playfield().cells().iter().any(|c| c.is_solid()));
//! ```
//!
//! # Timing
//!
//! The host drives the simulation with a fixed timestep (16ms ≈ 60 FPS),
//! calling [`Game::tick`] with the elapsed milliseconds. The drop interval
//! starts at 500ms per row and only the `Running` phase accumulates time.

pub mod game;
pub mod matrix;
pub mod piece;
pub mod playfield;
pub mod sequencer;
pub mod snapshot;

pub use brickfall_types as types;

// Re-export commonly used types for convenience
pub use game::Game;
pub use matrix::Matrix;
pub use piece::{spawn_matrix, Piece};
pub use playfield::Playfield;
pub use sequencer::{Sequencer, SimpleRng};
pub use snapshot::GameSnapshot;
