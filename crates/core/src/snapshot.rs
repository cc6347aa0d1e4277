//! Published per-tick view of the game, consumed by rendering collaborators.

use arrayvec::ArrayVec;

use brickfall_types::{Cell, Phase, PieceKind};

use crate::piece::Piece;
use crate::playfield::{FIELD_COLS, FIELD_ROWS};

/// Everything a renderer needs for one frame.
///
/// `cells` still shows [`Cell::Burning`] markers during the burn window;
/// `burning_rows` lists their indices for effects.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub cells: [[Cell; FIELD_COLS]; FIELD_ROWS],
    pub active: Option<Piece>,
    pub next: PieceKind,
    pub score: u32,
    pub drop_interval_ms: u32,
    pub phase: Phase,
    pub burning_rows: ArrayVec<usize, FIELD_ROWS>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; FIELD_COLS]; FIELD_ROWS],
            active: None,
            next: PieceKind::I,
            score: 0,
            drop_interval_ms: 0,
            phase: Phase::Init,
            burning_rows: ArrayVec::new(),
        }
    }
}
