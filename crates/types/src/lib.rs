//! Shared data types and constants
//!
//! Pure data structures with no external dependencies, usable from the core
//! engine, the terminal view, and tests alike.
//!
//! # Playfield dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Pieces spawn above the visible field (negative rows) and scroll in.
//!
//! # Timing constants
//!
//! All values in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DROP_SPEED_MS` | 500 | Initial gravity interval |
//! | `SPEEDUP_PER_CLEAR_MS` | 20 | Interval reduction per clear event |
//! | `DROP_INTERVAL_FLOOR_MS` | 80 | Gravity never gets faster than this |
//! | `BURN_DURATION_MS` | 300 | Burning rows stay on the field this long |
//!
//! # Brick gating
//!
//! The brick is a 1x1 obstacle injected outside the 7-bag cycle. Its chance
//! is 0 for the first `BRICK_GRACE_PERIOD_MS` of a session, then ramps
//! linearly to `BRICK_MAX_CHANCE` over `BRICK_CHANCE_RAMP_MS` and holds. At
//! most `BRICK_MAX_ON_FIELD` bricks may sit on the field at once.

/// Playfield width in cells (10 columns)
pub const COLS: u8 = 10;

/// Playfield height in cells (20 rows)
pub const ROWS: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Initial gravity interval (500ms per row)
pub const DROP_SPEED_MS: u32 = 500;

/// Gravity interval reduction per line-clear event (not per line)
pub const SPEEDUP_PER_CLEAR_MS: u32 = 20;

/// Minimum gravity interval (80ms)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 80;

/// How long burning rows stay on the field before removal (300ms)
pub const BURN_DURATION_MS: u32 = 300;

/// Base score per cleared line; a clear of n rows awards `100 * n^2`
pub const POINTS_PER_LINE: u32 = 100;

/// Maximum number of bricks allowed on the field at once
pub const BRICK_MAX_ON_FIELD: usize = 3;

/// No bricks are scheduled before this much session time has elapsed
pub const BRICK_GRACE_PERIOD_MS: u64 = 2 * 60 * 1000;

/// Brick chance ceiling (10%)
pub const BRICK_MAX_CHANCE: f64 = 0.1;

/// Time over which the brick chance ramps from 0 to the ceiling
pub const BRICK_CHANCE_RAMP_MS: u64 = 60 * 1000;

/// Piece kinds: the seven tetrominoes plus the brick obstacle
///
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **Brick**: Grey, 1x1, never in the bag, immune to line clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
    Brick,
}

impl PieceKind {
    /// The seven canonical kinds that make up one bag, in tag order.
    pub const BAG: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brickfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("BRICK"), Some(PieceKind::Brick));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "brick" => Some(PieceKind::Brick),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Brick => "brick",
        }
    }

    /// Whether this kind is the brick obstacle.
    pub fn is_brick(&self) -> bool {
        matches!(self, PieceKind::Brick)
    }
}

/// A cell on the playfield
///
/// - `Empty`: nothing settled here
/// - `Filled(kind)`: settled cell stamped with the piece kind that landed
/// - `Burning`: cell of a row detected as clearable, held for the burn
///   animation window; solid for collision until physically removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Filled(PieceKind),
    Burning,
}

impl Cell {
    /// True for any non-empty cell (filled or burning).
    pub fn is_solid(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// True iff this cell holds a settled brick.
    pub fn is_brick(&self) -> bool {
        matches!(self, Cell::Filled(PieceKind::Brick))
    }
}

/// Game lifecycle phase
///
/// - `Init`: created, first piece not yet spawned
/// - `Running`: simulation advancing
/// - `Paused`: frozen; no counter accumulates
/// - `GameOver`: field topped out; only a full reset leaves this phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Init,
    Running,
    Paused,
    GameOver,
}

/// Game actions applied to the engine
///
/// Raw move intents from the input layer; each maps to one game mechanic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Slide piece to the lowest valid position; lands on the next tick
    HardDrop,
    /// Rotate piece 90° clockwise (discarded whole if it would collide)
    Rotate,
    /// Toggle pause state
    Pause,
    /// Restart the game from scratch
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use brickfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}
