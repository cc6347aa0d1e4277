//! Game - the loop scheduler tying playfield, pieces and sequencer together
//!
//! This is the only component with side effects and ordering logic. The host
//! calls [`Game::tick`] with elapsed milliseconds (nominally every 16ms) and
//! feeds it raw move intents via [`Game::apply_action`]; everything else is
//! internal.
//!
//! Timing model: a drop counter accumulates frame deltas and triggers exactly
//! one drop-step when it exceeds the current drop interval - a large stall
//! never produces catch-up multi-stepping. The 300ms burning-row removal is a
//! countdown on this same tick path rather than a detached host timer, so
//! pausing freezes it and a reset cancels it.

use arrayvec::ArrayVec;

use brickfall_types::{
    GameAction, Phase, PieceKind, BURN_DURATION_MS, DROP_INTERVAL_FLOOR_MS, DROP_SPEED_MS,
    POINTS_PER_LINE, SPEEDUP_PER_CLEAR_MS,
};

use crate::piece::Piece;
use crate::playfield::{Playfield, FIELD_ROWS};
use crate::sequencer::Sequencer;
use crate::snapshot::GameSnapshot;

/// Complete game session state
///
/// Owns the playfield, the active piece, the sequencer, score and timers;
/// replaced wholesale by [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    playfield: Playfield,
    active: Option<Piece>,
    sequencer: Sequencer,
    phase: Phase,
    score: u32,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    /// Countdown until pending burning rows are physically removed; 0 = none.
    burn_timer_ms: u32,
    /// Rows currently held in the burning state, in marking order.
    burning_rows: ArrayVec<usize, FIELD_ROWS>,
}

impl Game {
    /// Create a new game with the given RNG seed; call [`Game::start`] to
    /// spawn the first piece.
    pub fn new(seed: u32) -> Self {
        Self {
            playfield: Playfield::new(),
            active: None,
            sequencer: Sequencer::new(seed),
            phase: Phase::Init,
            score: 0,
            drop_interval_ms: DROP_SPEED_MS,
            drop_counter_ms: 0,
            burn_timer_ms: 0,
            burning_rows: ArrayVec::new(),
        }
    }

    /// Spawn the first piece and enter `Running`
    pub fn start(&mut self) {
        if self.phase != Phase::Init {
            return;
        }
        self.phase = Phase::Running;
        self.spawn_next();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// The piece kind the sequencer will produce next (preview)
    pub fn next_kind(&self) -> PieceKind {
        self.sequencer.peek()
    }

    /// Rows currently burning (empty outside the burn window)
    pub fn burning_rows(&self) -> &[usize] {
        &self.burning_rows
    }

    /// Mutable field access for staging scenarios (tests, tooling).
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    /// Advance the simulation by `delta_ms` of real time.
    ///
    /// No-op unless `Running`; paused and game-over sessions accumulate
    /// nothing, so resuming never treats the pause duration as elapsed game
    /// time.
    pub fn tick(&mut self, delta_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }

        self.sequencer.advance(delta_ms);

        if self.burn_timer_ms > 0 {
            self.burn_timer_ms = self.burn_timer_ms.saturating_sub(delta_ms);
            if self.burn_timer_ms == 0 {
                self.finish_burn();
            }
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(delta_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.drop_counter_ms = 0;
            self.drop_step();
        }
    }

    /// Apply a raw move intent, synchronously and outside the drop-step.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(0, -1),
            GameAction::MoveRight => self.try_shift(0, 1),
            GameAction::SoftDrop => self.try_shift(1, 0),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Move the active piece if the target position is collision-free.
    fn try_shift(&mut self, dr: i8, dc: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.moved(dr, dc);
        if self.playfield.has_collision(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece clockwise; a colliding rotation is discarded
    /// entirely (no alternate-offset retry).
    fn try_rotate(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if self.playfield.has_collision(&rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Slide the active piece to the floor and force the drop counter to the
    /// full interval so the next tick performs the landing drop-step.
    fn hard_drop(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        while !self.playfield.has_collision(&piece.moved(1, 0)) {
            piece.row += 1;
        }
        self.active = Some(piece);
        self.drop_counter_ms = self.drop_interval_ms;
        true
    }

    fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                // The next tick starts a fresh gravity period.
                self.drop_counter_ms = 0;
                true
            }
            _ => false,
        }
    }

    /// One gravity step: descend, or land and hand over to the next piece.
    fn drop_step(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let moved = active.moved(1, 0);
        if !self.playfield.has_collision(&moved) {
            self.active = Some(moved);
            return;
        }

        self.land_piece(active);
    }

    /// Merge the landed piece, process clears, then spawn the next piece.
    fn land_piece(&mut self, piece: Piece) {
        self.active = None;
        self.playfield.merge_piece(&piece);

        let burned = self.playfield.clear_lines();
        if !burned.is_empty() {
            let n = burned.len() as u32;
            self.score += POINTS_PER_LINE * n * n;
            self.drop_interval_ms = self
                .drop_interval_ms
                .saturating_sub(SPEEDUP_PER_CLEAR_MS)
                .max(DROP_INTERVAL_FLOOR_MS);

            // A clear during an open burn window re-detects the rows already
            // burning; fold them in once and re-arm the single countdown.
            for row in burned {
                if !self.burning_rows.contains(&row) {
                    self.burning_rows.push(row);
                }
            }
            self.burn_timer_ms = BURN_DURATION_MS;
        }

        self.sequencer
            .try_schedule_brick(self.playfield.brick_count());
        self.spawn_next();
    }

    /// Draw the next piece; a spawn that cannot even descend one row means
    /// the field has topped out.
    fn spawn_next(&mut self) {
        let piece = self.sequencer.next(self.playfield.brick_count());
        if self.playfield.has_collision(&piece.moved(1, 0)) {
            self.phase = Phase::GameOver;
            self.active = None;
            return;
        }
        self.active = Some(piece);
    }

    /// Remove the burning rows and close the window.
    fn finish_burn(&mut self) {
        self.playfield.remove_rows(&self.burning_rows);
        self.burning_rows.clear();
    }

    /// Full reset: fresh playfield, zero score, initial drop interval,
    /// sequencer session restarted, any pending burn cancelled.
    pub fn reset(&mut self) {
        self.playfield = Playfield::new();
        self.active = None;
        self.score = 0;
        self.drop_interval_ms = DROP_SPEED_MS;
        self.drop_counter_ms = 0;
        self.burn_timer_ms = 0;
        self.burning_rows.clear();
        self.sequencer.reset_session();
        self.phase = Phase::Running;
        self.spawn_next();
    }

    /// Write the published state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.playfield.write_cells(&mut out.cells);
        out.active = self.active;
        out.next = self.sequencer.peek();
        out.score = self.score;
        out.drop_interval_ms = self.drop_interval_ms;
        out.phase = self.phase;
        out.burning_rows.clear();
        out.burning_rows.extend(self.burning_rows.iter().copied());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brickfall_types::{Cell, COLS};

    /// Tick until the active piece merges into the field.
    fn drop_to_landing(game: &mut Game) {
        let solid = |g: &Game| g.playfield().cells().iter().filter(|c| c.is_solid()).count();
        let before = solid(game);
        while solid(game) == before && game.phase() == Phase::Running {
            game.tick(game.drop_interval_ms() + 1);
        }
    }

    #[test]
    fn starts_running_with_active_piece() {
        let mut game = Game::new(1);
        assert_eq!(game.phase(), Phase::Init);
        game.start();
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.active().is_some());
    }

    #[test]
    fn no_drop_before_interval_elapses() {
        let mut game = Game::new(1);
        game.start();
        let row = game.active().unwrap().row;

        game.tick(DROP_SPEED_MS - 1);
        assert_eq!(game.active().unwrap().row, row);

        // Counter strictly exceeds the interval now.
        game.tick(2);
        assert_eq!(game.active().unwrap().row, row + 1);
    }

    #[test]
    fn one_step_per_tick_even_after_a_stall() {
        let mut game = Game::new(1);
        game.start();
        let row = game.active().unwrap().row;

        // A 5-interval stall still yields exactly one step.
        game.tick(DROP_SPEED_MS * 5);
        assert_eq!(game.active().unwrap().row, row + 1);
    }

    #[test]
    fn pause_freezes_drop_counter() {
        let mut game = Game::new(1);
        game.start();
        let row = game.active().unwrap().row;

        game.tick(DROP_SPEED_MS - 10);
        game.apply_action(GameAction::Pause);
        game.tick(60_000);
        assert_eq!(game.active().unwrap().row, row);

        // Resume resets the counter: a full interval is needed again.
        game.apply_action(GameAction::Pause);
        game.tick(DROP_SPEED_MS - 10);
        assert_eq!(game.active().unwrap().row, row);
        game.tick(11);
        assert_eq!(game.active().unwrap().row, row + 1);
    }

    #[test]
    fn hard_drop_lands_on_next_tick() {
        let mut game = Game::new(1);
        game.start();
        let kind = game.active().unwrap().kind;

        game.apply_action(GameAction::HardDrop);
        // Piece sits on the floor but is not merged yet.
        assert_eq!(game.active().unwrap().kind, kind);
        assert!(game.playfield().cells().iter().all(|c| *c == Cell::Empty));

        game.tick(1);
        // Landed and merged; a different piece instance is active now.
        assert!(game
            .playfield()
            .cells()
            .iter()
            .any(|c| *c == Cell::Filled(kind)));
    }

    #[test]
    fn landing_merges_and_spawns_next() {
        let mut game = Game::new(1);
        game.start();
        let first = game.active().unwrap().kind;

        drop_to_landing(&mut game);

        assert_eq!(game.phase(), Phase::Running);
        assert!(game
            .playfield()
            .cells()
            .iter()
            .any(|c| *c == Cell::Filled(first)));
        assert!(game.active().is_some());
    }

    #[test]
    fn clear_awards_squared_score_and_speeds_up() {
        let mut game = Game::new(1);
        game.start();

        // Fill the bottom row except where the hard-dropped piece will land.
        let active = game.active().unwrap();
        let piece_cols: Vec<i8> = {
            let mut floored = active;
            while !game.playfield().has_collision(&floored.moved(1, 0)) {
                floored.row += 1;
            }
            floored
                .cells()
                .filter(|&(r, _)| r == 19)
                .map(|(_, c)| c)
                .collect()
        };
        for col in 0..COLS as i8 {
            if !piece_cols.contains(&col) {
                game.playfield_mut().set(19, col, Cell::Filled(PieceKind::S));
            }
        }

        game.apply_action(GameAction::HardDrop);
        game.tick(1);

        assert_eq!(game.score(), POINTS_PER_LINE);
        assert_eq!(game.drop_interval_ms(), DROP_SPEED_MS - SPEEDUP_PER_CLEAR_MS);
        assert_eq!(game.burning_rows(), &[19]);
        assert_eq!(game.playfield().get(19, 0), Some(Cell::Burning));
    }

    #[test]
    fn burning_rows_removed_after_window() {
        let mut game = Game::new(1);
        game.start();
        for col in 0..COLS as i8 {
            game.playfield_mut().set(19, col, Cell::Filled(PieceKind::S));
        }
        // Put a survivor above the burn line.
        game.playfield_mut().set(18, 0, Cell::Filled(PieceKind::Brick));

        game.apply_action(GameAction::HardDrop);
        game.tick(1);
        assert_eq!(game.burning_rows(), &[19]);

        // The window is still open shortly before 300ms...
        game.tick(BURN_DURATION_MS - 2);
        assert_eq!(game.playfield().get(19, 5), Some(Cell::Burning));

        // ...and closed after it: the survivor settles onto the floor.
        game.tick(2);
        assert!(game.burning_rows().is_empty());
        assert_eq!(game.playfield().get(19, 0), Some(Cell::Filled(PieceKind::Brick)));
    }

    #[test]
    fn reset_cancels_pending_burn() {
        let mut game = Game::new(1);
        game.start();
        for col in 0..COLS as i8 {
            game.playfield_mut().set(19, col, Cell::Filled(PieceKind::S));
        }
        game.apply_action(GameAction::HardDrop);
        game.tick(1);
        assert!(!game.burning_rows().is_empty());

        game.apply_action(GameAction::Restart);
        assert_eq!(game.score(), 0);
        assert_eq!(game.drop_interval_ms(), DROP_SPEED_MS);
        assert!(game.burning_rows().is_empty());

        // The stale countdown must not fire into the fresh field.
        game.tick(BURN_DURATION_MS + 16);
        let settled = game
            .playfield()
            .cells()
            .iter()
            .filter(|c| c.is_solid())
            .count();
        assert_eq!(settled, 0);
    }

    #[test]
    fn topped_out_field_ends_the_game() {
        let mut game = Game::new(1);
        game.start();
        // Wall off the spawn area just below the buffer (one gap so the
        // wall itself is not a clearable row).
        for col in 0..COLS as i8 - 1 {
            for row in 0..4 {
                game.playfield_mut().set(row, col, Cell::Filled(PieceKind::Z));
            }
        }

        game.apply_action(GameAction::HardDrop);
        game.tick(1);

        assert_eq!(game.phase(), Phase::GameOver);
        assert!(game.active().is_none());

        // Game over is sticky for everything except restart.
        assert!(!game.apply_action(GameAction::MoveLeft));
        game.tick(10_000);
        assert_eq!(game.phase(), Phase::GameOver);

        game.apply_action(GameAction::Restart);
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.active().is_some());
    }

    #[test]
    fn moves_and_rotation_respect_collision() {
        let mut game = Game::new(1);
        game.start();

        // Push the piece against the left wall.
        while game.apply_action(GameAction::MoveLeft) {}
        let col = game.active().unwrap().col;
        assert!(!game.apply_action(GameAction::MoveLeft));
        assert_eq!(game.active().unwrap().col, col);

        // Rotation either commits or leaves the piece untouched.
        let before = game.active().unwrap();
        let rotated = game.apply_action(GameAction::Rotate);
        let after = game.active().unwrap();
        if rotated {
            assert!(!game.playfield().has_collision(&after));
        } else {
            assert_eq!(before, after);
        }
    }

    #[test]
    fn snapshot_reflects_published_state() {
        let mut game = Game::new(9);
        game.start();
        let snap = game.snapshot();

        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.drop_interval_ms, DROP_SPEED_MS);
        assert_eq!(snap.active, game.active());
        assert_eq!(snap.next, game.next_kind());
        assert!(snap.burning_rows.is_empty());
        assert!(snap.playable());
    }

    #[test]
    fn same_seed_same_session() {
        let mut a = Game::new(777);
        let mut b = Game::new(777);
        a.start();
        b.start();

        for _ in 0..2000 {
            a.tick(16);
            b.tick(16);
            assert_eq!(a.active(), b.active());
            assert_eq!(a.score(), b.score());
        }
    }
}
