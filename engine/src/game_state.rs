use super::board::Board;
use super::generator::generate_board;
use super::session_rng::SessionRng;
use super::settings::DifficultySettings;
use super::types::{DEADLOCK_SCORE_DIVISOR, GameEvent, GameStatus, TileId};

#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    score: u32,
    move_count: u32,
}

/// The per-session state machine. Every input is either a no-op or a
/// deterministic transition; terminal states accept no further input.
///
/// Undo restores the full snapshot, including score and move count, so
/// undoing a match also refunds its points.
pub struct TileMatchGameState {
    board: Board,
    settings: DifficultySettings,
    selected: Option<TileId>,
    score: u32,
    move_count: u32,
    hints_remaining: u32,
    undos_remaining: u32,
    history: Vec<Snapshot>,
    status: GameStatus,
}

impl TileMatchGameState {
    pub fn new(settings: DifficultySettings, rng: &mut SessionRng) -> Result<Self, String> {
        let board = generate_board(&settings, rng)?;
        Ok(Self::with_board(board, settings))
    }

    fn with_board(board: Board, settings: DifficultySettings) -> Self {
        Self {
            board,
            settings,
            selected: None,
            score: 0,
            move_count: 0,
            hints_remaining: settings.hint_limit,
            undos_remaining: settings.undo_limit,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn select_tile(&mut self, id: TileId) -> Vec<GameEvent> {
        if self.status != GameStatus::InProgress {
            return Vec::new();
        }
        if !self.board.is_playable(id) {
            return Vec::new();
        }

        let Some(first) = self.selected else {
            self.selected = Some(id);
            return vec![GameEvent::TileSelected { tile: id }];
        };

        if first == id {
            self.selected = None;
            return vec![GameEvent::TileDeselected { tile: id }];
        }

        // A stale selection can only come from a caller poking at state
        // it does not own; drop it and treat this tap as a fresh pick.
        if !self.board.is_playable(first) {
            self.selected = Some(id);
            return vec![GameEvent::TileSelected { tile: id }];
        }

        self.selected = None;

        if !self.board.can_match(first, id) {
            return vec![GameEvent::Mismatch { first, second: id }];
        }

        self.push_snapshot();
        let points = self.board.remove_pair(first, id);
        self.score += points;
        self.move_count += 1;

        let mut events = vec![GameEvent::PairRemoved {
            first,
            second: id,
            points,
        }];
        if let Some(game_over) = self.check_game_over() {
            events.push(game_over);
        }
        events
    }

    pub fn undo(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::InProgress || self.undos_remaining == 0 {
            return Vec::new();
        }
        let Some(snapshot) = self.history.pop() else {
            return Vec::new();
        };

        self.board = snapshot.board;
        self.score = snapshot.score;
        self.move_count = snapshot.move_count;
        self.selected = None;
        self.undos_remaining -= 1;

        vec![GameEvent::UndoApplied]
    }

    /// Finds any compatible exposed pair and pre-selects one of its
    /// tiles. A board with no such pair leaves the budget untouched.
    pub fn hint(&mut self) -> Vec<GameEvent> {
        if self.status != GameStatus::InProgress || self.hints_remaining == 0 {
            return Vec::new();
        }
        let Some((first, second)) = self.board.find_any_match() else {
            return Vec::new();
        };

        self.selected = Some(first);
        self.hints_remaining -= 1;

        vec![GameEvent::HintShown { first, second }]
    }

    pub fn restart(&mut self, rng: &mut SessionRng) -> Result<(), String> {
        self.board = generate_board(&self.settings, rng)?;
        self.selected = None;
        self.score = 0;
        self.move_count = 0;
        self.hints_remaining = self.settings.hint_limit;
        self.undos_remaining = self.settings.undo_limit;
        self.history.clear();
        self.status = GameStatus::InProgress;
        Ok(())
    }

    fn push_snapshot(&mut self) {
        if self.settings.undo_limit == 0 {
            return;
        }
        if self.history.len() as u32 >= self.settings.undo_limit {
            self.history.remove(0);
        }
        self.history.push(Snapshot {
            board: self.board.clone(),
            score: self.score,
            move_count: self.move_count,
        });
    }

    fn check_game_over(&mut self) -> Option<GameEvent> {
        if self.board.is_cleared() {
            self.status = GameStatus::Won;
        } else if !self.board.has_moves() {
            self.status = GameStatus::Deadlocked;
        } else {
            return None;
        }

        Some(GameEvent::GameOver {
            status: self.status,
            final_score: self.final_score(),
        })
    }

    /// Full accumulated score on a win, half of it on a deadlock.
    pub fn final_score(&self) -> u32 {
        match self.status {
            GameStatus::Deadlocked => self.score / DEADLOCK_SCORE_DIVISOR,
            _ => self.score,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &DifficultySettings {
        &self.settings
    }

    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    pub fn undos_remaining(&self) -> u32 {
        self.undos_remaining
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
}
