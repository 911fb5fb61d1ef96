//! The timed game session: the single owner of all game state.
//!
//! Every command has two forms. `try_*` borrows the session and returns the
//! next snapshot or the reason it was refused. The plain form consumes the
//! session and returns the next one, keeping the old state when the command
//! is refused. Hosts that only care about the resulting state use the plain
//! form; tests and diagnostics use `try_*`.

use super::contracts::{Contract, ForfeitContract, JumpContract, PlayContract, UndoContract};
use super::error::CommandError;
use super::history::Ply;
use super::phases::{GameStatus, Outcome};
use super::rules;
use super::scores::Scores;
use super::settings::Settings;
use super::timer::{TimerEpoch, TurnTimer};
use super::view::SessionView;
use super::{Board, Player, Position, Square, Theme};
use tracing::{debug, info, instrument};

/// What a tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was scheduled for a superseded timer and was dropped.
    Stale,
    /// The live board is finished; the clock is not running.
    Idle,
    /// The clock counted down and is still running.
    Running {
        /// Seconds left for the current player.
        remaining: u32,
    },
    /// The clock hit zero and the player lost the turn.
    Forfeited {
        /// Player who ran out of time.
        player: Player,
    },
}

/// A timed tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) settings: Settings,
    pub(crate) opening_player: Player,
    pub(crate) history: Vec<Ply>,
    pub(crate) pointer: usize,
    pub(crate) scores: Scores,
    pub(crate) timer: TurnTimer,
    pub(crate) undos_remaining: u32,
}

impl Session {
    /// Creates a session at the start of a fresh game.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        info!("Creating session");
        Self {
            opening_player: *settings.starting_player(),
            history: vec![Ply::start()],
            pointer: 0,
            scores: Scores::default(),
            timer: TurnTimer::new(*settings.turn_duration()),
            undos_remaining: *settings.undo_budget(),
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// The live board snapshot.
    pub fn board(&self) -> &Board {
        self.history[self.pointer].board()
    }

    /// The player to move on the live snapshot.
    pub fn current_player(&self) -> Player {
        self.player_at(self.pointer)
    }

    /// The player to move at history index `index`.
    pub fn player_at(&self, index: usize) -> Player {
        if index % 2 == 0 {
            self.opening_player
        } else {
            self.opening_player.opponent()
        }
    }

    /// The player who opened the current game.
    pub fn opening_player(&self) -> Player {
        self.opening_player
    }

    /// Status of the live snapshot.
    pub fn status(&self) -> GameStatus {
        let ply = &self.history[self.pointer];
        let board = ply.board();
        if let Some(line) = rules::evaluate(board) {
            return GameStatus::Won(line);
        }
        if rules::is_full(board) {
            return GameStatus::Draw;
        }
        let to_move = self.current_player();
        match ply.actor() {
            Some(forfeited) if ply.is_forfeit() => GameStatus::TimedOut { forfeited, to_move },
            _ => GameStatus::InProgress { to_move },
        }
    }

    /// Outcome of the live snapshot, if the game there is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status().outcome()
    }

    /// Wins and draws since the last restart.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Seconds left for the current player.
    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining()
    }

    /// The turn clock.
    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// Generation of the armed clock, to be echoed back with each tick.
    pub fn timer_epoch(&self) -> TimerEpoch {
        self.timer.epoch()
    }

    /// Undos left before the next move refills the budget.
    pub fn undos_remaining(&self) -> u32 {
        self.undos_remaining
    }

    /// Every snapshot of the current game, including any undone future.
    pub fn history(&self) -> &[Ply] {
        &self.history
    }

    /// Index of the live snapshot in [`Session::history`].
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Active configuration.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current color theme, as stored in the settings.
    pub fn theme(&self) -> Theme {
        *self.settings.theme()
    }

    /// Serializable snapshot of the whole query surface.
    pub fn view(&self) -> SessionView {
        SessionView::from(self)
    }

    // ─────────────────────────────────────────────────────────
    //  Commands (checked)
    // ─────────────────────────────────────────────────────────

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Discards any history past the pointer, appends the new snapshot,
    /// folds a win or draw into the scores, re-arms the clock, and refills
    /// the undo budget.
    ///
    /// # Errors
    ///
    /// Out-of-bounds index, finished board, expired clock, or occupied square.
    #[instrument(skip(self), fields(player = %self.current_player(), pointer = self.pointer))]
    pub fn try_play_move(&self, index: usize) -> Result<Session, CommandError> {
        let pos = Position::from_index(index).ok_or(CommandError::OutOfBounds(index))?;
        PlayContract::pre(self, &pos)?;

        let player = self.current_player();
        let mut board = *self.board();
        board.set(pos, Square::Occupied(player));

        let mut next = self.clone();
        next.push_ply(Ply::mark(board, player, pos));
        if let Some(outcome) = next.status().outcome() {
            info!(%outcome, "Game finished");
            next.scores.record(outcome);
        }
        next.timer.rearm();
        next.undos_remaining = *next.settings.undo_budget();

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        debug!(position = %pos, "Move applied");
        Ok(next)
    }

    /// Skips the current player's turn without marking a cell.
    ///
    /// Appends an unchanged snapshot so the opponent is to move, and
    /// re-arms the clock. If the live ply is already a forfeit, both
    /// players have now passed: that forfeit is dropped instead, which
    /// restores the same board and turn and keeps an idle session's
    /// history bounded.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::GameOver`] on a finished board.
    #[instrument(skip(self), fields(player = %self.current_player(), pointer = self.pointer))]
    pub fn try_expire_turn(&self) -> Result<Session, CommandError> {
        ForfeitContract::pre(self, &())?;

        let player = self.current_player();
        let mut next = self.clone();
        if self.history[self.pointer].is_forfeit() {
            next.history.truncate(self.pointer);
            next.pointer = self.pointer - 1;
        } else {
            next.push_ply(Ply::forfeit(*self.board(), player));
        }
        next.timer.rearm();

        #[cfg(debug_assertions)]
        ForfeitContract::post(self, &next)?;

        info!(%player, "Turn forfeited on timeout");
        Ok(next)
    }

    /// Steps back one ply, spending one undo.
    ///
    /// # Errors
    ///
    /// At the start of history, or with no undos left.
    #[instrument(skip(self), fields(pointer = self.pointer, undos = self.undos_remaining))]
    pub fn try_undo(&self) -> Result<Session, CommandError> {
        UndoContract::pre(self, &())?;

        let mut next = self.clone();
        next.pointer -= 1;
        next.undos_remaining -= 1;
        next.timer.rearm();

        #[cfg(debug_assertions)]
        UndoContract::post(self, &next)?;

        Ok(next)
    }

    /// Moves the pointer to history entry `index` without spending an undo.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MoveOutOfRange`] past the last entry.
    #[instrument(skip(self), fields(pointer = self.pointer))]
    pub fn try_jump_to(&self, index: usize) -> Result<Session, CommandError> {
        JumpContract::pre(self, &index)?;

        let mut next = self.clone();
        next.pointer = index;
        next.timer.rearm();

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        Ok(next)
    }

    /// Stores a new turn duration and starting player, re-arming the clock.
    ///
    /// The duration takes effect immediately. The starting player takes
    /// effect at the next restart so the game in progress keeps its turn
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidDuration`] for a zero duration.
    #[instrument(skip(self))]
    pub fn try_apply_settings(
        &self,
        duration: u32,
        starting_player: Player,
    ) -> Result<Session, CommandError> {
        if duration == 0 {
            return Err(CommandError::InvalidDuration(duration.to_string()));
        }

        let mut next = self.clone();
        next.settings = next
            .settings
            .with_turn_duration(duration)
            .with_starting_player(starting_player);
        next.timer.rearm_with(duration);

        #[cfg(debug_assertions)]
        super::contracts::check_invariants(&next)?;

        info!(duration, %starting_player, "Settings applied");
        Ok(next)
    }

    /// Like [`Session::try_apply_settings`], parsing the duration from text.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidDuration`] for anything but a positive
    /// whole number.
    pub fn try_apply_settings_input(
        &self,
        duration: &str,
        starting_player: Player,
    ) -> Result<Session, CommandError> {
        let duration = Settings::parse_duration(duration)?;
        self.try_apply_settings(duration, starting_player)
    }

    // ─────────────────────────────────────────────────────────
    //  Commands (silent)
    // ─────────────────────────────────────────────────────────

    /// Places a mark, or keeps the session unchanged if the move is illegal.
    pub fn play_move(self, index: usize) -> Session {
        let result = self.try_play_move(index);
        self.or_keep("play_move", result)
    }

    /// Forfeits the current turn, or does nothing on a finished board.
    pub fn expire_turn(self) -> Session {
        let result = self.try_expire_turn();
        self.or_keep("expire_turn", result)
    }

    /// Steps back one ply, or does nothing if no undo is allowed.
    pub fn undo(self) -> Session {
        let result = self.try_undo();
        self.or_keep("undo", result)
    }

    /// Jumps to a history entry, or does nothing if it does not exist.
    pub fn jump_to(self, index: usize) -> Session {
        let result = self.try_jump_to(index);
        self.or_keep("jump_to", result)
    }

    /// Applies settings, or ignores them if the duration is invalid.
    pub fn apply_settings(self, duration: u32, starting_player: Player) -> Session {
        let result = self.try_apply_settings(duration, starting_player);
        self.or_keep("apply_settings", result)
    }

    /// Applies settings typed as text, ignoring an invalid duration.
    pub fn apply_settings_input(self, duration: &str, starting_player: Player) -> Session {
        let result = self.try_apply_settings_input(duration, starting_player);
        self.or_keep("apply_settings", result)
    }

    /// Starts a new game and clears the scores.
    ///
    /// Settings and theme carry over. The clock keeps counting epochs so
    /// ticks scheduled before the restart are still recognized as stale.
    #[instrument(skip(self))]
    pub fn restart(self) -> Session {
        info!("Restarting session");
        let mut next = self;
        next.opening_player = *next.settings.starting_player();
        next.history = vec![Ply::start()];
        next.pointer = 0;
        next.scores = Scores::default();
        next.timer.rearm_with(*next.settings.turn_duration());
        next.undos_remaining = *next.settings.undo_budget();
        next
    }

    /// Switches between light and dark themes.
    pub fn toggle_theme(self) -> Session {
        let mut next = self;
        let theme = next.settings.theme().toggle();
        next.settings = next.settings.with_theme(theme);
        debug!(%theme, "Theme toggled");
        next
    }

    /// Advances the clock by one second.
    ///
    /// `epoch` must be the value of [`Session::timer_epoch`] at the time the
    /// tick was scheduled; ticks from an older arming are dropped. When the
    /// clock reaches zero the current player forfeits in the same call.
    #[instrument(skip(self), fields(current = %self.timer.epoch()))]
    pub fn tick(self, epoch: TimerEpoch) -> (Session, TickOutcome) {
        if epoch != self.timer.epoch() {
            debug!(%epoch, "Dropping stale tick");
            return (self, TickOutcome::Stale);
        }
        if self.status().is_over() {
            return (self, TickOutcome::Idle);
        }

        let mut next = self;
        let remaining = next.timer.tick();
        if remaining > 0 {
            return (next, TickOutcome::Running { remaining });
        }

        let player = next.current_player();
        (next.expire_turn(), TickOutcome::Forfeited { player })
    }

    // ─────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────

    fn push_ply(&mut self, ply: Ply) {
        self.history.truncate(self.pointer + 1);
        self.history.push(ply);
        self.pointer = self.history.len() - 1;
    }

    fn or_keep(self, command: &'static str, result: Result<Session, CommandError>) -> Session {
        match result {
            Ok(next) => next,
            Err(error) => {
                debug!(command, %error, "Command ignored");
                self
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
