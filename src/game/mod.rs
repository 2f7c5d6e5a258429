pub mod state;

use crate::bitfield::BitField;
use crate::config::GameConfig;
use crate::direction::PieceDirection;
use crate::error::{PlayInvalid, SelectError, SetupError};
use crate::game::state::GameState;
use crate::game::GameStatus::{Ongoing, Over};
use crate::pieces::Side;
use crate::results::GameResult;
use crate::tiles::Position;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// The reason why a game has been won.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// Fox has reached the row furthest from where it started.
    ReachedFarEdge,
    /// Fox has got past more than three dogs.
    PassedDogs,
    /// It is the fox's turn and it has nowhere to move.
    FoxTrapped
}

/// The outcome of a single game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Side,
    pub reason: WinReason
}

/// The current status of the game.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum GameStatus {
    /// Game is still ongoing.
    Ongoing,
    /// Game is over, with the given outcome.
    Over(GameOutcome)
}

/// A record of a single move: which piece moved, in which direction, and where from and to. This is
/// what a view needs to relocate the piece it is drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Index of the piece that moved.
    pub index: usize,
    pub side: Side,
    pub direction: PieceDirection,
    pub from: Position,
    pub to: Position
}

/// What the player is expected to select next.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SelectionPhase {
    /// A piece to move.
    SelectOrigin,
    /// A square to move the selected piece to.
    SelectDestination
}

impl SelectionPhase {
    pub fn other(&self) -> Self {
        match self {
            SelectionPhase::SelectOrigin => SelectionPhase::SelectDestination,
            SelectionPhase::SelectDestination => SelectionPhase::SelectOrigin
        }
    }
}

/// The result of a successful call to [`Game::select`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Selection {
    /// A piece was selected. `destinations` lists the squares it may move to.
    Origin { position: Position, destinations: Vec<Position> },
    /// A destination was selected and the move has been made.
    Moved { record: MoveRecord, status: GameStatus }
}

/// A struct representing a single match between two players taking turns at the same board. It
/// wraps a [`GameState`] and takes care of everything the rules leave to the caller: making sure
/// the right side moves, toggling the turn after each move, counting rounds, keeping a record of
/// moves, checking for the end of the game and timing the match.
///
/// Moves can either be made directly (with [`Game::do_move`]) or by selecting squares one at a
/// time (with [`Game::select`]), the way a player clicking on a board would: first a piece of the
/// side to move, then one of the squares that piece can move to. Only pieces that can actually move
/// are offered as origins.
///
/// **NOTE**: If every dog is blocked while the fox has neither won nor been trapped, the dogs have
/// no move to make and the game stays [`GameStatus::Ongoing`] with nothing selectable. It is up to
/// the caller to spot this (an empty [`Self::selectable_positions`] in an ongoing game) and end the
/// match.
#[derive(Debug, Clone)]
pub struct Game<T: BitField> {
    state: GameState<T>,
    player: String,
    phase: SelectionPhase,
    selected: Option<Position>,
    selectable: Vec<Position>,
    rounds: u32,
    status: GameStatus,
    move_history: Vec<MoveRecord>,
    started: Instant,
    elapsed: Option<Duration>
}

impl<T: BitField> Game<T> {

    /// Create a new [`Game`] for the named player from the given configuration.
    pub fn new(config: &GameConfig, player: impl Into<String>) -> Result<Self, SetupError> {
        Ok(Self::from_state(GameState::new(config)?, player))
    }

    /// Create a new [`Game`] for the named player, starting from the given state.
    pub fn from_state(state: GameState<T>, player: impl Into<String>) -> Self {
        let mut game = Self {
            state,
            player: player.into(),
            phase: SelectionPhase::SelectOrigin,
            selected: None,
            selectable: vec![],
            rounds: 1,
            status: Ongoing,
            move_history: vec![],
            started: Instant::now(),
            elapsed: None
        };
        game.update_status();
        game.refresh_selectable();
        game
    }

    pub fn state(&self) -> &GameState<T> {
        &self.state
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// The currently selected origin, if any.
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// The current round. Starts at 1 and goes up each time the fox moves.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// All moves made so far, oldest first.
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// The squares that may be selected next: the pieces of the side to move that have at least
    /// one legal move while choosing an origin, or the destinations of the selected piece while
    /// choosing a destination. Empty once the game is over.
    pub fn selectable_positions(&self) -> &[Position] {
        &self.selectable
    }

    /// The winning side, if the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            Over(outcome) => Some(outcome.winner),
            Ongoing => None
        }
    }

    /// A summary of the match for the results table, once the game is over.
    pub fn game_result(&self) -> Option<GameResult> {
        let winner = self.winner()?;
        let duration = self.elapsed.unwrap_or_else(|| self.started.elapsed());
        Some(GameResult::new(self.player.clone(), winner, self.rounds, duration))
    }

    /// Select the given square. What this does depends on the current phase:
    ///
    /// - When choosing an origin, the square must hold a piece of the side to move. The piece is
    ///   selected and the squares it can move to are returned.
    /// - When choosing a destination, the square must be one the selected piece can move to. The
    ///   move is made (see [`Self::do_move`]).
    ///
    /// Selecting any other square returns an error and changes nothing.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> Result<Selection, SelectError> {
        if let Over(_) = self.status {
            return Err(SelectError::GameOver)
        }
        if !self.selectable.contains(&position) {
            return Err(SelectError::NotSelectable(position))
        }
        match self.phase {
            SelectionPhase::SelectOrigin => {
                self.selected = Some(position);
                self.phase = self.phase.other();
                self.refresh_selectable();
                debug!(%position, destinations = self.selectable.len(), "selected origin");
                Ok(Selection::Origin { position, destinations: self.selectable.clone() })
            },
            SelectionPhase::SelectDestination => {
                let not_selectable = SelectError::NotSelectable(position);
                let origin = self.selected.ok_or(not_selectable)?;
                let index = self.state.piece_at(origin).ok_or(not_selectable)?;
                let (row_delta, col_delta) = position.delta_from(origin);
                let direction = PieceDirection::from_delta(self.state.turn(), row_delta, col_delta)
                    .map_err(|_| not_selectable)?;
                let record = self.do_move(index, direction).map_err(|_| not_selectable)?;
                Ok(Selection::Moved { record, status: self.status })
            }
        }
    }

    /// Drop the current selection (if any) and go back to choosing an origin.
    pub fn deselect(&mut self) {
        if self.phase == SelectionPhase::SelectDestination {
            self.phase = SelectionPhase::SelectOrigin;
            self.selected = None;
            self.refresh_selectable();
        }
    }

    /// Move the given piece in the given direction, then pass the turn to the other side and check
    /// whether the game has ended. Any selection in progress is dropped.
    #[instrument(skip(self))]
    pub fn do_move(&mut self, index: usize, direction: PieceDirection) -> Result<MoveRecord, PlayInvalid> {
        if let Over(_) = self.status {
            return Err(PlayInvalid::GameOver)
        }
        if self.state.piece(index)?.side != self.state.turn() {
            return Err(PlayInvalid::WrongPlayer)
        }
        let record = self.state.apply_move(index, direction)?;
        if record.side == Side::Fox {
            self.rounds += 1;
        }
        self.move_history.push(record);
        self.state.toggle_turn();
        self.update_status();
        self.phase = SelectionPhase::SelectOrigin;
        self.selected = None;
        self.refresh_selectable();
        Ok(record)
    }

    fn update_status(&mut self) {
        if let Some(outcome) = self.state.outcome() {
            match outcome.winner {
                Side::Fox => info!(reason = ?outcome.reason, rounds = self.rounds, "Fox wins"),
                Side::Dog => info!(reason = ?outcome.reason, rounds = self.rounds, "Dogs win")
            }
            self.status = Over(outcome);
            self.elapsed = Some(self.started.elapsed());
            self.selectable.clear();
        }
    }

    fn refresh_selectable(&mut self) {
        self.selectable = if let Over(_) = self.status {
            vec![]
        } else {
            match (self.phase, self.selected) {
                (SelectionPhase::SelectDestination, Some(origin)) => {
                    self.destinations_from(origin)
                },
                _ => self.state.current_selectable_positions()
                    .into_iter()
                    .filter(|&p| !self.state.legal_moves_at(p).is_empty())
                    .collect()
            }
        };
    }

    fn destinations_from(&self, origin: Position) -> Vec<Position> {
        self.state.legal_moves_at(origin)
            .into_iter()
            .map(|d| origin.move_to(d))
            .collect()
    }
}

impl Game<u64> {
    /// Create a standard 8x8 game for the named player.
    pub fn standard(player: impl Into<String>) -> Self {
        Self::from_state(GameState::standard(), player)
    }
}

/// Game suitable for boards up to 8x8.
pub type SmallGame = Game<u64>;
/// Game suitable for boards up to 11x11.
pub type MediumGame = Game<u128>;
/// Game suitable for boards up to 16x16.
pub type LargeGame = Game<U256>;
