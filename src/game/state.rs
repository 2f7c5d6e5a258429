use crate::bitfield::BitField;
use crate::board::geometry::BoardGeometry;
use crate::board::occupancy::Occupancy;
use crate::config::GameConfig;
use crate::direction::PieceDirection;
use crate::error::{BoardError, ParseError, PlayInvalid, SetupError};
use crate::game::{GameOutcome, MoveRecord, WinReason};
use crate::pieces::Side::{Dog, Fox};
use crate::pieces::{Piece, Side};
use crate::tiles::Position;
use primitive_types::U256;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{debug, warn};

/// The fox wins once it has passed strictly more than this many dogs, ie, once more than this many
/// dogs are on a row above the fox's row.
pub const PASSED_DOGS_THRESHOLD: usize = 3;

/// The smallest board on which a game can be set up.
pub const MIN_BOARD_SIZE: u8 = 2;

/// The full state of a single match: the pieces, the board they are on and whose turn it is. This
/// struct implements the rules of the game, ie, which moves are legal and when the game has been
/// won, but it does not drive the game forward by itself. Callers ask it for the legal moves of a
/// piece, apply one of them, and then toggle the turn (see [`crate::game::Game`] for a struct that
/// does this sequencing).
///
/// Pieces are kept in a fixed order and are referred to by their index in that order. When
/// created from a [`GameConfig`] or a display string, the fox is always at index 0.
///
/// The parameter `T` is the integer type used to record which squares are occupied (see
/// [`Occupancy`]). It limits the size of the board; see the type aliases at the bottom of this
/// module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState<T: BitField> {
    pieces: Vec<Piece>,
    fox_index: usize,
    geometry: BoardGeometry,
    occupancy: Occupancy<T>,
    turn: Side
}

impl<T: BitField> GameState<T> {

    /// Create a new game state from the given configuration. The fox is placed at index 0,
    /// followed by the dogs in the order they appear in the configuration. Dogs move first.
    pub fn new(config: &GameConfig) -> Result<Self, SetupError> {
        let mut pieces = Vec::with_capacity(config.dogs.len() + 1);
        pieces.push(Piece::fox(config.fox));
        pieces.extend(config.dogs.iter().map(|&p| Piece::dog(p)));
        Self::from_pieces(config.board_size, pieces)
    }

    /// Create a new game state from an arbitrary list of pieces. Checks that every piece is on
    /// the board, that no two pieces share a square and that there is exactly one fox. Dogs move
    /// first.
    pub fn from_pieces(board_size: u8, pieces: Vec<Piece>) -> Result<Self, SetupError> {
        if board_size < MIN_BOARD_SIZE {
            warn!(board_size, "rejected setup: board too small");
            return Err(SetupError::BoardTooSmall(board_size))
        }
        if board_size > T::ROW_WIDTH {
            warn!(board_size, max = T::ROW_WIDTH, "rejected setup: board too large");
            return Err(SetupError::BoardTooLarge { size: board_size, max: T::ROW_WIDTH })
        }
        let fox_count = pieces.iter().filter(|p| p.is_fox()).count();
        if fox_count != 1 {
            warn!(fox_count, "rejected setup: wrong number of foxes");
            return Err(SetupError::FoxCount(fox_count))
        }
        let geometry = BoardGeometry::new(board_size);
        let mut occupancy = Occupancy::default();
        for piece in &pieces {
            if !geometry.position_in_bounds(piece.position) {
                warn!(position = %piece.position, "rejected setup: piece off board");
                return Err(SetupError::OffBoard(piece.position))
            }
            if occupancy.is_occupied(piece.position) {
                warn!(position = %piece.position, "rejected setup: pieces overlap");
                return Err(SetupError::Overlapping(piece.position))
            }
            occupancy.set(piece.position);
        }
        let fox_index = pieces.iter().position(|p| p.is_fox())
            .ok_or(SetupError::FoxCount(0))?;
        Ok(Self { pieces, fox_index, geometry, occupancy, turn: Dog })
    }

    /// The default 8x8 game with four dogs.
    pub fn standard() -> Self {
        Self::new(&GameConfig::default()).expect("Standard layout should be valid.")
    }

    /// Parse a game state from a string in the format output by [`Self::to_display_str`]. The
    /// fox is given index 0 and the dogs follow in row-major order. Dogs move first.
    pub fn from_display_str(display_str: &str) -> Result<Self, ParseError> {
        let s = display_str.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyString)
        }
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        let side_len = lines.len();
        if side_len > u8::MAX as usize {
            return Err(ParseError::BadLineLen(side_len))
        }
        let mut foxes = vec![];
        let mut dogs = vec![];
        for (r, line) in lines.iter().enumerate() {
            let line_len = line.chars().count();
            if line_len != side_len {
                return Err(ParseError::BadLineLen(line_len))
            }
            for (c, chr) in line.chars().enumerate() {
                if chr == '.' {
                    continue
                }
                let position = Position::new(r as i8, c as i8);
                match Side::try_from(chr)? {
                    Fox => foxes.push(Piece::fox(position)),
                    Dog => dogs.push(Piece::dog(position))
                }
            }
        }
        foxes.extend(dogs);
        Ok(Self::from_pieces(side_len as u8, foxes)?)
    }

    /// Return a string representing the board, in a format suitable for printing: one line per
    /// row, with `F` for the fox, `D` for a dog and `.` for an empty square.
    pub fn to_display_str(&self) -> String {
        let mut s = String::new();
        for p in self.geometry.iter_positions() {
            match self.piece_at(p) {
                Some(i) => s.push(self.pieces[i].side.into()),
                None => s.push('.')
            }
            if p.col as u8 == self.geometry.side_len - 1 {
                s.push('\n');
            }
        }
        s
    }

    /// The length of the board's side.
    pub fn board_size(&self) -> u8 {
        self.geometry.side_len
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    /// The side whose turn it is.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// All pieces, in index order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Get the piece with the given index.
    pub fn piece(&self, index: usize) -> Result<&Piece, BoardError> {
        self.pieces.get(index).ok_or(BoardError::InvalidIndex(index))
    }

    pub fn fox_index(&self) -> usize {
        self.fox_index
    }

    /// The (only) fox.
    pub fn fox(&self) -> &Piece {
        &self.pieces[self.fox_index]
    }

    /// Iterate over the dogs, in index order.
    pub fn dogs(&self) -> impl Iterator<Item=&Piece> {
        self.pieces.iter().filter(|p| !p.is_fox())
    }

    /// Check whether the position refers to a square on the board.
    pub fn is_on_board(&self, position: Position) -> bool {
        self.geometry.position_in_bounds(position)
    }

    /// Check whether any piece occupies the given position.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.is_on_board(position) && self.occupancy.is_occupied(position)
    }

    /// Get the index of the piece at the given position, if any.
    pub fn piece_at(&self, position: Position) -> Option<usize> {
        if !self.is_occupied(position) {
            return None
        }
        self.pieces.iter().position(|p| p.position == position)
    }

    /// Whether the given piece may move one step in the given direction: the direction must belong
    /// to the piece's own side and must lead to an empty square of the board. This holds exactly
    /// when [`Self::apply_move`] would accept the move.
    pub fn is_valid_move(&self, index: usize, direction: PieceDirection) -> Result<bool, BoardError> {
        let piece = self.piece(index)?;
        Ok(direction.side() == piece.side && self.destination_free(piece.position.move_to(direction)))
    }

    /// Return every direction in which the given piece may currently move. Only directions from
    /// the piece's own side's set are considered, so a dog is never offered a backwards move.
    pub fn legal_moves(&self, index: usize) -> Result<Vec<PieceDirection>, BoardError> {
        let piece = self.piece(index)?;
        Ok(self.legal_moves_for(piece))
    }

    /// Return every direction in which the piece at the given position may currently move, or
    /// nothing if the square is empty.
    pub fn legal_moves_at(&self, position: Position) -> Vec<PieceDirection> {
        match self.pieces.iter().find(|p| p.position == position) {
            Some(piece) => self.legal_moves_for(piece),
            None => vec![]
        }
    }

    fn legal_moves_for(&self, piece: &Piece) -> Vec<PieceDirection> {
        PieceDirection::all_for(piece.side)
            .into_iter()
            .filter(|d| self.destination_free(piece.position.move_to(*d)))
            .collect()
    }

    fn destination_free(&self, destination: Position) -> bool {
        self.is_on_board(destination) && !self.occupancy.is_occupied(destination)
    }

    /// The positions of the pieces that may be chosen to move this turn: all dogs on the dogs' turn,
    /// or the fox alone on the fox's turn.
    pub fn current_selectable_positions(&self) -> Vec<Position> {
        match self.turn {
            Dog => self.dogs().map(|p| p.position).collect(),
            Fox => vec![self.fox().position]
        }
    }

    /// Move the given piece one step in the given direction and return a record of the move. The
    /// move is checked again before anything is changed, and an error is returned (leaving the
    /// state untouched) if the direction belongs to the wrong side or the destination is off the
    /// board or occupied.
    ///
    /// **NOTE**: This does not change whose turn it is; call [`Self::toggle_turn`] afterwards. Nor
    /// does it check that the piece belongs to the side whose turn it is.
    pub fn apply_move(&mut self, index: usize, direction: PieceDirection) -> Result<MoveRecord, PlayInvalid> {
        let piece = *self.piece(index)?;
        if direction.side() != piece.side {
            return Err(PlayInvalid::WrongDirectionSet(piece.side))
        }
        let from = piece.position;
        let to = from.move_to(direction);
        if !self.is_on_board(to) {
            return Err(PlayInvalid::OutOfBounds)
        }
        if self.occupancy.is_occupied(to) {
            return Err(PlayInvalid::BlockedByPiece)
        }
        self.pieces[index].move_to(direction);
        self.occupancy.move_bit(from, to);
        debug!(index, side = ?piece.side, %from, %to, "moved piece");
        Ok(MoveRecord { index, side: piece.side, direction, from, to })
    }

    /// Pass the turn to the other side.
    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.other();
        debug!(turn = ?self.turn, "turn changed");
    }

    /// The number of dogs on a row strictly above the fox's row.
    pub fn dogs_passed(&self) -> usize {
        let fox_row = self.fox().position.row;
        self.dogs().filter(|d| d.position.row < fox_row).count()
    }

    fn fox_win_reason(&self) -> Option<WinReason> {
        if self.fox().position.row == self.geometry.far_edge_row() {
            Some(WinReason::ReachedFarEdge)
        } else if self.dogs_passed() > PASSED_DOGS_THRESHOLD {
            Some(WinReason::PassedDogs)
        } else {
            None
        }
    }

    /// Whether the fox has won, either by reaching the far edge of the board or by getting past
    /// more than [`PASSED_DOGS_THRESHOLD`] dogs.
    pub fn is_fox_win(&self) -> bool {
        self.fox_win_reason().is_some()
    }

    /// Whether the dogs have won, ie, the fox has nowhere to move. This does not consider whose
    /// turn it is; see [`Self::outcome`] for that.
    pub fn is_dog_win(&self) -> bool {
        self.legal_moves_for(self.fox()).is_empty()
    }

    /// Get the outcome of the game, if any. A fox win is reported regardless of whose turn it is.
    /// A trapped fox only counts as a dog win when it is the fox's turn to move.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(reason) = self.fox_win_reason() {
            return Some(GameOutcome { winner: Fox, reason })
        }
        if self.turn == Fox && self.is_dog_win() {
            return Some(GameOutcome { winner: Dog, reason: WinReason::FoxTrapped })
        }
        None
    }
}

impl<T: BitField> FromStr for GameState<T> {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_str(s)
    }
}

impl<T: BitField> Display for GameState<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_str())
    }
}

/// Game state suitable for boards up to 8x8.
pub type SmallGameState = GameState<u64>;
/// Game state suitable for boards up to 11x11.
pub type MediumGameState = GameState<u128>;
/// Game state suitable for boards up to 16x16.
pub type LargeGameState = GameState<U256>;

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::direction::DogDirection::{UpLeft as DogUpLeft, UpRight as DogUpRight};
    use crate::direction::FoxDirection::{DownLeft, DownRight, UpLeft, UpRight};
    use crate::direction::{Direction, PieceDirection};
    use crate::error::{BoardError, ParseError, PlayInvalid, SetupError};
    use crate::game::state::{LargeGameState, MediumGameState, SmallGameState};
    use crate::game::{GameOutcome, WinReason};
    use crate::pieces::Side::{Dog, Fox};
    use crate::pieces::Piece;
    use crate::tiles::Position;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn moves(state: &SmallGameState, index: usize) -> HashSet<PieceDirection> {
        state.legal_moves(index).unwrap().into_iter().collect()
    }

    #[test]
    fn test_standard_setup() {
        let state = SmallGameState::standard();
        assert_eq!(state.board_size(), 8);
        assert_eq!(state.piece_count(), 5);
        assert_eq!(state.fox_index(), 0);
        assert_eq!(state.fox().position, Position::new(0, 2));
        assert_eq!(state.turn(), Dog);
        assert_eq!(
            state.dogs().map(|d| d.position).collect::<Vec<_>>(),
            vec![Position::new(7, 1), Position::new(7, 3), Position::new(7, 5), Position::new(7, 7)]
        );
        assert_eq!(state.to_display_str(), [
            "..F.....",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".D.D.D.D",
        ].join("\n") + "\n");
    }

    #[test]
    fn test_invalid_setups() {
        let config = GameConfig::default().with_dogs(vec![Position::new(7, 1), Position::new(7, 1)]);
        assert_eq!(SmallGameState::new(&config), Err(SetupError::Overlapping(Position::new(7, 1))));

        let config = GameConfig::default().with_fox(Position::new(7, 3));
        assert_eq!(SmallGameState::new(&config), Err(SetupError::Overlapping(Position::new(7, 3))));

        let config = GameConfig::default().with_fox(Position::new(8, 0));
        assert_eq!(SmallGameState::new(&config), Err(SetupError::OffBoard(Position::new(8, 0))));

        let config = GameConfig::default().with_dogs(vec![Position::new(-1, 3)]);
        assert_eq!(SmallGameState::new(&config), Err(SetupError::OffBoard(Position::new(-1, 3))));

        let config = GameConfig::standard(9, 4);
        assert_eq!(SmallGameState::new(&config), Err(SetupError::BoardTooLarge { size: 9, max: 8 }));
        assert!(MediumGameState::new(&config).is_ok());

        let config = GameConfig::default().with_board_size(1).with_fox(Position::new(0, 0)).with_dogs(vec![]);
        assert_eq!(SmallGameState::new(&config), Err(SetupError::BoardTooSmall(1)));

        let no_fox = vec![Piece::dog(Position::new(7, 1))];
        assert_eq!(SmallGameState::from_pieces(8, no_fox), Err(SetupError::FoxCount(0)));
        let two_foxes = vec![Piece::fox(Position::new(0, 2)), Piece::fox(Position::new(0, 4))];
        assert_eq!(SmallGameState::from_pieces(8, two_foxes), Err(SetupError::FoxCount(2)));
    }

    #[test]
    fn test_fox_not_first() {
        let state = SmallGameState::from_pieces(8, vec![
            Piece::dog(Position::new(7, 1)),
            Piece::fox(Position::new(0, 2)),
        ]).unwrap();
        assert_eq!(state.fox_index(), 1);
        assert_eq!(state.fox().position, Position::new(0, 2));
        assert_eq!(state.dogs().count(), 1);
    }

    #[test]
    fn test_parse_display_str() {
        let s = [
            "...D",
            ".F..",
            "D.D.",
            "....",
        ].join("\n");
        let state = SmallGameState::from_str(&s).unwrap();
        assert_eq!(state.board_size(), 4);
        assert_eq!(state.fox_index(), 0);
        assert_eq!(state.fox().position, Position::new(1, 1));
        assert_eq!(
            state.dogs().map(|d| d.position).collect::<Vec<_>>(),
            vec![Position::new(0, 3), Position::new(2, 0), Position::new(2, 2)]
        );
        assert_eq!(state.to_string(), s + "\n");

        assert_eq!(SmallGameState::from_str(""), Err(ParseError::EmptyString));
        assert_eq!(SmallGameState::from_str("..\n..."), Err(ParseError::BadLineLen(3)));
        assert_eq!(SmallGameState::from_str("F.\n.x"), Err(ParseError::BadChar('x')));
        assert_eq!(
            SmallGameState::from_str("D.\n.D"),
            Err(ParseError::BadSetup(SetupError::FoxCount(0)))
        );
    }

    #[test]
    fn test_is_on_board() {
        let state = SmallGameState::standard();
        for row in -2..10 {
            for col in -2..10 {
                let expected = (0..8).contains(&row) && (0..8).contains(&col);
                assert_eq!(state.is_on_board(Position::new(row, col)), expected);
            }
        }
    }

    #[test]
    fn test_fox_moves_at_start() {
        let state = SmallGameState::standard();
        let fox = state.fox_index();
        assert_eq!(moves(&state, fox), hashset!(PieceDirection::Fox(DownLeft), PieceDirection::Fox(DownRight)));
        assert_eq!(state.is_valid_move(fox, PieceDirection::Fox(UpLeft)), Ok(false));
        assert_eq!(state.is_valid_move(fox, PieceDirection::Fox(UpRight)), Ok(false));
        assert_eq!(state.is_valid_move(fox, PieceDirection::Fox(DownLeft)), Ok(true));
    }

    #[test]
    fn test_dog_moves_at_start() {
        let state = SmallGameState::standard();
        assert_eq!(moves(&state, 1), hashset!(PieceDirection::Dog(DogUpLeft), PieceDirection::Dog(DogUpRight)));
        // The corner dog cannot move to the right.
        assert_eq!(moves(&state, 4), hashset!(PieceDirection::Dog(DogUpLeft)));
        for i in 1..state.piece_count() {
            for d in state.legal_moves(i).unwrap() {
                assert_eq!(d.row_delta(), -1);
                assert_eq!(d.side(), Dog);
            }
        }
    }

    #[test]
    fn test_invalid_index() {
        let state = SmallGameState::standard();
        assert_eq!(state.is_valid_move(5, PieceDirection::Fox(UpLeft)), Err(BoardError::InvalidIndex(5)));
        assert_eq!(state.legal_moves(99), Err(BoardError::InvalidIndex(99)));
        assert_eq!(state.piece(5), Err(BoardError::InvalidIndex(5)));
    }

    #[test]
    fn test_valid_move_agrees_with_apply_move() {
        let state = SmallGameState::standard();
        // A dog may not borrow a fox direction, even towards an empty square.
        assert_eq!(state.is_valid_move(2, PieceDirection::Fox(UpLeft)), Ok(false));
        assert_eq!(state.is_valid_move(2, PieceDirection::Dog(DogUpLeft)), Ok(true));
        assert_eq!(state.is_valid_move(0, PieceDirection::Dog(DogUpLeft)), Ok(false));
        let all: Vec<PieceDirection> = PieceDirection::all_for(Dog).into_iter()
            .chain(PieceDirection::all_for(Fox))
            .collect();
        for i in 0..state.piece_count() {
            for &d in &all {
                let mut copy = state.clone();
                assert_eq!(state.is_valid_move(i, d).unwrap(), copy.apply_move(i, d).is_ok(), "piece {i}, {d:?}");
            }
        }
    }

    #[test]
    fn test_legal_moves_at() {
        let state = SmallGameState::standard();
        assert_eq!(state.legal_moves_at(Position::new(7, 7)), vec![PieceDirection::Dog(DogUpLeft)]);
        assert_eq!(state.legal_moves_at(Position::new(0, 2)).len(), 2);
        assert!(state.legal_moves_at(Position::new(3, 3)).is_empty());
    }

    #[test]
    fn test_states_hash() {
        let mut seen = HashSet::new();
        let state = SmallGameState::standard();
        seen.insert(state.clone());
        seen.insert(SmallGameState::standard());
        assert_eq!(seen.len(), 1);
        let mut moved = state.clone();
        moved.apply_move(1, PieceDirection::Dog(DogUpRight)).unwrap();
        seen.insert(moved);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_blocked_by_piece() {
        let mut state = SmallGameState::from_str(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "...F....",
            "..D.D...",
            ".D......",
        ].join("\n")).unwrap();
        let fox = state.fox_index();
        assert_eq!(moves(&state, fox), hashset!(PieceDirection::Fox(UpLeft), PieceDirection::Fox(UpRight)));
        assert_eq!(state.is_valid_move(fox, PieceDirection::Fox(DownLeft)), Ok(false));
        // Dog at (7, 1) is blocked up-right by the dog at (6, 2).
        let dog = state.piece_at(Position::new(7, 1)).unwrap();
        assert_eq!(moves(&state, dog), hashset!(PieceDirection::Dog(DogUpLeft)));
        assert_eq!(
            state.apply_move(dog, PieceDirection::Dog(DogUpRight)),
            Err(PlayInvalid::BlockedByPiece)
        );
        assert_eq!(state.piece(dog).unwrap().position, Position::new(7, 1));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let state = SmallGameState::standard();
        for i in 0..state.piece_count() {
            let first = state.legal_moves(i).unwrap();
            for _ in 0..3 {
                assert_eq!(state.legal_moves(i).unwrap(), first);
                assert_eq!(state.is_valid_move(i, PieceDirection::Fox(DownLeft)), state.is_valid_move(i, PieceDirection::Fox(DownLeft)));
            }
        }
    }

    #[test]
    fn test_selectable_positions() {
        let mut state = SmallGameState::standard();
        assert_eq!(state.current_selectable_positions(), vec![
            Position::new(7, 1),
            Position::new(7, 3),
            Position::new(7, 5),
            Position::new(7, 7)
        ]);
        state.toggle_turn();
        assert_eq!(state.turn(), Fox);
        assert_eq!(state.current_selectable_positions(), vec![Position::new(0, 2)]);
        state.toggle_turn();
        assert_eq!(state.turn(), Dog);
    }

    #[test]
    fn test_piece_at() {
        let state = SmallGameState::standard();
        assert_eq!(state.piece_at(Position::new(0, 2)), Some(0));
        assert_eq!(state.piece_at(Position::new(7, 5)), Some(3));
        assert_eq!(state.piece_at(Position::new(3, 3)), None);
        assert_eq!(state.piece_at(Position::new(-1, 3)), None);
    }

    #[test]
    fn test_apply_move() {
        let mut state = SmallGameState::standard();
        let record = state.apply_move(1, PieceDirection::Dog(DogUpRight)).unwrap();
        assert_eq!(record.index, 1);
        assert_eq!(record.side, Dog);
        assert_eq!(record.from, Position::new(7, 1));
        assert_eq!(record.to, Position::new(6, 2));
        assert_eq!(state.piece_at(Position::new(6, 2)), Some(1));
        assert_eq!(state.piece_at(Position::new(7, 1)), None);
        // Turn is left to the caller.
        assert_eq!(state.turn(), Dog);

        assert_eq!(
            state.apply_move(1, PieceDirection::Fox(DownLeft)),
            Err(PlayInvalid::WrongDirectionSet(Dog))
        );
        assert_eq!(
            state.apply_move(0, PieceDirection::Fox(UpLeft)),
            Err(PlayInvalid::OutOfBounds)
        );
        assert_eq!(
            state.apply_move(0, PieceDirection::Dog(DogUpLeft)),
            Err(PlayInvalid::WrongDirectionSet(Fox))
        );
        assert_eq!(
            state.apply_move(7, PieceDirection::Fox(DownLeft)),
            Err(PlayInvalid::InvalidIndex(7))
        );
        assert_eq!(state.fox().position, Position::new(0, 2));
    }

    #[test]
    fn test_fox_reaches_far_edge() {
        let mut state = SmallGameState::from_str(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "DD.D....",
            "..F.....",
            "........",
        ].join("\n")).unwrap();
        assert!(!state.is_fox_win());
        state.toggle_turn();
        state.apply_move(state.fox_index(), PieceDirection::Fox(DownRight)).unwrap();
        assert_eq!(state.fox().position, Position::new(7, 3));
        assert!(state.is_fox_win());
        assert_eq!(state.outcome(), Some(GameOutcome { winner: Fox, reason: WinReason::ReachedFarEdge }));
    }

    #[test]
    fn test_fox_passes_dogs() {
        // Three dogs passed is not enough.
        let state = SmallGameState::from_str(&[
            "........",
            "D.D.D...",
            "........",
            "...F....",
            "........",
            "......D.",
            "........",
            "........",
        ].join("\n")).unwrap();
        assert_eq!(state.dogs_passed(), 3);
        assert!(!state.is_fox_win());
        assert_eq!(state.outcome(), None);

        // Four is.
        let state = SmallGameState::from_str(&[
            "........",
            "D.D.D...",
            ".....D..",
            "...F....",
            "........",
            "........",
            "........",
            "........",
        ].join("\n")).unwrap();
        assert_eq!(state.dogs_passed(), 4);
        assert!(state.is_fox_win());
        assert_eq!(state.outcome(), Some(GameOutcome { winner: Fox, reason: WinReason::PassedDogs }));

        // Dogs on the fox's own row do not count as passed.
        let state = SmallGameState::from_str(&[
            "........",
            "D.D.....",
            "........",
            "...F.D.D",
            "........",
            "........",
            "........",
            "........",
        ].join("\n")).unwrap();
        assert_eq!(state.dogs_passed(), 2);
        assert!(!state.is_fox_win());
    }

    #[test]
    fn test_fox_trapped_in_corner() {
        let mut state = SmallGameState::from_str(&[
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "......D.",
            ".......F",
        ].join("\n")).unwrap();
        assert!(state.legal_moves(state.fox_index()).unwrap().is_empty());
        assert!(state.is_dog_win());

        let mut state2 = SmallGameState::from_str(&[
            "F.......",
            ".D......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "...D.D.D",
        ].join("\n")).unwrap();
        assert!(state2.is_dog_win());
        // Only meaningful once it is the fox's turn.
        assert_eq!(state2.outcome(), None);
        state2.toggle_turn();
        assert_eq!(state2.outcome(), Some(GameOutcome { winner: Dog, reason: WinReason::FoxTrapped }));

        // A fox on the far edge has won, trapped or not.
        state.toggle_turn();
        assert_eq!(state.outcome(), Some(GameOutcome { winner: Fox, reason: WinReason::ReachedFarEdge }));
    }

    #[test]
    fn test_fox_surrounded() {
        let mut state = SmallGameState::from_str(&[
            "........",
            "........",
            "..D.D...",
            "...F....",
            "..D.D...",
            "........",
            "........",
            "........",
        ].join("\n")).unwrap();
        state.toggle_turn();
        assert!(state.is_dog_win());
        assert_eq!(state.outcome(), Some(GameOutcome { winner: Dog, reason: WinReason::FoxTrapped }));
    }

    #[test]
    fn test_larger_boards() {
        let state = LargeGameState::new(&GameConfig::standard(16, 8)).unwrap();
        assert_eq!(state.board_size(), 16);
        assert_eq!(state.dogs().count(), 8);
        assert_eq!(state.piece_at(Position::new(15, 15)), Some(8));
        assert_eq!(state.legal_moves(8).unwrap(), vec![PieceDirection::Dog(DogUpLeft)]);

        let state = MediumGameState::new(&GameConfig::standard(11, 5)).unwrap();
        assert_eq!(state.geometry().far_edge_row(), 10);
        assert_eq!(
            LargeGameState::new(&GameConfig::standard(17, 4)),
            Err(SetupError::BoardTooLarge { size: 17, max: 16 })
        );
    }
}
