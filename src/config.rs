use crate::tiles::Position;
use serde::{Deserialize, Serialize};

/// The default length of the board's side.
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// The default number of dogs.
pub const DEFAULT_DOG_COUNT: usize = 4;

/// The fox's starting square in the standard layout.
pub const DEFAULT_FOX_START: Position = Position::new(0, 2);

/// The starting layout of a game: the size of the board and where each piece begins.
///
/// A `GameConfig` is not validated until it is used to create a
/// [`crate::game::state::GameState`], which rejects off-board or overlapping pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: u8,
    pub fox: Position,
    pub dogs: Vec<Position>
}

impl GameConfig {

    /// Create the standard layout for the given board size and number of dogs: the fox on its
    /// usual starting square and the dogs on the odd-numbered columns of the last row, starting
    /// from column 1.
    pub fn standard(board_size: u8, dog_count: usize) -> Self {
        let back_rank = board_size as i8 - 1;
        let dogs = (0..dog_count)
            .map(|i| Position::new(back_rank, (2 * i + 1) as i8))
            .collect();
        Self { board_size, fox: DEFAULT_FOX_START, dogs }
    }

    pub fn with_board_size(mut self, board_size: u8) -> Self {
        self.board_size = board_size;
        self
    }

    pub fn with_fox(mut self, fox: Position) -> Self {
        self.fox = fox;
        self
    }

    pub fn with_dogs(mut self, dogs: Vec<Position>) -> Self {
        self.dogs = dogs;
        self
    }
}

impl Default for GameConfig {
    /// The standard 8x8 layout with four dogs.
    fn default() -> Self {
        Self::standard(DEFAULT_BOARD_SIZE, DEFAULT_DOG_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::tiles::Position;

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 8);
        assert_eq!(config.fox, Position::new(0, 2));
        assert_eq!(config.dogs, vec![
            Position::new(7, 1),
            Position::new(7, 3),
            Position::new(7, 5),
            Position::new(7, 7)
        ]);
    }

    #[test]
    fn test_standard_layout() {
        let config = GameConfig::standard(10, 5);
        assert_eq!(config.dogs.len(), 5);
        assert!(config.dogs.iter().all(|d| d.row == 9));
        assert_eq!(config.dogs.last(), Some(&Position::new(9, 9)));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::default()
            .with_board_size(6)
            .with_fox(Position::new(0, 0))
            .with_dogs(vec![Position::new(5, 1)]);
        assert_eq!(config.board_size, 6);
        assert_eq!(config.fox, Position::new(0, 0));
        assert_eq!(config.dogs, vec![Position::new(5, 1)]);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "board_size": 8,
            "fox": {"row": 0, "col": 2},
            "dogs": [{"row": 7, "col": 1}, {"row": 7, "col": 3}, {"row": 7, "col": 5}, {"row": 7, "col": 7}]
        }"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
