//! Core game engine for Boggle.
//!
//! This module defines the game's fundamental components:
//! - `Board`: the square letter grid, with random generation and display.
//! - `Boggle`: the engine service holding the dictionary and its trie, built
//!   once at startup and shared read-only by every game.
//! - `Game` / `GameHistory`: per-round session state (score, found words)
//!   and cross-round records (highscore, plays).

use crate::dictionary::{Dictionary, Trie};
use crate::solver;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::io;
use std::path::Path;

/// Board side length used when the caller does not ask for another size.
pub const DEFAULT_BOARD_SIZE: usize = 5;

fn random_letter(rng: &mut impl Rng) -> char {
    (b'A' + rng.gen_range(0..26u8)) as char
}

/// A square grid of uppercase letters for one game round.
///
/// Coordinates are `(row, col)`, 0-indexed, row first. The grid is fixed
/// once constructed; a new round gets a new board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<char>>,
}

impl Board {
    /// Creates a board of uniformly random letters, freshly seeded.
    ///
    /// # Panics
    /// Panics if `size` is 0; the game has no meaningful empty board.
    pub fn new_random(size: usize) -> Board {
        Self::fill(size, &mut SmallRng::from_entropy())
    }

    /// Creates a random board reproducibly from `seed`.
    ///
    /// The same size and seed always produce the same board, which is useful
    /// for tests and for replaying a round.
    pub fn new_random_with_seed(size: usize, seed: u64) -> Board {
        Self::fill(size, &mut SmallRng::seed_from_u64(seed))
    }

    fn fill(size: usize, rng: &mut impl Rng) -> Board {
        assert!(size >= 1, "board size must be at least 1");
        let grid = (0..size)
            .map(|_| (0..size).map(|_| random_letter(rng)).collect())
            .collect();
        Board { size, grid }
    }

    /// Builds a board from explicit rows of letters.
    ///
    /// The grid must be square and non-empty, and every cell must be an
    /// ASCII letter. Letters are uppercased.
    ///
    /// # Errors
    /// Returns a description of the first problem found: empty input, a row
    /// of the wrong length, or a non-letter cell.
    pub fn from_grid(rows: Vec<Vec<char>>) -> Result<Board, String> {
        let size = rows.len();
        if size == 0 {
            return Err("Board must have at least one row".to_string());
        }
        let mut grid = Vec::with_capacity(size);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "Row {} has {} cells (expected {} for a square board)",
                    r,
                    row.len(),
                    size
                ));
            }
            let mut out = Vec::with_capacity(size);
            for (c, ch) in row.into_iter().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ));
                }
                out.push(ch.to_ascii_uppercase());
            }
            grid.push(out);
        }
        Ok(Board { size, grid })
    }

    /// The side length N of this N×N board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside `0..size()`.
    pub fn letter(&self, r: usize, c: usize) -> char {
        self.grid[r][c]
    }

    /// The rows of the grid, uppercase, row-major.
    pub fn rows(&self) -> &[Vec<char>] {
        &self.grid
    }
}

impl fmt::Display for Board {
    /// Renders the grid with row and column headers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..self.size {
            write!(f, "{:<2}", c)?;
        }
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "\n{:<2}", r)?;
            for ch in row {
                write!(f, "{} ", ch)?;
            }
        }
        Ok(())
    }
}

/// Classification of a guessed word against the dictionary and the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStatus {
    /// In the dictionary and traceable on the board.
    Ok,
    /// In the dictionary, but not traceable on the board.
    NotOnBoard,
    /// Not a dictionary word at all, regardless of the board.
    NotWord,
}

impl WordStatus {
    /// The wire-style label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            WordStatus::Ok => "ok",
            WordStatus::NotOnBoard => "not-on-board",
            WordStatus::NotWord => "not-word",
        }
    }
}

impl fmt::Display for WordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The Boggle engine: dictionary plus the trie built from it.
///
/// Constructed once at startup and immutable afterwards, so a single
/// instance can be shared read-only by any number of concurrent games.
/// Search scratch state lives entirely inside each call.
#[derive(Clone, Debug)]
pub struct Boggle {
    dictionary: Dictionary,
    trie: Trie,
}

impl Boggle {
    /// Loads the word list at `dict_path` and builds the trie.
    ///
    /// # Errors
    /// Propagates the IO error if the word list cannot be read; the engine
    /// cannot be constructed without it.
    pub fn new<P: AsRef<Path>>(dict_path: P) -> io::Result<Boggle> {
        Ok(Self::from_dictionary(Dictionary::load(dict_path)?))
    }

    /// Builds an engine from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Boggle
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_dictionary(Dictionary::from_words(words))
    }

    fn from_dictionary(dictionary: Dictionary) -> Boggle {
        let trie = Trie::build(dictionary.words());
        Boggle { dictionary, trie }
    }

    /// The loaded dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Makes a random board of the given size for a new round.
    pub fn make_board(&self, size: usize) -> Board {
        Board::new_random(size)
    }

    /// Finds one path spelling `word` on `board`, if any.
    ///
    /// Thin wrapper over `solver::find_path`; does not consult the
    /// dictionary, so it can trace non-words too.
    pub fn find_path(&self, board: &Board, word: &str) -> Option<Vec<(usize, usize)>> {
        solver::find_path(board, word)
    }

    /// Classifies a guessed word.
    ///
    /// A word outside the dictionary is `NotWord` no matter what is on the
    /// board; a dictionary word is `Ok` when a path exists and `NotOnBoard`
    /// otherwise. Input case does not matter.
    pub fn check_word(&self, board: &Board, word: &str) -> WordStatus {
        let word = word.to_uppercase();
        if !self.dictionary.contains(&word) {
            return WordStatus::NotWord;
        }
        if solver::find_path(board, &word).is_some() {
            WordStatus::Ok
        } else {
            WordStatus::NotOnBoard
        }
    }

    /// Enumerates every path on `board` spelling a dictionary word.
    ///
    /// Used by the hint feature; see `solver::find_all_words`.
    pub fn find_possible_words(&self, board: &Board) -> Vec<Vec<(usize, usize)>> {
        solver::find_all_words(board, &self.trie)
    }
}

/// Outcome of one guess within a game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The word counts: here is its path and the points gained.
    Accepted {
        path: Vec<(usize, usize)>,
        gained: u32,
    },
    /// The word was already found this round.
    Duplicate,
    /// A real word, but not traceable on this board.
    NotOnBoard,
    /// Not a dictionary word.
    NotWord,
}

/// State of a single round: the board, the score, and the words found so far.
///
/// The round deadline, if any, is the caller's concern; `Game` itself never
/// consults a clock.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    score: u32,
    found_words: Vec<String>,
}

impl Game {
    /// Starts a round on the given board with score 0 and no words found.
    pub fn new(board: Board) -> Game {
        Game {
            board,
            score: 0,
            found_words: Vec::new(),
        }
    }

    /// The board for this round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Points scored so far: one point per letter of each accepted word.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Words accepted so far, uppercase, in the order they were found.
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// Processes one guess.
    ///
    /// Rejects repeats of already-found words, then classifies the guess the
    /// same way `Boggle::check_word` does, keeping the traced path. An
    /// accepted word is recorded (uppercase) and scores its length in points.
    pub fn guess(&mut self, engine: &Boggle, word: &str) -> GuessOutcome {
        let word = word.to_uppercase();
        if self.found_words.contains(&word) {
            return GuessOutcome::Duplicate;
        }
        if !engine.dictionary().contains(&word) {
            return GuessOutcome::NotWord;
        }
        match solver::find_path(&self.board, &word) {
            Some(path) => {
                let gained = word.chars().count() as u32;
                self.score += gained;
                self.found_words.push(word);
                GuessOutcome::Accepted { path, gained }
            }
            None => GuessOutcome::NotOnBoard,
        }
    }
}

/// Records kept across rounds: best score and number of rounds played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameHistory {
    pub highscore: u32,
    pub plays: u32,
}

impl GameHistory {
    /// Folds a finished round's score into the records.
    pub fn record(&mut self, score: u32) {
        self.highscore = self.highscore.max(score);
        self.plays += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn reference_board() -> Board {
        board_from_str_array(&["NVCNZ", "EHRXN", "DZCNN", "NEIFW", "FFPRJ"]).unwrap()
    }

    fn test_engine() -> Boggle {
        Boggle::from_words(["pic", "apple", "end", "in", "den"])
    }

    #[test]
    fn test_new_random_board_is_all_letters() {
        let board = Board::new_random(DEFAULT_BOARD_SIZE);
        assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
        for r in 0..board.size() {
            for c in 0..board.size() {
                assert!(board.letter(r, c).is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_new_random_with_seed_determinism() {
        let seed = 123;
        let board1 = Board::new_random_with_seed(4, seed);
        let board2 = Board::new_random_with_seed(4, seed);
        assert_eq!(board1, board2, "Boards with the same seed must be identical.");

        let board3 = Board::new_random_with_seed(4, seed + 1);
        assert_ne!(board1, board3, "Boards with different seeds should differ.");
    }

    #[test]
    fn test_board_sizes_down_to_one() {
        for size in [1, 2, 3] {
            let board = Board::new_random_with_seed(size, 7);
            assert_eq!(board.size(), size);
            assert_eq!(board.rows().len(), size);
        }
    }

    #[test]
    fn test_from_grid_uppercases() {
        let board = Board::from_grid(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(board.letter(0, 0), 'A');
        assert_eq!(board.letter(1, 1), 'D');
    }

    #[test]
    fn test_from_grid_rejects_non_square() {
        let result = Board::from_grid(vec![vec!['A', 'B'], vec!['C']]);
        assert!(result.unwrap_err().contains("Row 1"));
    }

    #[test]
    fn test_from_grid_rejects_non_letters() {
        let result = Board::from_grid(vec![vec!['A', '1'], vec!['C', 'D']]);
        assert!(result.unwrap_err().contains("Unrecognized character '1'"));
    }

    #[test]
    fn test_from_grid_rejects_empty() {
        assert!(Board::from_grid(Vec::new()).is_err());
    }

    #[test]
    fn test_display_board_formatting() {
        let board = board_from_str_array(&["AB", "CD"]).unwrap();
        let display = format!("{}", board);
        assert!(display.contains("0 1"));
        assert!(display.contains("A B"));
        assert!(display.contains("C D"));
        assert_eq!(display.lines().count(), 3); // header + 2 rows
    }

    #[test]
    fn test_check_word_truth_table() {
        let engine = test_engine();
        let board = reference_board();
        assert_eq!(engine.check_word(&board, "pic"), WordStatus::Ok);
        assert_eq!(engine.check_word(&board, "apple"), WordStatus::NotOnBoard);
        assert_eq!(engine.check_word(&board, "kic"), WordStatus::NotWord);
        // not-word wins even when the letters are traceable
        assert_eq!(engine.check_word(&board, "nvc"), WordStatus::NotWord);
    }

    #[test]
    fn test_word_status_labels() {
        assert_eq!(WordStatus::Ok.to_string(), "ok");
        assert_eq!(WordStatus::NotOnBoard.to_string(), "not-on-board");
        assert_eq!(WordStatus::NotWord.to_string(), "not-word");
    }

    #[test]
    fn test_engine_find_possible_words_spell_dictionary_words() {
        let engine = test_engine();
        let board = reference_board();
        let paths = engine.find_possible_words(&board);
        assert!(paths.contains(&vec![(3, 1), (3, 0), (2, 0)])); // END
        for path in &paths {
            let word: String = path.iter().map(|&(r, c)| board.letter(r, c)).collect();
            assert!(engine.dictionary().contains(&word));
        }
    }

    #[test]
    fn test_engine_find_path_traces_non_words_too() {
        let engine = test_engine();
        let board = reference_board();
        assert_eq!(
            engine.find_path(&board, "end"),
            Some(vec![(3, 1), (3, 0), (2, 0)])
        );
        // Traceable letters that are not a dictionary word still get a path.
        assert!(engine.find_path(&board, "NVC").is_some());
        assert_eq!(engine.find_path(&board, "APPLE"), None);
    }

    #[test]
    fn test_make_board_uses_requested_size() {
        let engine = test_engine();
        assert_eq!(engine.make_board(3).size(), 3);
    }

    #[test]
    fn test_game_guess_flow() {
        let engine = test_engine();
        let mut game = Game::new(reference_board());

        match game.guess(&engine, "end") {
            GuessOutcome::Accepted { path, gained } => {
                assert_eq!(path, vec![(3, 1), (3, 0), (2, 0)]);
                assert_eq!(gained, 3);
            }
            other => panic!("expected Accepted, got {:?}", other),
        }
        assert_eq!(game.score(), 3);
        assert_eq!(game.found_words(), &["END"]);

        // Same word again, any case: duplicate, score unchanged.
        assert_eq!(game.guess(&engine, "End"), GuessOutcome::Duplicate);
        assert_eq!(game.score(), 3);

        assert_eq!(game.guess(&engine, "apple"), GuessOutcome::NotOnBoard);
        assert_eq!(game.guess(&engine, "kic"), GuessOutcome::NotWord);
        assert_eq!(game.found_words().len(), 1);

        match game.guess(&engine, "in") {
            GuessOutcome::Accepted { gained, .. } => assert_eq!(gained, 2),
            other => panic!("expected Accepted, got {:?}", other),
        }
        assert_eq!(game.score(), 5);
    }

    #[test]
    fn test_game_history_records_highscore_and_plays() {
        let mut history = GameHistory::default();
        history.record(5);
        history.record(3);
        assert_eq!(history, GameHistory { highscore: 5, plays: 2 });
        history.record(9);
        assert_eq!(history.highscore, 9);
        assert_eq!(history.plays, 3);
    }
}
