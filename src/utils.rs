use crate::engine::Board;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row, starting from row 0. The rows must
/// form a square: every row must have exactly as many letters as there are
/// rows. Letters may be given in either case and are stored uppercase.
///
/// # Errors
/// Returns a message describing the problem if the input is empty, a row has
/// the wrong length, or a cell is not an ASCII letter.
///
/// # Examples
/// ```
/// use boggle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["ab", "cd"]).unwrap();
/// assert_eq!(board.letter(0, 0), 'A');
/// assert_eq!(board.letter(1, 1), 'D');
///
/// assert!(board_from_str_array(&["AB"]).is_err()); // 1 row of 2 letters
/// assert!(board_from_str_array(&["A1", "CD"]).is_err());
/// ```
pub fn board_from_str_array(rows: &[&str]) -> Result<Board, String> {
    Board::from_grid(rows.iter().map(|row| row.chars().collect()).collect())
}

/// Reads the word spelled by walking `path` over `board`.
///
/// No adjacency or bounds checking is done here; the path is assumed to come
/// from the solver.
pub fn word_along_path(board: &Board, path: &[(usize, usize)]) -> String {
    path.iter().map(|&(r, c)| board.letter(r, c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["NVCNZ", "EHRXN", "DZCNN", "NEIFW", "FFPRJ"]).unwrap();
        assert_eq!(board.size(), 5);
        assert_eq!(board.letter(0, 0), 'N');
        assert_eq!(board.letter(4, 4), 'J');
    }

    #[test]
    fn test_board_from_str_array_lowercase_input() {
        let board = board_from_str_array(&["ab", "cd"]).unwrap();
        assert_eq!(board.letter(0, 1), 'B');
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["A.", "CD"]);
        assert!(result.unwrap_err().contains("Unrecognized character '.'"));
    }

    #[test]
    fn test_board_from_str_array_not_square() {
        let result = board_from_str_array(&["ABC", "DE", "FGH"]);
        assert!(result.unwrap_err().contains("Row 1"));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        assert!(board_from_str_array(&[]).is_err());
    }

    #[test]
    fn test_word_along_path() {
        let board = board_from_str_array(&["NVCNZ", "EHRXN", "DZCNN", "NEIFW", "FFPRJ"]).unwrap();
        assert_eq!(word_along_path(&board, &[(3, 1), (3, 0), (2, 0)]), "END");
        assert_eq!(word_along_path(&board, &[]), "");
    }
}
