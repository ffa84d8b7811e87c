//! Word search over a board: the path finder and the board word enumerator.
//!
//! Both searches are recursive depth-first walks over the 8-connected grid.
//! A "path" is the sequence of `(row, col)` cells spelling a word, in order;
//! consecutive cells are 8-adjacent and no cell repeats within one path.
//!
//! Visited-cell state is copied before every recursive descent, never shared
//! mutably between sibling branches: a cell ruled out on one path attempt
//! must stay available to unrelated attempts at the same depth.

use crate::dictionary::{Trie, TrieNode};
use crate::engine::Board;
use std::collections::HashSet;

/// Neighbor offsets in search priority order: up, down, left, right,
/// up-left, down-right, down-left, up-right. The path finder tries them in
/// this order and returns on the first success, so this order (together with
/// the row-major scan over starting cells) determines which of several valid
/// paths is returned.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
];

/// Finds one path on `board` spelling `word`, or `None` if no path exists.
///
/// The word is uppercased before matching. Starting cells are scanned in
/// row-major order (row outer, column inner) and the first successful trace
/// is returned. An empty word yields `None` immediately: an empty path is
/// meaningless for the game.
///
/// A returned path has exactly one cell per letter, consecutive cells are
/// 8-adjacent, and no cell is used twice.
///
/// # Examples
/// ```
/// use boggle_solver::solver::find_path;
/// use boggle_solver::utils::board_from_str_array;
/// let board = board_from_str_array(&["AB", "CD"]).unwrap();
/// assert_eq!(find_path(&board, "bad"), Some(vec![(0, 1), (0, 0), (1, 1)]));
/// assert_eq!(find_path(&board, "abba"), None);
/// ```
pub fn find_path(board: &Board, word: &str) -> Option<Vec<(usize, usize)>> {
    let letters: Vec<char> = word.to_uppercase().chars().collect();
    if letters.is_empty() {
        return None;
    }

    // Try every spot on board and win fast, should we find the word there.
    for r in 0..board.size() {
        for c in 0..board.size() {
            if let Some(path) = find_from(board, &letters, r, c, &HashSet::new()) {
                return Some(path);
            }
        }
    }
    None
}

/// Attempts to match `letters` starting at `(r, c)`, with `seen` holding the
/// cells already used by the path leading here.
///
/// Called recursively on smaller and smaller suffixes until the match is
/// exhausted or succeeds. `seen` is cloned (plus the current cell) before
/// descending so sibling branches never observe each other's visits; a cell
/// burned on one dead end stays usable on a different path through the board.
fn find_from(
    board: &Board,
    letters: &[char],
    r: usize,
    c: usize,
    seen: &HashSet<(usize, usize)>,
) -> Option<Vec<(usize, usize)>> {
    // Base case: this isn't the letter we're looking for.
    if board.letter(r, c) != letters[0] {
        return None;
    }

    // Base case: this cell is already used earlier on the current path.
    if seen.contains(&(r, c)) {
        return None;
    }

    // Base case: down to the last letter, so we win.
    if letters.len() == 1 {
        return Some(vec![(r, c)]);
    }

    let mut seen = seen.clone();
    seen.insert((r, c));

    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        if nr < 0 || nr >= board.size() as isize || nc < 0 || nc >= board.size() as isize {
            continue;
        }
        if let Some(mut path) = find_from(board, &letters[1..], nr as usize, nc as usize, &seen) {
            path.insert(0, (r, c));
            return Some(path);
        }
    }

    // Couldn't place the next letter anywhere, so this path is dead.
    None
}

/// Enumerates every path on `board` spelling a complete dictionary word.
///
/// Runs a trie-guided depth-first walk from every cell; a branch dies the
/// moment its accumulated letters match no dictionary prefix. Results are
/// deduplicated by path identity, not by word: two distinct paths spelling
/// the same word are both returned. The result is sorted for deterministic
/// output.
pub fn find_all_words(board: &Board, trie: &Trie) -> Vec<Vec<(usize, usize)>> {
    let mut found: HashSet<Vec<(usize, usize)>> = HashSet::new();
    for r in 0..board.size() {
        for c in 0..board.size() {
            find_words_from(board, trie.root(), r, c, &[], &mut found);
        }
    }
    let mut paths: Vec<Vec<(usize, usize)>> = found.into_iter().collect();
    paths.sort_unstable();
    paths
}

/// Extends `path` with `(r, c)` if the board letter there continues some
/// dictionary prefix under `node`, recording a result whenever a complete
/// word ends.
///
/// `path` doubles as the visited set: the cells walked so far, in visitation
/// order, which is exactly the path reported for a found word. Each recursive
/// call gets its own copy so sibling branches do not interfere.
fn find_words_from(
    board: &Board,
    node: &TrieNode,
    r: usize,
    c: usize,
    path: &[(usize, usize)],
    found: &mut HashSet<Vec<(usize, usize)>>,
) {
    // Base case: cell already used on this path.
    if path.contains(&(r, c)) {
        return;
    }

    // Prune: no dictionary word continues with this letter on this path.
    let child = match node.child(board.letter(r, c)) {
        Some(child) => child,
        None => return,
    };

    let mut path = path.to_vec();
    path.push((r, c));

    if child.is_terminal() {
        found.insert(path.clone());
    }

    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let nr = r as isize + dr;
        let nc = c as isize + dc;
        if nr < 0 || nr >= board.size() as isize || nc < 0 || nc >= board.size() as isize {
            continue;
        }
        find_words_from(board, child, nr as usize, nc as usize, &path, found);
    }
}
