//! # Boggle Solver Library
//!
//! This library provides the core word-search logic for the Boggle word game:
//! tracing a specific word as a path of adjacent board cells, and enumerating
//! every dictionary word that can be traced on a board, pruned by a prefix
//! tree.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `word_finder`: Takes a dictionary and a board (from a file or randomly
//!   generated), then prints every word that can be traced on it.
//!
//! ## Modules
//! - `dictionary`: Word-list loading (`Dictionary`) and the prefix tree
//!   (`Trie`, `TrieNode`) built from it.
//! - `engine`: Contains the letter board representation (`Board`), the
//!   immutable engine service (`Boggle`) composing dictionary, trie and
//!   search, and per-round session state (`Game`, `GameHistory`).
//! - `solver`: Provides the `find_path` function for tracing one word and
//!   `find_all_words` for trie-guided enumeration of all traceable words.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.

pub mod dictionary;
pub mod engine;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g., `boggle_solver::solver::find_path()`. This keeps the top-level
// library namespace cleaner.
