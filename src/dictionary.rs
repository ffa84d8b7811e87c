//! Dictionary loading and the prefix tree built from it.
//!
//! This module defines:
//! - `Dictionary`: the word list, loaded once from a line-oriented text file
//!   and indexed for O(1) membership tests.
//! - `Trie` / `TrieNode`: a prefix tree over the dictionary, used by the
//!   board word enumerator to prune search branches that match no dictionary
//!   prefix.
//!
//! Both structures are built once at startup and are read-only afterwards,
//! so they can be shared freely across games.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

/// The word list for a game, stored uppercase.
///
/// Words are kept in load order (the file's line order) alongside a hash-set
/// index so membership checks do not require walking the trie. Loading does
/// not deduplicate; `len()` therefore reports line count, not distinct words.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Loads a dictionary from a plain-text file, one word per line.
    ///
    /// Each line is trimmed of surrounding whitespace and uppercased. Blank
    /// lines are skipped. No character-set validation is performed.
    ///
    /// # Errors
    /// Returns the underlying `io::Error` if the file cannot be read. This is
    /// fatal at startup: without the word list no correct trie can be built.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Builds a dictionary from an iterator of words.
    ///
    /// Applies the same normalization as `load`: trim, uppercase, skip
    /// empties. Useful for tests and embedded word lists.
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::Dictionary;
    /// let dict = Dictionary::from_words(["cat", " dog ", ""]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("DOG"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        let index = words.iter().cloned().collect();
        Dictionary { words, index }
    }

    /// Checks whether `word` is in the dictionary.
    ///
    /// The input is uppercased before the lookup, so the check is
    /// case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }

    /// The stored words, uppercase, in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of loaded words (not deduplicated).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when no words were loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One node of the prefix tree.
///
/// Each node represents one letter position in some word's prefix. Children
/// are owned exclusively by their parent; there is no sharing and no cycle.
/// A node with `terminal == true` marks the end of a complete dictionary
/// word, and `word` then holds that word in full (uppercase).
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    letter: Option<char>,
    children: HashMap<char, TrieNode>,
    terminal: bool,
    word: Option<String>,
}

impl TrieNode {
    fn new(letter: char) -> TrieNode {
        TrieNode {
            letter: Some(letter),
            ..TrieNode::default()
        }
    }

    /// The letter on the edge leading to this node; `None` for the root.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// The child reached by `letter`, if any. The lookup is uppercased.
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter.to_ascii_uppercase())
    }

    /// Whether some dictionary word ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The full word ending here, when this node is terminal.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    fn count_terminals(&self) -> usize {
        let here = usize::from(self.terminal);
        here + self.children.values().map(TrieNode::count_terminals).sum::<usize>()
    }
}

/// Prefix tree over the dictionary.
///
/// Built once from the word list; following the child chain spelled by the
/// uppercase letters of any dictionary word from the root lands on a terminal
/// node, and no other node is terminal.
///
/// # Examples
/// ```
/// use boggle_solver::dictionary::Trie;
/// let trie = Trie::build(["end", "in"]);
/// assert!(trie.contains("END"));
/// assert!(!trie.contains("EN")); // prefix, not a word
/// ```
#[derive(Clone, Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie (root only, no words).
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Builds a trie containing every word of `words`.
    ///
    /// Runs in time proportional to the total number of characters across
    /// the word list.
    pub fn build<I, S>(words: I) -> Trie
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Inserts one word, creating nodes as needed.
    ///
    /// The word is uppercased first. Inserting a word already present is a
    /// no-op: no duplicate structure is created and the terminal flag is
    /// unchanged. Empty words are ignored (the root never becomes terminal).
    pub fn insert(&mut self, word: &str) {
        let word = word.to_uppercase();
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_insert_with(|| TrieNode::new(ch));
        }
        node.terminal = true;
        node.word = Some(word);
    }

    /// The root node, representing the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Checks whether `word` was inserted as a complete word.
    ///
    /// Prefixes of inserted words that were not themselves inserted are not
    /// contained.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for ch in word.to_uppercase().chars() {
            match node.child(ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal && node.letter.is_some()
    }

    /// Number of terminal nodes, i.e. distinct complete words stored.
    pub fn terminal_word_count(&self) -> usize {
        self.root.count_terminals()
    }
}
