use boggle_solver::engine::{Boggle, Board, DEFAULT_BOARD_SIZE};
use boggle_solver::utils::{board_from_str_array, word_along_path};
use clap::Parser;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the word list (one word per line)
    #[clap(short, long, default_value = "words.txt")]
    dict: PathBuf,

    /// Side length for a generated board (ignored with a board file)
    #[clap(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for a reproducible generated board
    #[clap(long)]
    seed: Option<u64>,

    /// Path to a board file (one row of letters per line); omit for a
    /// random board
    board_file: Option<PathBuf>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let engine = Boggle::new(&args.dict)
        .unwrap_or_else(|e| panic!("Failed to load dictionary {}: {}", args.dict.display(), e));

    let board = match &args.board_file {
        Some(path) => {
            let board = read_board_file(path)
                .unwrap_or_else(|e| panic!("Failed to read board from file {}: {}", path.display(), e));
            println!("Loaded board from {}\n", path.display());
            board
        }
        None => match args.seed {
            Some(seed) => Board::new_random_with_seed(args.size, seed),
            None => Board::new_random(args.size),
        },
    };

    println!("{}\n", board);
    println!(
        "Searching {} dictionary words for paths on the board...\n",
        engine.dictionary().len()
    );

    let paths = engine.find_possible_words(&board);

    // Group the paths by the word they spell; BTreeMap keeps the output
    // alphabetical.
    let mut by_word: BTreeMap<String, Vec<&Vec<(usize, usize)>>> = BTreeMap::new();
    for path in &paths {
        by_word.entry(word_along_path(&board, path)).or_default().push(path);
    }

    if by_word.is_empty() {
        println!("No dictionary words can be traced on this board.");
        return;
    }

    for (word, word_paths) in &by_word {
        let cells: Vec<String> = word_paths[0]
            .iter()
            .map(|(r, c)| format!("({},{})", r, c))
            .collect();
        print!("{}: {}", word, cells.join(" -> "));
        if word_paths.len() > 1 {
            print!("  [{} paths]", word_paths.len());
        }
        println!();
    }

    println!(
        "\n{} distinct words, {} paths in total.",
        by_word.len(),
        paths.len()
    );
}
