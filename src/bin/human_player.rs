use boggle_solver::engine::{Boggle, Board, Game, GameHistory, GuessOutcome, DEFAULT_BOARD_SIZE};
use boggle_solver::utils::word_along_path;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the word list (one word per line)
    #[clap(short, long, default_value = "words.txt")]
    dict: PathBuf,

    /// Board side length
    #[clap(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for a reproducible board (omit for a fresh random board)
    #[clap(long)]
    seed: Option<u64>,

    /// Seconds allowed per round; 0 disables the timer
    #[clap(short, long, default_value_t = 60)]
    time_limit: u64,
}

fn make_board(args: &Args, round: u32) -> Board {
    match args.seed {
        // Offset by round so "play again" on a seeded run still varies.
        Some(seed) => Board::new_random_with_seed(args.size, seed + round as u64),
        None => Board::new_random(args.size),
    }
}

fn play_round(engine: &Boggle, board: Board, time_limit: Option<Duration>) -> u32 {
    let mut game = Game::new(board);
    let started = Instant::now();

    println!("{}", game.board());
    println!("Guess words! 'h' for hints, 'q' to end the round.");

    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
            break;
        }
        let guess = input.trim();
        if guess.is_empty() {
            continue;
        }
        if guess == "q" {
            break;
        }

        if let Some(limit) = time_limit {
            if started.elapsed() > limit {
                println!("Time is up!");
                break;
            }
        }

        if guess == "h" {
            let paths = engine.find_possible_words(game.board());
            let mut words: Vec<String> = paths
                .iter()
                .map(|p| word_along_path(game.board(), p))
                .collect();
            words.sort();
            words.dedup();
            println!("{} findable words: {}", words.len(), words.join(", "));
            continue;
        }

        match game.guess(engine, guess) {
            GuessOutcome::Accepted { path, gained } => {
                let cells: Vec<String> =
                    path.iter().map(|(r, c)| format!("({},{})", r, c)).collect();
                println!("+{} points: {}", gained, cells.join(" -> "));
                println!("Score: {}", game.score());
            }
            GuessOutcome::Duplicate => println!("Already found that one."),
            GuessOutcome::NotOnBoard => println!("Real word, but not on this board."),
            GuessOutcome::NotWord => println!("Not a word in the dictionary."),
        }
    }

    println!("---------------------");
    println!("Round over! Score: {}", game.score());
    if !game.found_words().is_empty() {
        println!("Words found: {}", game.found_words().join(", "));
    }
    game.score()
}

fn main() {
    let args = Args::parse();

    let engine = Boggle::new(&args.dict)
        .unwrap_or_else(|e| panic!("Failed to load dictionary {}: {}", args.dict.display(), e));
    println!(
        "Welcome to Boggle! ({} words loaded)",
        engine.dictionary().len()
    );

    let time_limit = (args.time_limit > 0).then(|| Duration::from_secs(args.time_limit));
    let mut history = GameHistory::default();
    let mut round = 0;

    loop {
        let score = play_round(&engine, make_board(&args, round), time_limit);
        history.record(score);
        round += 1;

        println!(
            "Highscore: {}, rounds played: {}",
            history.highscore, history.plays
        );
        print!("Play again? (y/n): ");
        io::stdout().flush().unwrap();
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || input.trim() != "y" {
            println!("Thanks for playing!");
            break;
        }
    }
}
