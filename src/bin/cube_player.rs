use beginner_cube::notation::format_moves;
use beginner_cube::session::CubeSession;
use beginner_cube::utils::DEFAULT_SCRAMBLE_LENGTH;
use clap::Parser;
use env_logger::TimestampPrecision;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the scramble command; a random one is drawn when omitted
    #[clap(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut session = CubeSession::new();
    println!("Welcome to the cube!");

    loop {
        session.advance_all();
        println!("---------------------");
        println!("Moves since solved: {}", session.history().len());
        println!("{}", session.visual());
        if session.is_solved() && !session.history().is_empty() {
            println!("Solved!");
        }

        print!("Enter moves (e.g. R U R' U'), 's' to scramble, 'solve', 'u' to undo, 'r' to reset, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => match session.undo_last_move() {
                Some(mv) => println!("Undone with {}.", mv),
                None => println!("Nothing to undo."),
            },
            "r" => {
                session.reset();
                println!("Cube reset.");
            }
            "s" => {
                let scramble = session.scramble(&mut rng, DEFAULT_SCRAMBLE_LENGTH);
                println!("Scramble: {}", format_moves(&scramble));
            }
            "solve" => match session.solve() {
                Ok(solution) if solution.is_empty() => println!("Already solved."),
                Ok(solution) => println!("Solution ({}): {}", solution.len(), format_moves(&solution)),
                Err(e) => println!("Solver failed: {}", e),
            },
            "" => {}
            text => match session.queue_notation(text) {
                Ok(n) => println!("{} move(s) applied.", n),
                Err(e) => println!("Invalid input: {}", e),
            },
        }
    }
}
